//! Terminal output for CLI commands.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use cinegate_core::error::AppError;

/// How listings are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Render `items` in `format`, or a placeholder line for an empty table.
pub fn render_rows<T: Serialize + Tabled>(
    items: &[T],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Table if items.is_empty() => Ok("(none)".to_string()),
        OutputFormat::Table => Ok(Table::new(items).with(Style::sharp()).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
    }
}

/// Print a listing.
pub fn rows<T: Serialize + Tabled>(items: &[T], format: OutputFormat) -> Result<(), AppError> {
    println!("{}", render_rows(items, format)?);
    Ok(())
}

pub fn done(msg: &str) {
    println!("✓ {msg}");
}

pub fn caution(msg: &str) {
    println!("⚠ {msg}");
}

pub fn failure(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print one labelled value, labels padded to a common column.
pub fn field(label: &str, value: &str) {
    println!("{}", format_field(label, value));
}

fn format_field(label: &str, value: &str) -> String {
    format!("  {:<20}{value}", format!("{label}:"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        email: String,
        version: i64,
    }

    #[test]
    fn test_render_rows() {
        let rows = vec![Row {
            email: "staff@example.com".into(),
            version: 3,
        }];

        let table = render_rows(&rows, OutputFormat::Table).unwrap();
        assert!(table.contains("staff@example.com"));

        let json: serde_json::Value =
            serde_json::from_str(&render_rows(&rows, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json[0]["version"], 3);

        let empty: Vec<Row> = Vec::new();
        assert_eq!(render_rows(&empty, OutputFormat::Table).unwrap(), "(none)");
        assert_eq!(render_rows(&empty, OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_format_field_aligns_values() {
        assert_eq!(format_field("User", "a@b"), format!("  {:<20}a@b", "User:"));
    }
}

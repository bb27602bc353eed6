//! JWT claims, signing, and decoding.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, JwtPayload};
pub use decoder::JwtDecoder;
pub use encoder::{JwtEncoder, TokenPair};

/// The two token kinds. Each is signed with its own secret and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived token presented on every protected request.
    Access,
    /// Longer-lived token used only to obtain a new pair.
    Refresh,
}

impl TokenKind {
    /// Message returned when the embedded version no longer matches.
    pub fn revoked_message(self) -> &'static str {
        match self {
            Self::Access => "Token has been revoked",
            Self::Refresh => "Refresh token has been revoked",
        }
    }
}

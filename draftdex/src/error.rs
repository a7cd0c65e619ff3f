//! Typed failures for a single Pokémon lookup

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no name was entered")]
    EmptyName,

    #[error("'{name}' was not found (HTTP {status})")]
    NotFound { name: String, status: u16 },

    #[error("request for '{name}' failed after {attempts} attempts: {message}")]
    Http {
        name: String,
        attempts: u32,
        message: String,
    },

    #[error("unexpected response for '{name}': {message}")]
    Decode { name: String, message: String },
}

impl LookupError {
    /// Retrying will not help for these
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            LookupError::EmptyName | LookupError::NotFound { .. } | LookupError::Decode { .. }
        )
    }
}

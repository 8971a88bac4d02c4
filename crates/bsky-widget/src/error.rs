//! Error types for settings store access.
//!
//! Rendering itself has no error taxonomy: a failed read degrades to the
//! documented default instead of propagating. These types exist so that
//! [`SettingsStore`](crate::store::SettingsStore) implementations can report
//! what went wrong to whoever is listening on the debug log.

use thiserror::Error;

/// Primary error type surfaced by settings store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not serve the read at all.
    #[error("settings store unavailable while reading '{key}': {reason}")]
    Unavailable {
        /// Key whose read failed.
        key: String,
        /// Backend failure detail.
        reason: String,
    },
    /// The payload stored under a key could not be decoded.
    #[error("corrupt settings payload under '{key}'")]
    Corrupt {
        /// Key whose payload failed to decode.
        key: String,
    },
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Raised when a stored theme name matches no known theme.
///
/// Callers reading from the store coerce this to the default theme rather
/// than surfacing it.
#[derive(Debug, Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub(crate) String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display_includes_key() {
        let err = StoreError::Unavailable {
            key: "post_count".to_owned(),
            reason: "backend offline".to_owned(),
        };
        assert!(err.to_string().contains("post_count"));
        assert!(err.to_string().contains("backend offline"));

        let err = StoreError::Corrupt {
            key: "theme".to_owned(),
        };
        assert!(err.to_string().contains("theme"));
    }
}

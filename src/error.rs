use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for Swatchbook
#[derive(Error, Debug)]
pub enum SwatchbookError {
    #[error("{path}:{line}: invalid palette data: {message}")]
    PaletteParse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SwatchbookError>;

/// Extension trait for ergonomic error logging on fire-and-forget paths
pub trait ResultExt<T> {
    fn log_err(self) -> Option<T>;
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    fn log_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                error!(error = ?e, "Operation failed");
                None
            }
        }
    }

    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(error = ?e, "Operation warning");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_location() {
        let err = SwatchbookError::PaletteParse {
            path: "pal/ocean.gpl".to_string(),
            line: 7,
            message: "expected 3 channel values".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pal/ocean.gpl:7"));
        assert!(msg.contains("expected 3 channel values"));
    }

    #[test]
    fn test_log_err_returns_some_on_ok() {
        let r: std::result::Result<u32, String> = Ok(5);
        assert_eq!(r.log_err(), Some(5));
    }

    #[test]
    fn test_log_err_returns_none_on_err() {
        let r: std::result::Result<u32, String> = Err("nope".to_string());
        assert_eq!(r.log_err(), None);
    }
}

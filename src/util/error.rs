// ZeroDecay - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Nothing in the monitoring core can fail; errors only arise at the edges
// (configuration loading, GUI launch).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ZeroDecay operations.
#[derive(Debug)]
pub enum ZeroDecayError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// The native window could not be created.
    Gui(eframe::Error),
}

impl fmt::Display for ZeroDecayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Gui(e) => write!(f, "GUI error: {e}"),
        }
    }
}

impl std::error::Error for ZeroDecayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Gui(e) => Some(e),
        }
    }
}

impl From<eframe::Error> for ZeroDecayError {
    fn from(e: eframe::Error) -> Self {
        Self::Gui(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },

    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::ValueOutOfRange { .. } => None,
        }
    }
}

impl From<ConfigError> for ZeroDecayError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for ZeroDecay results.
pub type Result<T> = std::result::Result<T, ZeroDecayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_out_of_range_display_names_field() {
        let err = ConfigError::ValueOutOfRange {
            field: "[log] max_lines".to_string(),
            value: "3".to_string(),
            expected: "100-100000".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("[log] max_lines"));
        assert!(msg.contains("100-100000"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_preserves_source_chain() {
        let err: ZeroDecayError = ConfigError::Io {
            path: PathBuf::from("/nope/config.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert!(err.to_string().starts_with("Configuration error:"));
        let inner = err.source().and_then(|e| e.source());
        assert!(inner.is_some(), "io::Error should be reachable via source()");
    }
}

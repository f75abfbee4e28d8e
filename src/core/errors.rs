//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

use super::PersonId;

/// Structured error code for documentation and programmatic handling.
///
/// Error codes follow a category-based scheme:
/// - E001-E009: I/O and filesystem errors
/// - E010-E019: Resource errors
/// - E020-E029: Configuration errors
/// - E030-E039: Data integrity errors
/// - E040-E049: CLI errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - permission denied
    pub const IO_PERMISSION_DENIED: ErrorCode = ErrorCode("E002");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Resource error - registry growth failed
    pub const RESOURCE_ALLOCATION: ErrorCode = ErrorCode("E010");

    /// Config error - invalid value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");

    /// Data integrity - seed id absent from the roster
    pub const INTEGRITY_SEED: ErrorCode = ErrorCode("E030");
    /// Data integrity - infector without an assigned probability
    pub const INTEGRITY_INFECTOR: ErrorCode = ErrorCode("E031");

    /// CLI error - wrong arguments
    pub const CLI_USAGE: ErrorCode = ErrorCode("E040");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which input or output a file system error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRole {
    People,
    Meetings,
    Output,
    Config,
}

impl StreamRole {
    /// User-facing one-liner printed before the detailed cause.
    pub fn headline(&self) -> &'static str {
        match self {
            StreamRole::People => "Error: cannot find people files path.",
            StreamRole::Meetings => "Error: cannot find meeting files path.",
            StreamRole::Output => "Error: cannot open output file.",
            StreamRole::Config => "Error: cannot read configuration file.",
        }
    }
}

/// Main error type for spreader detection runs
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong command line usage
    #[error("{0}")]
    Usage(String),

    /// A stream could not be opened, read or written
    #[error("I/O error on {}: {source}", display_path(path))]
    Io {
        role: StreamRole,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Registry growth failed
    #[error("Resource error: {0}")]
    Resource(String),

    /// The index case named by the contact log is not in the roster
    #[error("Data integrity error: seed id {id} is not present in the roster")]
    SeedNotFound { id: PersonId },

    /// A contact record names an infector whose probability was never assigned
    #[error(
        "Data integrity error: contact record {record} references infector {infector_id} with no assigned probability"
    )]
    DataIntegrity { infector_id: PersonId, record: usize },

    /// Configuration errors (may contain multiple issues)
    #[error("Configuration error: {}", errors.join("; "))]
    Config { errors: Vec<String> },
}

impl Error {
    /// Create an I/O error bound to the stream it concerns
    pub fn io(role: StreamRole, path: Option<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { role, path, source }
    }

    /// Create a configuration error with a single message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            errors: vec![message.into()],
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Usage(_) => ErrorCode::CLI_USAGE,
            Self::Io { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::IO_FILE_NOT_FOUND,
                std::io::ErrorKind::PermissionDenied => ErrorCode::IO_PERMISSION_DENIED,
                _ => ErrorCode::IO_GENERIC,
            },
            Self::Resource(_) => ErrorCode::RESOURCE_ALLOCATION,
            Self::SeedNotFound { .. } => ErrorCode::INTEGRITY_SEED,
            Self::DataIntegrity { .. } => ErrorCode::INTEGRITY_INFECTOR,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Usage(_) => "Usage",
            Self::Io { .. } => "I/O",
            Self::Resource(_) => "Resource",
            Self::SeedNotFound { .. } | Self::DataIntegrity { .. } => "DataIntegrity",
            Self::Config { .. } => "Config",
        }
    }

    /// Headline for the error stream, in the wording users of the tool expect.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Io { role, .. } => role.headline(),
            Self::Usage(_) => {
                "Usage: spreader-detector <Path to People.in> <Path to Meetings.in>"
            }
            Self::Resource(_) | Self::SeedNotFound { .. } | Self::DataIntegrity { .. } => {
                "Error: the standard library function failed."
            }
            Self::Config { .. } => "Error: invalid configuration.",
        }
    }

    /// Process exit status; every failure is non-zero.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "stream".to_string(), |p| p.display().to_string())
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_code_follows_kind() {
        let err = Error::io(
            StreamRole::People,
            Some(PathBuf::from("people.in")),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.code(), ErrorCode::IO_FILE_NOT_FOUND);
        assert_eq!(err.headline(), "Error: cannot find people files path.");
        assert_eq!(err.category(), "I/O");
        assert!(err.to_string().contains("people.in"));
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = vec![
            Error::Usage("two paths required".into()),
            Error::Resource("out of memory".into()),
            Error::SeedNotFound { id: 7 },
            Error::DataIntegrity {
                infector_id: 3,
                record: 2,
            },
            Error::config("bad"),
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0, "{err}");
        }
    }

    #[test]
    fn test_config_error_joins_all_messages() {
        let err = Error::Config {
            errors: vec!["first".into(), "second".into()],
        };
        assert_eq!(err.to_string(), "Configuration error: first; second");
        assert_eq!(err.code().as_str(), "E020");
    }
}

//! Domain errors for the preflight checker.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a document from an input file.
///
/// Loaders return these instead of aborting; the orchestrator decides
/// whether the phase is skipped or continues with an empty result.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read
    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not valid for the format
    #[error("Error parsing {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl LoadError {
    /// File the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// Short status label for the report line
    pub const fn status_label(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT FOUND",
            Self::Io { .. } => "UNREADABLE",
            Self::Parse { .. } => "INVALID",
        }
    }

    /// Placeholder issue recorded when the config phase cannot run
    pub const fn config_issue(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Config file not found",
            Self::Io { .. } => "Config file could not be read",
            Self::Parse { .. } => "Config file could not be parsed",
        }
    }
}

/// Failure of a single probe request. Never propagated past the prober.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No response within the client timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection, TLS or protocol failure before a status arrived
    #[error("Transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = LoadError::NotFound {
            path: PathBuf::from("config.yml"),
        };
        assert_eq!(err.to_string(), "config.yml not found");
        assert_eq!(err.config_issue(), "Config file not found");
        assert_eq!(err.status_label(), "NOT FOUND");
    }

    #[test]
    fn test_parse_message_carries_parser_detail() {
        let err = LoadError::Parse {
            path: PathBuf::from("config.yml"),
            message: "did not find expected key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error parsing config.yml: did not find expected key"
        );
        assert_eq!(err.path(), &PathBuf::from("config.yml"));
    }

    #[test]
    fn test_io_error_labels_and_probe_messages() {
        let err = LoadError::Io {
            path: PathBuf::from(".env"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error reading .env: denied");
        assert_eq!(err.status_label(), "UNREADABLE");
        assert_eq!(err.config_issue(), "Config file could not be read");

        assert_eq!(ProbeError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            ProbeError::Transport("connection refused".to_string()).to_string(),
            "Transport error: connection refused"
        );
    }
}

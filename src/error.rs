//! Error types for asset publishing
//!
//! Uses `thiserror` for library errors. The binary maps each variant to a
//! process exit code via [`PublishError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for publisher operations
pub type PublishResult<T> = Result<T, PublishError>;

/// Main error type for publisher operations
#[derive(Error, Debug)]
pub enum PublishError {
    /// Version argument cannot be used as a storage prefix
    #[error("invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// Tag lookup succeeded but printed nothing usable
    #[error("'{program}' returned an empty tag; is there a tag in this repository?")]
    EmptyTag { program: String },

    /// External tool exited unsuccessfully
    #[error("{program} {args} failed with {}", describe_code(.code))]
    CommandFailed {
        program: String,
        args: String,
        code: Option<i32>,
    },

    /// External tool is not installed or not in PATH
    #[error("'{program}' not found; install it or set its path in the config")]
    CommandNotFound { program: String },

    /// External tool could not be started for another reason
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Front-end project directory is missing
    #[error("web directory not found: {path}")]
    WebDirMissing { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl PublishError {
    /// Exit code the process should terminate with for this error.
    ///
    /// Tool failures propagate the tool's own exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            PublishError::InvalidVersion { .. } => 2,
            PublishError::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            PublishError::CommandNotFound { .. } => 127,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_propagates_tool_exit_code() {
        let err = PublishError::CommandFailed {
            program: "yarn".to_string(),
            args: "run build".to_string(),
            code: Some(3),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "yarn run build failed with exit code 3");
    }

    #[test]
    fn signal_termination_exits_one() {
        let err = PublishError::CommandFailed {
            program: "gsutil".to_string(),
            args: "-m cp -r".to_string(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn missing_tool_exits_127() {
        let err = PublishError::CommandNotFound {
            program: "gsutil".to_string(),
        };
        assert_eq!(err.exit_code(), 127);
    }

    #[test]
    fn invalid_version_is_a_usage_error() {
        let err = PublishError::InvalidVersion {
            version: "a/b".to_string(),
            reason: "must not contain '/'".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "invalid version 'a/b': must not contain '/'"
        );
    }
}

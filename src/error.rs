//! Error types for the enrolment workflow.

use std::fmt;
use std::io;

/// Enrolment error type.
///
/// Nothing here is retried or recovered: the binary logs the error with
/// context and exits non-zero.
#[derive(Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment keys).
    Config(String),
    /// Enrolment image could not be read from disk.
    Image { path: String, source: io::Error },
    /// Transport-level failure (connect, TLS, protocol).
    Transport { op: &'static str, detail: String },
    /// Non-200 response from the service.
    Status {
        op: &'static str,
        status: u16,
        body: String,
    },
    /// HTTP 200 with a body missing the expected field.
    MalformedResponse { op: &'static str, detail: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Image { path, source } => {
                write!(f, "failed to read image '{path}': {source}")
            }
            Error::Transport { op, detail } => {
                write!(f, "transport error during {op}: {detail}")
            }
            Error::Status { op, status, body } => {
                write!(f, "{op} failed: <{status}, {body}>")
            }
            Error::MalformedResponse { op, detail } => {
                write!(f, "malformed response during {op}: {detail}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image { source, .. } => Some(source),
            _ => None,
        }
    }
}

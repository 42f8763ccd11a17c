// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `slide_cover` library.
//!
//! Cover commands only ever fail with [`CommandDispatchError`], which is
//! handed back to the caller exactly as the command client produced it.
//! The remaining types cover value validation and vendor record parsing.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The command client failed to dispatch a command.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] CommandDispatchError),

    /// Error occurred while parsing a vendor record.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A cover percentage is outside 0-100.
    #[error("cover position {0} is out of range [0, 100]")]
    PercentOutOfRange(u8),

    /// A position fraction is outside [0.0, 1.0] or not a number.
    #[error("position fraction {0} is out of range [0.0, 1.0]")]
    FractionOutOfRange(f64),
}

/// Failure surfaced by the command client while dispatching a command.
///
/// The cover never inspects, retries or translates these. A failed command
/// leaves the optimistic motion state in place until the next authoritative
/// refresh, so callers should treat the reported state as possibly stale.
#[derive(Debug, Error)]
pub enum CommandDispatchError {
    /// Connection to the vendor API failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The vendor API answered with something the client could not use.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Any other client-specific failure.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors related to parsing vendor slide records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::PercentOutOfRange(150);
        assert_eq!(err.to_string(), "cover position 150 is out of range [0, 100]");
    }

    #[test]
    fn dispatch_error_display() {
        let err = CommandDispatchError::Timeout(5000);
        assert_eq!(err.to_string(), "request timed out after 5000 ms");
    }

    #[test]
    fn dispatch_error_wraps_opaque_source() {
        let source: Box<dyn std::error::Error + Send + Sync> = "socket closed".into();
        let err = CommandDispatchError::from(source);
        assert_eq!(err.to_string(), "socket closed");
    }

    #[test]
    fn error_from_dispatch_error() {
        let err: Error = CommandDispatchError::AuthenticationFailed.into();
        assert!(matches!(
            err,
            Error::Dispatch(CommandDispatchError::AuthenticationFailed)
        ));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::InvalidValue {
            field: "state".to_string(),
            message: "unknown motion state: jammed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse state: unknown motion state: jammed"
        );
    }
}

//! Error types for the conversion service client.
//!
//! # Design
//! `NcatError` is the closed set of failures a `convert` call can surface.
//! `MissingParameter` is raised locally before any I/O. `ConnectionFailure`
//! and `Timeout` come from the transport outcome: no response at all versus
//! an HTTP 408. Every other non-2xx status lands in `Upstream` with the raw
//! status code and body so the caller keeps the service's own diagnostics.
//!
//! `TransportError` is what a `Transport` reports when it could not obtain a
//! response. The client folds all of its variants into `ConnectionFailure`.

use thiserror::Error;

/// Errors returned by `NcatClient`.
#[derive(Debug, Error)]
pub enum NcatError {
    /// A field the mode requires is absent from the parameter set.
    #[error("missing parameter '{0}'")]
    MissingParameter(&'static str),

    /// The request never produced a response (DNS, connect, local timeout).
    #[error("cannot connect to the conversion service: {0}")]
    ConnectionFailure(String),

    /// The service answered with HTTP 408.
    #[error("the connection to the conversion service has timed out")]
    Timeout,

    /// The service answered with a non-2xx status other than 408.
    #[error("conversion service returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The 2xx response body was not a JSON object of string fields.
    #[error("response body could not be decoded: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Failure reported by a `Transport` when no HTTP response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Name resolution or connection establishment failed.
    #[error("host unreachable: {0}")]
    Unreachable(String),

    /// The transport's own connect or overall timeout expired.
    #[error("timed out: {0}")]
    TimedOut(String),

    #[error("i/o error: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for NcatError {
    fn from(err: TransportError) -> Self {
        NcatError::ConnectionFailure(err.to_string())
    }
}

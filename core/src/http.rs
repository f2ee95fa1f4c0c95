//! HTTP transport types and the transport capability.
//!
//! # Design
//! Requests and responses are plain data. The client builds an `HttpRequest`
//! whose `path` is relative to the service root and already carries the query
//! string; a `Transport` owns the base address and timeouts, performs the GET
//! and hands back whatever status the server answered with. Non-2xx statuses
//! are data, not errors: interpreting them is the client's job. A transport
//! returns `Err` only when no response was obtained at all.

use std::sync::Arc;

use crate::error::TransportError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// `{mode}?{query}`, relative to the transport's base address.
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Convenience constructor for a response without headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// The "send GET, get back status + body" capability the client runs on.
///
/// Implementations are configured once and shared read-only; `execute` takes
/// `&self`. Whether a transport may be used from several threads at once is
/// up to the implementation.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

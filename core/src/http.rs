//! Plain-data HTTP types and the transport seam.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` describe one HTTP exchange as plain data.
//! The core builds requests and interprets responses without touching the
//! network; the [`Transport`] implementation owns the actual I/O. The
//! transport is injected at client construction, so tests can substitute a
//! fake without touching globals.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to a
//! transport running anywhere without lifetime concerns.

use std::fmt;

use crate::options::Method;

/// An HTTP request described as plain data.
///
/// Produced by `AjaxClient::build_request`. The transport (or a host doing
/// its own I/O) executes it and produces the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then fed
/// to [`crate::check_status`] for normalization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Failure produced by a [`Transport`] before any response exists, such as a
/// refused connection or a DNS error.
#[derive(Debug)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failed: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// The injected network primitive.
///
/// One call executes one request; the trait imposes no ordering, timeout, or
/// retry semantics. Anything fetch-shaped can implement it: a real HTTP
/// agent in production, a canned or recording fake in tests.
pub trait Transport {
    fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).fetch(request)
    }
}

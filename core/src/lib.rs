//! Minimal HTTP request helper.
//!
//! # Overview
//! Builds GET/POST/PUT/DELETE requests from layered configuration, routes
//! request data to the query string (GET) or a JSON body (everything else),
//! and normalizes responses into parsed-JSON success or an `errors` payload.
//! The network round-trip is delegated to an injected [`Transport`], keeping
//! the core deterministic and testable.
//!
//! # Design
//! - `AjaxClient` owns its configuration (`api_path`, `common_options`) and
//!   its transport; there is no process-global state.
//! - Request construction (`build_request`) is separate from dispatch, so
//!   hosts can execute the I/O themselves and feed the response back through
//!   [`check_status`].
//! - Options have a fixed shape with an explicit merge, not a generic deep
//!   merge over untyped maps.
//! - Cancellation is not offered: the supported transports cannot cancel an
//!   in-flight request, so the surface carries no `abort` handle.

pub mod client;
pub mod error;
pub mod http;
pub mod options;
pub mod query;

pub use client::{check_status, AjaxClient};
pub use error::RequestError;
pub use http::{HttpRequest, HttpResponse, Transport, TransportError};
pub use options::{Method, RequestOptions};

//! Blocking client for the NGS Coordinate Conversion and Transformation Tool
//! (NCAT) web service.
//!
//! # Overview
//! The service converts coordinates given in one of five representations
//! (geographic, state plane, UTM, earth-centered XYZ, U.S. National Grid)
//! between datums. `NcatClient` checks that a mode's required fields are
//! present, serializes the parameters into the query string in the order the
//! caller gave them, performs one GET, and maps the outcome to a
//! `ConversionResponse` or an `NcatError`.
//!
//! # Design
//! - Parameter values are never validated, only presence of the required
//!   keys.
//! - The HTTP round-trip goes through the `Transport` trait. `UreqTransport`
//!   is the default; tests and embedding applications can supply their own.
//! - Responses stay an open string map; fields that do not apply hold the
//!   sentinel `"N/A"` (`NOT_APPLICABLE`).
//! - The library emits `tracing` events but never installs a subscriber.

pub mod client;
pub mod error;
pub mod http;
pub mod mode;
pub mod params;
pub mod requests;
pub mod response;
pub mod transport;

pub use client::NcatClient;
pub use error::{NcatError, TransportError};
pub use http::{HttpRequest, HttpResponse, Transport};
pub use mode::ConversionMode;
pub use params::{check_required, ParamValue, Parameters};
pub use requests::{ConversionRequest, LlhRequest, SpcRequest, UsngRequest, UtmRequest, XyzRequest};
pub use response::{ConversionResponse, NOT_APPLICABLE};
pub use transport::{TransportConfig, UreqTransport};

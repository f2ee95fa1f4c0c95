//! Request orchestration for the conversion service.
//!
//! # Design
//! `NcatClient` holds only its transport and carries no mutable state
//! between calls. A conversion is split the same way on every path:
//! `build_request` validates and serializes without touching the network,
//! the transport performs the GET, and `parse_response` maps the outcome.
//! `convert` chains the three; callers that want to run the I/O themselves
//! can call the two halves directly.

use crate::error::NcatError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::mode::ConversionMode;
use crate::params::{check_required, Parameters};
use crate::requests::ConversionRequest;
use crate::response::ConversionResponse;
use crate::transport::{TransportConfig, UreqTransport};

const REQUEST_TIMEOUT: u16 = 408;

/// Blocking client for the conversion service.
#[derive(Debug, Clone)]
pub struct NcatClient<T = UreqTransport> {
    transport: T,
}

impl NcatClient<UreqTransport> {
    /// Client for the public service with the default timeouts.
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    pub fn with_config(config: TransportConfig) -> Self {
        Self::with_transport(UreqTransport::new(&config))
    }
}

impl Default for NcatClient<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> NcatClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate `params` against `mode` and describe the GET to send.
    ///
    /// Fails with `MissingParameter` naming the first absent required field.
    pub fn build_request(&self, mode: ConversionMode, params: &Parameters) -> Result<HttpRequest, NcatError> {
        check_required(mode.required_fields(), params)?;

        let query = params.to_query_string();
        let path = if query.is_empty() {
            mode.path().to_string()
        } else {
            format!("{}?{query}", mode.path())
        };
        Ok(HttpRequest {
            path,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Map a received response to a conversion result.
    pub fn parse_response(&self, response: HttpResponse) -> Result<ConversionResponse, NcatError> {
        check_status(&response)?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Run one conversion: validate, send exactly one GET, map the outcome.
    pub fn convert(&self, mode: ConversionMode, params: &Parameters) -> Result<ConversionResponse, NcatError> {
        let request = self.build_request(mode, params)?;
        tracing::debug!(%mode, path = %request.path, "sending conversion request");

        let response = self.transport.execute(&request).map_err(|err| {
            tracing::warn!(%mode, error = %err, "conversion service unreachable");
            NcatError::from(err)
        })?;
        self.parse_response(response)
    }

    /// Send a typed request.
    pub fn send<R: ConversionRequest>(&self, request: &R) -> Result<ConversionResponse, NcatError> {
        self.convert(R::MODE, &request.to_parameters())
    }

    pub fn llh(&self, params: &Parameters) -> Result<ConversionResponse, NcatError> {
        self.convert(ConversionMode::Llh, params)
    }

    pub fn spc(&self, params: &Parameters) -> Result<ConversionResponse, NcatError> {
        self.convert(ConversionMode::Spc, params)
    }

    /// UTM conversion. `spcZone` is required even though the service would
    /// accept the request without it.
    pub fn utm(&self, params: &Parameters) -> Result<ConversionResponse, NcatError> {
        self.convert(ConversionMode::Utm, params)
    }

    pub fn xyz(&self, params: &Parameters) -> Result<ConversionResponse, NcatError> {
        self.convert(ConversionMode::Xyz, params)
    }

    pub fn usng(&self, params: &Parameters) -> Result<ConversionResponse, NcatError> {
        self.convert(ConversionMode::Usng, params)
    }
}

/// 2xx passes; 408 is `Timeout`; anything else is `Upstream`.
fn check_status(response: &HttpResponse) -> Result<(), NcatError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == REQUEST_TIMEOUT {
        tracing::warn!("conversion service answered 408");
        return Err(NcatError::Timeout);
    }
    tracing::warn!(status = response.status, "conversion service returned an error");
    Err(NcatError::Upstream {
        status: response.status,
        body: response.body.clone(),
    })
}

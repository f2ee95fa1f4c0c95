//! Default blocking transport built on `ureq`, and its configuration.

use std::fmt;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Root of the public conversion service.
pub const DEFAULT_BASE_URL: &str = "https://geodesy.noaa.gov/api/ncat/";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 6;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Bytes a URI may not carry literally. Non-ASCII is always encoded.
/// Query delimiters and sub-delims such as `(`, `)`, `&`, `=` are left
/// alone so the query string reaches the service as built.
const URI_REJECTED: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Base address and timeouts for `UreqTransport`.
///
/// Every field has a default, so an embedding application can deserialize a
/// partial table from its own configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TransportConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Bound on the whole request, connection included.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `Transport` over a shared `ureq::Agent`.
///
/// The agent is built once with the configured timeouts and with status
/// codes returned as data. Cloning shares the connection pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl UreqTransport {
    pub fn new(config: &TransportConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_connect(Some(config.connect_timeout()))
            .timeout_global(Some(config.timeout()))
            .http_status_as_error(false)
            .build()
            .new_agent();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base address and a relative request path with a single `/`,
    /// percent-encoding only what the URI grammar rejects (spaces, control
    /// and non-ASCII characters, and a few reserved punctuation marks).
    pub fn url_for(&self, path: &str) -> String {
        let path = utf8_percent_encode(path.trim_start_matches('/'), URI_REJECTED);
        format!("{}/{}", self.base_url, path)
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&TransportConfig::default())
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url_for(&request.path);
        tracing::trace!(%url, "GET");

        let mut builder = self.agent.get(&url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        match &err {
            ureq::Error::Timeout(_) => TransportError::TimedOut(err.to_string()),
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                TransportError::Unreachable(err.to_string())
            }
            ureq::Error::Io(_) => TransportError::Io(err.to_string()),
            _ => TransportError::Other(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_service() {
        let config = TransportConfig::default();
        assert_eq!(config.base_url, "https://geodesy.noaa.gov/api/ncat/");
        assert_eq!(config.connect_timeout(), Duration::from_secs(6));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: TransportConfig = serde_json::from_str(r#"{"timeout_secs": 30}"#).unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 6);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn url_joins_with_a_single_slash() {
        let transport = UreqTransport::new(&TransportConfig::with_base_url("http://localhost:3000/"));
        assert_eq!(transport.base_url(), "http://localhost:3000");
        assert_eq!(transport.url_for("llh?lat=1"), "http://localhost:3000/llh?lat=1");
        assert_eq!(transport.url_for("/usng"), "http://localhost:3000/usng");
    }

    #[test]
    fn url_encodes_only_what_a_uri_rejects() {
        let transport = UreqTransport::new(&TransportConfig::with_base_url("http://localhost:3000"));
        assert_eq!(
            transport.url_for("usng?usng=15S WB 47883 38641&outDatum=NAD83 (NSRS2007)"),
            "http://localhost:3000/usng?usng=15S%20WB%2047883%2038641&outDatum=NAD83%20(NSRS2007)"
        );
        assert_eq!(
            transport.url_for("llh?inDatum=NAD83(1986)&lat=40"),
            "http://localhost:3000/llh?inDatum=NAD83(1986)&lat=40"
        );
        assert_eq!(transport.url_for("xyz?note=caf\u{e9}"), "http://localhost:3000/xyz?note=caf%C3%A9");
    }

    #[test]
    fn connection_errors_are_unreachable() {
        for err in [ureq::Error::HostNotFound, ureq::Error::ConnectionFailed] {
            assert!(matches!(TransportError::from(err), TransportError::Unreachable(_)));
        }
    }

    #[test]
    fn default_transport_targets_the_service_root() {
        let transport = UreqTransport::default();
        assert_eq!(transport.url_for("spc"), "https://geodesy.noaa.gov/api/ncat/spc");
    }
}

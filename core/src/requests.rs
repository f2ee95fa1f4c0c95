//! Typed per-mode requests.
//!
//! Each struct carries the mode's required fields as plain fields, so a
//! request that compiles always passes presence validation. Optional service
//! fields are `Option`s and are only emitted when set. `extra` passes through
//! anything else the service accepts. Emission order is: required fields in
//! the mode's required order, then optionals, then extras.

use crate::mode::ConversionMode;
use crate::params::{ParamValue, Parameters};

/// A request that knows its mode and how to flatten itself into parameters.
pub trait ConversionRequest {
    const MODE: ConversionMode;

    fn to_parameters(&self) -> Parameters;
}

/// Push `value` under `key` when it is set.
fn push_opt<V: Clone + Into<ParamValue>>(params: &mut Parameters, key: &str, value: &Option<V>) {
    if let Some(v) = value {
        params.insert(key, v.clone());
    }
}

/// Geographic latitude/longitude request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LlhRequest {
    pub lat: f64,
    pub lon: f64,
    pub in_datum: String,
    pub out_datum: String,
    /// Ellipsoid height.
    pub eht: Option<f64>,
    /// Orthometric height.
    pub ortho_ht: Option<f64>,
    pub in_vert_datum: Option<String>,
    pub out_vert_datum: Option<String>,
    pub extra: Parameters,
}

impl LlhRequest {
    pub fn new(lat: f64, lon: f64, in_datum: impl Into<String>, out_datum: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            in_datum: in_datum.into(),
            out_datum: out_datum.into(),
            ..Self::default()
        }
    }
}

impl ConversionRequest for LlhRequest {
    const MODE: ConversionMode = ConversionMode::Llh;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new()
            .with("lat", self.lat)
            .with("lon", self.lon)
            .with("inDatum", &self.in_datum)
            .with("outDatum", &self.out_datum);
        push_opt(&mut params, "eht", &self.eht);
        push_opt(&mut params, "orthoHt", &self.ortho_ht);
        push_opt(&mut params, "inVertDatum", &self.in_vert_datum);
        push_opt(&mut params, "outVertDatum", &self.out_vert_datum);
        params.extend(self.extra.iter().map(|(k, v)| (k, v.clone())));
        params
    }
}

/// State plane coordinate request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpcRequest {
    pub northing: f64,
    pub easting: f64,
    pub in_datum: String,
    pub out_datum: String,
    pub spc_zone: u32,
    /// Unit of northing/easting: `m`, `usft` or `ift`.
    pub units: Option<String>,
    pub eht: Option<f64>,
    pub extra: Parameters,
}

impl SpcRequest {
    pub fn new(
        northing: f64,
        easting: f64,
        spc_zone: u32,
        in_datum: impl Into<String>,
        out_datum: impl Into<String>,
    ) -> Self {
        Self {
            northing,
            easting,
            in_datum: in_datum.into(),
            out_datum: out_datum.into(),
            spc_zone,
            ..Self::default()
        }
    }
}

impl ConversionRequest for SpcRequest {
    const MODE: ConversionMode = ConversionMode::Spc;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new()
            .with("northing", self.northing)
            .with("easting", self.easting)
            .with("inDatum", &self.in_datum)
            .with("outDatum", &self.out_datum)
            .with("spcZone", self.spc_zone);
        push_opt(&mut params, "units", &self.units);
        push_opt(&mut params, "eht", &self.eht);
        params.extend(self.extra.iter().map(|(k, v)| (k, v.clone())));
        params
    }
}

/// UTM request. `spc_zone` is mandatory here too; see
/// `ConversionMode::required_fields`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtmRequest {
    pub northing: f64,
    pub easting: f64,
    pub in_datum: String,
    pub out_datum: String,
    pub spc_zone: u32,
    pub utm_zone: u32,
    /// `N` or `S`.
    pub hemisphere: Option<String>,
    pub eht: Option<f64>,
    pub extra: Parameters,
}

impl UtmRequest {
    pub fn new(
        northing: f64,
        easting: f64,
        utm_zone: u32,
        spc_zone: u32,
        in_datum: impl Into<String>,
        out_datum: impl Into<String>,
    ) -> Self {
        Self {
            northing,
            easting,
            in_datum: in_datum.into(),
            out_datum: out_datum.into(),
            spc_zone,
            utm_zone,
            ..Self::default()
        }
    }
}

impl ConversionRequest for UtmRequest {
    const MODE: ConversionMode = ConversionMode::Utm;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new()
            .with("northing", self.northing)
            .with("easting", self.easting)
            .with("inDatum", &self.in_datum)
            .with("outDatum", &self.out_datum)
            .with("spcZone", self.spc_zone)
            .with("utmZone", self.utm_zone);
        push_opt(&mut params, "hemi", &self.hemisphere);
        push_opt(&mut params, "eht", &self.eht);
        params.extend(self.extra.iter().map(|(k, v)| (k, v.clone())));
        params
    }
}

/// Earth-centered Cartesian request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzRequest {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub in_datum: String,
    pub out_datum: String,
    pub extra: Parameters,
}

impl XyzRequest {
    pub fn new(x: f64, y: f64, z: f64, in_datum: impl Into<String>, out_datum: impl Into<String>) -> Self {
        Self {
            x,
            y,
            z,
            in_datum: in_datum.into(),
            out_datum: out_datum.into(),
            extra: Parameters::new(),
        }
    }
}

impl ConversionRequest for XyzRequest {
    const MODE: ConversionMode = ConversionMode::Xyz;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new()
            .with("x", self.x)
            .with("y", self.y)
            .with("z", self.z)
            .with("inDatum", &self.in_datum)
            .with("outDatum", &self.out_datum);
        params.extend(self.extra.iter().map(|(k, v)| (k, v.clone())));
        params
    }
}

/// U.S. National Grid request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsngRequest {
    pub usng: String,
    pub in_datum: String,
    pub out_datum: String,
    pub eht: Option<f64>,
    pub extra: Parameters,
}

impl UsngRequest {
    pub fn new(usng: impl Into<String>, in_datum: impl Into<String>, out_datum: impl Into<String>) -> Self {
        Self {
            usng: usng.into(),
            in_datum: in_datum.into(),
            out_datum: out_datum.into(),
            ..Self::default()
        }
    }
}

impl ConversionRequest for UsngRequest {
    const MODE: ConversionMode = ConversionMode::Usng;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new()
            .with("usng", &self.usng)
            .with("inDatum", &self.in_datum)
            .with("outDatum", &self.out_datum);
        push_opt(&mut params, "eht", &self.eht);
        params.extend(self.extra.iter().map(|(k, v)| (k, v.clone())));
        params
    }
}

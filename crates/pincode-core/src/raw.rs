// crates/pincode-core/src/raw.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw reference-table row as it appears in the JSON dataset:
///
/// ```json
/// "110001": {
///   "city": "New Delhi", "state": "Delhi", "region": "North", "zone": "Northern",
///   "tier": 1, "isMetro": true, "latitude": 28.6328, "longitude": 77.2197,
///   "courierServices": ["BlueDart", "DTDC"], "deliveryDays": 1
/// }
/// ```
///
/// Not exposed from the public API; see [`crate::model::convert`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PincodeRaw {
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    /// Required. Read wide so an out-of-range value reaches the converter
    /// and is reported against its pincode.
    pub tier: i64,
    #[serde(default)]
    pub is_metro: bool,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub courier_services: Option<Vec<String>>,
    #[serde(default)]
    pub delivery_days: Option<u32>,
    #[serde(default)]
    pub cod_available: Option<bool>,
}

/// Keyed by pincode; a `BTreeMap` so iteration is already in table order.
pub type PincodesRaw = BTreeMap<String, PincodeRaw>;

// crates/pincode-core/src/model/record.rs
use super::{Region, Tier, Zone};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Only ever built when both halves are known; a record never carries a
/// one-sided coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }

    /// Pair up two optional halves, dropping the pair if either is missing.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}

/// One row of the reference table (or a row synthesized from the first digit).
///
/// This type is also the snapshot format, so it must stay bincode-friendly:
/// no skipped or flattened fields here. JSON shaping lives in [`crate::api`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PincodeRecord {
    pub city: String,
    pub state: String,
    pub region: Region,
    pub zone: Zone,
    pub tier: Tier,
    pub is_metro: bool,
    pub coordinates: Option<Coordinates>,
    /// Couriers serving this pincode, in preference order. May be empty.
    pub courier_services: Vec<String>,
    pub delivery_days: Option<u32>,
    /// `None` means the dataset did not say; COD decisions treat that as `true`.
    pub cod_available: Option<bool>,
}

impl PincodeRecord {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn has_courier(&self, courier: &str) -> bool {
        self.courier_services.iter().any(|c| c == courier)
    }
}

// crates/pincode-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the reference table.
///
/// Returned by [`PincodeSearch::stats`](crate::traits::PincodeSearch::stats),
/// these counts reflect the in-memory table as loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStats {
    pub pincodes: usize,
    pub metros: usize,
    pub with_coordinates: usize,
    pub tier1: usize,
    pub tier2: usize,
    pub tier3: usize,
}

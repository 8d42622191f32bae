// crates/pincode-core/src/model/mod.rs
pub mod convert;
pub mod record;
pub mod region;
pub mod search;
pub mod table;

pub use record::{Coordinates, PincodeRecord};
pub use region::{InvalidTier, Region, Tier, Zone};
pub use table::{PincodeDb, PincodeEntry};

/// File suffix for bincode snapshots of the table.
#[cfg(not(feature = "compact"))]
pub const SNAPSHOT_SUFFIX: &str = ".bin";
#[cfg(feature = "compact")]
pub const SNAPSHOT_SUFFIX: &str = ".bin.gz";

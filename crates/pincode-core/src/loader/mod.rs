// crates/pincode-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (embedded bytes, files, decompression) and
//! delegates to the JSON converter or the snapshot decoder.

use crate::error::{PincodeError, Result};
use crate::model::{convert, PincodeDb};
use crate::raw::PincodesRaw;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub mod common_io;
mod snapshot;

/// The packaged reference table, compiled into the binary.
static EMBEDDED_TABLE: &str = include_str!("../../data/pincodes.json");

static PINCODE_DB_CACHE: OnceCell<PincodeDb> = OnceCell::new();

impl PincodeDb {
    /// The packaged table, parsed once per process and cloned out.
    pub fn load() -> Result<Self> {
        PINCODE_DB_CACHE.get_or_try_init(Self::embedded).cloned()
    }

    /// Parses the packaged table afresh (bypasses the process cache).
    pub fn embedded() -> Result<Self> {
        let db = Self::from_json_str(EMBEDDED_TABLE)?;
        debug!(pincodes = db.len(), source = "embedded", "loaded reference table");
        Ok(db)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: PincodesRaw = serde_json::from_str(json)?;
        convert::from_raw(raw)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: PincodesRaw = serde_json::from_reader(reader)?;
        convert::from_raw(raw)
    }

    /// Loads a table from disk, picking the decoder from the file name:
    ///
    /// - `*.json` / `*.json.gz`: JSON source table
    /// - `*.bin` / `*.bin.gz`: snapshot written by [`PincodeDb::save_as`]
    ///
    /// `.gz` variants need the `compact` feature.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = common_io::payload_extension(path);
        let db = match ext.as_deref() {
            Some("json") => Self::from_json_reader(common_io::open_stream(path)?)?,
            Some("bin") => Self::from_snapshot_reader(common_io::open_stream(path)?)?,
            _ => {
                return Err(PincodeError::InvalidData(format!(
                    "unsupported dataset file {} (expected .json, .json.gz, .bin or .bin.gz)",
                    path.display()
                )))
            }
        };
        debug!(pincodes = db.len(), path = %path.display(), "loaded reference table");
        Ok(db)
    }
}

// crates/pincode-core/src/loader/snapshot.rs
use super::common_io;
use crate::error::Result;
use crate::model::PincodeDb;
use bincode::Options;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Upper bound on snapshot size, so a corrupt length prefix cannot make us
/// allocate without limit.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl PincodeDb {
    /// Reconstructs a table from a bincode snapshot stream.
    pub fn from_snapshot_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(options().deserialize_from(reader)?)
    }

    /// Writes a bincode snapshot to any writer.
    pub fn write_snapshot<W: Write>(&self, writer: W) -> Result<()> {
        options().serialize_into(writer, self)?;
        Ok(())
    }

    /// Saves a snapshot to `path`, gzip-compressed when it ends in `.gz`.
    ///
    /// Snapshots load faster than the JSON source and can be handed back to
    /// [`PincodeDb::load_from_path`].
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut sink = common_io::create_sink(path)?;
        self.write_snapshot(&mut sink)?;
        sink.flush()?;
        debug!(path = %path.display(), pincodes = self.len(), "wrote snapshot");
        Ok(())
    }
}

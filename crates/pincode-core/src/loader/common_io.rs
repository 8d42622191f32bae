// crates/pincode-core/src/loader/common_io.rs
use crate::error::{PincodeError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Whether the file name asks for gzip (`*.gz`).
pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the name
/// ends in `.gz`. The caller never cares about compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PincodeError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PincodeError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// Creates (truncates) a file for writing, gzip-encoding when the name ends
/// in `.gz`. Call `flush` on the returned writer before dropping it.
pub fn create_sink(path: &Path) -> Result<Box<dyn Write>> {
    let writer = BufWriter::new(File::create(path)?);

    if !is_gzip(path) {
        return Ok(Box::new(writer));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::{write::GzEncoder, Compression};
        Ok(Box::new(GzEncoder::new(writer, Compression::default())))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PincodeError::InvalidData(format!(
            "gzip requested for {} but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// Strips an optional trailing `.gz` and returns the remaining extension.
pub fn payload_extension(path: &Path) -> Option<String> {
    let inner = if is_gzip(path) {
        Path::new(path.file_stem()?)
    } else {
        path
    };
    inner
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

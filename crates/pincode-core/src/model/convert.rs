// crates/pincode-core/src/model/convert.rs
use super::{Coordinates, PincodeDb, PincodeEntry, PincodeRecord, Region, Tier, Zone};
use crate::error::{PincodeError, Result};
use crate::input::Pincode;
use crate::raw::{PincodeRaw, PincodesRaw};

/// **Standard Converter:** Raw JSON rows -> reference table.
///
/// Every key must be a well-formed pincode and every tier must be 1..=3.
/// Region and zone fall back to the first-digit tables when missing or
/// misspelt.
pub fn from_raw(raw: PincodesRaw) -> Result<PincodeDb> {
    let entries = raw
        .into_iter()
        .map(|(key, row)| entry_from_raw(&key, row))
        .collect::<Result<Vec<_>>>()?;
    Ok(PincodeDb::from_entries(entries))
}

fn entry_from_raw(key: &str, row: PincodeRaw) -> Result<PincodeEntry> {
    let pincode = Pincode::parse(key)
        .map_err(|e| PincodeError::InvalidData(format!("key '{key}': {e}")))?;
    let tier = u8::try_from(row.tier)
        .ok()
        .and_then(|t| Tier::try_from(t).ok())
        .ok_or_else(|| {
            PincodeError::InvalidData(format!(
                "pincode {key}: tier must be 1, 2 or 3, got {}",
                row.tier
            ))
        })?;
    let digit = pincode.first_digit();

    let region = row
        .region
        .as_deref()
        .and_then(Region::parse)
        .unwrap_or_else(|| Region::from_first_digit(digit));
    let zone = row
        .zone
        .as_deref()
        .and_then(Zone::parse)
        .unwrap_or_else(|| Zone::from_first_digit(digit));

    Ok(PincodeEntry {
        pincode,
        record: PincodeRecord {
            city: row.city,
            state: row.state,
            region,
            zone,
            tier,
            is_metro: row.is_metro,
            coordinates: Coordinates::from_parts(row.latitude, row.longitude),
            courier_services: row.courier_services.unwrap_or_default(),
            delivery_days: row.delivery_days,
            cod_available: row.cod_available,
        },
    })
}

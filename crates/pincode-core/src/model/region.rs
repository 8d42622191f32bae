// crates/pincode-core/src/model/region.rs
use crate::tables;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad postal region, normally implied by the first pincode digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Northeast,
    Central,
    Unknown,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Northeast,
        Region::Central,
        Region::Unknown,
    ];

    pub fn from_first_digit(digit: u8) -> Self {
        tables::region_for_digit(digit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Northeast => "Northeast",
            Region::Central => "Central",
            Region::Unknown => "Unknown",
        }
    }

    /// Case-insensitive parse of the dataset spelling.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal zone. Mostly mirrors [`Region`], except that digit 4 is the
/// Central zone inside the West region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Northern,
    Southern,
    Eastern,
    Western,
    Central,
    Northeastern,
    Unknown,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::Northern,
        Zone::Southern,
        Zone::Eastern,
        Zone::Western,
        Zone::Central,
        Zone::Northeastern,
        Zone::Unknown,
    ];

    pub fn from_first_digit(digit: u8) -> Self {
        tables::zone_for_digit(digit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Northern => "Northern",
            Zone::Southern => "Southern",
            Zone::Eastern => "Eastern",
            Zone::Western => "Western",
            Zone::Central => "Central",
            Zone::Northeastern => "Northeastern",
            Zone::Unknown => "Unknown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|z| z.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// City classification: 1 (major metro) > 2 (large city) > 3 (other).
///
/// Serialises as the bare number; any other number is rejected on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Tier {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tier must be 1, 2 or 3, got {0}")]
pub struct InvalidTier(pub u8);

impl TryFrom<u8> for Tier {
    type Error = InvalidTier;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Tier::One),
            2 => Ok(Tier::Two),
            3 => Ok(Tier::Three),
            other => Err(InvalidTier(other)),
        }
    }
}

impl From<Tier> for u8 {
    fn from(t: Tier) -> Self {
        t.as_u8()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

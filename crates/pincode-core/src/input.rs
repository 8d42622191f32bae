// crates/pincode-core/src/input.rs

//! # Pincode input
//!
//! Every public query accepts a pincode either as text or as an integer.
//! Both are normalised to a trimmed decimal string before validation.
//!
//! Integers lose leading zeros on the way (`012345` as an integer is `12345`,
//! which then fails the length check rather than the leading-zero check).
//! Since a leading zero is never valid this changes only the error message,
//! not the verdict.

use crate::validate::{check_format, FormatError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anything that can be handed to a query as a pincode.
pub trait IntoPincode {
    /// Decimal string form, trimmed of surrounding whitespace.
    fn to_pincode_string(&self) -> String;
}

impl IntoPincode for str {
    fn to_pincode_string(&self) -> String {
        self.trim().to_owned()
    }
}

impl IntoPincode for String {
    fn to_pincode_string(&self) -> String {
        self.as_str().to_pincode_string()
    }
}

impl<T: IntoPincode + ?Sized> IntoPincode for &T {
    fn to_pincode_string(&self) -> String {
        (**self).to_pincode_string()
    }
}

macro_rules! impl_into_pincode_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoPincode for $t {
                fn to_pincode_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_into_pincode_for_int!(u16, u32, u64, u128, usize, i16, i32, i64, i128, isize);

/// A pincode that passed format validation.
///
/// Holds exactly six ASCII digits, the first of which is `1..=9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pincode(String);

impl Pincode {
    pub fn parse(input: impl IntoPincode) -> Result<Self, FormatError> {
        let s = input.to_pincode_string();
        check_format(&s)?;
        Ok(Pincode(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading digit, which selects the postal region.
    pub fn first_digit(&self) -> u8 {
        self.0.as_bytes()[0] - b'0'
    }
}

impl FromStr for Pincode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pincode::parse(s)
    }
}

impl TryFrom<String> for Pincode {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Pincode::parse(value)
    }
}

impl From<Pincode> for String {
    fn from(p: Pincode) -> Self {
        p.0
    }
}

impl AsRef<str> for Pincode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

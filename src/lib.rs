//! pincode-rs: umbrella crate re-exporting [`pincode_core`] for the demos.
//!
//! ```
//! use pincode_rs::prelude::*;
//!
//! assert!(validate("560001").valid);
//! ```
pub use pincode_core::*;

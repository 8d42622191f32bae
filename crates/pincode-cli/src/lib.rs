//! pincode-cli
//! ===========
//!
//! Command-line interface for the `pincode-core` Indian pincode database.
//!
//! This crate primarily provides a binary (`pincode`). The small library
//! target exists so docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install pincode-cli
//! pincode --help
//! pincode details 110001
//! pincode distance 400001 793001 --json
//! PINCODE_DATA=my-table.json pincode stats
//! ```
//!
//! For programmatic access use the [`pincode-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

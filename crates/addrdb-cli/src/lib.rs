//! addrdb-cli
//! ==========
//!
//! Command-line interface for the `addrdb-core` address search engine.
//!
//! This crate primarily provides a binary (`addrdb-cli`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! addrdb-cli --help
//! addrdb-cli -i berlin.bin.gz cities ber
//! addrdb-cli -i berlin.bin.gz streets 1 linden
//! addrdb-cli -i berlin.bin.gz postcode 10117
//! ```
//!
//! For programmatic access use the [`addrdb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

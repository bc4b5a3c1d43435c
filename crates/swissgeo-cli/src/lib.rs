//! swissgeo-cli
//! ============
//!
//! Command-line interface for the `swissgeo-core` location classification
//! and filter engine.
//!
//! This crate primarily provides a binary (`swissgeo`). The library target
//! exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! swissgeo --help
//! swissgeo stats
//! swissgeo canton ZH
//! swissgeo detect 8001
//! swissgeo filter --jobs jobs.json --select region:zurich
//! ```
//!
//! For programmatic access use the [`swissgeo-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.

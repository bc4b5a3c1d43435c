// crates/swissgeo-core/src/lib.rs

//! # swissgeo-core
//!
//! Swiss location classification for job listings: a static
//! region → canton → sub-region hierarchy, a tri-state cascading selection
//! used by filter UIs, and the matcher that decides whether a listing's
//! locations satisfy a selection.
//!
//! ```rust
//! use swissgeo_core::prelude::*;
//!
//! let mut selection = SelectionState::new();
//! selection.toggle_region(Region::Zurich);
//!
//! let job = JobLocationAttributes::in_canton(Canton::Zurich)
//!     .with_sub_region(SubRegion::ZurichCity);
//!
//! assert!(LocationMatcher::default().matches(&selection, &job));
//! assert_eq!(detect_sub_region_from_postal_code("8001"), Some(SubRegion::ZurichCity));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod job;
#[cfg(feature = "json")]
pub mod loader;
pub mod matcher;
pub mod model;
pub mod prelude;
pub mod selection;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::HierarchyStats;
pub use crate::config::{IngestOptions, MatchMode, MatcherConfig};
pub use crate::error::{ClassificationError, GeoError, Result};
pub use crate::hierarchy::{
    cantons_of_region, detect_sub_region_from_postal_code, label_of, postal_codes_of,
    region_of_canton, sub_regions_of_canton, sub_regions_of_region,
};
pub use crate::job::{AdditionalLocation, JobLocationAttributes};
pub use crate::matcher::{JobFilter, LocationMatcher, RemoteFilter};
pub use crate::model::{Canton, Region, SubRegion};
pub use crate::selection::{SelectionState, Toggle, TriState};
pub use crate::traits::GeoNode;

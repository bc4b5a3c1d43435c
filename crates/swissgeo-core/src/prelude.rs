//! swissgeo prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::config::{IngestOptions, MatchMode, MatcherConfig};
pub use crate::error::{ClassificationError, GeoError, Result};
pub use crate::hierarchy::{
    cantons_of_region, detect_sub_region_from_postal_code, label_of, postal_codes_of, region_of_canton,
    sub_regions_of_canton, sub_regions_of_region,
};
pub use crate::job::{AdditionalLocation, JobLocationAttributes, JobLocationRaw};
#[cfg(feature = "json")]
pub use crate::loader::{load_jobs_from_path, read_jobs, ClassifiedJob, JobRecord};
pub use crate::matcher::{JobFilter, LocationMatcher, RemoteFilter};
pub use crate::model::{Canton, Region, SubRegion};
pub use crate::selection::{SelectionState, Toggle, TriState};
pub use crate::traits::GeoNode;

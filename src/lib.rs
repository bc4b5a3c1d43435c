//! swissgeo-rs: workspace facade re-exporting [`swissgeo_core`] for the demos.
pub use swissgeo_core::*;

// crates/swissgeo-core/src/model/mod.rs
//! The three closed hierarchy domains and their static metadata.
//!
//! Per-value data lives in exhaustive `match` expressions, so adding a
//! variant without its table entry does not compile.
mod canton;
mod region;
mod sub_region;

pub use canton::Canton;
pub use region::Region;
pub use sub_region::SubRegion;

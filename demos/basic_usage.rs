//! Basic usage example for swissgeo-rs
//!
//! This example demonstrates how to:
//! - Walk the region → canton → sub-region tables
//! - Detect a sub-region from a postal code
//! - Toggle a selection and match a job listing against it

use swissgeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== SwissGeo-RS Basic Usage Example ===\n");

    // Example 1: All regions with their cantons
    println!("--- Example 1: Regions and cantons ---");
    for &region in Region::ALL {
        let cantons: Vec<&str> = cantons_of_region(region).iter().map(|c| c.code()).collect();
        println!("{} ({}): {}", region.label(), region.code(), cantons.join(", "));
    }
    println!();

    // Example 2: Look up a canton by code
    println!("--- Example 2: Canton by code ---");
    let canton: Canton = "sg".parse()?;
    println!("Canton: {} ({})", canton.label(), canton.code());
    println!("Region: {}", region_of_canton(canton).label());
    for sub in sub_regions_of_canton(canton) {
        println!("- {} ({})", sub.label(), sub.code());
    }
    println!();

    // Example 3: Postal code detection
    println!("--- Example 3: Postal code detection ---");
    for code in ["8001", "8400", "8910", "9999"] {
        match detect_sub_region_from_postal_code(code) {
            Some(sub) => println!("{code} -> {}", sub.label()),
            None => println!("{code} -> no sub-region"),
        }
    }
    println!();

    // Example 4: Toggle and match
    println!("--- Example 4: Selection and matching ---");
    let mut selection = SelectionState::new();
    selection.toggle_region(Region::Zurich);
    selection.toggle_canton(Canton::Zug);

    let job = JobLocationAttributes::in_canton(Canton::Zurich)
        .with_city("Winterthur")
        .with_sub_region(SubRegion::Winterthur);
    let matcher = LocationMatcher::default();
    println!("Zurich region state: {:?}", selection.region_state(Region::Zurich));
    println!("Central region state: {:?}", selection.region_state(Region::Central));
    println!("Job in Winterthur matches: {}", matcher.matches(&selection, &job));

    println!("\n=== Example completed successfully ===");
    Ok(())
}

//! Advanced filtering example for swissgeo-rs
//!
//! Shows the precedence rule across selection levels, the opt-in union
//! mode, and the remote predicate layered on top.

use swissgeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== SwissGeo-RS Advanced Filtering Example ===\n");

    let jobs = vec![
        (
            "Zürich city, on-site",
            JobLocationAttributes::in_canton(Canton::Zurich).with_sub_region(SubRegion::ZurichCity),
        ),
        (
            "St. Gallen, remote",
            JobLocationAttributes::in_canton(Canton::StGallen)
                .with_sub_region(SubRegion::StGallenAppenzell)
                .remote(true),
        ),
        (
            "Bern + Geneva",
            JobLocationAttributes::in_canton(Canton::Bern).with_location(
                AdditionalLocation::new(Canton::Geneva).with_sub_region(SubRegion::GenevaLausanne),
            ),
        ),
    ];

    let print_matches = |title: &str, selection: &SelectionState, filter: &JobFilter| {
        println!("--- {title} ---");
        for (name, job) in &jobs {
            if filter.matches(selection, job) {
                println!("- {name}");
            }
        }
        println!();
    };

    // Example 1: Region filter
    let mut selection = SelectionState::new();
    selection.toggle_region(Region::Zurich);
    print_matches("Example 1: Region Zürich", &selection, &JobFilter::default());

    // Example 2: Clear Zürich's sub-regions and pick one in Ostschweiz.
    // The region stays selected but sub-regions now decide.
    for &sub in sub_regions_of_region(Region::Zurich) {
        selection.toggle_sub_region(sub);
    }
    selection.toggle_sub_region(SubRegion::StGallenAppenzell);
    print_matches(
        "Example 2: + sub-region St. Gallen (strict precedence)",
        &selection,
        &JobFilter::default(),
    );

    // Example 3: The same selection in union mode
    let union = JobFilter {
        location: LocationMatcher::with_mode(MatchMode::Union),
        ..JobFilter::default()
    };
    print_matches("Example 3: Same selection, union mode", &selection, &union);

    // Example 4: Remote only, no location filter
    let remote = JobFilter {
        remote: RemoteFilter::RemoteOnly,
        ..JobFilter::default()
    };
    print_matches("Example 4: Remote only", &SelectionState::new(), &remote);

    // Example 5: Canton filter reaches additional locations
    let selection = SelectionState::new().toggled_canton(Canton::Geneva);
    print_matches("Example 5: Canton Geneva", &selection, &JobFilter::default());

    // Example 6: The tri-state tree a UI would render
    println!("--- Example 6: Tree for canton Vaud ---");
    let selection = SelectionState::new().toggled_canton(Canton::Vaud);
    for region in selection.tree() {
        if region.state != TriState::Unselected {
            println!("{} {:?}", region.label, region.state);
            for canton in region.cantons {
                println!("  {} {:?}", canton.label, canton.state);
            }
        }
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

use swissgeo_core::prelude::*;

#[test]
fn every_canton_round_trips_through_its_region() {
    for &canton in Canton::ALL {
        let region = region_of_canton(canton);
        assert!(
            cantons_of_region(region).contains(&canton),
            "{canton} points to {region} but {region} does not list it"
        );
    }
}

#[test]
fn regions_partition_the_cantons() {
    let mut listed: Vec<Canton> = Region::ALL
        .iter()
        .flat_map(|r| cantons_of_region(*r).iter().copied())
        .collect();
    listed.sort();
    let mut all = Canton::ALL.to_vec();
    all.sort();
    assert_eq!(listed, all, "every canton must be listed by exactly one region");

    for &region in Region::ALL {
        assert!(!cantons_of_region(region).is_empty(), "{region} has no cantons");
    }
}

#[test]
fn sub_regions_stay_inside_their_region() {
    for &sub in SubRegion::ALL {
        for &canton in sub.cantons() {
            assert_eq!(
                region_of_canton(canton),
                sub.region(),
                "{sub} lists {canton} from another region"
            );
        }
    }
}

#[test]
fn liechtenstein_is_attached_to_ostschweiz_by_policy() {
    let fl = Canton::Liechtenstein;
    assert!(fl.is_external());
    assert_eq!(region_of_canton(fl), Region::Ostschweiz);

    let attached: Vec<_> = sub_regions_of_canton(fl).iter().copied().collect();
    assert_eq!(attached, vec![SubRegion::RheintalLiechtenstein]);
    assert_eq!(SubRegion::RheintalLiechtenstein.region(), Region::Ostschweiz);
}

#[test]
fn sub_regions_of_canton_and_region_agree() {
    for &region in Region::ALL {
        let union: std::collections::BTreeSet<SubRegion> = cantons_of_region(region)
            .iter()
            .flat_map(|c| sub_regions_of_canton(*c).iter().copied())
            .collect();
        assert_eq!(&union, sub_regions_of_region(region), "{region}");
    }
}

#[test]
fn toggling_a_region_twice_restores_the_empty_state() {
    for &region in Region::ALL {
        let mut state = SelectionState::new();
        state.toggle_region(region);
        assert_eq!(state.region_state(region), TriState::Selected);
        assert!(state.regions().contains(&region));

        state.toggle_region(region);
        assert_eq!(state, SelectionState::new(), "{region}");
    }
}

#[test]
fn third_canton_completes_a_three_canton_region() {
    let region = Region::RegionLemanique;
    assert_eq!(cantons_of_region(region).len(), 3);

    let mut state = SelectionState::new();
    state.toggle_canton(Canton::Vaud);
    state.toggle_canton(Canton::Valais);
    assert_eq!(state.region_state(region), TriState::Partial);
    assert!(!state.regions().contains(&region));

    state.toggle_canton(Canton::Geneva);
    assert_eq!(state.region_state(region), TriState::Selected);
    assert!(state.regions().contains(&region));
}

#[test]
fn finest_non_empty_level_takes_precedence() {
    let job = JobLocationAttributes::in_canton(Canton::Zurich).with_sub_region(SubRegion::ZurichCity);
    let matcher = LocationMatcher::default();

    let regions_only: SelectionState =
        serde_json::from_str(r#"{"regions":["zurich"]}"#).unwrap();
    assert!(matcher.matches(&regions_only, &job));

    let with_unrelated_sub_region: SelectionState = serde_json::from_str(
        r#"{"regions":["zurich"],"sub_regions":["st_gallen_appenzell"]}"#,
    )
    .unwrap();
    assert!(!matcher.matches(&with_unrelated_sub_region, &job));
}

#[test]
fn precedence_also_applies_after_toggling() {
    let job = JobLocationAttributes::in_canton(Canton::Zurich).with_sub_region(SubRegion::ZurichCity);
    let matcher = LocationMatcher::default();

    let mut state = SelectionState::new();
    state.toggle_region(Region::Zurich);
    assert!(matcher.matches(&state, &job));

    // Deselect the region's own sub-regions, then pick one elsewhere.
    for &sub in sub_regions_of_region(Region::Zurich) {
        state.toggle_sub_region(sub);
    }
    state.toggle_sub_region(SubRegion::StGallenAppenzell);
    assert!(state.regions().contains(&Region::Zurich));
    assert!(!matcher.matches(&state, &job));
}

#[test]
fn postal_code_detection() {
    assert_eq!(
        detect_sub_region_from_postal_code("8001"),
        Some(SubRegion::ZurichCity)
    );
    assert_eq!(detect_sub_region_from_postal_code("9999"), None);
    assert_eq!(detect_sub_region_from_postal_code("801"), None);
    assert_eq!(detect_sub_region_from_postal_code("08001"), None);
}

#[test]
fn empty_selection_passes_everything_through() {
    let jobs = vec![
        JobLocationAttributes::default(),
        JobLocationAttributes::in_canton(Canton::Jura),
        JobLocationAttributes::in_canton(Canton::Liechtenstein).remote(true),
        JobLocationAttributes::in_canton(Canton::Zurich)
            .with_sub_region(SubRegion::Weinland)
            .with_location(AdditionalLocation::new(Canton::Geneva)),
    ];
    let state = SelectionState::new();
    for mode in [MatchMode::StrictPrecedence, MatchMode::Union] {
        let matcher = LocationMatcher::with_mode(mode);
        assert_eq!(matcher.filter(&state, &jobs).count(), jobs.len());
    }
}

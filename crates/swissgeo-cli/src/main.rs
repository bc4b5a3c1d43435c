//! swissgeo: command-line interface for swissgeo-core
//!
//! Inspect the region → canton → sub-region tables, detect sub-regions from
//! postal codes, and run the location filter over a file of job records.
//!
//! Usage examples
//! --------------
//!
//! - Show table statistics
//!   $ swissgeo stats
//!
//! - Show a canton with its region and sub-regions
//!   $ swissgeo canton sg
//!
//! - Detect a sub-region
//!   $ swissgeo detect 8001
//!
//! - Render the selection tree after some toggles
//!   $ swissgeo tree --select region:zurich --select canton:GE
//!
//! - Filter job records
//!   $ swissgeo filter --jobs jobs.json --select region:ostschweiz --remote only
//!
//! Toggles are applied in the order given, exactly as a user clicking
//! through the filter UI would.
mod args;
mod telemetry;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use swissgeo_core::hierarchy;
use swissgeo_core::loader::load_jobs_from_path;
use swissgeo_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    telemetry::init(&args.log_level)?;

    match args.command {
        Commands::Stats => {
            let stats = hierarchy::stats();
            println!("Hierarchy statistics:");
            println!("  Regions: {}", stats.regions);
            println!("  Cantons: {}", stats.cantons);
            println!("  Sub-regions: {}", stats.sub_regions);
            println!("  Postal codes: {}", stats.postal_codes);
        }

        Commands::Regions => {
            for &region in Region::ALL {
                let codes: Vec<&str> = region.cantons().iter().map(|c| c.code()).collect();
                println!("{} ({}): {}", region.label(), region.code(), codes.join(", "));
            }
        }

        Commands::Cantons => {
            for &canton in Canton::ALL {
                println!("{} ({}) — {}", canton.label(), canton.code(), canton.region().label());
            }
        }

        Commands::Canton { code } => {
            let canton: Canton = code.parse()?;
            println!("Canton: {}", canton.label());
            println!("Code: {}", canton.code());
            println!("Region: {} ({})", canton.region().label(), canton.region().code());
            if canton.is_external() {
                println!("External: yes");
            }
            let subs: Vec<&str> = canton.sub_regions().iter().map(|s| s.code()).collect();
            if subs.is_empty() {
                println!("Sub-regions: none defined");
            } else {
                println!("Sub-regions: {}", subs.join(", "));
            }
        }

        Commands::SubRegions { canton } => {
            let subs: Vec<SubRegion> = match canton {
                Some(code) => {
                    let canton: Canton = code.parse()?;
                    canton.sub_regions().iter().copied().collect()
                }
                None => SubRegion::ALL.to_vec(),
            };
            for sub in subs {
                let cantons: Vec<&str> = sub.cantons().iter().map(|c| c.code()).collect();
                println!(
                    "{} ({}) — {} [{}]",
                    sub.label(),
                    sub.code(),
                    sub.region().label(),
                    cantons.join(", ")
                );
            }
        }

        Commands::Detect { postal_code } => match detect_sub_region_from_postal_code(&postal_code) {
            Some(sub) => println!("{postal_code} -> {} ({})", sub.code(), sub.label()),
            None => println!("No sub-region found for postal code: {postal_code}"),
        },

        Commands::Tree { select } => {
            let state = selection_from(&select)?;
            for region in state.tree() {
                println!("{} {} ({})", marker(region.state), region.label, region.region);
                for canton in region.cantons {
                    println!("  {} {} ({})", marker(canton.state), canton.label, canton.canton);
                    for sub in canton.sub_regions {
                        let m = if sub.selected { "[x]" } else { "[ ]" };
                        println!("    {m} {} ({})", sub.label, sub.sub_region);
                    }
                }
            }
        }

        Commands::Filter {
            jobs,
            select,
            mode,
            remote,
            no_detect,
        } => {
            let opts = IngestOptions {
                detect_sub_region_from_postcode: !no_detect,
            };
            let jobs = load_jobs_from_path(&jobs, &opts)
                .with_context(|| format!("loading job records from {}", jobs.display()))?;
            tracing::debug!(jobs = jobs.len(), "job records loaded");
            let state = selection_from(&select)?;
            let filter = JobFilter {
                location: LocationMatcher::with_mode(mode.into()),
                remote: remote.into(),
            };

            let matched: Vec<&ClassifiedJob> = jobs
                .iter()
                .filter(|job| filter.matches(&state, &job.location))
                .collect();
            for job in &matched {
                match &job.title {
                    Some(title) => println!("{} — {}", job.id, title),
                    None => println!("{}", job.id),
                }
            }
            println!("Matched {} of {} jobs", matched.len(), jobs.len());
        }
    }

    Ok(())
}

fn selection_from(toggles: &[String]) -> anyhow::Result<SelectionState> {
    let mut state = SelectionState::new();
    for raw in toggles {
        let toggle: Toggle = raw
            .parse()
            .with_context(|| format!("invalid selection '{raw}'"))?;
        state.apply(toggle);
    }
    Ok(state)
}

fn marker(state: TriState) -> &'static str {
    match state {
        TriState::Selected => "[x]",
        TriState::Partial => "[~]",
        TriState::Unselected => "[ ]",
    }
}

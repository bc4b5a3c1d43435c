//! Error handling example for swissgeo-rs
//!
//! Codes are validated where external data enters; postal-code detection
//! misses are ordinary `None` values.

use swissgeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== SwissGeo-RS Error Handling Example ===\n");

    // Example 1: Unknown canton codes
    println!("--- Example 1: Parsing canton codes ---");
    for code in ["ZH", "ge", " fl ", "XX", "", "ZÜ"] {
        match code.parse::<Canton>() {
            Ok(canton) => println!("  {code:?} -> {} ({})", canton.label(), canton.code()),
            Err(e) => println!("  {code:?} -> {e}"),
        }
    }
    println!();

    // Example 2: Rejecting a stored job record
    println!("--- Example 2: Ingesting job records ---");
    let records = [
        r#"{ "primary_canton_code": "BE", "additional_locations": [{ "canton_code": "ZH", "postcode": "8810" }] }"#,
        r#"{ "primary_canton_code": "ZH", "primary_sub_region": "zurich_downtown" }"#,
    ];
    for json in records {
        let raw: JobLocationRaw = serde_json::from_str(json)?;
        match JobLocationAttributes::try_from(raw) {
            Ok(job) => println!(
                "  ok: cantons {:?}, sub-regions {:?}",
                job.cantons().collect::<Vec<_>>(),
                job.sub_regions().collect::<Vec<_>>()
            ),
            Err(e) => println!("  rejected: {e}"),
        }
    }
    println!();

    // Example 3: Detection misses are not errors
    println!("--- Example 3: Postal codes outside the mapped tables ---");
    for code in ["1950", "8001 ", "08001"] {
        match detect_sub_region_from_postal_code(code) {
            Some(sub) => println!("  {code:?} -> {}", sub.code()),
            None => println!("  {code:?} -> none"),
        }
    }
    println!();

    // Example 4: Table consistency check
    println!("--- Example 4: Validating the tables ---");
    match swissgeo_rs::hierarchy::validate() {
        Ok(()) => println!("  tables are consistent"),
        Err(e) => {
            eprintln!("  {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

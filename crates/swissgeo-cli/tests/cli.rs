use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("swissgeo").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn stats_lists_counts() {
    cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Regions: 7"))
        .stdout(contains("Cantons: 27"))
        .stdout(contains("Sub-regions: 20"));
}

#[test]
fn canton_lookup_is_case_insensitive() {
    cmd()
        .args(["canton", "sg"])
        .assert()
        .success()
        .stdout(contains("Canton: St. Gallen"))
        .stdout(contains("Region: Ostschweiz (ostschweiz)"))
        .stdout(contains("st_gallen_appenzell, rheintal_liechtenstein"));
}

#[test]
fn canton_without_sub_regions() {
    cmd()
        .args(["canton", "JU"])
        .assert()
        .success()
        .stdout(contains("Sub-regions: none defined"));
}

#[test]
fn unknown_canton_fails() {
    cmd()
        .args(["canton", "XX"])
        .assert()
        .failure()
        .stderr(contains("unknown canton code"));
}

#[test]
fn detect_hits_and_misses() {
    cmd()
        .args(["detect", "8001"])
        .assert()
        .success()
        .stdout(contains("8001 -> zurich_city (Stadt Zürich)"));

    cmd()
        .args(["detect", "9999"])
        .assert()
        .success()
        .stdout(contains("No sub-region found for postal code: 9999"));
}

#[test]
fn sub_regions_of_one_canton() {
    cmd()
        .args(["sub-regions", "--canton", "AG"])
        .assert()
        .success()
        .stdout(contains("aargau_solothurn"))
        .stdout(contains("[AG, SO]"))
        .stdout(contains("zurich_city").not());
}

#[test]
fn tree_marks_partial_regions() {
    cmd()
        .args(["tree", "--select", "canton:VD"])
        .assert()
        .success()
        .stdout(contains("[~] Genferseeregion (region_lemanique)"))
        .stdout(contains("  [x] Waadt (VD)"))
        .stdout(contains("[ ] Zürich (zurich)"));
}

#[test]
fn filter_by_region() {
    cmd()
        .args(["filter", "--jobs", &fixture("jobs.json"), "--select", "region:zurich"])
        .assert()
        .success()
        .stdout(contains("job-zh-1 — Platform Engineer"))
        .stdout(contains("job-multi-1"))
        .stdout(contains("job-sg-1").not())
        .stdout(contains("Matched 2 of 4 jobs"));
}

#[test]
fn filter_sub_region_takes_precedence() {
    cmd()
        .args([
            "filter",
            "--jobs",
            &fixture("jobs.json"),
            "--select",
            "region:zurich",
            "--select",
            "sub-region:zurich_city",
            "--select",
            "sub-region:st_gallen_appenzell",
        ])
        .assert()
        .success()
        // zurich_city was already selected by the region toggle, so the
        // second toggle removes it again.
        .stdout(contains("job-sg-1"))
        .stdout(contains("job-multi-1"))
        .stdout(contains("job-zh-1").not())
        .stdout(contains("Matched 2 of 4 jobs"));
}

#[test]
fn filter_without_detection_drops_inferred_sub_region() {
    cmd()
        .args([
            "filter",
            "--jobs",
            &fixture("jobs.json"),
            "--select",
            "sub-region:limmattal",
            "--no-detect",
        ])
        .assert()
        .success()
        .stdout(contains("Matched 0 of 4 jobs"));

    cmd()
        .args(["filter", "--jobs", &fixture("jobs.json"), "--select", "sub-region:limmattal"])
        .assert()
        .success()
        .stdout(contains("job-multi-1"))
        .stdout(contains("Matched 1 of 4 jobs"));
}

#[test]
fn filter_remote_only_without_selection() {
    cmd()
        .args(["filter", "--jobs", &fixture("jobs.json"), "--remote", "only"])
        .assert()
        .success()
        .stdout(contains("job-zh-1"))
        .stdout(contains("job-ti-1"))
        .stdout(contains("Matched 2 of 4 jobs"));
}

#[test]
fn filter_union_mode() {
    cmd()
        .args([
            "filter",
            "--jobs",
            &fixture("jobs.json"),
            "--select",
            "canton:TI",
            "--select",
            "sub-region:st_gallen_appenzell",
            "--mode",
            "union",
        ])
        .assert()
        .success()
        .stdout(contains("job-ti-1"))
        .stdout(contains("job-sg-1"))
        .stdout(contains("Matched 2 of 4 jobs"));
}

#[test]
fn filter_rejects_bad_records() {
    cmd()
        .args(["filter", "--jobs", &fixture("bad_jobs.json")])
        .assert()
        .failure()
        .stderr(contains("unknown canton code"));
}

#[test]
fn filter_rejects_bad_selection() {
    cmd()
        .args(["filter", "--jobs", &fixture("jobs.json"), "--select", "district:zh"])
        .assert()
        .failure()
        .stderr(contains("invalid selection 'district:zh'"));
}

#[test]
fn debug_log_level_reports_loaded_jobs() {
    cmd()
        .args(["--log-level", "debug", "filter", "--jobs", &fixture("jobs.json")])
        .assert()
        .success()
        .stderr(contains("job records loaded"))
        .stdout(contains("Matched 4 of 4 jobs"));
}

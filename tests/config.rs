use orbit_cockpit::config::{parse_megabytes, split_list, Config, SheetSource};
use orbit_cockpit::pipeline::fetch::cache_busted;
use std::path::PathBuf;

#[test]
fn sheet_source_is_picked_by_scheme() {
    assert_eq!(
        SheetSource::from_location("https://docs.example.com/pub?output=csv"),
        SheetSource::Http("https://docs.example.com/pub?output=csv".to_string())
    );
    assert_eq!(
        SheetSource::from_location(" data/log.csv "),
        SheetSource::File(PathBuf::from("data/log.csv"))
    );
    assert_eq!(SheetSource::from_location("http://x").kind(), "http");
}

#[test]
fn cache_buster_respects_existing_query() {
    assert_eq!(
        cache_busted("https://x/pub?output=csv", 42),
        "https://x/pub?output=csv&t=42"
    );
    assert_eq!(cache_busted("https://x/pub", 7), "https://x/pub?t=7");
}

#[test]
fn lists_drop_blank_items() {
    assert_eq!(split_list("Treadmill, Bike ,,"), vec!["Treadmill", "Bike"]);
    assert!(split_list(" , ").is_empty());
}

#[test]
fn sheet_size_limit_rejects_overflow() {
    assert_eq!(parse_megabytes("5").expect("limit"), 5 * 1024 * 1024);
    assert_eq!(parse_megabytes(" 0 ").expect("limit"), 0);
    assert!(parse_megabytes(&usize::MAX.to_string()).is_err());
    assert!(parse_megabytes("ten").is_err());
}

#[test]
fn static_bundle_is_opt_in() {
    assert!(Config::default().static_dir.is_none());
}

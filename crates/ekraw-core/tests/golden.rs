use std::fs;
use std::path::Path;

use ekraw_core::{RawSummary, inspect_raw_file};

fn load_expected_summary(dir: &str) -> RawSummary {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let expected_path = root.join(dir).join("expected_summary.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_summary.json");
    serde_json::from_str(&expected_json).expect("parse expected summary")
}

fn run_golden(dir: &str) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join("input.raw");
    let expected = load_expected_summary(dir);

    let mut actual = inspect_raw_file(&input).expect("inspect raw file");
    actual.input.path = expected.input.path.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_single() {
    run_golden("tests/golden/single");
}

#[test]
fn golden_survey() {
    run_golden("tests/golden/survey");
}

#[test]
fn golden_single_header_only() {
    let summary = load_expected_summary("tests/golden/single");
    let header = summary.header.expect("header present");
    assert_eq!(header.datagram_type, "CON0");
    assert_eq!(header.transceiver_count, 1);
    assert_eq!(header.header_length, 848);
    assert_eq!(summary.datagrams.total, 1);
    assert!(summary.channels.is_empty());
    assert!(summary.time_start.is_none());
    // With no pings, generated_at falls back to the header timestamp.
    assert_eq!(summary.generated_at, header.timestamp_text);
}

#[test]
fn golden_survey_channel_stats() {
    let summary = load_expected_summary("tests/golden/survey");
    assert_eq!(summary.datagrams.sample, 4);
    assert_eq!(summary.datagrams.nmea, 1);
    assert_eq!(summary.datagrams.unknown, 1);
    assert_eq!(summary.channels.len(), 2);
    assert_eq!(summary.channels[0].channel, 1);
    assert_eq!(summary.channels[0].pings, 2);
    assert_eq!(summary.channels[0].samples_total, 8);
    assert_eq!(summary.channels[0].frequency, Some(38000.0));
    assert_eq!(summary.channels[1].channel, 2);
    assert_eq!(summary.channels[1].samples_total, 8);
    assert_eq!(summary.channels[1].frequency, Some(120000.0));
    // generated_at tracks the last ping so reruns stay byte-identical.
    assert_eq!(summary.generated_at, summary.time_end.clone().unwrap());
}

//! Fixture tests.
//!
//! Runs the examples in tests/fixtures.json against `to_html`.

use lecturemark::to_html;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct Fixture {
    markdown: String,
    html: String,
    example: u32,
    section: String,
}

fn load_fixtures() -> Vec<Fixture> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures.json");
    let json = fs::read_to_string(path).expect("Failed to read tests/fixtures.json");
    serde_json::from_str(&json).expect("Failed to parse fixtures.json")
}

fn run_section(section_name: &str) {
    let fixtures = load_fixtures();
    let mut ran = 0;

    for fixture in fixtures.iter().filter(|f| f.section == section_name) {
        let output = to_html(&fixture.markdown);
        assert_eq!(
            output, fixture.html,
            "Example {} ({}): {:?}",
            fixture.example, fixture.section, fixture.markdown
        );
        ran += 1;
    }

    assert!(ran > 0, "no fixtures in section {section_name}");
}

#[test]
fn fixtures_parse() {
    let fixtures = load_fixtures();
    assert!(!fixtures.is_empty());
    let mut examples: Vec<u32> = fixtures.iter().map(|f| f.example).collect();
    examples.sort_unstable();
    examples.dedup();
    assert_eq!(examples.len(), fixtures.len(), "example numbers must be unique");
}

#[test]
fn fixture_headings() {
    run_section("Headings");
}

#[test]
fn fixture_rules() {
    run_section("Rules");
}

#[test]
fn fixture_lists() {
    run_section("Lists");
}

#[test]
fn fixture_emphasis() {
    run_section("Emphasis");
}

#[test]
fn fixture_escapes() {
    run_section("Escapes");
}

//! Golden file tests for quantity formatting.
//!
//! Each JSON file in `fixtures/formatting/` is one case:
//! ```json
//! { "value": 0.75, "as_fraction": true, "expected": "3/4" }
//! ```

use cookscale_core::format_quantity;
use glob::glob;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    value: f64,
    as_fraction: bool,
    expected: String,
}

fn load_test_cases() -> Vec<(String, TestCase)> {
    let pattern =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/formatting/*.json");
    let pattern_str = pattern.to_string_lossy();

    let mut cases = Vec::new();
    for entry in glob(&pattern_str).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    // Sort by name for deterministic ordering
    cases.sort_by(|a, b| a.0.cmp(&b.0));
    cases
}

#[test]
fn test_formatting_golden_files() {
    let cases = load_test_cases();
    assert!(!cases.is_empty(), "No formatting fixtures found");

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|(name, case)| {
            let actual = format_quantity(case.value, case.as_fraction);
            (actual != case.expected).then(|| {
                format!(
                    "=== {} ===\nInput: {} (as_fraction: {})\nExpected: {:?}\nActual:   {:?}",
                    name, case.value, case.as_fraction, case.expected, actual
                )
            })
        })
        .collect();

    if !failures.is_empty() {
        panic!(
            "\n{} failures across {} tests:\n\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n\n")
        );
    }
}

#[test]
fn test_decimal_output_never_ends_in_zero() {
    let quantities = [0.1, 0.25, 0.5, 1.0, 1.5, 2.0, 3.3, 7.0, 12.5, 100.0];
    let scales = [0.1, 0.33, 0.5, 0.99, 1.0, 1.01, 2.0, 2.5, 9.75];

    for q in quantities {
        for s in scales {
            let shown = cookscale_core::scale_quantity(&q.to_string(), s, false);
            assert!(!shown.ends_with(".0"), "{} x {} -> {}", q, s, shown);

            let expected = ((q * s) * 10.0).round() / 10.0;
            let parsed: f64 = shown.parse().unwrap();
            assert!(
                (parsed - expected).abs() < 1e-9,
                "{} x {} -> {} (expected {})",
                q,
                s,
                shown,
                expected
            );
        }
    }
}

use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::config::Config;
use crate::report::{self, ListingReport};
use crate::types::CheckResult;

static TEST_REGISTRATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"testFramework\.test\('([^']+)'").expect("invalid regex"));

static TEST_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"test\s*\([^)]+\)").expect("invalid regex"));

/// Extract registered regression test names in source order.
///
/// Only single-quoted registrations are recognized, e.g.
/// `testFramework.test('Export works', () => { ... })`.
pub fn extract_tests(content: &str) -> Vec<String> {
    TEST_REGISTRATION
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Check that the in-page test framework pieces are present.
pub fn framework_components(content: &str) -> Vec<CheckResult> {
    let checks = [
        ("TestFramework class", content.contains("class TestFramework")),
        ("runAll() method", content.contains("runAll()")),
        ("test() method", TEST_CALL.is_match(content)),
        ("Run Tests button", content.contains("runTestsBtn")),
    ];

    checks
        .into_iter()
        .map(|(name, found)| {
            log::debug!("component {name}: {}", if found { "found" } else { "missing" });
            let detail = if found { "Found" } else { "Not found" };
            CheckResult::new(name, found, detail)
        })
        .collect()
}

/// List registered tests and framework components.
///
/// Returns false when the file registers no tests at all.
pub fn run_list(content: &str, file: &Path, cfg: &Config, json: bool) -> Result<bool> {
    let tests = extract_tests(content);
    log::debug!("Extracted {} test registrations", tests.len());
    let report = ListingReport::new(
        file,
        tests,
        cfg.expectations.expected_tests,
        framework_components(content),
    );
    let found = !report.tests.is_empty();

    if json {
        report::print_json(&report)?;
    } else if found {
        report::print_listing(&report, cfg);
    } else {
        report::print_no_tests();
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tests_in_order() {
        let html = r#"
            testFramework.test('All Manager Classes Initialize', () => {});
            testFramework.test('Export Functionality Available', async () => {});
        "#;
        assert_eq!(
            extract_tests(html),
            vec!["All Manager Classes Initialize", "Export Functionality Available"]
        );
    }

    #[test]
    fn test_extract_tests_ignores_double_quotes() {
        let html = r#"testFramework.test("Double quoted", () => {});"#;
        assert!(extract_tests(html).is_empty());
    }

    #[test]
    fn test_extract_tests_keeps_duplicates() {
        let html = "testFramework.test('Same', f); testFramework.test('Same', g);";
        assert_eq!(extract_tests(html).len(), 2);
    }

    #[test]
    fn test_extract_tests_empty_name_not_matched() {
        assert!(extract_tests("testFramework.test('', f)").is_empty());
    }

    #[test]
    fn test_framework_components_all_present() {
        let html = r#"
            class TestFramework { test(name, fn) {} runAll() {} }
            <button id="runTestsBtn">Run Tests</button>
        "#;
        let results = framework_components(html);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn test_framework_components_always_four() {
        let results = framework_components("");
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| !r.passed));
        assert_eq!(results[0].name, "TestFramework class");
        assert_eq!(results[3].name, "Run Tests button");
    }

    #[test]
    fn test_test_method_requires_arguments() {
        let results = framework_components("test()");
        assert!(!results[2].passed);
        let results = framework_components("test ('x')");
        assert!(results[2].passed);
    }
}

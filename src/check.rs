use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::config::{Config, Expectations};
use crate::report::{self, VerificationReport};
use crate::types::CheckResult;

const MANAGERS: &[&str] = &[
    "StateManager",
    "TabNavigator",
    "DataManager",
    "SummaryGenerator",
    "ViewModeManager",
];

static TECHNIQUE_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"total_techniques["']?\s*:\s*([0-9]+)"#).expect("invalid regex")
});

/// A named condition evaluated against the application text.
struct Condition {
    title: fn(&Expectations) -> String,
    eval: fn(&str, &Expectations) -> (bool, String),
}

const CONDITIONS: &[Condition] = &[
    Condition {
        title: |_| "All Manager Classes Initialize".to_string(),
        eval: managers_initialize,
    },
    Condition {
        title: |exp| format!("Technique Library Loads ({} techniques)", exp.total_techniques),
        eval: technique_library,
    },
    Condition {
        title: |_| "Discovery Questions Defined".to_string(),
        eval: discovery_phases,
    },
    Condition {
        title: |_| "TechniqueRecommender Class Works".to_string(),
        eval: |html, _| {
            presence(
                html.contains("class TechniqueRecommender"),
                "TechniqueRecommender class found",
                "Class not found",
            )
        },
    },
    Condition {
        title: |_| "State Manager Initializes Questions".to_string(),
        eval: |html, _| {
            presence(
                html.contains("StateManager") && html.contains("questions"),
                "StateManager and questions structure found",
                "Not found",
            )
        },
    },
    Condition {
        title: |_| "Export Functionality Available".to_string(),
        eval: |html, _| {
            presence(html.contains("exportToJSON"), "exportToJSON method found", "Method not found")
        },
    },
    Condition {
        title: |_| "Import Functionality Available".to_string(),
        eval: |html, _| {
            presence(html.contains("importFromJSON"), "importFromJSON method found", "Method not found")
        },
    },
    Condition {
        title: |_| "Tab Navigation Works".to_string(),
        eval: |html, _| {
            presence(
                html.contains("switchTab") || html.contains("TabNavigator"),
                "Tab navigation methods found",
                "Methods not found",
            )
        },
    },
    Condition {
        title: |_| "Summary Generator Works".to_string(),
        eval: |html, _| {
            presence(
                html.contains("generateSummary") && html.contains("extractKeyFindings"),
                "Summary generation methods found",
                "Methods not found",
            )
        },
    },
    Condition {
        title: |_| "View Mode Manager Works".to_string(),
        eval: |html, _| {
            presence(
                html.contains("ViewModeManager") && (html.contains("setMode") || html.contains("getMode")),
                "ViewModeManager with mode methods found",
                "Not found",
            )
        },
    },
];

/// Evaluate every verification condition against the application text, in order.
pub fn verify_conditions(html: &str, expectations: &Expectations) -> Vec<CheckResult> {
    CONDITIONS
        .iter()
        .map(|cond| {
            let name = (cond.title)(expectations);
            let (passed, detail) = (cond.eval)(html, expectations);
            log::debug!("{name}: {} ({detail})", if passed { "pass" } else { "fail" });
            CheckResult { name, passed, detail }
        })
        .collect()
}

/// Run the verification conditions and report them.
///
/// Returns whether every condition passed. Failed conditions are reported,
/// never turned into errors.
pub fn run_verify(html: &str, file: &Path, cfg: &Config, json: bool, junit: Option<&Path>) -> Result<bool> {
    let results = verify_conditions(html, &cfg.expectations);
    let report = VerificationReport::new(file, results);

    if json {
        report::print_json(&report)?;
    } else {
        report::print_verification(&report, &cfg.target.app_url);
    }
    if let Some(path) = junit {
        report::write_junit(&report, path)?;
    }

    Ok(report.all_passed())
}

fn presence(found: bool, found_detail: &str, missing_detail: &str) -> (bool, String) {
    let detail = if found { found_detail } else { missing_detail };
    (found, detail.to_string())
}

/// `StateManager` is declared either as `class StateManager` or as the
/// instance `const stateManager`.
fn manager_declared(html: &str, manager: &str) -> bool {
    let mut chars = manager.chars();
    let instance = match chars.next() {
        Some(first) => format!("{}{}", first.to_lowercase(), chars.as_str()),
        None => return false,
    };
    html.contains(&format!("class {manager}")) || html.contains(&format!("const {instance}"))
}

fn managers_initialize(html: &str, exp: &Expectations) -> (bool, String) {
    let found: Vec<&str> = MANAGERS
        .iter()
        .copied()
        .filter(|m| manager_declared(html, m))
        .collect();
    let detail = format!(
        "Found {}/{} manager classes: {}",
        found.len(),
        MANAGERS.len(),
        found.join(", ")
    );
    (found.len() >= exp.min_managers, detail)
}

/// Digits of the first `total_techniques: N` declaration, as written.
fn technique_digits(html: &str) -> Option<&str> {
    TECHNIQUE_COUNT
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A missing declaration counts as 0. A number too large for `u64` is reported
/// verbatim and never matches.
fn technique_library(html: &str, exp: &Expectations) -> (bool, String) {
    let digits = technique_digits(html).unwrap_or("0");
    (
        digits.parse::<u64>().ok() == Some(exp.total_techniques),
        format!("Found total_techniques: {digits}"),
    )
}

fn discovery_phases(html: &str, exp: &Expectations) -> (bool, String) {
    let found = (1..=exp.phases)
        .filter(|phase| html.contains(&format!("phase{phase}")))
        .count();
    (
        found == exp.phases,
        format!("Found {}/{} phases defined", found, exp.phases),
    )
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Where the inspected application lives and where it is served for manual runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub path: PathBuf,
    /// URL printed in the "how to run" guidance for the in-browser runner.
    pub app_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            path: PathBuf::from("index.html"),
            app_url: "http://localhost:8888/index.html".to_string(),
        }
    }
}

/// Constants the verification conditions compare against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Expectations {
    pub total_techniques: u64,
    pub min_managers: usize,
    pub phases: usize,
    /// Discovery question count quoted in the listing guide.
    pub questions: usize,
    /// Number of regression tests the application is expected to register.
    pub expected_tests: usize,
}

impl Default for Expectations {
    fn default() -> Self {
        Expectations {
            total_techniques: 50,
            min_managers: 4,
            phases: 5,
            questions: 21,
            expected_tests: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub target: TargetConfig,
    pub expectations: Expectations,
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

/// Resolve the effective configuration.
///
/// An explicit path must load. The default path is optional: when it does not
/// exist the built-in defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            load_config(path)
        }
        None => {
            let path = default_config_path();
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                load_config(&path)
            } else {
                log::debug!("No {} found, using defaults", path.display());
                Ok(Config::default())
            }
        }
    }
}

/// Returns the default path to `lea-verify.toml` relative to the current directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("lea-verify.toml")
}

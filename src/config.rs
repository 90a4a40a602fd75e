//! Configuration loading for Workpulse

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".workpulserc.json";

/// Organization-level settings for the dashboard and report headers.
/// Every field has a default, so a missing config file is not an error.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Organization name shown in report headers
    #[serde(default = "default_org_name")]
    pub org_name: String,

    /// Filename prefix for exported reports
    #[serde(default = "default_report_prefix")]
    pub report_prefix: String,

    /// Fiscal-year label appended to headers and filenames
    #[serde(default = "default_fiscal_year")]
    pub fiscal_year: String,

    /// Directory exports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_org_name() -> String {
    "Health Shared Services".to_string()
}

fn default_report_prefix() -> String {
    "HSS".to_string()
}

fn default_fiscal_year() -> String {
    "FY2026".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            org_name: default_org_name(),
            report_prefix: default_report_prefix(),
            fiscal_year: default_fiscal_year(),
            output_dir: default_output_dir(),
        }
    }
}

/// Find and load the config file. Searches current directory then parents;
/// no file means defaults.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Search for .workpulserc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

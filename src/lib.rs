//! Workpulse: executive workforce analytics and report builder
//!
//! This library generates workforce KPI briefings from a static metric
//! registry, assembles selected content modules into an ordered document,
//! and exports the result as PDF, Word-compatible HTML, or a console view.

pub mod auth;
pub mod config;
pub mod insights;
pub mod registry;
pub mod report;
pub mod sample;
pub mod session;
pub mod store;

use serde::{Deserialize, Serialize};

/// Visual theme grouping for dashboard tiles (compensation / workforce / talent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Orange,
    Green,
    Purple,
}

impl Theme {
    /// Section heading used when grouping modules in the builder
    pub fn group_label(&self) -> &'static str {
        match self {
            Theme::Orange => "Compensation",
            Theme::Green => "Workforce",
            Theme::Purple => "Talent",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Orange => write!(f, "orange"),
            Theme::Green => write!(f, "green"),
            Theme::Purple => write!(f, "purple"),
        }
    }
}

/// A trackable HR metric shown as a dashboard tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    /// Unique metric identifier (e.g. "overtime")
    pub id: &'static str,
    /// Display title (e.g. "Overtime")
    pub title: &'static str,
    /// Tile theme
    pub theme: Theme,
    /// Icon reference name
    pub icon: &'static str,
}

/// Health status attached to a KPI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Good,
    Warning,
    Critical,
}

impl std::fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KpiStatus::Good => write!(f, "good"),
            KpiStatus::Warning => write!(f, "warning"),
            KpiStatus::Critical => write!(f, "critical"),
        }
    }
}

/// A single headline figure in a report section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub label: String,
    pub value: String,
    /// Period-over-period delta (e.g. "+3.2%")
    pub change: String,
    pub status: KpiStatus,
}

/// One point in a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

/// One row of a current/previous comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub label: String,
    pub current: String,
    pub previous: String,
    pub change: String,
}

/// Registered narrative and data content for one report module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModuleContent {
    pub summary: String,
    pub key_factors: Vec<String>,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpis: Option<Vec<Kpi>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_series: Option<Vec<ChartPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_rows: Option<Vec<TableRow>>,
}

/// An ordered section of an assembled report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub module_id: String,
    pub title: String,
    pub content: ReportModuleContent,
}

/// The assembled document: header metadata plus ordered sections.
/// Derived from a ReportConfiguration and the registry; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledDocument {
    pub org_name: String,
    pub recipient: String,
    pub time_range: String,
    pub fiscal_year: String,
    pub generated_at: String,
    pub sections: Vec<ReportSection>,
}

impl AssembledDocument {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Filename-safe base name for exports: `<Prefix>_Report_<TimeRange>_<FiscalYear>`
pub fn export_basename(prefix: &str, time_range: &str, fiscal_year: &str) -> String {
    format!(
        "{}_Report_{}_{}",
        prefix,
        time_range.replace(' ', "_"),
        fiscal_year
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_basename_replaces_spaces_in_time_range() {
        assert_eq!(
            export_basename("HSS", "Last Month", "FY2026"),
            "HSS_Report_Last_Month_FY2026"
        );
    }

    #[test]
    fn export_basename_keeps_simple_range_verbatim() {
        let name = export_basename("HSS", "YTD", "FY2026");
        assert_eq!(name, "HSS_Report_YTD_FY2026");
        assert!(name.contains("YTD"));
    }

    #[test]
    fn kpi_status_serializes_lowercase() {
        let json = serde_json::to_string(&KpiStatus::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}

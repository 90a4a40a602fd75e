//! Report builder: configuration, quick templates, and document assembly

pub mod pdf;
pub mod pipeline;
pub mod preview;
pub mod word;

use crate::registry::{all_module_ids, module_content, module_title, EXECUTIVE_SUMMARY_ID};
use crate::{AssembledDocument, ReportSection};

/// Minimal HTML entity escaping for text nodes and attribute values
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Fixed quick-template presets. Each is a literal module-id list that
/// replaces the current selection wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickTemplate {
    MonthlyOps,
    QuarterlyReview,
    Recruitment,
    FullBrief,
}

impl QuickTemplate {
    pub fn label(&self) -> &'static str {
        match self {
            QuickTemplate::MonthlyOps => "Monthly Ops",
            QuickTemplate::QuarterlyReview => "Quarterly Review",
            QuickTemplate::Recruitment => "Recruitment",
            QuickTemplate::FullBrief => "Full Brief",
        }
    }

    /// The preset's module ids, in render order
    pub fn module_ids(&self) -> Vec<&'static str> {
        match self {
            QuickTemplate::MonthlyOps => vec![
                EXECUTIVE_SUMMARY_ID,
                "overtime",
                "sick-hours",
                "paid-hours",
                "worked-hours",
            ],
            QuickTemplate::QuarterlyReview => vec![
                EXECUTIVE_SUMMARY_ID,
                "workforce",
                "terminations",
                "new-hires",
                "vacancy",
                "recruitment",
            ],
            QuickTemplate::Recruitment => vec![
                EXECUTIVE_SUMMARY_ID,
                "vacancy",
                "new-hires",
                "recruitment",
                "internal-transfers",
            ],
            QuickTemplate::FullBrief => all_module_ids(),
        }
    }
}

impl std::str::FromStr for QuickTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly-ops" => Ok(QuickTemplate::MonthlyOps),
            "quarterly-review" => Ok(QuickTemplate::QuarterlyReview),
            "recruitment" => Ok(QuickTemplate::Recruitment),
            "full-brief" => Ok(QuickTemplate::FullBrief),
            other => Err(format!(
                "unknown template '{}' (expected monthly-ops, quarterly-review, recruitment, or full-brief)",
                other
            )),
        }
    }
}

/// Builder-side report configuration. Created when the builder opens and
/// discarded on reset; selection keeps insertion order and set semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfiguration {
    selected: Vec<String>,
    pub time_range: String,
    pub recipient: String,
}

impl Default for ReportConfiguration {
    fn default() -> Self {
        Self {
            selected: vec![
                EXECUTIVE_SUMMARY_ID.to_string(),
                "overtime".to_string(),
                "workforce".to_string(),
            ],
            time_range: "YTD".to_string(),
            recipient: "Executive Leadership Team".to_string(),
        }
    }
}

impl ReportConfiguration {
    /// Selected module ids in insertion order
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|m| m == id)
    }

    /// Toggle a module in or out of the selection
    pub fn toggle_module(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|m| m == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Replace the selection with every registered module id
    pub fn select_all(&mut self) {
        self.selected = all_module_ids().iter().map(|s| s.to_string()).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replace the selection wholesale with a quick-template preset
    pub fn apply_template(&mut self, template: QuickTemplate) {
        self.selected = template
            .module_ids()
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    /// Set the selection from explicit ids, dropping duplicates while
    /// keeping first-occurrence order
    pub fn set_modules<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selected.clear();
        for id in ids {
            let id = id.as_ref();
            if !self.is_selected(id) {
                self.selected.push(id.to_string());
            }
        }
    }
}

/// Assemble the selected modules into an ordered document. Modules without
/// registered content are dropped silently; output order equals selection
/// order minus drops.
pub fn assemble(
    config: &ReportConfiguration,
    org_name: &str,
    fiscal_year: &str,
) -> AssembledDocument {
    let sections = config
        .selected
        .iter()
        .filter_map(|id| {
            module_content(id).map(|content| ReportSection {
                module_id: id.clone(),
                title: module_title(id),
                content,
            })
        })
        .collect();

    AssembledDocument {
        org_name: org_name.to_string(),
        recipient: config.recipient.clone(),
        time_range: config.time_range.clone(),
        fiscal_year: fiscal_year.to_string(),
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::module_content;

    fn cfg_with(ids: &[&str]) -> ReportConfiguration {
        let mut cfg = ReportConfiguration::default();
        cfg.set_modules(ids.iter().copied());
        cfg
    }

    #[test]
    fn assemble_single_registered_module_matches_registry() {
        let doc = assemble(&cfg_with(&["overtime"]), "HSS", "FY2026");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].module_id, "overtime");
        assert_eq!(doc.sections[0].title, "Overtime");
        assert_eq!(
            doc.sections[0].content,
            module_content("overtime").unwrap()
        );
    }

    #[test]
    fn assemble_unregistered_module_is_dropped_silently() {
        let doc = assemble(&cfg_with(&["no-such-module"]), "HSS", "FY2026");
        assert!(doc.is_empty());
    }

    #[test]
    fn assemble_preserves_selection_order() {
        let doc = assemble(
            &cfg_with(&["workforce", "executive-summary", "overtime"]),
            "HSS",
            "FY2026",
        );
        let ids: Vec<_> = doc.sections.iter().map(|s| s.module_id.as_str()).collect();
        assert_eq!(ids, vec!["workforce", "executive-summary", "overtime"]);
    }

    #[test]
    fn assemble_skips_drops_without_disturbing_order() {
        let doc = assemble(
            &cfg_with(&["overtime", "worked-hours", "workforce"]),
            "HSS",
            "FY2026",
        );
        let ids: Vec<_> = doc.sections.iter().map(|s| s.module_id.as_str()).collect();
        // worked-hours has no registered content
        assert_eq!(ids, vec!["overtime", "workforce"]);
    }

    #[test]
    fn toggle_module_adds_then_removes() {
        let mut cfg = ReportConfiguration::default();
        assert!(!cfg.is_selected("vacancy"));
        cfg.toggle_module("vacancy");
        assert!(cfg.is_selected("vacancy"));
        cfg.toggle_module("vacancy");
        assert!(!cfg.is_selected("vacancy"));
    }

    #[test]
    fn selection_is_a_set_not_a_multiset() {
        let mut cfg = ReportConfiguration::default();
        cfg.set_modules(["overtime", "overtime", "workforce", "overtime"]);
        assert_eq!(cfg.selected(), &["overtime", "workforce"]);
    }

    #[test]
    fn template_replaces_selection_wholesale() {
        let mut cfg = ReportConfiguration::default();
        cfg.toggle_module("retirement-risk");
        cfg.apply_template(QuickTemplate::MonthlyOps);
        assert_eq!(
            cfg.selected(),
            &[
                "executive-summary",
                "overtime",
                "sick-hours",
                "paid-hours",
                "worked-hours"
            ]
        );

        cfg.apply_template(QuickTemplate::QuarterlyReview);
        assert_eq!(
            cfg.selected(),
            &[
                "executive-summary",
                "workforce",
                "terminations",
                "new-hires",
                "vacancy",
                "recruitment"
            ]
        );
    }

    #[test]
    fn full_brief_selects_everything() {
        let mut cfg = ReportConfiguration::default();
        cfg.apply_template(QuickTemplate::FullBrief);
        assert_eq!(cfg.selected().len(), 13);
        assert_eq!(cfg.selected()[0], "executive-summary");
    }

    #[test]
    fn template_parses_from_kebab_case() {
        assert_eq!(
            "monthly-ops".parse::<QuickTemplate>().unwrap(),
            QuickTemplate::MonthlyOps
        );
        assert!("weekly".parse::<QuickTemplate>().is_err());
    }

    #[test]
    fn assemble_carries_header_metadata() {
        let mut cfg = cfg_with(&["executive-summary"]);
        cfg.time_range = "Q2 2025".to_string();
        cfg.recipient = "Board of Directors".to_string();
        let doc = assemble(&cfg, "Health Shared Services", "FY2026");
        assert_eq!(doc.time_range, "Q2 2025");
        assert_eq!(doc.recipient, "Board of Directors");
        assert_eq!(doc.org_name, "Health Shared Services");
        assert!(!doc.generated_at.is_empty());
    }
}

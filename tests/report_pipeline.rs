//! End-to-end assembly and export behavior through the public library API.

use proptest::prelude::*;
use std::time::Duration;
use workpulse::export_basename;
use workpulse::registry::module_content;
use workpulse::report::pipeline::{BuilderPhase, ExportFormat, ReportPipeline};
use workpulse::report::{assemble, ReportConfiguration};

fn quiet_pipeline() -> ReportPipeline {
    ReportPipeline::new().with_delay(Duration::ZERO).quiet()
}

#[test]
fn ytd_brief_has_two_sections_and_three_overtime_kpis() {
    let mut pipeline = quiet_pipeline();
    pipeline
        .config
        .set_modules(["executive-summary", "overtime"]);
    pipeline.config.time_range = "YTD".to_string();

    let document = pipeline.generate("Health Shared Services", "FY2026");
    assert_eq!(document.sections.len(), 2);
    assert_eq!(document.sections[1].module_id, "overtime");
    assert_eq!(
        document.sections[1].content.kpis.as_ref().unwrap().len(),
        3
    );

    let basename = export_basename("HSS", &pipeline.config.time_range, "FY2026");
    assert!(basename.contains("YTD"));
}

#[test]
fn full_flow_configure_generate_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut pipeline = quiet_pipeline();
    pipeline.config.time_range = "Q2 2025".to_string();

    assert_eq!(pipeline.phase(), BuilderPhase::Configuring);
    pipeline.generate("Health Shared Services", "FY2026");
    assert_eq!(pipeline.phase(), BuilderPhase::Previewing);

    let path = pipeline
        .export(
            ExportFormat::Pdf,
            dir.path(),
            &export_basename("HSS", "Q2 2025", "FY2026"),
        )
        .unwrap()
        .unwrap();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("HSS_Report_Q2_2025_FY2026.pdf")
    );
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn every_registered_module_round_trips_through_assemble() {
    for id in workpulse::registry::all_module_ids() {
        let mut config = ReportConfiguration::default();
        config.set_modules([id]);
        let document = assemble(&config, "HSS", "FY2026");
        match module_content(id) {
            Some(content) => {
                assert_eq!(document.sections.len(), 1, "{}", id);
                assert_eq!(document.sections[0].content, content, "{}", id);
            }
            None => assert!(document.is_empty(), "{}", id),
        }
    }
}

proptest! {
    #[test]
    fn assemble_preserves_relative_order_for_any_permutation(
        perm in Just(vec![
            "executive-summary",
            "overtime",
            "sick-hours",
            "workforce",
            "recruitment",
            "paid-hours",
        ]).prop_shuffle()
    ) {
        let mut config = ReportConfiguration::default();
        config.set_modules(perm.iter().copied());
        let document = assemble(&config, "HSS", "FY2026");

        // all six ids are registered, so nothing is dropped
        let out: Vec<_> = document
            .sections
            .iter()
            .map(|s| s.module_id.as_str())
            .collect();
        prop_assert_eq!(out, perm);
    }

    #[test]
    fn assemble_never_panics_on_arbitrary_ids(
        ids in proptest::collection::vec("[a-z-]{0,24}", 0..8)
    ) {
        let mut config = ReportConfiguration::default();
        config.set_modules(ids.iter().map(|s| s.as_str()));
        let document = assemble(&config, "HSS", "FY2026");
        prop_assert!(document.sections.len() <= ids.len());
    }
}

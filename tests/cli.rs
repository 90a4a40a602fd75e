//! CLI behavior tests: exit codes, output, exports.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn workpulse_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_workpulse"))
}

#[test]
fn no_args_returns_error_not_panic() {
    let mut cmd = workpulse_cmd();
    cmd.assert().failure();
}

#[test]
fn metrics_lists_dashboard_groups() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = workpulse_cmd();
    cmd.current_dir(dir.path()).arg("metrics").arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Compensation"))
        .stdout(predicate::str::contains("Workforce"))
        .stdout(predicate::str::contains("Talent"))
        .stdout(predicate::str::contains("overtime"));
}

#[test]
fn metrics_shows_onboarding_once() {
    let dir = tempfile::TempDir::new().unwrap();

    let mut first = workpulse_cmd();
    first.current_dir(dir.path()).arg("metrics").arg("--no-color");
    first
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Workpulse"));

    let mut second = workpulse_cmd();
    second.current_dir(dir.path()).arg("metrics").arg("--no-color");
    second
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Workpulse").not());
}

#[test]
fn show_records_recent_searches() {
    let dir = tempfile::TempDir::new().unwrap();
    for term in ["emergency", "icu"] {
        let mut cmd = workpulse_cmd();
        cmd.current_dir(dir.path())
            .args(["show", "overtime", "--search", term, "--no-color"]);
        cmd.assert().success();
    }

    let state = fs::read_to_string(dir.path().join(".workpulse-state.json")).unwrap();
    assert!(state.contains("emergency"));
    assert!(state.contains("icu"));

    let mut cmd = workpulse_cmd();
    cmd.current_dir(dir.path()).arg("metrics").arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Recent searches: icu, emergency"));
}

#[test]
fn show_unknown_metric_degrades_with_warning() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = workpulse_cmd();
    cmd.current_dir(dir.path())
        .args(["show", "mystery-metric", "--no-color"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("not a dashboard metric"));
}

#[test]
fn report_console_preview_prints_sections() {
    let mut cmd = workpulse_cmd();
    cmd.args(["report", "--no-delay", "--no-color"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("EXECUTIVE SUMMARY"))
        .stdout(predicate::str::contains("OVERTIME"))
        .stdout(predicate::str::contains("WORKFORCE"));
}

#[test]
fn report_pdf_export_writes_named_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = workpulse_cmd();
    cmd.current_dir(dir.path()).args([
        "report",
        "--no-delay",
        "--format",
        "pdf",
        "--time-range",
        "Last Month",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("HSS_Report_Last_Month_FY2026.pdf"));

    let bytes = fs::read(dir.path().join("HSS_Report_Last_Month_FY2026.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn report_doc_export_has_bom_and_word_shell() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = workpulse_cmd();
    cmd.current_dir(dir.path())
        .args(["report", "--no-delay", "--format", "doc"]);
    cmd.assert().success();

    let bytes = fs::read(dir.path().join("HSS_Report_YTD_FY2026.doc")).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("urn:schemas-microsoft-com:office:word"));
}

#[test]
fn report_template_overrides_selection() {
    let mut cmd = workpulse_cmd();
    cmd.args([
        "report",
        "--no-delay",
        "--no-color",
        "--template",
        "recruitment",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("VACANCY"))
        .stdout(predicate::str::contains("RECRUITMENT"))
        .stdout(predicate::str::contains("OVERTIME").not());
}

#[test]
fn report_unknown_template_is_a_usage_error() {
    let mut cmd = workpulse_cmd();
    cmd.args(["report", "--template", "weekly"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown template"));
}

#[test]
fn report_respects_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join(".workpulserc.json"),
        r#"{ "orgName": "Prairie Health", "reportPrefix": "PH", "fiscalYear": "FY2027" }"#,
    )
    .unwrap();

    let mut cmd = workpulse_cmd();
    cmd.current_dir(dir.path())
        .args(["report", "--no-delay", "--format", "html"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PH_Report_YTD_FY2027.html"));

    let html = fs::read_to_string(dir.path().join("PH_Report_YTD_FY2027.html")).unwrap();
    assert!(html.contains("Prairie Health"));
}

#[test]
fn login_accepts_only_the_test_pair() {
    let mut ok = workpulse_cmd();
    ok.args(["login", "test", "test"]);
    ok.assert()
        .success()
        .stdout(predicate::str::contains("Logged in as test"));

    let mut bad = workpulse_cmd();
    bad.args(["login", "admin", "hunter2", "--no-color"]);
    bad.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[test]
fn alerts_prints_the_briefing() {
    let mut cmd = workpulse_cmd();
    cmd.arg("alerts").arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Overtime Surge"))
        .stdout(predicate::str::contains("Nursing Vacancy"));
}

#[test]
fn insight_falls_back_without_api_key() {
    let mut cmd = workpulse_cmd();
    cmd.env_remove("GEMINI_API_KEY")
        .args(["insight", "overtime", "--no-color"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Overtime Analytics"))
        .stdout(predicate::str::contains("AI insights are currently unavailable"));
}

#[test]
fn insight_unknown_metric_uses_generic_narrative() {
    let mut cmd = workpulse_cmd();
    cmd.env_remove("GEMINI_API_KEY")
        .args(["insight", "mystery", "--no-color"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Performance Analytics"));
}

#[test]
fn browse_routes_tiles_by_tab() {
    let mut cmd = workpulse_cmd();
    cmd.arg("browse").arg("--no-color");
    cmd.write_stdin(
        "login test test\n\
         open overtime\n\
         tab analytics\n\
         open overtime\n\
         quit\n",
    );
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[detail: Overtime]"));
    assert!(stdout.contains("[advanced analytics: Overtime]"));
}

#[test]
fn browse_requires_login_first() {
    let mut cmd = workpulse_cmd();
    cmd.arg("browse").arg("--no-color");
    cmd.write_stdin("tab analytics\nlogin test nope\nquit\n");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please log in first"));
    assert!(stdout.contains("Invalid credentials"));
}

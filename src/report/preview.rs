//! Preview renderers: colored terminal output and a self-contained HTML page.

use super::escape_html;
use crate::{AssembledDocument, KpiStatus, ReportSection};
use colored::Colorize;
use std::fmt::Write as _;

/// Preview for terminal output
pub struct ConsolePreview {
    /// Whether to use colors
    use_colors: bool,
}

impl Default for ConsolePreview {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePreview {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Print the full document preview
    pub fn report(&self, document: &AssembledDocument) {
        self.print_header(document);
        if document.is_empty() {
            println!("  (no modules selected)");
            println!();
            return;
        }
        for section in &document.sections {
            self.print_section(section);
        }
        println!("{}", "─".repeat(60));
        println!(
            "  Generated by {} People Analytics | {}",
            document.org_name, document.generated_at
        );
        println!();
    }

    fn print_header(&self, document: &AssembledDocument) {
        println!();
        if self.use_colors {
            println!(
                "{}",
                format!("{} Executive Performance Report", document.org_name).bold()
            );
        } else {
            println!("{} Executive Performance Report", document.org_name);
        }
        println!(
            "  Prepared for {} | {} {}",
            document.recipient, document.time_range, document.fiscal_year
        );
        println!("{}", "─".repeat(60));
    }

    fn print_section(&self, section: &ReportSection) {
        println!();
        if self.use_colors {
            println!("{}", section.title.to_uppercase().bold());
        } else {
            println!("{}", section.title.to_uppercase());
        }

        if let Some(ref kpis) = section.content.kpis {
            for kpi in kpis {
                let change = if self.use_colors {
                    self.colorize_change(&kpi.change, kpi.status)
                } else {
                    kpi.change.clone()
                };
                println!("  {:<28} {:>14}  {}", kpi.label, kpi.value, change);
            }
        }

        if let Some(ref rows) = section.content.table_rows {
            println!(
                "  {:<28} {:>10} {:>10} {:>8}",
                "Category", "Current", "Previous", "Change"
            );
            for row in rows {
                println!(
                    "  {:<28} {:>10} {:>10} {:>8}",
                    row.label, row.current, row.previous, row.change
                );
            }
        }

        println!("  {}", section.content.summary);
        for factor in &section.content.key_factors {
            println!("    - {}", factor);
        }
        let recommendation = format!("  Recommendation: {}", section.content.recommendation);
        if self.use_colors {
            println!("{}", recommendation.green());
        } else {
            println!("{}", recommendation);
        }
    }

    fn colorize_change(&self, change: &str, status: KpiStatus) -> String {
        match status {
            KpiStatus::Good => change.green().to_string(),
            KpiStatus::Warning => change.yellow().to_string(),
            KpiStatus::Critical => change.red().bold().to_string(),
        }
    }
}

fn status_class(status: KpiStatus) -> &'static str {
    match status {
        KpiStatus::Good => "good",
        KpiStatus::Warning => "warning",
        KpiStatus::Critical => "critical",
    }
}

/// Render the document as a self-contained HTML page. Trend series become
/// CSS bar rows scaled against the series maximum; no scripts, no external
/// assets.
pub fn render_html(document: &AssembledDocument) -> String {
    let mut html = String::with_capacity(32_768);
    html.push_str("<!DOCTYPE html>\n<html lang='en'>\n<head>\n<meta charset='utf-8'>\n");
    let _ = writeln!(
        html,
        "<title>{} Executive Performance Report</title>",
        escape_html(&document.org_name)
    );
    html.push_str(template_style());
    html.push_str("</head>\n<body>\n<div class='page'>\n");

    let _ = writeln!(
        html,
        "<header>\n<h1>{}</h1>\n<p class='subtitle'>Executive Performance Report</p>\n\
         <div class='meta'><span>Prepared for {}</span><span class='range'>{} {}</span></div>\n\
         </header>",
        escape_html(&document.org_name),
        escape_html(&document.recipient),
        escape_html(&document.time_range),
        escape_html(&document.fiscal_year)
    );

    if document.is_empty() {
        html.push_str("<p class='empty'>No modules selected.</p>\n");
    }
    for section in &document.sections {
        write_section_html(&mut html, section);
    }

    let _ = writeln!(
        html,
        "<footer>Generated by {} People Analytics | {} | Confidential &amp; Proprietary</footer>",
        escape_html(&document.org_name),
        escape_html(&document.generated_at)
    );
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn write_section_html(html: &mut String, section: &ReportSection) {
    let _ = writeln!(
        html,
        "<section>\n<h2>{}</h2>",
        escape_html(&section.title)
    );

    if let Some(ref kpis) = section.content.kpis {
        html.push_str("<div class='kpi-row'>\n");
        for kpi in kpis {
            let _ = writeln!(
                html,
                "<div class='kpi'><div class='kpi-label'>{}</div>\
                 <div class='kpi-value'>{}</div>\
                 <div class='kpi-change {}'>{}</div></div>",
                escape_html(&kpi.label),
                escape_html(&kpi.value),
                status_class(kpi.status),
                escape_html(&kpi.change)
            );
        }
        html.push_str("</div>\n");
    }

    if let Some(ref series) = section.content.chart_series {
        let max = series
            .iter()
            .map(|p| p.value.max(p.target.unwrap_or(0.0)))
            .fold(1.0_f64, f64::max);
        html.push_str("<div class='chart'>\n");
        for point in series {
            let width = (point.value / max * 100.0).round() as u32;
            let _ = writeln!(
                html,
                "<div class='bar-row'><span class='bar-label'>{}</span>\
                 <span class='bar' style='width: {}%;'></span>\
                 <span class='bar-value'>{}</span></div>",
                escape_html(&point.label),
                width,
                point.value
            );
        }
        html.push_str("</div>\n");
    }

    if let Some(ref rows) = section.content.table_rows {
        html.push_str(
            "<table>\n<tr><th>Category</th><th>Current</th><th>Previous</th>\
             <th>Change</th></tr>\n",
        );
        for row in rows {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&row.label),
                escape_html(&row.current),
                escape_html(&row.previous),
                escape_html(&row.change)
            );
        }
        html.push_str("</table>\n");
    }

    let _ = writeln!(html, "<p>{}</p>", escape_html(&section.content.summary));
    if !section.content.key_factors.is_empty() {
        html.push_str("<ul>\n");
        for factor in &section.content.key_factors {
            let _ = writeln!(html, "<li>{}</li>", escape_html(factor));
        }
        html.push_str("</ul>\n");
    }
    let _ = writeln!(
        html,
        "<p class='recommendation'>Recommendation: {}</p>\n</section>",
        escape_html(&section.content.recommendation)
    );
}

fn template_style() -> &'static str {
    r#"<style>
body { font-family: -apple-system, 'Segoe UI', Arial, sans-serif; color: #333; margin: 0; background: #f2f4f6; }
.page { max-width: 860px; margin: 24px auto; background: #fff; padding: 32px 40px; box-shadow: 0 1px 4px rgba(0,0,0,.12); }
header h1 { color: #002f56; margin: 0; font-size: 28px; }
.subtitle { color: #6b7480; margin: 4px 0 12px; }
.meta { display: flex; justify-content: space-between; border-bottom: 2px solid #002f56; padding-bottom: 8px; font-size: 13px; }
.meta .range { color: #78be20; font-weight: 600; }
section h2 { color: #002f56; border-bottom: 1px solid #d6dade; padding-bottom: 4px; font-size: 17px; margin-top: 28px; }
.kpi-row { display: flex; gap: 24px; margin: 12px 0; }
.kpi-label { font-size: 11px; color: #6b7480; text-transform: uppercase; }
.kpi-value { font-size: 20px; font-weight: 700; }
.kpi-change { font-size: 12px; font-weight: 600; }
.kpi-change.good { color: #21994f; }
.kpi-change.warning { color: #d98c0d; }
.kpi-change.critical { color: #cc2626; }
.chart { margin: 12px 0; }
.bar-row { display: flex; align-items: center; gap: 8px; margin: 3px 0; font-size: 12px; }
.bar-label { width: 40px; color: #6b7480; }
.bar { display: inline-block; height: 10px; background: #002f56; border-radius: 2px; }
.bar-value { color: #333; }
table { border-collapse: collapse; width: 100%; margin: 12px 0; font-size: 13px; }
th { background: #002f56; color: #fff; text-align: left; padding: 6px 8px; }
td { border-bottom: 1px solid #e3e6e9; padding: 6px 8px; }
.recommendation { color: #4a7a12; font-weight: 600; }
.empty { color: #6b7480; font-style: italic; }
footer { margin-top: 32px; font-size: 11px; color: #6b7480; border-top: 1px solid #d6dade; padding-top: 8px; }
</style>
"#
}

//! Word export: the document serialized as Word-compatible HTML.
//!
//! Word opens an HTML file with the `urn:schemas-microsoft-com:office`
//! namespaces as an editable document. Charts have no meaning there, so
//! trend series are flattened into data tables and a disclaimer paragraph
//! says so. The output starts with a UTF-8 BOM; Word mis-detects the
//! encoding without it.

use super::escape_html as escape;
use crate::{AssembledDocument, KpiStatus, ReportSection};
use std::fmt::Write as _;

const STATUS_GOOD: &str = "#21994f";
const STATUS_WARNING: &str = "#d98c0d";
const STATUS_CRITICAL: &str = "#cc2626";

fn status_hex(status: KpiStatus) -> &'static str {
    match status {
        KpiStatus::Good => STATUS_GOOD,
        KpiStatus::Warning => STATUS_WARNING,
        KpiStatus::Critical => STATUS_CRITICAL,
    }
}

/// Render the document as a `.doc`-openable HTML string, BOM included
pub fn render_doc(document: &AssembledDocument) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push('\u{feff}');
    out.push_str("<html xmlns:o='urn:schemas-microsoft-com:office:office' ");
    out.push_str("xmlns:w='urn:schemas-microsoft-com:office:word' ");
    out.push_str("xmlns='http://www.w3.org/TR/REC-html40'>\n<head>\n");
    out.push_str("<meta charset='utf-8'>\n");
    let _ = writeln!(
        out,
        "<title>{} Executive Performance Report</title>",
        escape(&document.org_name)
    );
    out.push_str(
        "<style>\n\
         body { font-family: Calibri, Arial, sans-serif; color: #333333; }\n\
         h1 { color: #002f56; font-size: 22pt; margin-bottom: 2pt; }\n\
         h2 { color: #002f56; font-size: 14pt; border-bottom: 1pt solid #002f56; \
         padding-bottom: 2pt; margin-top: 18pt; }\n\
         .subtitle { color: #6b7480; font-size: 11pt; }\n\
         .meta { color: #78be20; font-weight: bold; font-size: 10pt; }\n\
         .disclaimer { color: #6b7480; font-size: 8pt; font-style: italic; }\n\
         .recommendation { color: #4a7a12; font-weight: bold; }\n\
         table { border-collapse: collapse; width: 100%; margin: 6pt 0; }\n\
         th { background: #002f56; color: #ffffff; text-align: left; \
         padding: 4pt 6pt; font-size: 9pt; }\n\
         td { border-bottom: 1pt solid #dddddd; padding: 4pt 6pt; font-size: 9pt; }\n\
         </style>\n</head>\n<body>\n",
    );

    let _ = writeln!(out, "<h1>{}</h1>", escape(&document.org_name));
    out.push_str("<p class='subtitle'>Executive Performance Report</p>\n");
    let _ = writeln!(
        out,
        "<p class='meta'>Prepared for {} &mdash; {} {}</p>",
        escape(&document.recipient),
        escape(&document.time_range),
        escape(&document.fiscal_year)
    );
    out.push_str(
        "<p class='disclaimer'>Interactive charts from the source dashboard are \
         rendered here as data tables for editing compatibility.</p>\n<hr>\n",
    );

    for section in &document.sections {
        write_section(&mut out, section);
    }

    let _ = writeln!(
        out,
        "<p class='disclaimer'>Generated by {} People Analytics on {}. \
         Confidential &amp; Proprietary.</p>",
        escape(&document.org_name),
        escape(&document.generated_at)
    );
    out.push_str("</body>\n</html>\n");
    out
}

fn write_section(out: &mut String, section: &ReportSection) {
    let _ = writeln!(out, "<h2>{}</h2>", escape(&section.title));

    if let Some(ref kpis) = section.content.kpis {
        out.push_str("<table>\n<tr><th>Indicator</th><th>Value</th><th>Change</th></tr>\n");
        for kpi in kpis {
            let _ = writeln!(
                out,
                "<tr><td>{}</td><td><b>{}</b></td>\
                 <td style='color: {};'>{}</td></tr>",
                escape(&kpi.label),
                escape(&kpi.value),
                status_hex(kpi.status),
                escape(&kpi.change)
            );
        }
        out.push_str("</table>\n");
    }

    if let Some(ref series) = section.content.chart_series {
        out.push_str("<table>\n<tr><th>Period</th><th>Actual</th><th>Target</th></tr>\n");
        for point in series {
            let target = point
                .target
                .map(|t| format!("{}", t))
                .unwrap_or_else(|| "&ndash;".to_string());
            let _ = writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&point.label),
                point.value,
                target
            );
        }
        out.push_str("</table>\n");
    }

    if let Some(ref rows) = section.content.table_rows {
        out.push_str(
            "<table>\n<tr><th>Category</th><th>Current</th><th>Previous</th>\
             <th>Change</th></tr>\n",
        );
        for row in rows {
            let _ = writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&row.label),
                escape(&row.current),
                escape(&row.previous),
                escape(&row.change)
            );
        }
        out.push_str("</table>\n");
    }

    let _ = writeln!(out, "<p>{}</p>", escape(&section.content.summary));

    if !section.content.key_factors.is_empty() {
        out.push_str("<p><b>Key Factors</b></p>\n<ul>\n");
        for factor in &section.content.key_factors {
            let _ = writeln!(out, "<li>{}</li>", escape(factor));
        }
        out.push_str("</ul>\n");
    }

    let _ = writeln!(
        out,
        "<p class='recommendation'>Recommendation: {}</p>",
        escape(&section.content.recommendation)
    );
}

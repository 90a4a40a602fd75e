//! PDF export: structured A4 print layout of the assembled document.
//!
//! Walks the same document model the preview renders, drawing directly with
//! printpdf instead of rasterizing a rendered surface. Page width is fixed at
//! 210 mm; content flows down a y-cursor and breaks to a new page as needed.

use super::pipeline::ExportError;
use crate::{AssembledDocument, KpiStatus, ReportSection};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb,
};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const LEFT: f64 = 20.0;
const RIGHT: f64 = 190.0;
const TOP: f64 = 277.0;
const BOTTOM: f64 = 20.0;

fn navy() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.18, 0.34, None))
}

fn accent_green() -> Color {
    Color::Rgb(Rgb::new(0.47, 0.75, 0.13, None))
}

fn body_gray() -> Color {
    Color::Rgb(Rgb::new(0.20, 0.20, 0.20, None))
}

fn muted_gray() -> Color {
    Color::Rgb(Rgb::new(0.45, 0.48, 0.52, None))
}

fn status_color(status: KpiStatus) -> Color {
    match status {
        KpiStatus::Good => Color::Rgb(Rgb::new(0.13, 0.60, 0.33, None)),
        KpiStatus::Warning => Color::Rgb(Rgb::new(0.85, 0.55, 0.05, None)),
        KpiStatus::Critical => Color::Rgb(Rgb::new(0.80, 0.15, 0.15, None)),
    }
}

/// Render the assembled document to PDF bytes
pub fn render_pdf(document: &AssembledDocument) -> Result<Vec<u8>, ExportError> {
    let (doc, page1, layer1) = PdfDocument::new(
        format!("{} Executive Performance Report", document.org_name),
        Mm((PAGE_WIDTH) as f32),
        Mm((PAGE_HEIGHT) as f32),
        "Layer 1",
    );

    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Render(format!("font error: {}", e)))?;
    let font_regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Render(format!("font error: {}", e)))?;

    let mut page_idx = page1;
    let mut layer_idx = layer1;
    let mut y = TOP;

    macro_rules! current_layer {
        () => {
            doc.get_page(page_idx).get_layer(layer_idx)
        };
    }

    macro_rules! new_page_if_needed {
        ($needed:expr) => {
            if y < BOTTOM + $needed {
                let (np, nl) = doc.add_page(Mm((PAGE_WIDTH) as f32), Mm((PAGE_HEIGHT) as f32), "Layer 1");
                page_idx = np;
                layer_idx = nl;
                y = TOP;
            }
        };
    }

    let draw_rule = |layer: &PdfLayerReference, y_pos: f64| {
        let line = Line {
            points: vec![
                (Point::new(Mm((LEFT) as f32), Mm((y_pos) as f32)), false),
                (Point::new(Mm((RIGHT) as f32), Mm((y_pos) as f32)), false),
            ],
            is_closed: false,
        };
        layer.add_line(line);
    };

    // Header band
    {
        let layer = current_layer!();
        layer.set_fill_color(navy());
        layer.add_rect(Rect::new(
            Mm((0.0) as f32),
            Mm((PAGE_HEIGHT - 3.0) as f32),
            Mm((PAGE_WIDTH) as f32),
            Mm((PAGE_HEIGHT) as f32),
        ));

        layer.use_text(&document.org_name, 22.0, Mm((LEFT) as f32), Mm((y) as f32), &font_bold);
        y -= 8.0;
        layer.set_fill_color(muted_gray());
        layer.use_text(
            "Executive Performance Report",
            13.0,
            Mm((LEFT) as f32),
            Mm((y) as f32),
            &font_regular,
        );

        layer.set_fill_color(body_gray());
        layer.use_text("PREPARED FOR", 7.0, Mm((140.0) as f32), Mm((TOP) as f32), &font_bold);
        layer.use_text(
            &document.recipient,
            11.0,
            Mm((140.0) as f32),
            Mm((TOP - 5.0) as f32),
            &font_bold,
        );
        layer.set_fill_color(accent_green());
        layer.use_text(
            format!("{} {}", document.time_range, document.fiscal_year),
            9.0,
            Mm((140.0) as f32),
            Mm((TOP - 10.0) as f32),
            &font_bold,
        );

        y -= 6.0;
        layer.set_fill_color(body_gray());
        draw_rule(&layer, y);
        y -= 10.0;
    }

    for section in &document.sections {
        new_page_if_needed!(40.0);
        render_section(
            section,
            &doc,
            &mut page_idx,
            &mut layer_idx,
            &mut y,
            &font_bold,
            &font_regular,
        );
    }

    // Footer on the last page
    {
        let layer = current_layer!();
        layer.set_fill_color(muted_gray());
        layer.use_text(
            format!("Generated by {} People Analytics", document.org_name),
            7.0,
            Mm((LEFT) as f32),
            Mm((12.0) as f32),
            &font_regular,
        );
        layer.use_text("Confidential & Proprietary", 7.0, Mm((92.0) as f32), Mm((12.0) as f32), &font_regular);
        layer.use_text(&document.generated_at, 7.0, Mm((160.0) as f32), Mm((12.0) as f32), &font_regular);
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Render(format!("PDF save error: {}", e)))?;
    Ok(bytes)
}

#[allow(clippy::too_many_arguments)]
fn render_section(
    section: &ReportSection,
    doc: &printpdf::PdfDocumentReference,
    page_idx: &mut printpdf::PdfPageIndex,
    layer_idx: &mut printpdf::PdfLayerIndex,
    y: &mut f64,
    font_bold: &IndirectFontRef,
    font_regular: &IndirectFontRef,
) {
    macro_rules! current_layer {
        () => {
            doc.get_page(*page_idx).get_layer(*layer_idx)
        };
    }

    macro_rules! new_page_if_needed {
        ($needed:expr) => {
            if *y < BOTTOM + $needed {
                let (np, nl) = doc.add_page(Mm((PAGE_WIDTH) as f32), Mm((PAGE_HEIGHT) as f32), "Layer 1");
                *page_idx = np;
                *layer_idx = nl;
                *y = TOP;
            }
        };
    }

    // Section heading with underline
    {
        let layer = current_layer!();
        layer.set_fill_color(navy());
        layer.use_text(
            section.title.to_uppercase(),
            13.0,
            Mm((LEFT) as f32),
            Mm((*y) as f32),
            font_bold,
        );
        *y -= 2.5;
        let line = Line {
            points: vec![
                (Point::new(Mm((LEFT) as f32), Mm((*y) as f32)), false),
                (Point::new(Mm((RIGHT) as f32), Mm((*y) as f32)), false),
            ],
            is_closed: false,
        };
        layer.add_line(line);
        *y -= 7.0;
    }

    // KPI row
    if let Some(ref kpis) = section.content.kpis {
        new_page_if_needed!(20.0);
        let layer = current_layer!();
        let col_width = (RIGHT - LEFT) / kpis.len() as f64;
        for (i, kpi) in kpis.iter().enumerate() {
            let x = LEFT + i as f64 * col_width;
            layer.set_fill_color(muted_gray());
            layer.use_text(kpi.label.to_uppercase(), 6.5, Mm((x) as f32), Mm((*y) as f32), font_bold);
            layer.set_fill_color(body_gray());
            layer.use_text(&kpi.value, 12.0, Mm((x) as f32), Mm((*y - 5.5) as f32), font_bold);
            layer.set_fill_color(status_color(kpi.status));
            layer.use_text(&kpi.change, 7.5, Mm((x) as f32), Mm((*y - 10.5) as f32), font_bold);
        }
        *y -= 17.0;
    }

    // Chart series as horizontal bars scaled against the series maximum
    if let Some(ref series) = section.content.chart_series {
        let needed = 8.0 + series.len() as f64 * 6.0;
        new_page_if_needed!(needed);
        let layer = current_layer!();
        layer.set_fill_color(muted_gray());
        layer.use_text("PERFORMANCE TREND", 7.0, Mm((LEFT) as f32), Mm((*y) as f32), font_bold);
        *y -= 6.0;

        let max = series
            .iter()
            .map(|p| p.value.max(p.target.unwrap_or(0.0)))
            .fold(1.0_f64, f64::max);
        let bar_area = 90.0;
        for point in series {
            let width = (point.value / max) * bar_area;
            let over_target = point.target.is_some_and(|t| point.value > t);
            layer.set_fill_color(if over_target {
                status_color(KpiStatus::Critical)
            } else {
                navy()
            });
            layer.add_rect(Rect::new(
                Mm((LEFT + 32.0) as f32),
                Mm((*y - 1.0) as f32),
                Mm((LEFT + 32.0 + width) as f32),
                Mm((*y + 2.5) as f32),
            ));
            if let Some(target) = point.target {
                let target_width = (target / max) * bar_area;
                layer.set_fill_color(accent_green());
                layer.add_rect(Rect::new(
                    Mm((LEFT + 32.0 + target_width - 0.6) as f32),
                    Mm((*y - 1.5) as f32),
                    Mm((LEFT + 32.0 + target_width + 0.6) as f32),
                    Mm((*y + 3.0) as f32),
                ));
            }
            layer.set_fill_color(body_gray());
            layer.use_text(&point.label, 8.0, Mm((LEFT) as f32), Mm((*y) as f32), font_regular);
            layer.use_text(
                format_number(point.value),
                8.0,
                Mm((LEFT + 32.0 + bar_area + 4.0) as f32),
                Mm((*y) as f32),
                font_regular,
            );
            *y -= 6.0;
        }
        *y -= 4.0;
    }

    // Comparison table
    if let Some(ref rows) = section.content.table_rows {
        let needed = 10.0 + rows.len() as f64 * 6.0;
        new_page_if_needed!(needed);
        let layer = current_layer!();
        layer.set_fill_color(muted_gray());
        layer.use_text("COMPARISON DATA", 7.0, Mm((LEFT) as f32), Mm((*y) as f32), font_bold);
        *y -= 6.0;

        layer.set_fill_color(body_gray());
        layer.use_text("Category", 8.0, Mm((LEFT) as f32), Mm((*y) as f32), font_bold);
        layer.use_text("Current", 8.0, Mm((95.0) as f32), Mm((*y) as f32), font_bold);
        layer.use_text("Previous", 8.0, Mm((125.0) as f32), Mm((*y) as f32), font_bold);
        layer.use_text("Change", 8.0, Mm((160.0) as f32), Mm((*y) as f32), font_bold);
        *y -= 5.5;

        for row in rows {
            layer.set_fill_color(body_gray());
            layer.use_text(&row.label, 8.0, Mm((LEFT) as f32), Mm((*y) as f32), font_regular);
            layer.use_text(&row.current, 8.0, Mm((95.0) as f32), Mm((*y) as f32), font_regular);
            layer.set_fill_color(muted_gray());
            layer.use_text(&row.previous, 8.0, Mm((125.0) as f32), Mm((*y) as f32), font_regular);
            let worsening = row.change.starts_with('+') && !row.change.contains("days");
            layer.set_fill_color(if worsening {
                status_color(KpiStatus::Critical)
            } else {
                status_color(KpiStatus::Good)
            });
            layer.use_text(&row.change, 8.0, Mm((160.0) as f32), Mm((*y) as f32), font_bold);
            *y -= 5.5;
        }
        *y -= 4.0;
    }

    // Narrative block: summary, key factors, recommendation
    let summary_lines = wrap_text(&section.content.summary, 96);
    let needed = summary_lines.len() as f64 * 4.5
        + section.content.key_factors.len() as f64 * 4.5
        + 18.0;
    new_page_if_needed!(needed);
    {
        let layer = current_layer!();
        layer.set_fill_color(body_gray());
        for line in &summary_lines {
            layer.use_text(line, 9.0, Mm((LEFT) as f32), Mm((*y) as f32), font_regular);
            *y -= 4.5;
        }
        *y -= 2.0;

        layer.set_fill_color(muted_gray());
        layer.use_text("KEY FACTORS", 7.0, Mm((LEFT) as f32), Mm((*y) as f32), font_bold);
        *y -= 5.0;
        layer.set_fill_color(body_gray());
        for factor in &section.content.key_factors {
            for (i, line) in wrap_text(factor, 90).iter().enumerate() {
                let bullet = if i == 0 { "- " } else { "  " };
                layer.use_text(
                    format!("{}{}", bullet, line),
                    8.5,
                    Mm((LEFT + 2.0) as f32),
                    Mm((*y) as f32),
                    font_regular,
                );
                *y -= 4.5;
            }
        }
        *y -= 2.0;

        layer.set_fill_color(muted_gray());
        layer.use_text("RECOMMENDATION", 7.0, Mm((LEFT) as f32), Mm((*y) as f32), font_bold);
        *y -= 5.0;
        layer.set_fill_color(accent_green());
        for line in wrap_text(&section.content.recommendation, 96) {
            layer.use_text(line, 9.0, Mm((LEFT) as f32), Mm((*y) as f32), font_bold);
            *y -= 4.5;
        }
    }
    *y -= 8.0;
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Greedy word wrap to a maximum character count per line
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{assemble, ReportConfiguration};

    fn sample_document() -> AssembledDocument {
        let mut cfg = ReportConfiguration::default();
        cfg.set_modules(["executive-summary", "overtime", "workforce"]);
        assemble(&cfg, "Health Shared Services", "FY2026")
    }

    #[test]
    fn render_pdf_produces_valid_header() {
        let bytes = render_pdf(&sample_document()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn render_pdf_handles_empty_document() {
        let doc = AssembledDocument {
            org_name: "HSS".to_string(),
            recipient: "Leadership".to_string(),
            time_range: "YTD".to_string(),
            fiscal_year: "FY2026".to_string(),
            generated_at: "2026-01-01 09:00".to_string(),
            sections: vec![],
        };
        let bytes = render_pdf(&doc).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn wrap_text_respects_max_width() {
        let lines = wrap_text("one two three four five six seven eight", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 12);
        }
    }

    #[test]
    fn wrap_text_empty_input() {
        assert!(wrap_text("", 80).is_empty());
    }

    #[test]
    fn format_number_drops_trailing_zero_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(5.8), "5.8");
    }
}

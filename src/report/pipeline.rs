//! Builder pipeline: the configure / generate / preview phase machine and
//! export orchestration. Generation is a fixed staging delay followed by a
//! pure assembly step; exports render the held document to bytes and write a
//! single file per invocation.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use super::{assemble, pdf, preview, word, ReportConfiguration};
use crate::AssembledDocument;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("report rendering failed: {0}")]
    Render(String),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no report has been generated yet")]
    NotGenerated,
    #[error("nothing to export: none of the selected modules produced content")]
    EmptyDocument,
}

/// Output format for a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Doc,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Doc => "doc",
            ExportFormat::Html => "html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ExportFormat::Pdf),
            "doc" | "word" => Ok(ExportFormat::Doc),
            "html" => Ok(ExportFormat::Html),
            other => Err(format!(
                "unknown format '{}' (expected pdf, doc, or html)",
                other
            )),
        }
    }
}

/// Where the builder currently is. Generating is transient: it only exists
/// for the duration of a `generate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderPhase {
    Configuring,
    Generating,
    Previewing,
}

/// Drives a report from configuration through preview to file export.
pub struct ReportPipeline {
    pub config: ReportConfiguration,
    phase: BuilderPhase,
    document: Option<AssembledDocument>,
    downloading: bool,
    generation_delay: Duration,
    show_progress: bool,
}

impl Default for ReportPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPipeline {
    pub fn new() -> Self {
        Self {
            config: ReportConfiguration::default(),
            phase: BuilderPhase::Configuring,
            document: None,
            downloading: false,
            generation_delay: Duration::from_secs(2),
            show_progress: true,
        }
    }

    /// Override the staging delay (tests pass zero)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    /// Suppress the spinner (non-interactive output)
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn phase(&self) -> BuilderPhase {
        self.phase
    }

    pub fn document(&self) -> Option<&AssembledDocument> {
        self.document.as_ref()
    }

    pub fn is_downloading(&self) -> bool {
        self.downloading
    }

    /// Run the generation step: hold in Generating for the staging delay,
    /// then assemble and land in Previewing.
    pub fn generate(&mut self, org_name: &str, fiscal_year: &str) -> &AssembledDocument {
        self.phase = BuilderPhase::Generating;

        if !self.generation_delay.is_zero() {
            let spinner = if self.show_progress {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} {msg}")
                        .unwrap(),
                );
                pb.set_message("Generating report...");
                pb.enable_steady_tick(Duration::from_millis(100));
                Some(pb)
            } else {
                None
            };
            thread::sleep(self.generation_delay);
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
        }

        self.document = Some(assemble(&self.config, org_name, fiscal_year));
        self.phase = BuilderPhase::Previewing;
        self.document.as_ref().unwrap()
    }

    /// Return to the configuration phase, keeping the current selection
    pub fn back_to_configure(&mut self) {
        self.phase = BuilderPhase::Configuring;
        self.document = None;
    }

    /// Export the previewed document to `<out_dir>/<basename>.<ext>`.
    ///
    /// Returns `Ok(None)` without touching the filesystem when an export is
    /// already in flight. Errors leave the pipeline in Previewing with the
    /// document intact, so the caller can retry.
    pub fn export(
        &mut self,
        format: ExportFormat,
        out_dir: &Path,
        basename: &str,
    ) -> Result<Option<PathBuf>, ExportError> {
        if self.downloading {
            return Ok(None);
        }
        self.downloading = true;
        let result = self.export_inner(format, out_dir, basename);
        self.downloading = false;
        result.map(Some)
    }

    fn export_inner(
        &self,
        format: ExportFormat,
        out_dir: &Path,
        basename: &str,
    ) -> Result<PathBuf, ExportError> {
        let document = self.document.as_ref().ok_or(ExportError::NotGenerated)?;
        if document.is_empty() {
            return Err(ExportError::EmptyDocument);
        }

        let bytes = match format {
            ExportFormat::Pdf => pdf::render_pdf(document)?,
            ExportFormat::Doc => word::render_doc(document).into_bytes(),
            ExportFormat::Html => preview::render_html(document).into_bytes(),
        };

        let path = out_dir.join(format!("{}.{}", basename, format.extension()));
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| ExportError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        std::fs::write(&path, bytes).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

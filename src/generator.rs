//! Generation service: story, layout, render, report.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::content::{sample_will_story, Story, StyleSheet};
use crate::error::{WillError, WillResult};
use crate::layout::{self, PageSetup};
use crate::render::{DocumentRenderer, PrintPdfRenderer};

/// File name the sample will is written to by default.
pub const DEFAULT_OUTPUT: &str = "sample_will.pdf";

/// Title stored in the document information dictionary.
pub const DOCUMENT_TITLE: &str = "Last Will and Testament";

/// Facts about a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Output path as requested
    pub path: PathBuf,

    /// Canonical absolute path of the written file
    pub absolute_path: PathBuf,

    /// File size in bytes
    pub bytes: u64,

    /// Number of pages laid out
    pub pages: usize,

    /// Number of content blocks in the story
    pub blocks: usize,
}

/// Builds the sample will and writes it with a [`DocumentRenderer`].
pub struct WillGenerator {
    renderer: Box<dyn DocumentRenderer>,
    styles: StyleSheet,
    setup: PageSetup,
}

impl WillGenerator {
    /// Creates a generator that renders with `renderer`.
    pub fn new(renderer: Box<dyn DocumentRenderer>) -> Self {
        Self {
            renderer,
            styles: StyleSheet::default(),
            setup: PageSetup::default(),
        }
    }

    /// Creates a generator backed by printpdf.
    pub fn with_printpdf() -> Self {
        Self::new(Box::new(PrintPdfRenderer::new()))
    }

    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_page_setup(mut self, setup: PageSetup) -> Self {
        self.setup = setup;
        self
    }

    pub fn renderer_name(&self) -> &str {
        self.renderer.name()
    }

    /// The fixed content of the sample will.
    pub fn story(&self) -> Story {
        sample_will_story()
    }

    /// Writes the sample will to `output` and reports on the result.
    ///
    /// # Errors
    /// Any layout, render, or filesystem failure.
    pub fn generate(&self, output: &Path) -> WillResult<GenerationReport> {
        let story = self.story();
        debug!("Story has {} block(s)", story.len());

        let pages = layout::flow(&story, &self.styles, &self.setup)?;
        self.renderer
            .render(DOCUMENT_TITLE, &self.setup, &pages, output)?;

        let report = inspect(output, pages.len(), story.len())?;
        info!(
            "Wrote {} ({} bytes, {} page(s))",
            report.absolute_path.display(),
            report.bytes,
            report.pages
        );
        Ok(report)
    }
}

impl Default for WillGenerator {
    fn default() -> Self {
        Self::with_printpdf()
    }
}

fn inspect(output: &Path, pages: usize, blocks: usize) -> WillResult<GenerationReport> {
    let bytes = fs::metadata(output)
        .map_err(|e| WillError::io(output, e))?
        .len();
    let absolute_path = fs::canonicalize(output).map_err(|e| WillError::io(output, e))?;

    Ok(GenerationReport {
        path: output.to_path_buf(),
        absolute_path,
        bytes,
        pages,
        blocks,
    })
}

/// Writes the sample will to [`DEFAULT_OUTPUT`] in the working directory.
pub fn create_sample_pdf() -> WillResult<GenerationReport> {
    WillGenerator::with_printpdf().generate(Path::new(DEFAULT_OUTPUT))
}

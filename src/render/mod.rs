//! Rendering laid-out pages to a PDF file.
//!
//! The [`DocumentRenderer`] trait separates layout from the PDF backend so
//! the generator can be exercised without touching printpdf.

pub mod printpdf_backend;

pub use printpdf_backend::PrintPdfRenderer;

use crate::error::WillResult;
use crate::layout::{PageLayout, PageSetup};
use std::path::Path;

/// Backend that turns laid-out pages into a file on disk.
pub trait DocumentRenderer: Send + Sync {
    /// Writes `pages` as a PDF document titled `title` to `output`.
    ///
    /// The file at `output` is created or truncated.
    fn render(
        &self,
        title: &str,
        setup: &PageSetup,
        pages: &[PageLayout],
        output: &Path,
    ) -> WillResult<()>;

    /// Returns a human-readable name for this backend.
    fn name(&self) -> &str;
}

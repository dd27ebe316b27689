//! printpdf-backed renderer using the built-in Helvetica faces.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use super::DocumentRenderer;
use crate::error::{WillError, WillResult};
use crate::layout::{PageLayout, PageSetup, StandardFont};

const LAYER_NAME: &str = "Layer 1";

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// Renders pages with printpdf, one PDF page per [`PageLayout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintPdfRenderer;

impl PrintPdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> WillResult<Self> {
        Ok(Self {
            regular: add_font(doc, StandardFont::Helvetica)?,
            bold: add_font(doc, StandardFont::HelveticaBold)?,
        })
    }

    fn get(&self, font: StandardFont) -> &IndirectFontRef {
        match font {
            StandardFont::Helvetica => &self.regular,
            StandardFont::HelveticaBold => &self.bold,
        }
    }
}

fn add_font(doc: &PdfDocumentReference, font: StandardFont) -> WillResult<IndirectFontRef> {
    let builtin = match font {
        StandardFont::Helvetica => BuiltinFont::Helvetica,
        StandardFont::HelveticaBold => BuiltinFont::HelveticaBold,
    };
    debug!("Registering built-in font {}", font.pdf_name());
    doc.add_builtin_font(builtin).map_err(WillError::render)
}

impl DocumentRenderer for PrintPdfRenderer {
    fn render(
        &self,
        title: &str,
        setup: &PageSetup,
        pages: &[PageLayout],
        output: &Path,
    ) -> WillResult<()> {
        let (width, height) = (mm(setup.width), mm(setup.height));
        let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);

        let fonts = Fonts::load(&doc)?;

        let mut first = Some((first_page, first_layer));
        for page in pages {
            let (page_index, layer_index) = match first.take() {
                Some(indices) => indices,
                None => doc.add_page(width, height, LAYER_NAME),
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                layer.use_text(
                    line.text.as_str(),
                    line.font_size,
                    mm(line.x),
                    mm(line.y),
                    fonts.get(line.font),
                );
            }
        }

        let file = fs::File::create(output).map_err(|e| WillError::io(output, e))?;
        let mut writer = BufWriter::new(file);
        doc.save(&mut writer).map_err(WillError::render)?;
        // save() does not flush
        writer.flush().map_err(|e| WillError::io(output, e))?;

        debug!(
            "Rendered {} page(s) to {} with {}",
            pages.len(),
            output.display(),
            self.name()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "printpdf"
    }
}

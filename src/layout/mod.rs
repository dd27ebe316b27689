//! Flowing a [`Story`] onto pages.
//!
//! Layout works in PDF points with the origin at the bottom-left corner of
//! the page. The output is a list of [`PageLayout`]s that a renderer can
//! draw line by line without any further measuring.

pub mod metrics;

pub use metrics::{measure_text, wrap_text, StandardFont};

use log::debug;

use crate::content::{Alignment, Block, Story, StyleSheet};
use crate::error::{WillError, WillResult};

/// Page size and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
}

impl PageSetup {
    /// US letter with one-inch margins.
    pub const fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin_top: 72.0,
            margin_right: 72.0,
            margin_bottom: 72.0,
            margin_left: 72.0,
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn frame_top(&self) -> f32 {
        self.height - self.margin_top
    }

    pub fn frame_bottom(&self) -> f32 {
        self.margin_bottom
    }

    pub fn frame_height(&self) -> f32 {
        self.frame_top() - self.frame_bottom()
    }

    /// Checks that the page leaves a usable frame inside its margins.
    ///
    /// # Errors
    /// [`WillError::InvalidInput`] for a non-finite or negative dimension,
    /// or a frame whose width or height is not positive.
    pub fn validate(&self) -> WillResult<()> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("margin_top", self.margin_top),
            ("margin_right", self.margin_right),
            ("margin_bottom", self.margin_bottom),
            ("margin_left", self.margin_left),
        ];
        for (parameter, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_setup(parameter, format!("must be a non-negative number, got {}", value)));
            }
        }

        if self.frame_width() <= 0.0 {
            return Err(invalid_setup(
                "width",
                format!("margins leave no frame width ({}pt)", self.frame_width()),
            ));
        }
        if self.frame_height() <= 0.0 {
            return Err(invalid_setup(
                "height",
                format!("margins leave no frame height ({}pt)", self.frame_height()),
            ));
        }

        Ok(())
    }
}

fn invalid_setup(parameter: &str, reason: String) -> WillError {
    WillError::InvalidInput {
        parameter: format!("page.{}", parameter),
        reason,
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter()
    }
}

/// One line of text at its final position. `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub font: StandardFont,
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
}

/// The lines placed on a single page, top to bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

struct Cursor {
    setup: PageSetup,
    pages: Vec<PageLayout>,
    current: PageLayout,
    y: f32,
}

impl Cursor {
    fn new(setup: PageSetup) -> Self {
        Self {
            setup,
            pages: Vec::new(),
            current: PageLayout::default(),
            y: setup.frame_top(),
        }
    }

    fn at_page_top(&self) -> bool {
        self.current.is_empty()
    }

    fn fits(&self, advance: f32) -> bool {
        self.y - advance >= self.setup.frame_bottom()
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = self.setup.frame_top();
    }

    fn finish(mut self) -> Vec<PageLayout> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Lays out `story` with `styles` on pages described by `setup`.
///
/// # Errors
/// Returns the story's or the page setup's validation error, and
/// [`WillError::InvalidInput`] when a line is taller than the whole frame.
pub fn flow(story: &Story, styles: &StyleSheet, setup: &PageSetup) -> WillResult<Vec<PageLayout>> {
    story.validate()?;
    setup.validate()?;

    let frame_width = setup.frame_width();
    let mut cursor = Cursor::new(*setup);

    for block in story.blocks() {
        match block {
            Block::Spacer { height } => {
                if cursor.fits(*height) {
                    cursor.y -= height;
                } else if !cursor.at_page_top() {
                    cursor.break_page();
                }
            }
            Block::Paragraph { text, style } => {
                let style = styles.get(*style);
                let lines = wrap_text(text, style.font, style.font_size, frame_width);
                if lines.is_empty() {
                    continue;
                }

                if !cursor.at_page_top() {
                    cursor.y -= style.space_before;
                }

                for (i, line) in lines.into_iter().enumerate() {
                    let mut advance = if i == 0 { style.font_size } else { style.leading };
                    if !cursor.fits(advance) {
                        if !cursor.at_page_top() {
                            cursor.break_page();
                            advance = style.font_size;
                        }
                        if !cursor.fits(advance) {
                            return Err(WillError::InvalidInput {
                                parameter: "page.height".to_string(),
                                reason: format!(
                                    "a {}pt {} line does not fit in a {}pt frame",
                                    style.font_size,
                                    style.name,
                                    setup.frame_height()
                                ),
                            });
                        }
                    }
                    cursor.y -= advance;

                    let width = measure_text(&line, style.font, style.font_size);
                    let x = match style.alignment {
                        Alignment::Left => setup.margin_left,
                        Alignment::Center => {
                            (setup.margin_left + (frame_width - width) / 2.0).max(setup.margin_left)
                        }
                    };

                    cursor.current.lines.push(PlacedLine {
                        text: line,
                        font: style.font,
                        font_size: style.font_size,
                        x,
                        y: cursor.y,
                    });
                }

                cursor.y -= (style.leading - style.font_size) + style.space_after;
            }
        }
    }

    let pages = cursor.finish();
    debug!(
        "Laid out {} block(s) on {} page(s)",
        story.len(),
        pages.len()
    );
    Ok(pages)
}

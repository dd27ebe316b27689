//! Paragraph styles and the sample style sheet.

use once_cell::sync::Lazy;

use crate::layout::StandardFont;

/// Style identifier carried by each paragraph block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Title,
    Heading,
    Normal,
}

/// Horizontal placement of each line within the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// Typographic settings for one kind of paragraph. Sizes are in points.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub name: &'static str,
    pub font: StandardFont,
    pub font_size: f32,
    /// Baseline-to-baseline distance
    pub leading: f32,
    /// Ignored for the first block on a page
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: Alignment,
}

/// One [`ParagraphStyle`] per [`StyleKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub title: ParagraphStyle,
    pub heading: ParagraphStyle,
    pub normal: ParagraphStyle,
}

static SAMPLE: Lazy<StyleSheet> = Lazy::new(|| StyleSheet {
    title: ParagraphStyle {
        name: "CustomTitle",
        font: StandardFont::HelveticaBold,
        font_size: 16.0,
        leading: 22.0,
        space_before: 0.0,
        space_after: 30.0,
        alignment: Alignment::Center,
    },
    heading: ParagraphStyle {
        name: "CustomHeading",
        font: StandardFont::HelveticaBold,
        font_size: 14.0,
        leading: 18.0,
        space_before: 12.0,
        space_after: 12.0,
        alignment: Alignment::Left,
    },
    normal: ParagraphStyle {
        name: "CustomNormal",
        font: StandardFont::Helvetica,
        font_size: 12.0,
        leading: 12.0,
        space_before: 0.0,
        space_after: 6.0,
        alignment: Alignment::Left,
    },
});

impl StyleSheet {
    /// The style sheet the sample will is typeset with.
    pub fn sample() -> &'static StyleSheet {
        &SAMPLE
    }

    pub fn get(&self, kind: StyleKind) -> &ParagraphStyle {
        match kind {
            StyleKind::Title => &self.title,
            StyleKind::Heading => &self.heading,
            StyleKind::Normal => &self.normal,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::sample().clone()
    }
}

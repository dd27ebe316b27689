//! Content blocks and the story they form.
//!
//! A [`Story`] is the ordered list of [`Block`]s handed to the layout engine.
//! The fixed will text lives in [`will`]; paragraph styling lives in [`style`].

pub mod style;
pub mod will;

pub use style::{Alignment, ParagraphStyle, StyleKind, StyleSheet};
pub use will::{sample_will_story, Beneficiary, SAMPLE_BENEFICIARIES, SAMPLE_TOTALS};

use crate::error::{WillError, WillResult};

/// One unit appended to the layout sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Styled text, wrapped to the frame width
    Paragraph { text: String, style: StyleKind },

    /// Blank vertical space, in points
    Spacer { height: f32 },
}

impl Block {
    /// Returns the paragraph text, or `None` for a spacer.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Paragraph { text, .. } => Some(text),
            Self::Spacer { .. } => None,
        }
    }
}

/// Ordered sequence of content blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Story {
    blocks: Vec<Block>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a paragraph.
    pub fn paragraph(&mut self, text: impl Into<String>, style: StyleKind) -> &mut Self {
        self.blocks.push(Block::Paragraph {
            text: text.into(),
            style,
        });
        self
    }

    /// Appends a spacer of `height` points.
    pub fn spacer(&mut self, height: f32) -> &mut Self {
        self.blocks.push(Block::Spacer { height });
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over paragraph texts in story order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(Block::text)
    }

    /// Checks that the story can be laid out.
    ///
    /// # Errors
    /// [`WillError::EmptyStory`] when there are no blocks, and
    /// [`WillError::InvalidInput`] for a spacer whose height is negative or
    /// not finite.
    pub fn validate(&self) -> WillResult<()> {
        if self.blocks.is_empty() {
            return Err(WillError::EmptyStory);
        }

        for (index, block) in self.blocks.iter().enumerate() {
            if let Block::Spacer { height } = block {
                if !height.is_finite() || *height < 0.0 {
                    return Err(WillError::InvalidInput {
                        parameter: format!("blocks[{}].height", index),
                        reason: format!("spacer height must be a non-negative number, got {}", height),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_keeps_append_order() {
        let mut story = Story::new();
        story
            .paragraph("first", StyleKind::Title)
            .spacer(10.0)
            .paragraph("second", StyleKind::Normal);

        assert_eq!(story.len(), 3);
        assert_eq!(story.texts().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(story.blocks()[1], Block::Spacer { height: 10.0 });
    }

    #[test]
    fn test_empty_story_is_rejected() {
        assert!(matches!(Story::new().validate(), Err(WillError::EmptyStory)));
    }

    #[test]
    fn test_negative_spacer_is_rejected() {
        let mut story = Story::new();
        story.paragraph("text", StyleKind::Normal).spacer(-1.0);

        match story.validate() {
            Err(WillError::InvalidInput { parameter, .. }) => {
                assert_eq!(parameter, "blocks[1].height")
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_spacer_is_rejected() {
        let mut story = Story::new();
        story.spacer(f32::NAN);
        assert!(story.validate().is_err());
    }
}

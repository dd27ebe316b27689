//! Glyph widths for the standard-14 faces the will is set in.
//!
//! Widths are in 1/1000 of the font size, taken from the Adobe AFM files.
//! Characters outside the tables fall back to the face's default width.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Built-in PDF fonts used by the style sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// PostScript name of the face.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }
}

struct FontMetrics {
    widths: HashMap<char, u16>,
    default_width: u16,
}

impl FontMetrics {
    fn new(default_width: u16) -> Self {
        Self {
            widths: HashMap::new(),
            default_width,
        }
    }

    fn with_widths(mut self, widths: &[(char, u16)]) -> Self {
        self.widths.extend(widths.iter().copied());
        self
    }

    fn char_width(&self, ch: char) -> u16 {
        self.widths.get(&ch).copied().unwrap_or(self.default_width)
    }
}

static HELVETICA: Lazy<FontMetrics> = Lazy::new(|| {
    FontMetrics::new(556).with_widths(&[
        (' ', 278), ('!', 278), ('"', 355), ('#', 556), ('$', 556), ('%', 889),
        ('&', 667), ('\'', 191), ('(', 333), (')', 333), ('*', 389), ('+', 584),
        (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
        ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
        ('8', 556), ('9', 556), (':', 278), (';', 278), ('<', 584), ('=', 584),
        ('>', 584), ('?', 556), ('@', 1015), ('A', 667), ('B', 667), ('C', 722),
        ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
        ('J', 500), ('K', 667), ('L', 556), ('M', 833), ('N', 722), ('O', 778),
        ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
        ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 278),
        ('\\', 278), (']', 278), ('^', 469), ('_', 556), ('`', 333), ('a', 556),
        ('b', 556), ('c', 500), ('d', 556), ('e', 556), ('f', 278), ('g', 556),
        ('h', 556), ('i', 222), ('j', 222), ('k', 500), ('l', 222), ('m', 833),
        ('n', 556), ('o', 556), ('p', 556), ('q', 556), ('r', 333), ('s', 500),
        ('t', 278), ('u', 556), ('v', 500), ('w', 722), ('x', 500), ('y', 500),
        ('z', 500), ('{', 334), ('|', 260), ('}', 334), ('~', 584), ('\u{2022}', 350),
    ])
});

static HELVETICA_BOLD: Lazy<FontMetrics> = Lazy::new(|| {
    FontMetrics::new(611).with_widths(&[
        (' ', 278), ('!', 333), ('"', 474), ('#', 556), ('$', 556), ('%', 889),
        ('&', 722), ('\'', 238), ('(', 333), (')', 333), ('*', 389), ('+', 584),
        (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
        ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
        ('8', 556), ('9', 556), (':', 333), (';', 333), ('<', 584), ('=', 584),
        ('>', 584), ('?', 611), ('@', 975), ('A', 722), ('B', 722), ('C', 722),
        ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
        ('J', 556), ('K', 722), ('L', 611), ('M', 833), ('N', 722), ('O', 778),
        ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
        ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 333),
        ('\\', 278), (']', 333), ('^', 584), ('_', 556), ('`', 333), ('a', 556),
        ('b', 611), ('c', 556), ('d', 611), ('e', 556), ('f', 333), ('g', 611),
        ('h', 611), ('i', 278), ('j', 278), ('k', 556), ('l', 278), ('m', 889),
        ('n', 611), ('o', 611), ('p', 611), ('q', 611), ('r', 389), ('s', 556),
        ('t', 333), ('u', 611), ('v', 556), ('w', 778), ('x', 556), ('y', 556),
        ('z', 500), ('{', 389), ('|', 280), ('}', 389), ('~', 584), ('\u{2022}', 350),
    ])
});

fn metrics(font: StandardFont) -> &'static FontMetrics {
    match font {
        StandardFont::Helvetica => &HELVETICA,
        StandardFont::HelveticaBold => &HELVETICA_BOLD,
    }
}

/// Width of `text` in points when set in `font` at `font_size`.
pub fn measure_text(text: &str, font: StandardFont, font_size: f32) -> f32 {
    let metrics = metrics(font);
    let units: u32 = text.chars().map(|ch| u32::from(metrics.char_width(ch))).sum();
    units as f32 / 1000.0 * font_size
}

/// Breaks `text` into lines no wider than `max_width`.
///
/// Runs of whitespace collapse to a single space. A word wider than
/// `max_width` is kept whole on its own line. Empty input yields no lines.
pub fn wrap_text(text: &str, font: StandardFont, font_size: f32, max_width: f32) -> Vec<String> {
    let space = measure_text(" ", font, font_size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = measure_text(word, font, font_size);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_text_helvetica() {
        // H = 722, e = 556, l = 222, l = 222, o = 556
        let width = measure_text("Hello", StandardFont::Helvetica, 12.0);
        assert!((width - 27.336).abs() < 0.01);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = measure_text("Beneficiary", StandardFont::Helvetica, 14.0);
        let bold = measure_text("Beneficiary", StandardFont::HelveticaBold, 14.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_unknown_char_uses_default_width() {
        let width = measure_text("\u{00e9}", StandardFont::Helvetica, 10.0);
        assert!((width - 5.56).abs() < 0.001);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_text(text, StandardFont::Helvetica, 12.0, 100.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measure_text(line, StandardFont::Helvetica, 12.0) <= 100.0, "{}", line);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_keeps_overlong_word() {
        let address = "0x1234567890123456789012345678901234567890";
        let lines = wrap_text(address, StandardFont::Helvetica, 12.0, 50.0);
        assert_eq!(lines, vec![address.to_string()]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let lines = wrap_text("  NFT   Count:\t2 ", StandardFont::Helvetica, 12.0, 500.0);
        assert_eq!(lines, vec!["NFT Count: 2".to_string()]);
        assert!(wrap_text("   ", StandardFont::Helvetica, 12.0, 500.0).is_empty());
    }

    #[test]
    fn test_pdf_names() {
        assert_eq!(StandardFont::Helvetica.pdf_name(), "Helvetica");
        assert_eq!(StandardFont::HelveticaBold.pdf_name(), "Helvetica-Bold");
    }
}

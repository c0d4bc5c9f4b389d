//! Styled text lines for console output.

use crate::types::PieceKind;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-span styling. `fg: None` keeps the terminal's own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl SpanStyle {
    pub const PLAIN: SpanStyle = SpanStyle {
        fg: None,
        bold: false,
        dim: false,
    };

    pub const fn fg(rgb: Rgb) -> Self {
        Self {
            fg: Some(rgb),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

pub const ERROR_FG: Rgb = Rgb::new(220, 80, 80);
pub const OK_FG: Rgb = Rgb::new(100, 220, 120);

/// Display color of a piece symbol.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(text, SpanStyle::PLAIN)
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self::new().with(text, style)
    }

    pub fn with(mut self, text: impl Into<String>, style: SpanStyle) -> Self {
        self.push(text, style);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, style: SpanStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        // Merge with the previous span when the style matches.
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.text.push_str(&text);
                return;
            }
        }
        self.spans.push(Span { text, style });
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Text without styling
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_merges_equal_styles() {
        let mut line = Line::plain("a");
        line.push("b", SpanStyle::PLAIN);
        line.push("c", SpanStyle::fg(OK_FG));
        line.push("", SpanStyle::PLAIN);
        assert_eq!(line.spans().len(), 2);
        assert_eq!(line.text(), "abc");
    }

    #[test]
    fn piece_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(piece_color(*a), piece_color(*b));
            }
        }
    }

    #[test]
    fn style_builders() {
        assert!(SpanStyle::PLAIN.is_plain());
        let s = SpanStyle::fg(ERROR_FG).bold();
        assert!(s.bold && !s.dim && !s.is_plain());
        assert!(SpanStyle::PLAIN.dim().dim);
    }
}

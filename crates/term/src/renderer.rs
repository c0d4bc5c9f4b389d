//! ConsoleRenderer: writes styled lines to a terminal.
//!
//! Output is plain scrolling text (no alternate screen, no raw mode) so it
//! behaves the same on a terminal and when piped.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::style::{Line, Rgb, SpanStyle};

pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    color: bool,
}

impl ConsoleRenderer {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            color,
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Write lines, each followed by a newline.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn draw_line(&mut self, line: &Line) -> Result<()> {
        self.draw(std::slice::from_ref(line))
    }

    /// Write a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode lines into `out`, with crossterm style commands when `color` is set.
///
/// This builds the byte stream without writing to the terminal.
pub fn encode_lines_into(lines: &[Line], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        for span in line.spans() {
            let styled = color && !span.style.is_plain();
            if styled {
                apply_style_into(out, span.style)?;
            }
            out.queue(Print(span.text.as_str()))?;
            if styled {
                out.queue(ResetColor)?;
                out.queue(SetAttribute(Attribute::Reset))?;
            }
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: SpanStyle) -> Result<()> {
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

//! Terminal rendering of bitmaps.
//!
//! Two modes:
//! - ASCII: one character per cell, `#` set and ` ` clear
//! - Unicode: half-block characters (▀ ▄ █) packing two rows per line

use crate::bitmap::Bitmap;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// One ASCII character per cell (widest compatibility).
    #[default]
    Ascii,
    /// Unicode half blocks, two rows per line.
    UnicodeHalfBlock,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    set_char: char,
    clear_char: char,
    invert: bool,
    border: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: TerminalMode::default(),
            set_char: '#',
            clear_char: ' ',
            invert: false,
            border: false,
        }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Characters for set and clear cells in ASCII mode.
    #[must_use]
    pub fn chars(mut self, set: char, clear: char) -> Self {
        self.set_char = set;
        self.clear_char = clear;
        self
    }

    /// Swap set and clear cells.
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Frame the output with a box border.
    #[must_use]
    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Render a bitmap to a string, one line per output row.
    #[must_use]
    pub fn render(&self, bitmap: &Bitmap) -> String {
        let lines = match self.mode {
            TerminalMode::Ascii => self.render_ascii(bitmap),
            TerminalMode::UnicodeHalfBlock => self.render_half_block(bitmap),
        };

        let mut output = String::new();
        let width = bitmap.width() as usize;
        if self.border {
            let _ = writeln!(output, "+{}+", "-".repeat(width));
        }
        for line in lines {
            if self.border {
                let _ = writeln!(output, "|{line}|");
            } else {
                output.push_str(&line);
                output.push('\n');
            }
        }
        if self.border {
            let _ = writeln!(output, "+{}+", "-".repeat(width));
        }
        output
    }

    fn render_ascii(&self, bitmap: &Bitmap) -> Vec<String> {
        (0..bitmap.height())
            .map(|row| {
                (0..bitmap.width())
                    .map(|col| {
                        if self.cell(bitmap, col, row) {
                            self.set_char
                        } else {
                            self.clear_char
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn render_half_block(&self, bitmap: &Bitmap) -> Vec<String> {
        (0..bitmap.height())
            .step_by(2)
            .map(|row| {
                (0..bitmap.width())
                    .map(|col| {
                        let top = self.cell(bitmap, col, row);
                        let bottom = self.cell(bitmap, col, row + 1);
                        match (top, bottom) {
                            (true, true) => '█',
                            (true, false) => '▀',
                            (false, true) => '▄',
                            (false, false) => ' ',
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Cell value after inversion; rows past the bottom edge read as clear.
    fn cell(&self, bitmap: &Bitmap, col: u32, row: u32) -> bool {
        bitmap.get(col, row).is_some_and(|set| set != self.invert)
    }

    /// Write output directly to stdout.
    pub fn print(&self, bitmap: &Bitmap) {
        print!("{}", self.render(bitmap));
    }
}

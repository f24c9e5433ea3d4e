//! Terminal output utilities.
//!
//! Box drawing into a [`Frame`], ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREY: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// Lines of boxed output, printed in one go.
///
/// Lines end in `\r\n` when printed so a frame renders the same with raw mode
/// on or off.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Box top with optional title: ┌─ Title ───────────────────────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        let line = if title.is_empty() {
            format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            format!("┌{}{}┐", title_part, "─".repeat(remaining))
        };
        self.lines.push(line);
        self
    }

    /// Box content line: │ content                                        │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
        self
    }

    /// Centered box content line: │          content          │
    pub fn line_center(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Horizontal rule (box style).
    pub fn rule(&mut self) -> &mut Self {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Box bottom: └───────────────────────────────────────────────────────┘
    pub fn bottom(&mut self) -> &mut Self {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Help option with flag and description, wrapping the description.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let flag_col = 28;
        let desc_col = inner_width - flag_col;

        let flag_padded = format!("{:<width$}", flag, width = flag_col);

        let mut wrapped: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in desc.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                wrapped.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            wrapped.push(current);
        }

        let mut rows = wrapped.iter();
        let first = rows.next().map(String::as_str).unwrap_or("");
        self.line(&format!("{flag_padded}{first}"));
        let indent = " ".repeat(flag_col);
        for row in rows {
            self.line(&format!("{indent}{row}"));
        }
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str("\r\n");
        }
        out
    }

    pub fn print(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = out.write_all(self.render().as_bytes());
        let _ = out.flush();
    }
}

/// Display width, skipping ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

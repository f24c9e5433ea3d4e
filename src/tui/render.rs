//! Drawing the widget.

use crate::pass::MAX_LENGTH;
use crate::terminal::{Frame, GREY, RED, RESET, REVERSE, clear};
use crate::widget::{Messages, WidgetState, error_text};

/// Slider track for a length: one filled cell per character.
pub fn slider(length: usize) -> String {
    let filled = length.min(MAX_LENGTH);
    format!("{}{}", "█".repeat(filled), "·".repeat(MAX_LENGTH - filled))
}

pub fn widget_frame(state: &WidgetState, messages: &Messages, source: &str) -> Frame {
    let mut frame = Frame::new();
    frame.top("Password Generator").blank();

    frame.line(&format!(
        "  {REVERSE} {:<width$} {RESET}  c) copy",
        state.password,
        width = MAX_LENGTH
    ));
    match state.error {
        Some(error) => frame.line(&format!("  {RED}{}{RESET}", error_text(messages, error))),
        None => frame.blank(),
    };

    frame
        .line(&format!("  Character length {}", state.config.length()))
        .line(&format!("  ←  {}  →", slider(state.config.length())))
        .blank();

    for (i, option) in state.config.classes.iter().enumerate() {
        let mark = if option.checked { "x" } else { " " };
        frame.line(&format!("  {}) [{}] {}", i + 1, mark, option.label));
    }

    frame
        .blank()
        .rule()
        .line_center("Enter) generate  c) copy  h) help  q) quit")
        .line_center(&format!("{GREY}source: {source}{RESET}"))
        .bottom();
    frame
}

pub fn draw(state: &WidgetState, messages: &Messages, source: &str) {
    clear();
    widget_frame(state, messages, source).print();
}

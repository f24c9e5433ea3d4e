//! Password generator widget.
//!
//! [`widget::PasswordBuilder`] owns the widget state (length, character
//! classes, current password, error banner) and calls out to a clipboard and
//! a notification surface. [`tui`] draws it in the terminal, [`cli`] drives it
//! from command-line flags.

pub mod cli;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
pub mod tui;
pub mod widget;

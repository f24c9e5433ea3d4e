//! The password widget and the collaborators it calls into.

mod builder;
pub mod clipboard;
mod messages;

pub use builder::{PasswordBuilder, WidgetState, copy_text, error_text};
pub use clipboard::{Clipboard, ClipboardError, Completion, Notifier, SystemClipboard};
pub use messages::Messages;

//! Clipboard and notification collaborators.

use std::fmt;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

/// Single-shot completion for a clipboard write.
pub type Completion<'a> = Box<dyn FnOnce(Result<(), ClipboardError>) + 'a>;

/// Accepts a string and reports when the write settles.
///
/// The completion borrows the caller's notifier, so it cannot outlive
/// `write_text`. A provider either settles the write before returning or
/// drops `done`, and a dropped completion never reports the copy.
pub trait Clipboard {
    /// Start writing `text`. `done` runs at most once.
    fn write_text<'a>(&mut self, text: &str, done: Completion<'a>);
}

/// Shows a plain message to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<F: FnMut(&str)> Notifier for F {
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    Unavailable(String),
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(e) => write!(f, "clipboard unavailable: {e}"),
            ClipboardError::Write(e) => write!(f, "clipboard write failed: {e}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// System clipboard via copypasta.
///
/// The context is opened on first use and kept, since on X11 the contents
/// only stay available while the owning context is alive.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the context now instead of on the first write.
    pub fn connect() -> Result<Self, ClipboardError> {
        let mut clipboard = Self::new();
        clipboard.context()?;
        Ok(clipboard)
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no context".into()))
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // Reading back forces the selection owner to serve the new contents
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text<'a>(&mut self, text: &str, done: Completion<'a>) {
        done(self.write(text));
    }
}

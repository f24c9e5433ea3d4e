//! CLI context - bundles settings and flags for one run.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts, quiet};
use crate::pass::ClassOptions;
use crate::rand::{IndexSource, Rand, SourceKind};
use crate::settings::Settings;
use crate::tui;
use crate::widget::{Clipboard, Messages, Notifier, SystemClipboard, copy_text};

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

const EMPTY_CHARSET: &str = "The selected character classes contain no characters.";

/// Early exit carrying the process exit code. `Done(0)` is not an error.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub i32);

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        let settings = settings_from(&flags);
        Ok(Self { settings, flags })
    }

    /// Run CLI. Returns `Err(Done)` for early exits and failures.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);

        if self.settings.interactive {
            return tui::run(&self.settings).map_err(|e| {
                prompts::error(&format!("Terminal error: {e}"));
                Done(EXIT_FAILURE)
            });
        }

        let mut rng = open_source(self.settings.source);
        let mut clipboard = self.connect_clipboard()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.generate_output(
            &mut *rng,
            clipboard.as_mut().map(|c| c as &mut dyn Clipboard),
            &mut out,
        )
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            tui::help_frame().print();
            return Err(Done(0));
        }
        if self.flags.version {
            println!("passwidget {}", env!("CARGO_PKG_VERSION"));
            return Err(Done(0));
        }
        Ok(())
    }

    /// Open the system clipboard for `-b`, or `None` when printing.
    fn connect_clipboard(&self) -> Result<Option<SystemClipboard>, Done> {
        if !self.settings.to_clipboard {
            return Ok(None);
        }
        match SystemClipboard::connect() {
            Ok(c) => Ok(Some(c)),
            Err(e) if prompts::clipboard_fallback_prompt(&e.to_string()) => Ok(None),
            Err(_) => Err(Done(EXIT_FAILURE)),
        }
    }

    /// Generate passwords, then print them or copy the whole batch, one
    /// password per line.
    fn generate_output(
        &self,
        rng: &mut dyn IndexSource,
        clipboard: Option<&mut dyn Clipboard>,
        out: &mut dyn Write,
    ) -> Result<(), Done> {
        let mut builder = self.settings.password_builder();
        let messages = *builder.messages();
        let count = self.settings.number_of_passwords.max(1);

        let mut batch = String::new();
        for i in 0..count {
            if !builder.generate(&mut *rng) {
                batch.zeroize();
                prompts::error(builder.error_message().unwrap_or(EMPTY_CHARSET));
                return Err(Done(EXIT_FAILURE));
            }
            if clipboard.is_some() {
                if i > 0 {
                    batch.push('\n');
                }
                batch.push_str(builder.password());
            } else if writeln!(out, "{}", builder.password()).is_err() {
                return Err(Done(EXIT_FAILURE));
            }
        }
        let _ = out.flush();

        let Some(clipboard) = clipboard else {
            return Ok(());
        };
        let mut notifier = StatusNotifier::new(messages);
        copy_text(&batch, &messages, clipboard, &mut notifier);
        batch.zeroize();
        if notifier.copied {
            Ok(())
        } else {
            Err(Done(EXIT_FAILURE))
        }
    }
}

/// Apply flags on top of the default settings.
pub fn settings_from(flags: &CliFlags) -> Settings {
    let mut settings = Settings::default();

    if flags.selects_classes() {
        settings.config.classes = if flags.all {
            ClassOptions::all()
        } else {
            ClassOptions::only(&flags.classes)
        };
    }
    if let Some(len) = flags.length {
        settings.config.set_length(len);
    }
    if let Some(num) = flags.number {
        settings.number_of_passwords = num;
    }
    if let Some(ref symbols) = flags.symbol_set {
        settings.charset = settings.charset.with_symbols(symbols.clone());
    }

    settings.source = match (flags.seed, flags.urandom) {
        (Some(seed), _) => SourceKind::Seeded(seed),
        (None, true) => SourceKind::Urandom,
        (None, false) => SourceKind::Hardware,
    };
    settings.to_clipboard = flags.clipboard;
    settings.interactive = flags.interactive;
    settings
}

/// Open the requested source, falling back to the default generator.
pub fn open_source(kind: SourceKind) -> Box<dyn IndexSource> {
    match kind.open() {
        Ok(rng) => rng,
        Err(e) => {
            prompts::urandom_unavailable(&e.to_string());
            Box::new(Rand)
        }
    }
}

/// Routes widget notifications to the CLI status/error lines.
struct StatusNotifier {
    messages: Messages,
    copied: bool,
}

impl StatusNotifier {
    fn new(messages: Messages) -> Self {
        Self {
            messages,
            copied: false,
        }
    }
}

impl Notifier for StatusNotifier {
    fn notify(&mut self, message: &str) {
        if message == self.messages.password_copied {
            self.copied = true;
            prompts::status(message);
        } else {
            prompts::error(message);
        }
    }
}

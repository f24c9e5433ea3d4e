//! Widget state: configuration, current password, error banner.

use zeroize::Zeroize;

use super::clipboard::{Clipboard, ClipboardError, Notifier};
use super::messages::Messages;
use crate::pass::{
    self, CharacterClass, CharsetTable, GenerateError, GenerationConfig, ValidationError,
};
use crate::rand::IndexSource;

/// Everything the display surface needs to draw the widget.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    pub config: GenerationConfig,
    pub password: String,
    pub error: Option<ValidationError>,
}

type Renderer<'r> = Box<dyn FnMut(&WidgetState, &Messages) + 'r>;

/// Owns the widget state and re-renders on every change.
pub struct PasswordBuilder<'r> {
    state: WidgetState,
    table: CharsetTable,
    messages: Messages,
    renderer: Option<Renderer<'r>>,
}

impl<'r> PasswordBuilder<'r> {
    pub fn new(config: GenerationConfig, table: CharsetTable) -> Self {
        Self {
            state: WidgetState {
                config,
                ..Default::default()
            },
            table,
            messages: Messages::DEFAULT,
            renderer: None,
        }
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Install the render callback and draw once.
    pub fn on_change(&mut self, renderer: impl FnMut(&WidgetState, &Messages) + 'r) {
        self.renderer = Some(Box::new(renderer));
        self.render();
    }

    fn render(&mut self) {
        if let Some(render) = self.renderer.as_mut() {
            render(&self.state, &self.messages);
        }
    }

    /// Redraw without a state change, e.g. after a modal or a resize.
    pub fn refresh(&mut self) {
        self.render();
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.state.config
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn password(&self) -> &str {
        &self.state.password
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.state.error
    }

    /// Banner text for the current error, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.state.error.map(|e| error_text(&self.messages, e))
    }

    pub fn length(&self) -> usize {
        self.state.config.length()
    }

    pub fn set_length(&mut self, length: usize) {
        let old = self.state.config.length();
        if self.state.config.set_length(length) != old {
            self.render();
        }
    }

    pub fn set_class(&mut self, class: CharacterClass, checked: bool) {
        if self.state.config.classes.is_checked(class) != checked {
            self.state.config.classes.set(class, checked);
            self.render();
        }
    }

    pub fn toggle_class(&mut self, class: CharacterClass) -> bool {
        let checked = self.state.config.classes.toggle(class);
        self.render();
        checked
    }

    /// Check the selection, updating the error banner.
    pub fn validate(&mut self) -> bool {
        let result = pass::validate(&self.state.config);
        let error = result.err();
        if self.state.error != error {
            self.state.error = error;
            self.render();
        }
        error.is_none()
    }

    /// Replace the password with a fresh one. On validation failure the
    /// previous password is kept and the error banner is set. Checked
    /// classes with no characters leave the widget untouched.
    pub fn generate<R: IndexSource + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.validate() {
            return false;
        }
        match pass::generate(&self.state.config, &self.table, rng) {
            Ok(password) => {
                let mut old = std::mem::replace(&mut self.state.password, password);
                old.zeroize();
                self.render();
                true
            }
            Err(GenerateError::Invalid(e)) => {
                self.state.error = Some(e);
                self.render();
                false
            }
            Err(GenerateError::EmptyAlphabet) => false,
        }
    }

    /// Copy the current password. Blank passwords never reach the clipboard.
    pub fn copy(&self, clipboard: &mut dyn Clipboard, notifier: &mut dyn Notifier) {
        copy_text(&self.state.password, &self.messages, clipboard, notifier);
    }
}

impl Drop for PasswordBuilder<'_> {
    fn drop(&mut self) {
        self.state.password.zeroize();
    }
}

/// Write `text` to the clipboard once and report the outcome. Blank text
/// (empty or whitespace) is refused without touching the clipboard.
pub fn copy_text(
    text: &str,
    messages: &Messages,
    clipboard: &mut dyn Clipboard,
    notifier: &mut dyn Notifier,
) {
    if text.trim().is_empty() {
        notifier.notify(messages.empty_password);
        return;
    }

    let messages = *messages;
    clipboard.write_text(
        text,
        Box::new(move |result: Result<(), ClipboardError>| match result {
            Ok(()) => notifier.notify(messages.password_copied),
            Err(e) => notifier.notify(&format!("{}: {e}", messages.copy_failed)),
        }),
    );
}

pub fn error_text(messages: &Messages, error: ValidationError) -> &'static str {
    match error {
        ValidationError::NoOptionsSelected => messages.no_options_selected,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::pass::ClassOptions;
    use crate::rand::SeededRand;
    use crate::widget::clipboard::Completion;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<String>,
        fail: bool,
    }

    impl Clipboard for Recorder {
        fn write_text<'a>(&mut self, text: &str, done: Completion<'a>) {
            self.writes.push(text.to_owned());
            if self.fail {
                done(Err(ClipboardError::Write("denied".into())));
            } else {
                done(Ok(()));
            }
        }
    }

    fn builder(classes: ClassOptions, length: usize) -> PasswordBuilder<'static> {
        PasswordBuilder::new(GenerationConfig::new(length, classes), CharsetTable::default())
    }

    #[test]
    fn generate_without_classes_keeps_password_and_sets_error() {
        let mut b = builder(ClassOptions::none(), 10);
        assert!(!b.generate(&mut SeededRand::new(1)));
        assert_eq!(b.password(), "");
        assert_eq!(b.error_message(), Some(Messages::DEFAULT.no_options_selected));
    }

    #[test]
    fn failed_generate_keeps_previous_password() {
        let mut b = builder(ClassOptions::default(), 8);
        assert!(b.generate(&mut SeededRand::new(1)));
        let first = b.password().to_owned();

        b.set_class(CharacterClass::Lowercase, false);
        assert!(!b.generate(&mut SeededRand::new(2)));
        assert_eq!(b.password(), first);
        assert!(b.error().is_some());
    }

    #[test]
    fn successful_generate_clears_error() {
        let mut b = builder(ClassOptions::none(), 10);
        b.generate(&mut SeededRand::new(1));
        assert!(b.error().is_some());

        b.toggle_class(CharacterClass::Numbers);
        assert!(b.generate(&mut SeededRand::new(1)));
        assert_eq!(b.error(), None);
        assert_eq!(b.password().len(), 10);
        assert!(b.password().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn validate_is_idempotent_and_renders_once() {
        let renders = Rc::new(RefCell::new(0));
        let counter = renders.clone();
        let mut b = builder(ClassOptions::none(), 10);
        b.on_change(move |_, _| *counter.borrow_mut() += 1);
        assert_eq!(*renders.borrow(), 1);

        assert!(!b.validate());
        assert!(!b.validate());
        assert_eq!(*renders.borrow(), 2);
        assert_eq!(b.error(), Some(ValidationError::NoOptionsSelected));
    }

    #[test]
    fn render_sees_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let mut b = builder(ClassOptions::default(), 10);
        b.on_change(move |state, _| log.borrow_mut().push(state.config.length()));

        b.set_length(12);
        b.set_length(12);
        b.set_length(50);
        assert_eq!(*seen.borrow(), vec![10, 12, 20]);
    }

    #[test]
    fn copy_blank_password_never_touches_clipboard() {
        let mut clip = Recorder::default();
        let mut notes = Vec::new();
        let b = builder(ClassOptions::default(), 0);
        b.copy(&mut clip, &mut |m: &str| notes.push(m.to_owned()));
        assert!(clip.writes.is_empty());
        assert_eq!(notes, vec![Messages::DEFAULT.empty_password]);
    }

    #[test]
    fn copy_writes_exact_password_once() {
        let mut clip = Recorder::default();
        let mut notes = Vec::new();
        let mut b = builder(ClassOptions::all(), 16);
        b.generate(&mut SeededRand::new(3));
        b.copy(&mut clip, &mut |m: &str| notes.push(m.to_owned()));
        assert_eq!(clip.writes, vec![b.password().to_owned()]);
        assert_eq!(notes, vec![Messages::DEFAULT.password_copied]);
    }

    #[test]
    fn empty_override_changes_nothing() {
        let renders = Rc::new(RefCell::new(0));
        let counter = renders.clone();
        let mut b = PasswordBuilder::new(
            GenerationConfig::new(6, ClassOptions::all()),
            CharsetTable::default().with_symbols(""),
        );
        b.generate(&mut SeededRand::new(1));
        let before = b.password().to_owned();

        b.set_class(CharacterClass::Lowercase, false);
        b.set_class(CharacterClass::Uppercase, false);
        b.set_class(CharacterClass::Numbers, false);
        b.on_change(move |_, _| *counter.borrow_mut() += 1);

        assert!(!b.generate(&mut SeededRand::new(2)));
        assert_eq!(b.password(), before);
        assert_eq!(b.error(), None);
        assert_eq!(*renders.borrow(), 1);
    }

    /// Takes the write but never settles it.
    #[derive(Default)]
    struct Unconfirmed {
        writes: usize,
    }

    impl Clipboard for Unconfirmed {
        fn write_text<'a>(&mut self, _text: &str, done: Completion<'a>) {
            self.writes += 1;
            drop(done);
        }
    }

    #[test]
    fn unsettled_write_is_never_reported_as_copied() {
        let mut clip = Unconfirmed::default();
        let mut notes: Vec<String> = Vec::new();
        let mut b = builder(ClassOptions::default(), 6);
        b.generate(&mut SeededRand::new(4));
        b.copy(&mut clip, &mut |m: &str| notes.push(m.to_owned()));
        assert_eq!(clip.writes, 1);
        assert!(notes.is_empty());
    }

    #[test]
    fn copy_failure_is_reported_instead_of_copied() {
        let mut clip = Recorder {
            fail: true,
            ..Default::default()
        };
        let mut notes = Vec::new();
        let mut b = builder(ClassOptions::default(), 5);
        b.generate(&mut SeededRand::new(3));
        b.copy(&mut clip, &mut |m: &str| notes.push(m.to_owned()));
        assert_eq!(notes.len(), 1);
        assert!(notes[0].starts_with(Messages::DEFAULT.copy_failed));
        assert!(notes[0].contains("denied"));
    }
}

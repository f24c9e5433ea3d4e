//! Interactive terminal widget: the display and notification surfaces.

mod notify;
mod render;
mod text;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub use notify::{ModalNotifier, wait_for_key};
pub use render::{draw, slider, widget_frame};
pub use text::help_frame;

use crate::cli::open_source;
use crate::pass::CharacterClass;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, reset_terminal};
use crate::widget::SystemClipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    Shorter,
    Longer,
    Toggle(CharacterClass),
    Help,
    Quit,
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Some(Action::Shorter),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::Longer)
        }
        KeyCode::Char(c @ '1'..='4') => {
            Some(Action::Toggle(CharacterClass::ALL[c as usize - '1' as usize]))
        }
        KeyCode::Char('h') | KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Run the widget until the user quits.
pub fn run(settings: &Settings) -> io::Result<()> {
    let mut rng = open_source(settings.source);
    let source = settings.source.to_string();
    let mut clipboard = SystemClipboard::new();
    let mut builder = settings.password_builder();

    let guard = RawModeGuard::new()?;
    builder.on_change(move |state, messages| draw(state, messages, &source));

    loop {
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(..) => {
                builder.refresh();
                continue;
            }
            _ => continue,
        };

        match action_for(key) {
            Some(Action::Generate) => {
                builder.generate(&mut *rng);
            }
            Some(Action::Copy) => {
                builder.copy(&mut clipboard, &mut ModalNotifier);
                builder.refresh();
            }
            Some(Action::Shorter) => builder.set_length(builder.length().saturating_sub(1)),
            Some(Action::Longer) => builder.set_length(builder.length() + 1),
            Some(Action::Toggle(class)) => {
                builder.toggle_class(class);
            }
            Some(Action::Help) => {
                clear();
                help_frame().print();
                wait_for_key();
                builder.refresh();
            }
            Some(Action::Quit) => break,
            None => {}
        }
    }

    drop(guard);
    clear();
    reset_terminal();
    Ok(())
}

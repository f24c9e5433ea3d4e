//! Run settings: defaults with command-line overrides applied on top.

use crate::pass::{CharsetTable, GenerationConfig};
use crate::rand::SourceKind;
use crate::widget::PasswordBuilder;

#[derive(Debug, Clone)]
pub struct Settings {
    pub config: GenerationConfig,
    pub charset: CharsetTable,
    pub source: SourceKind,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub interactive: bool,
}

impl Settings {
    /// A fresh widget for these settings, with no password yet.
    pub fn password_builder<'r>(&self) -> PasswordBuilder<'r> {
        PasswordBuilder::new(self.config, self.charset.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: GenerationConfig::default(),
            charset: CharsetTable::default(),
            source: SourceKind::default(),
            number_of_passwords: 1,
            to_clipboard: false,
            interactive: false,
        }
    }
}

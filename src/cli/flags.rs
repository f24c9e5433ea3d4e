use crate::pass::CharacterClass;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub interactive: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub quiet: bool,
    pub all: bool,
    /// Classes named explicitly, in the order given.
    pub classes: Vec<CharacterClass>,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    pub symbol_set: Option<String>,
}

impl CliFlags {
    /// Whether the flags replace the default class selection.
    pub fn selects_classes(&self) -> bool {
        self.all || !self.classes.is_empty()
    }
}

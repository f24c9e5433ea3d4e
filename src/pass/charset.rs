//! Character classes and alphabet building.

use std::borrow::Cow;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// A named subset of characters that can be toggled on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Fixed order used for display and alphabet concatenation.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase",
            CharacterClass::Uppercase => "Include Uppercase",
            CharacterClass::Numbers => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClassOption {
    pub class: CharacterClass,
    pub label: &'static str,
    pub checked: bool,
}

impl CharacterClassOption {
    pub fn new(class: CharacterClass, checked: bool) -> Self {
        Self {
            class,
            label: class.label(),
            checked,
        }
    }
}

/// The four checkbox options, always in [`CharacterClass::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassOptions([CharacterClassOption; 4]);

impl ClassOptions {
    pub fn none() -> Self {
        Self(CharacterClass::ALL.map(|class| CharacterClassOption::new(class, false)))
    }

    pub fn all() -> Self {
        Self(CharacterClass::ALL.map(|class| CharacterClassOption::new(class, true)))
    }

    pub fn only(classes: &[CharacterClass]) -> Self {
        let mut options = Self::none();
        for &class in classes {
            options.set(class, true);
        }
        options
    }

    pub fn is_checked(&self, class: CharacterClass) -> bool {
        self.0[class.position()].checked
    }

    pub fn set(&mut self, class: CharacterClass, checked: bool) {
        self.0[class.position()].checked = checked;
    }

    /// Flip a class and return its new state.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let option = &mut self.0[class.position()];
        option.checked = !option.checked;
        option.checked
    }

    pub fn any_checked(&self) -> bool {
        self.0.iter().any(|o| o.checked)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterClassOption> {
        self.0.iter()
    }

    pub fn checked(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.0.iter().filter(|o| o.checked).map(|o| o.class)
    }
}

impl Default for ClassOptions {
    fn default() -> Self {
        Self::only(&[CharacterClass::Lowercase])
    }
}

/// Literal characters allowed for each class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetTable {
    pub lowercase: Cow<'static, str>,
    pub uppercase: Cow<'static, str>,
    pub numbers: Cow<'static, str>,
    pub symbols: Cow<'static, str>,
}

impl CharsetTable {
    pub fn chars(&self, class: CharacterClass) -> &str {
        match class {
            CharacterClass::Lowercase => &self.lowercase,
            CharacterClass::Uppercase => &self.uppercase,
            CharacterClass::Numbers => &self.numbers,
            CharacterClass::Symbols => &self.symbols,
        }
    }

    pub fn with_symbols(mut self, symbols: impl Into<Cow<'static, str>>) -> Self {
        self.symbols = symbols.into();
        self
    }
}

impl Default for CharsetTable {
    fn default() -> Self {
        Self {
            lowercase: Cow::Borrowed(LOWERCASE),
            uppercase: Cow::Borrowed(UPPERCASE),
            numbers: Cow::Borrowed(NUMBERS),
            symbols: Cow::Borrowed(SYMBOLS),
        }
    }
}

/// Concatenate the characters of every checked class in class order.
pub fn build(options: &ClassOptions, table: &CharsetTable) -> Vec<char> {
    options
        .checked()
        .flat_map(|class| table.chars(class).chars())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_checks_lowercase_only() {
        let options = ClassOptions::default();
        let checked: Vec<_> = options.checked().collect();
        assert_eq!(checked, vec![CharacterClass::Lowercase]);
    }

    #[test]
    fn options_keep_fixed_order_and_labels() {
        let labels: Vec<_> = ClassOptions::none().iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            [
                "Include Lowercase",
                "Include Uppercase",
                "Include Numbers",
                "Include Symbols"
            ]
        );
    }

    #[test]
    fn toggle_flips_one_class() {
        let mut options = ClassOptions::none();
        assert!(options.toggle(CharacterClass::Numbers));
        assert!(options.is_checked(CharacterClass::Numbers));
        assert!(!options.is_checked(CharacterClass::Symbols));
        assert!(!options.toggle(CharacterClass::Numbers));
        assert!(!options.any_checked());
    }

    #[test]
    fn alphabet_follows_class_order_not_selection_order() {
        let options = ClassOptions::only(&[CharacterClass::Symbols, CharacterClass::Numbers]);
        let alphabet: String = build(&options, &CharsetTable::default()).into_iter().collect();
        assert_eq!(alphabet, format!("{NUMBERS}{SYMBOLS}"));
    }

    #[test]
    fn empty_selection_gives_empty_alphabet() {
        assert!(build(&ClassOptions::none(), &CharsetTable::default()).is_empty());
    }

    #[test]
    fn full_alphabet_size() {
        let alphabet = build(&ClassOptions::all(), &CharsetTable::default());
        assert_eq!(alphabet.len(), 26 + 26 + 10 + SYMBOLS.len());
    }

    #[test]
    fn symbols_override() {
        let table = CharsetTable::default().with_symbols("#!".to_string());
        let options = ClassOptions::only(&[CharacterClass::Symbols]);
        assert_eq!(build(&options, &table), vec!['#', '!']);
    }
}

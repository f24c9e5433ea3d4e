//! Password generation.

use std::fmt;

use zeroize::Zeroize;

use super::charset::{self, CharsetTable, ClassOptions};
use crate::rand::IndexSource;

pub const MAX_LENGTH: usize = 20;
pub const DEFAULT_LENGTH: usize = 10;

/// Length plus enabled character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    pub classes: ClassOptions,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassOptions) -> Self {
        Self {
            length: length.min(MAX_LENGTH),
            classes,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the length, clamped to [`MAX_LENGTH`]. Returns the stored value.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = length.min(MAX_LENGTH);
        self.length
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, ClassOptions::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NoOptionsSelected,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoOptionsSelected => f.write_str("no character class selected"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why [`generate`] produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    Invalid(ValidationError),
    /// Every checked class maps to an empty character set.
    EmptyAlphabet,
}

impl From<ValidationError> for GenerateError {
    fn from(e: ValidationError) -> Self {
        GenerateError::Invalid(e)
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Invalid(e) => e.fmt(f),
            GenerateError::EmptyAlphabet => f.write_str("checked classes have no characters"),
        }
    }
}

impl std::error::Error for GenerateError {}

pub fn validate(config: &GenerationConfig) -> Result<(), ValidationError> {
    if config.classes.any_checked() {
        Ok(())
    } else {
        Err(ValidationError::NoOptionsSelected)
    }
}

/// Alphabet of the checked classes, in class order.
pub fn build_alphabet(config: &GenerationConfig, table: &CharsetTable) -> String {
    charset::build(&config.classes, table).into_iter().collect()
}

/// Draw `config.length()` characters uniformly, with replacement, from the
/// alphabet of the checked classes.
pub fn generate<R: IndexSource + ?Sized>(
    config: &GenerationConfig,
    table: &CharsetTable,
    rng: &mut R,
) -> Result<String, GenerateError> {
    validate(config)?;

    let mut chars = charset::build(&config.classes, table);
    // A checked class can still be empty when its table entry was overridden
    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    let pass = (0..config.length())
        .map(|_| random_char(&chars, &mut *rng))
        .collect();
    chars.zeroize();
    Ok(pass)
}

#[inline]
fn random_char<R: IndexSource + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.index(chars.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharacterClass;
    use crate::rand::SeededRand;

    struct Script(std::vec::IntoIter<usize>);

    impl IndexSource for Script {
        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }

        fn index(&mut self, bound: usize) -> usize {
            let i = self.0.next().expect("script exhausted");
            assert!(i < bound);
            i
        }
    }

    #[test]
    fn length_is_clamped() {
        let mut config = GenerationConfig::new(99, ClassOptions::default());
        assert_eq!(config.length(), MAX_LENGTH);
        assert_eq!(config.set_length(0), 0);
        assert_eq!(config.set_length(21), 20);
    }

    #[test]
    fn default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.length(), 10);
        assert!(config.classes.is_checked(CharacterClass::Lowercase));
    }

    #[test]
    fn validate_rejects_empty_selection() {
        let config = GenerationConfig::new(10, ClassOptions::none());
        assert_eq!(validate(&config), Err(ValidationError::NoOptionsSelected));
        assert_eq!(validate(&config), Err(ValidationError::NoOptionsSelected));
    }

    #[test]
    fn characters_come_in_draw_order() {
        let config = GenerationConfig::new(4, ClassOptions::only(&[CharacterClass::Numbers]));
        let mut rng = Script(vec![3, 1, 4, 1].into_iter());
        let pass = generate(&config, &CharsetTable::default(), &mut rng).unwrap();
        assert_eq!(pass, "3141");
    }

    #[test]
    fn zero_length_is_empty() {
        let config = GenerationConfig::new(0, ClassOptions::all());
        let pass = generate(&config, &CharsetTable::default(), &mut SeededRand::new(1)).unwrap();
        assert_eq!(pass, "");
    }

    #[test]
    fn every_length_in_range() {
        let table = CharsetTable::default();
        let mut rng = SeededRand::new(7);
        for length in 0..=MAX_LENGTH {
            let config = GenerationConfig::new(length, ClassOptions::all());
            let pass = generate(&config, &table, &mut rng).unwrap();
            assert_eq!(pass.chars().count(), length);
        }
    }

    #[test]
    fn drawn_only_from_checked_classes() {
        let table = CharsetTable::default();
        let config = GenerationConfig::new(
            20,
            ClassOptions::only(&[CharacterClass::Uppercase, CharacterClass::Symbols]),
        );
        let alphabet = build_alphabet(&config, &table);
        let mut rng = SeededRand::new(99);
        for _ in 0..200 {
            let pass = generate(&config, &table, &mut rng).unwrap();
            assert!(pass.chars().all(|c| alphabet.contains(c)), "{pass}");
        }
    }

    #[test]
    fn empty_override_is_not_a_missing_selection() {
        let table = CharsetTable::default().with_symbols("");
        let config = GenerationConfig::new(5, ClassOptions::only(&[CharacterClass::Symbols]));
        assert!(validate(&config).is_ok());
        assert_eq!(
            generate(&config, &table, &mut SeededRand::new(0)),
            Err(GenerateError::EmptyAlphabet)
        );
    }

    #[test]
    fn unchecked_selection_is_reported_through_generate() {
        let config = GenerationConfig::new(5, ClassOptions::none());
        assert_eq!(
            generate(&config, &CharsetTable::default(), &mut SeededRand::new(0)),
            Err(GenerateError::Invalid(ValidationError::NoOptionsSelected))
        );
    }
}

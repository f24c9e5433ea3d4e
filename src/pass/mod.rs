//! Password construction: character classes, validation, generation.

pub mod charset;
mod generate;

pub use charset::{CharacterClass, CharacterClassOption, CharsetTable, ClassOptions};
pub use generate::{
    DEFAULT_LENGTH, GenerateError, GenerationConfig, MAX_LENGTH, ValidationError, build_alphabet,
    generate, validate,
};

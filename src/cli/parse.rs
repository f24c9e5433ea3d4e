use super::CliFlags;
use crate::pass::{CharacterClass, MAX_LENGTH};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    LengthOutOfRange(usize),
    MissingValue(String),
    UnknownArg(String),
    InvalidSymbolSet(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::LengthOutOfRange(n) => {
                write!(f, "Length {} out of range (0-{})", n, MAX_LENGTH)
            }
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::InvalidSymbolSet(s) => write!(
                f,
                "Invalid symbol set {:?}: use one or more printable ASCII characters",
                s
            ),
        }
    }
}

impl std::error::Error for ParseError {}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

/// Printable ASCII only, duplicates dropped so each symbol is drawn equally.
fn symbol_set(s: &str) -> Result<String, ParseError> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ParseError::InvalidSymbolSet(s.to_string()));
    }
    let mut set = String::with_capacity(s.len());
    for c in s.chars() {
        if !set.contains(c) {
            set.push(c);
        }
    }
    Ok(set)
}

/// Parse `args` (program name first) into flags.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-i" | "--interactive" => flags.interactive = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "-a" | "--all" => flags.all = true,
            "--lower" => flags.classes.push(CharacterClass::Lowercase),
            "--upper" => flags.classes.push(CharacterClass::Uppercase),
            "--numbers" => flags.classes.push(CharacterClass::Numbers),
            "--symbols" => flags.classes.push(CharacterClass::Symbols),
            "-l" | "--length" => {
                let len = number(value(args, &mut i)?)?;
                if len > MAX_LENGTH {
                    return Err(ParseError::LengthOutOfRange(len));
                }
                flags.length = Some(len);
            }
            "-n" | "--number" => flags.number = Some(number(value(args, &mut i)?)?),
            "--seed" => flags.seed = Some(number(value(args, &mut i)?)?),
            "--symbol-set" => flags.symbol_set = Some(symbol_set(value(args, &mut i)?)?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

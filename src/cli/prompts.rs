//! Centralized warning and status messages for CLI output.

use std::io::Write;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Status line to stderr, suppressed in quiet mode. Kept off stdout so
/// printed passwords can be piped cleanly.
pub fn status(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{GREEN}{msg}{RESET}");
    }
}

pub fn urandom_unavailable(err: &str) {
    warn(&format!("Warning: /dev/urandom unavailable ({err}), using hardware entropy"));
}

/// Ask whether to print instead when the clipboard cannot be opened.
/// Non-interactive or quiet runs fall back silently.
pub fn clipboard_fallback_prompt(err: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("{YELLOW}{err}.{RESET} Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}

//! Non-interactive command line.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done, EXIT_FAILURE, EXIT_USAGE, open_source, settings_from};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run with the process arguments and return the exit code.
pub fn run(args: &[String]) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run with --help for usage.");
            return EXIT_USAGE;
        }
    };

    match ctx.run() {
        Ok(()) => 0,
        Err(Done(code)) => code,
    }
}

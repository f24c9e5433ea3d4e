use std::env;

use passwidget::cli::{self, quiet};
use passwidget::exits;
use passwidget::settings::Settings;
use passwidget::tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 if quiet::is_interactive() => match tui::run(&Settings::default()) {
            Ok(()) => 0,
            Err(e) => {
                cli::prompts::error(&format!("Terminal error: {e}"));
                cli::EXIT_FAILURE
            }
        },
        _ => cli::run(&args),
    };

    std::process::exit(code);
}

use crate::pass::MAX_LENGTH;
use crate::terminal::Frame;

pub fn help_frame() -> Frame {
    let mut frame = Frame::new();
    frame
        .top("Passwidget")
        .line_center("Password generator widget")
        .blank()
        .line("MODES:")
        .line("  1) Interactive: run without arguments (or with -i). Toggle")
        .line("     character classes, set the length, generate and copy.")
        .line("  2) Client: pass flags to print passwords directly.")
        .blank()
        .line("USAGE:")
        .line("  passwidget [OPTIONS]")
        .blank()
        .line("OPTIONS:")
        .line(" Password:")
        .opt(
            "  -l, --length <N>",
            &format!("Characters per password, 0-{MAX_LENGTH} (default: 10)"),
        )
        .opt("  -n, --number <N>", "How many passwords to generate")
        .opt("      --lower", "Include lowercase letters")
        .opt("      --upper", "Include uppercase letters")
        .opt("      --numbers", "Include digits")
        .opt("      --symbols", "Include symbols")
        .opt("  -a, --all", "Include every character class")
        .opt("      --symbol-set <CHARS>", "Override the symbol characters (printable ASCII)")
        .line(" Output:")
        .opt("  -b, --board", "Copy the passwords to the clipboard instead of printing")
        .opt("  -q, --quiet", "Suppress warnings and status lines")
        .line(" Randomness:")
        .opt("  -u, --urandom", "Draw from /dev/urandom instead of the default generator")
        .opt("      --seed <N>", "Deterministic output for a given seed")
        .line(" Info:")
        .opt("  -i, --interactive", "Open the widget with the given options")
        .opt("  -h, --help", "Display this help message")
        .opt("  -v, --version", "Display version")
        .blank()
        .line("With no class flags only lowercase letters are used.")
        .blank()
        .line("WIDGET KEYS:")
        .line("  Enter/g generate   c copy   ←/→ length   1-4 toggle class")
        .line("  h help             q/Esc quit")
        .bottom();
    frame
}

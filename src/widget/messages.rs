//! User-facing message table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub no_options_selected: &'static str,
    pub empty_password: &'static str,
    pub password_copied: &'static str,
    /// Prefix for clipboard failures; the provider's reason follows it.
    pub copy_failed: &'static str,
}

impl Messages {
    pub const DEFAULT: Messages = Messages {
        no_options_selected: "Please select at least one option.",
        empty_password: "Nothing to copy. Generate a password first.",
        password_copied: "Password copied to clipboard.",
        copy_failed: "Could not copy password",
    };
}

impl Default for Messages {
    fn default() -> Self {
        Self::DEFAULT
    }
}

use colored::*;
use std::io::IsTerminal;

pub struct OutputStyle;

impl OutputStyle {
    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }
}

/// Turn styling on or off for the rest of the process.
///
/// Styling is only emitted when it is enabled in the configuration and stdout
/// is a terminal, so piped output stays plain text.
pub fn configure_color(enabled: bool) {
    let use_color = enabled && std::io::stdout().is_terminal();
    colored::control::set_override(use_color);
    log::debug!("color output {}", if use_color { "enabled" } else { "disabled" });
}

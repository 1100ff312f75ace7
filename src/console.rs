// Console formatting shared by the demo binaries. Returns styled strings;
// the binaries decide where to print them.

use colored::{ColoredString, Colorize};

/// `=== Title ===` in bold.
pub fn title(text: &str) -> ColoredString {
    format!("=== {} ===", text).bold()
}

/// `--- Part N: Title ---` in cyan.
pub fn section(part: usize, text: &str) -> ColoredString {
    format!("--- Part {}: {} ---", part, text).cyan()
}

/// `label: true` in green, `label: false` in red.
pub fn check(label: &str, value: bool) -> String {
    let shown = if value {
        "true".green()
    } else {
        "false".red()
    };
    format!("{}: {}", label, shown)
}

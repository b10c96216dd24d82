/// User interface and status output utilities
///
/// This module handles:
/// - Colored error reporting on stderr
/// - Context lines for `--detailed`
use std::io::Write;

/// Print colored text to stderr, with fallback to plain text
fn eprint_color(s: &str, fg: term::color::Color, use_colors: bool) {
    if !use_colors || !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(mut t) = term::stderr() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();
        true
    }
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str, use_colors: bool) {
    eprint_color("error", term::color::BRIGHT_RED, use_colors);
    eprintln!(": {}", msg);
}

/// Print a `--detailed` context line
pub fn detail(msg: &str) {
    eprintln!("suvctl: {}", msg);
}

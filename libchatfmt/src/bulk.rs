use crate::{
    colors,
    placeholders::{self, Placeholders},
};

/// Substitute placeholders and resolve colors of a single message,
/// in that order. This is what every delivery goes through.
pub fn prepare(message: &str, ph: Option<&Placeholders>) -> String {
    match ph {
        Some(ph) if !ph.is_empty() => colors::color(&placeholders::format(message, ph)),
        _ => colors::color(message),
    }
}

/// Apply placeholders to every line. Order and length are kept.
pub fn format_list<S: AsRef<str>>(lines: &[S], ph: &Placeholders) -> Vec<String> {
    lines.iter().map(|l| placeholders::format(l.as_ref(), ph)).collect()
}

/// Resolve colors of every line. Order and length are kept.
pub fn color_list<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|l| colors::color(l.as_ref())).collect()
}

/// Apply placeholders and then colors to every line, e.g. for a multi-line description.
pub fn prepare_list<S: AsRef<str>>(lines: &[S], ph: &Placeholders) -> Vec<String> {
    color_list(&format_list(lines, ph))
}

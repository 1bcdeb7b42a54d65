/*
Color code translation.

Hex tokens (&#RRGGBB) are first expanded into the legacy
sequence (&x&r&r&g&g&b&b), then all legacy tokens are
resolved into section-sign codes understood by the renderer.
 */

use dashmap::DashMap;
use lazy_static::lazy_static;
use regex::Regex;

/// Escape character of the markup
pub const COLOR_CHAR: char = '&';

/// Escape character of the resolved output
pub const SECTION_CHAR: char = '§';

/// Every code character which forms a legacy token after the escape character
pub const ALL_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

lazy_static! {
    static ref HEX_PATTERN: Regex = Regex::new(r"&#([A-Fa-f0-9]{6})").unwrap();
    static ref LEGACY_PATTERN: Regex = Regex::new(&format!("{COLOR_CHAR}[{ALL_CODES}]")).unwrap();

    /// Lowercase hex digits to their legacy expansion. Grows on demand, never evicted.
    static ref EXPANSIONS: DashMap<String, String> = DashMap::new();
}

/// Build the legacy token sequence for a lowercase 6-digit hex value.
fn expand(hex: &str) -> String {
    let mut out = String::with_capacity(2 + hex.len() * 2);
    out.push(COLOR_CHAR);
    out.push('x');
    for c in hex.chars() {
        out.push(COLOR_CHAR);
        out.push(c);
    }

    out
}

/// Get the legacy expansion of a 6-digit hex value (any case), caching it.
///
/// The cache entry guard is released before returning.
pub fn hex_expansion(hex: &str) -> String {
    let hex = hex.to_lowercase();
    if let Some(e) = EXPANSIONS.get(&hex) {
        return e.value().clone();
    }

    log::trace!("Caching expansion for hex color #{hex}");
    EXPANSIONS.entry(hex.clone()).or_insert_with(|| expand(&hex)).value().clone()
}

/// Number of distinct hex colors expanded so far in this process.
pub fn cached_expansions() -> usize {
    EXPANSIONS.len()
}

/// Replace every `&#RRGGBB` token by its legacy expansion.
/// Malformed tokens are left as they are.
pub fn expand_hex(message: &str) -> String {
    if message.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(message.len() + 16);
    let mut processed = 0;

    for caps in HEX_PATTERN.captures_iter(message) {
        let (Some(token), Some(hex)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        out.push_str(&message[processed..token.start()]);
        out.push_str(&hex_expansion(hex.as_str()));
        processed = token.end();
    }
    out.push_str(&message[processed..]);

    out
}

/// Resolve legacy tokens introduced by `alt` into section-sign codes.
///
/// An `alt` character followed by one of [`ALL_CODES`] becomes [`SECTION_CHAR`]
/// and the code is lowercased. Anything else is kept literally. The scan does not
/// jump over a resolved token, so `&&a` becomes `&§a`.
pub fn translate_alternate_color_codes(alt: char, text: &str) -> String {
    let mut b: Vec<char> = text.chars().collect();
    for i in 0..b.len().saturating_sub(1) {
        if b[i] == alt && ALL_CODES.contains(b[i + 1]) {
            b[i] = SECTION_CHAR;
            b[i + 1] = b[i + 1].to_ascii_lowercase();
        }
    }

    b.into_iter().collect()
}

/// Translate both hex and legacy color codes of the message
/// into the resolved form, ready for delivery.
pub fn color(message: &str) -> String {
    if message.is_empty() {
        return String::new();
    }

    translate_alternate_color_codes(COLOR_CHAR, &expand_hex(message))
}

/// Same as [`color`], for a message which might not be there at all.
pub fn color_opt(message: Option<&str>) -> String {
    message.map(color).unwrap_or_default()
}

/// Strip all hex and legacy color codes from the message.
///
/// Hex tokens go first, so a half-removed token can't leave legacy-looking
/// leftovers. Stray escape characters are removed as well.
pub fn remove_colors(message: &str) -> String {
    if message.is_empty() {
        return String::new();
    }

    let out = HEX_PATTERN.replace_all(message, "");
    let out = LEGACY_PATTERN.replace_all(&out, "");
    out.replace(COLOR_CHAR, "")
}

/// Same as [`remove_colors`], for a message which might not be there at all.
pub fn remove_colors_opt(message: Option<&str>) -> String {
    message.map(remove_colors).unwrap_or_default()
}

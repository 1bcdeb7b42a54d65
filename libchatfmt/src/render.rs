use crate::colors::SECTION_CHAR;

const RESET: &str = "\x1b[0m";

/// RGB of the sixteen legacy colors
fn palette(c: char) -> Option<(u8, u8, u8)> {
    Some(match c {
        '0' => (0x00, 0x00, 0x00), // black
        '1' => (0x00, 0x00, 0xaa), // dark blue
        '2' => (0x00, 0xaa, 0x00), // dark green
        '3' => (0x00, 0xaa, 0xaa), // dark aqua
        '4' => (0xaa, 0x00, 0x00), // dark red
        '5' => (0xaa, 0x00, 0xaa), // dark purple
        '6' => (0xff, 0xaa, 0x00), // gold
        '7' => (0xaa, 0xaa, 0xaa), // gray
        '8' => (0x55, 0x55, 0x55), // dark gray
        '9' => (0x55, 0x55, 0xff), // blue
        'a' => (0x55, 0xff, 0x55), // green
        'b' => (0x55, 0xff, 0xff), // aqua
        'c' => (0xff, 0x55, 0x55), // red
        'd' => (0xff, 0x55, 0xff), // light purple
        'e' => (0xff, 0xff, 0x55), // yellow
        'f' => (0xff, 0xff, 0xff), // white
        _ => return None,
    })
}

fn attr_code(c: char) -> Option<&'static str> {
    Some(match c {
        'k' => "\x1b[5m", // obfuscated, blinking is the closest a terminal has
        'l' => "\x1b[1m", // bold
        'm' => "\x1b[9m", // strikethrough
        'n' => "\x1b[4m", // underline
        'o' => "\x1b[3m", // italic
        'r' => RESET,
        _ => return None,
    })
}

fn fg(r: u8, g: u8, b: u8) -> String {
    format!("{RESET}\x1b[38;2;{r};{g};{b}m")
}

/// Read `§x§r§r§g§g§b§b` starting right after the `x`.
/// Returns the color and the amount of chars consumed.
fn hex_sequence(chars: &[char]) -> Option<((u8, u8, u8), usize)> {
    if chars.len() < 12 {
        return None;
    }

    let mut digits = String::with_capacity(6);
    for pair in chars[..12].chunks_exact(2) {
        if pair[0] != SECTION_CHAR || !pair[1].is_ascii_hexdigit() {
            return None;
        }
        digits.push(pair[1]);
    }

    let v = u32::from_str_radix(&digits, 16).ok()?;
    Some((((v >> 16) as u8, (v >> 8) as u8, v as u8), 12))
}

/// Renders resolved section-sign codes to ANSI escape codes for terminal output.
///
/// - Sixteen legacy colors `§0`..`§f` and hex colors `§x§r§r§g§g§b§b` become 24-bit
///   foreground colors. As in the game client, a color also clears the styles.
/// - Styles `§k`, `§l`, `§m`, `§n`, `§o` map to blink, bold, strikethrough, underline
///   and italic, `§r` resets.
/// - Unknown codes and broken hex sequences are rendered literally.
///
/// Output that changed any attribute ends with a reset.
/// # Example
/// ```no_run
/// let rendered = libchatfmt::render::to_ansi("§cRed §lbold§r plain");
/// println!("{}", rendered);
/// ```
pub fn to_ansi(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 16);
    let mut applied = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch != SECTION_CHAR || i + 1 >= chars.len() {
            out.push(ch);
            i += 1;
            continue;
        }

        let code = chars[i + 1].to_ascii_lowercase();
        if let Some((r, g, b)) = palette(code) {
            out.push_str(&fg(r, g, b));
            applied = true;
            i += 2;
        } else if let Some(attr) = attr_code(code) {
            out.push_str(attr);
            applied = true;
            i += 2;
        } else if code == 'x' {
            match hex_sequence(&chars[i + 2..]) {
                Some(((r, g, b), used)) => {
                    out.push_str(&fg(r, g, b));
                    applied = true;
                    i += 2 + used;
                }
                None => {
                    out.push(ch);
                    i += 1;
                }
            }
        } else {
            out.push(ch);
            i += 1;
        }
    }

    if applied && !out.ends_with(RESET) {
        out.push_str(RESET);
    }

    out
}

/// Drop all section-sign codes, leaving only the text.
pub fn to_plain(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == SECTION_CHAR && chars.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            chars.next();
            continue;
        }
        out.push(ch);
    }

    out
}

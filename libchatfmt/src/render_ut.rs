#[cfg(test)]
mod render_test {
    use crate::{colors, render};

    const RESET: &str = "\x1b[0m";

    #[test]
    fn test_legacy_color() {
        assert_eq!(render::to_ansi("§cHi"), format!("{RESET}\x1b[38;2;255;85;85mHi{RESET}"));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(render::to_ansi("§x§1§2§3§4§5§6Hi"), format!("{RESET}\x1b[38;2;18;52;86mHi{RESET}"));
    }

    #[test]
    fn test_styles_and_reset() {
        assert_eq!(render::to_ansi("§lBold§r"), format!("\x1b[1mBold{RESET}"));
        assert_eq!(render::to_ansi("§nU§oI"), format!("\x1b[4mU\x1b[3mI{RESET}"));
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(render::to_ansi("nothing to see"), "nothing to see");
        assert_eq!(render::to_ansi(""), "");
    }

    #[test]
    fn test_literal_fallbacks() {
        assert_eq!(render::to_ansi("§"), "§");
        assert_eq!(render::to_ansi("a§zb"), "a§zb");
        assert_eq!(render::to_ansi("§x!"), "§x!");
        assert_eq!(render::to_ansi("§x§1§2"), format!("§x{RESET}\x1b[38;2;0;0;170m{RESET}\x1b[38;2;0;170;0m{RESET}"));
    }

    #[test]
    fn test_colored_message_renders() {
        let out = render::to_ansi(&colors::color("&#00FF00Hi &aThere"));
        assert_eq!(out, format!("{RESET}\x1b[38;2;0;255;0mHi {RESET}\x1b[38;2;85;255;85mThere{RESET}"));
    }

    #[test]
    fn test_plain() {
        assert_eq!(render::to_plain(&colors::color("&aHello &#00FF00World&r!")), "Hello World!");
        assert_eq!(render::to_plain("§ lone"), "§ lone");
    }
}

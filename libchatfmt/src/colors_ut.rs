#[cfg(test)]
mod colors_test {
    use crate::colors::{self, COLOR_CHAR, SECTION_CHAR};

    #[test]
    fn test_expansion_layout() {
        assert_eq!(colors::hex_expansion("ff0000"), "&x&f&f&0&0&0&0");
        assert_eq!(colors::hex_expansion("1a2B3c"), "&x&1&a&2&b&3&c");
    }

    #[test]
    fn test_expansion_case_insensitive() {
        assert_eq!(colors::hex_expansion("ABCDEF"), colors::hex_expansion("abcdef"));
        assert_eq!(colors::hex_expansion("AbCdEf"), "&x&a&b&c&d&e&f");
    }

    #[test]
    fn test_expand_single_token() {
        assert_eq!(colors::expand_hex("&#FF0000Hello"), "&x&f&f&0&0&0&0Hello");
    }

    #[test]
    fn test_expand_mixed_tokens() {
        assert_eq!(colors::expand_hex("&aHello &#00FF00World"), "&aHello &x&0&0&f&f&0&0World");
    }

    #[test]
    fn test_expand_adjacent_tokens() {
        assert_eq!(colors::expand_hex("&#000000&#ffffff!"), "&x&0&0&0&0&0&0&x&f&f&f&f&f&f!");
    }

    #[test]
    fn test_expand_without_tokens() {
        for s in ["", "plain", "&aLegacy &lonly", "a & b # c", "ünïcödé &c ✓"] {
            assert_eq!(colors::expand_hex(s), s);
        }
    }

    #[test]
    fn test_expand_malformed_tokens() {
        assert_eq!(colors::expand_hex("&#FFF short"), "&#FFF short");
        assert_eq!(colors::expand_hex("&#GG0000 nonhex"), "&#GG0000 nonhex");
        assert_eq!(colors::expand_hex("#FF0000 no escape"), "#FF0000 no escape");
        assert_eq!(colors::expand_hex("& #FF0000 split"), "& #FF0000 split");
    }

    #[test]
    fn test_expand_long_run_takes_first_six() {
        assert_eq!(colors::expand_hex("&#1234567"), "&x&1&2&3&4&5&67");
    }

    #[test]
    fn test_translate_codes() {
        assert_eq!(colors::translate_alternate_color_codes('&', "&aHi &LBold"), "§aHi §lBold");
        assert_eq!(colors::translate_alternate_color_codes('&', "&x&0&0&f&f&0&0"), "§x§0§0§f§f§0§0");
    }

    #[test]
    fn test_translate_passthrough() {
        assert_eq!(colors::translate_alternate_color_codes('&', "Tom & Jerry"), "Tom & Jerry");
        assert_eq!(colors::translate_alternate_color_codes('&', "&z &g &"), "&z &g &");
        assert_eq!(colors::translate_alternate_color_codes('&', "&"), "&");
        assert_eq!(colors::translate_alternate_color_codes('&', ""), "");
    }

    #[test]
    fn test_translate_no_skip() {
        assert_eq!(colors::translate_alternate_color_codes('&', "&&a"), "&§a");
    }

    #[test]
    fn test_translate_other_alt_char() {
        assert_eq!(colors::translate_alternate_color_codes('$', "$cred &c"), "§cred &c");
    }

    #[test]
    fn test_color() {
        assert_eq!(colors::color("&aHello &#00FF00World"), "§aHello §x§0§0§f§f§0§0World");
        assert_eq!(colors::color("&#FF0000Hello"), "§x§f§f§0§0§0§0Hello");
    }

    #[test]
    fn test_color_empty() {
        assert_eq!(colors::color(""), "");
        assert_eq!(colors::color_opt(None), "");
        assert_eq!(colors::color_opt(Some("&cX")), "§cX");
    }

    #[test]
    fn test_remove_colors() {
        assert_eq!(colors::remove_colors("&#123ABCPlain &ctext"), "Plain text");
        assert_eq!(colors::remove_colors("&lBold&r and &#00ff00green"), "Bold and green");
        assert_eq!(colors::remove_colors("Tom & Jerry"), "Tom  Jerry");
        assert_eq!(colors::remove_colors_opt(None), "");
    }

    #[test]
    fn test_remove_colors_leaves_no_escape() {
        for s in ["&#12345&a", "&&&#abcdef&", "&x&1&2&3&4&5&6hex", "&#zzzzzz&q"] {
            let out = colors::remove_colors(s);
            assert!(!out.contains(COLOR_CHAR), "\"{s}\" left an escape character: \"{out}\"");
        }
    }

    #[test]
    fn test_colored_sanitized_has_no_escape() {
        let out = colors::color(&colors::remove_colors("&aHi &#FFFFFFthere &"));
        assert!(!out.contains(COLOR_CHAR));
        assert!(!out.contains(SECTION_CHAR));
        assert_eq!(out, "Hi there ");
    }
}

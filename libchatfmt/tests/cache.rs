#[cfg(test)]
mod expansion_cache_test {
    use libchatfmt::colors;
    use std::thread;

    // Single test in this binary: the cache is process-wide, so counts stay exact.
    #[test]
    fn test_cache_one_entry_per_color() {
        let before = colors::cached_expansions();

        let upper = colors::expand_hex("&#ABCDEF");
        let lower = colors::expand_hex("&#abcdef");
        let mixed = colors::expand_hex("&#AbCdEf");
        assert_eq!(upper, lower);
        assert_eq!(lower, mixed);
        assert_eq!(colors::cached_expansions(), before + 1, "Same color in any case must be cached once");

        // Many threads racing on the same few colors
        let colors_in = ["&#FF0000a", "&#ff0000b", "&#00FF00c", "&#0000ffd"];
        let results: Vec<Vec<String>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| colors_in.iter().map(|c| colors::color(c)).collect::<Vec<String>>())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for r in &results {
            assert_eq!(r, &results[0], "Every thread must see the same expansion");
        }
        assert_eq!(results[0][0], "§x§f§f§0§0§0§0a");
        assert_eq!(results[0][1], "§x§f§f§0§0§0§0b");
        assert_eq!(colors::cached_expansions(), before + 4);
    }
}

//! Property-based tests for the text helpers.

use datakit_text::{
    Criterion, Weighted, WrapOptions, close_matches, equal, indent, levenshtein_ratio, remove_ansi, same_size,
    strip_trailing_whitespace, wrap, wrap_with,
};
use proptest::prelude::*;
use unicode_width::UnicodeWidthStr;

fn prose_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{1,12}|\n|\n\n", 0..40).prop_map(|parts| parts.join(" "))
}

proptest! {
    /// Contract: with long-word breaking, no line exceeds the width.
    #[test]
    fn wrapped_lines_fit(text in prose_strategy(), width in 1..30_usize) {
        for line in wrap(&text, width).lines() {
            prop_assert!(line.width() <= width, "{:?} wider than {}", line, width);
        }
    }

    /// Contract: wrapping only moves whitespace around.
    #[test]
    fn wrap_preserves_words(text in prose_strategy(), width in 1..30_usize) {
        let options = WrapOptions::new(width).break_long_words(false);
        let wrapped = wrap_with(&text, &options);
        let before: Vec<&str> = text.split_whitespace().collect();
        let after: Vec<&str> = wrapped.split_whitespace().collect();
        prop_assert_eq!(before, after);
    }

    /// Contract: wrapping wrapped text changes nothing.
    #[test]
    fn wrap_is_idempotent(text in prose_strategy(), width in 1..30_usize) {
        let once = wrap(&text, width);
        prop_assert_eq!(wrap(&once, width), once.clone());
    }

    /// Contract: indenting keeps the line count and the content of each line.
    #[test]
    fn indent_preserves_lines(text in "[a-z \n]{0,40}", levels in 0..4_usize) {
        let indented = indent(&text, levels);
        prop_assert_eq!(indented.lines().count(), text.lines().count());
        for (before, after) in text.lines().zip(indented.lines()) {
            prop_assert_eq!(after.trim_start(), before.trim_start());
        }
    }

    /// Contract: cleanup helpers are idempotent.
    #[test]
    fn cleanup_is_idempotent(text in "[a-z \n\x1b\\[;0-9m]{0,40}") {
        let stripped = strip_trailing_whitespace(&text);
        prop_assert_eq!(strip_trailing_whitespace(&stripped), stripped.clone());

        let plain = remove_ansi(&text);
        prop_assert_eq!(remove_ansi(&plain), plain);
    }

    /// Contract: close matches are above the threshold and best first.
    #[test]
    fn close_matches_are_ranked(
        elt in "[a-c]{0,5}",
        targets in proptest::collection::vec("[a-c]{0,5}", 0..10),
        min_ratio in 0.0..1.0_f64
    ) {
        let criterion = Weighted::new().with(levenshtein_ratio).with(same_size).with(equal);
        let matches = close_matches(&elt, targets.iter().map(String::as_str), &criterion, min_ratio);
        prop_assert!(matches.iter().all(|(_, ratio)| *ratio > min_ratio));
        prop_assert!(matches.windows(2).all(|pair| pair[0].1 >= pair[1].1));
        for (target, ratio) in &matches {
            prop_assert!((criterion.score(&elt, target) - ratio).abs() < 1e-12);
        }
    }

    /// Contract: ratios stay in [0, 1] and a string matches itself perfectly.
    #[test]
    fn levenshtein_ratio_is_bounded(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        let ratio = levenshtein_ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ratio));
        prop_assert!((levenshtein_ratio(&a, &a) - 1.0).abs() < f64::EPSILON);
    }
}

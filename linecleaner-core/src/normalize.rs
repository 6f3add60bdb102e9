//! Literal substitutions and whitespace collapsing

use crate::config::SubstitutionRule;

/// Collapse every maximal run of whitespace into a single ASCII space.
///
/// Non-whitespace characters are copied through in order. Leading and
/// trailing runs are collapsed too, not removed.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            in_run = false;
            out.push(ch);
        }
    }

    out
}

/// Apply each rule to the whole text, in table order
pub fn apply_substitutions(text: &str, rules: &[SubstitutionRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| acc.replace(&rule.from, &rule.to))
}

/// Length in Unicode code points
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rule(from: &str, to: &str) -> SubstitutionRule {
        SubstitutionRule {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_collapse_mixed_runs() {
        assert_eq!(collapse_whitespace("a \t\n b"), "a b");
        assert_eq!(collapse_whitespace("  lead"), " lead");
        assert_eq!(collapse_whitespace("trail \u{3000}\u{3000}"), "trail ");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_collapse_ideographic_space() {
        // U+3000 is whitespace and becomes an ASCII space
        assert_eq!(collapse_whitespace("你好\u{3000}世界"), "你好 世界");
    }

    #[test]
    fn test_substitutions_apply_in_order() {
        let rules = vec![
            rule("<br/>", "\t"),
            rule("\r", "\t"),
            rule("\n", "\t"),
            rule("\t\t", "\t"),
        ];
        assert_eq!(apply_substitutions("a<br/>b\r\nc", &rules), "a\tb\tc");
    }

    #[test]
    fn test_substitution_creates_new_runs() {
        let rules = vec![rule("<br/>", " ")];
        let substituted = apply_substitutions("end. <br/> next", &rules);
        assert_eq!(substituted, "end.   next");
        assert_eq!(collapse_whitespace(&substituted), "end. next");
    }

    #[test]
    fn test_char_len_counts_code_points() {
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("日本語"), 3);
        assert_eq!(char_len("①②"), 2);
    }

    proptest! {
        #[test]
        fn prop_collapse_is_idempotent(text in "\\PC*") {
            let once = collapse_whitespace(&text);
            prop_assert_eq!(collapse_whitespace(&once), once.clone());
        }

        #[test]
        fn prop_collapse_preserves_non_whitespace(text in "[a-z \\t\\n\u{3000}。]{0,64}") {
            let collapsed = collapse_whitespace(&text);
            let kept: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            let kept_after: String = collapsed.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(kept, kept_after);
            prop_assert!(!collapsed.contains("  "));
        }
    }
}

//! Whitespace tokenizer for config lines.

/// Split one config line into whitespace-separated tokens.
///
/// Runs of ASCII whitespace (space, tab, CR, LF, vertical tab, form feed)
/// separate tokens; leading and trailing whitespace is discarded. There is no
/// quoting, so a token never contains whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_ascii_whitespace() || c == '\x0b')
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(
            tokenize("  Circle\t\tAlpha   1 2  "),
            vec!["Circle", "Alpha", "1", "2"]
        );
    }

    #[test]
    fn test_no_quoting() {
        assert_eq!(tokenize("Font \"a b\""), vec!["Font", "\"a", "b\""]);
    }

    #[test]
    fn test_trailing_carriage_return() {
        assert_eq!(tokenize("Circle A\r"), vec!["Circle", "A"]);
    }

    #[test]
    fn test_vertical_tab_and_form_feed_separate() {
        assert_eq!(tokenize("a\x0bb\x0cc"), vec!["a", "b", "c"]);
    }
}

//! Neutralizing backreferences in replacement templates.

/// Check that a string is non-empty and made only of ASCII digits.
pub fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Escape anything a replace engine could read as a backreference.
///
/// A `\` or `$` followed by a digit gets an extra leading backslash, as
/// does a `\` followed by another `\`. Everything else passes through.
pub fn escape_regex_replace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if (c == '\\' || c == '$')
            && let Some(&next) = chars.peek()
        {
            if c == '\\' && next == '\\' {
                out.push('\\');
            }
            if next.is_ascii_digit() {
                out.push('\\');
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits() {
        for d in '0'..='9' {
            assert!(is_digit_string(&d.to_string()), "failed on {d}");
        }
    }

    #[test]
    fn test_multi_digit_numbers() {
        for i in 10..20 {
            assert!(is_digit_string(&i.to_string()), "failed on {i}");
        }
    }

    #[test]
    fn test_not_digits() {
        assert!(!is_digit_string("a"));
        assert!(!is_digit_string("/"));
        assert!(!is_digit_string(":"));
        assert!(!is_digit_string(""));
        assert!(!is_digit_string("1a"));
        assert!(!is_digit_string("-1"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic and fullwidth digits
        assert!(!is_digit_string("٣"));
        assert!(!is_digit_string("１"));
    }

    #[test]
    fn test_plain_passthrough() {
        assert_eq!(escape_regex_replace("arst"), "arst");
        assert_eq!(escape_regex_replace("ar\\st"), "ar\\st");
        assert_eq!(escape_regex_replace(""), "");
    }

    #[test]
    fn test_double_backslash() {
        assert_eq!(escape_regex_replace("ar\\\\st"), "ar\\\\\\st");
    }

    #[test]
    fn test_backslash_digit() {
        assert_eq!(escape_regex_replace("ar\\0st"), "ar\\\\0st");
        assert_eq!(escape_regex_replace("ar\\0st\\1"), "ar\\\\0st\\\\1");
    }

    #[test]
    fn test_dollar_digit() {
        assert_eq!(escape_regex_replace("ar$0st"), "ar\\$0st");
        assert_eq!(escape_regex_replace("ar$0st$1"), "ar\\$0st\\$1");
    }

    #[test]
    fn test_dollar_backslash_untouched() {
        assert_eq!(escape_regex_replace("$\\x"), "$\\x");
    }

    #[test]
    fn test_trailing_specials() {
        assert_eq!(escape_regex_replace("cost$"), "cost$");
        assert_eq!(escape_regex_replace("path\\"), "path\\");
    }

    #[test]
    fn test_safe_input_is_unchanged() {
        for s in ["hello world", "$x \\n", "ünïcödé $ \\ ✓", "a$b\\c"] {
            assert_eq!(escape_regex_replace(s), s);
        }
    }

    #[test]
    fn test_multibyte_neighbours() {
        assert_eq!(escape_regex_replace("é$1ü"), "é\\$1ü");
    }
}

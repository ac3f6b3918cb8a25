//! Turning raw ingredient text into tokens.
//!
//! Text typed by the user and text read from a photo go through separate
//! entry points. Both drop empty tokens and keep the order of the rest.

/// Trim whitespace and byte-order marks
fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Split text from the ingredients field.
///
/// Newlines are turned into commas first, then the text is split on commas.
pub fn split_submitted_text(text: &str) -> Vec<String> {
    text.replace('\n', ",")
        .split(',')
        .map(trim_token)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Split text recognized from an image on commas or newlines.
pub fn split_recognized_text(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(trim_token)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        assert_eq!(split_submitted_text("A, B\nC"), vec!["A", "B", "C"]);
        assert_eq!(split_recognized_text("A, B\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_drops_empty_tokens() {
        let text = ",,  Sugar ,\n\n  ,E102\r\n  water  ";
        let expected = vec!["Sugar", "E102", "water"];

        assert_eq!(split_submitted_text(text), expected);
        assert_eq!(split_recognized_text(text), expected);
    }

    #[test]
    fn test_strips_byte_order_mark() {
        assert_eq!(split_submitted_text("\u{feff}, Salt"), vec!["Salt"]);
        assert_eq!(split_recognized_text("\u{feff}Sugar\n\u{feff}"), vec!["Sugar"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(split_submitted_text("").is_empty());
        assert!(split_submitted_text(" \n , \t").is_empty());
        assert!(split_recognized_text("\n\n").is_empty());
    }

    #[test]
    fn test_keeps_duplicates_in_order() {
        assert_eq!(
            split_submitted_text("salt, sugar, salt"),
            vec!["salt", "sugar", "salt"]
        );
    }

    #[test]
    fn test_paths_agree() {
        let samples = [
            "Water, Sugar, Citric Acid (E330)",
            "INGREDIENTS:\nwater\nsugar, yellow 5\n",
            "  ,\r\n E122 ,, azorubine\n",
            "no separators at all",
        ];

        for sample in samples {
            assert_eq!(
                split_submitted_text(sample),
                split_recognized_text(sample),
                "paths disagree on {:?}",
                sample
            );
        }
    }
}

/// Every glyph the tokenizer recognizes as an operator, including the
/// Unicode synonyms for multiplication and division.
const OPERATOR_GLYPHS: &[char] = &['-', '+', '*', '×', '/', '÷', '^', '(', ')'];

/// Strips natural-language noise from raw message text, e.g.
/// "what is 1+1?" becomes "1+1".
///
/// Trailing question marks are dropped, then every whitespace-separated
/// word containing anything other than digits, `.` and operator glyphs
/// is discarded. Survivors are concatenated with no separator. An input
/// with no usable words yields an empty string; the tokenizer turns
/// that into an error downstream.
pub(crate) fn sanitize(raw: &str) -> String {
    raw.trim_end_matches('?')
        .split_whitespace()
        .filter(|word| word.chars().all(is_expression_char))
        .collect()
}

fn is_expression_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || OPERATOR_GLYPHS.contains(&c)
}

#[cfg(test)]
mod test {
    use super::sanitize;

    #[test]
    fn filters_out_alphabetic_words() {
        assert_eq!(sanitize("what is 1+1"), "1+1");
    }

    #[test]
    fn filters_out_words_mixing_letters_with_digits_or_operators() {
        assert_eq!(sanitize("wh4at i+s 1+1"), "1+1");
    }

    #[test]
    fn strips_trailing_question_marks() {
        assert_eq!(sanitize("what is 1+1???"), "1+1");
    }

    #[test]
    fn keeps_unicode_operator_glyphs() {
        assert_eq!(sanitize("10 ÷ 2 × 3"), "10÷2×3");
    }

    #[test]
    fn yields_empty_string_for_pure_words() {
        assert_eq!(sanitize("hello there"), "");
    }
}

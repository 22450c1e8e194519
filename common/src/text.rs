//! Word wrapping for monospace text.
//!
//! Advisory messages and tips are longer than the panel is wide. With a
//! monospace font the width of a line is just its character count, so
//! wrapping is a pure string operation that borrows from the input.

/// Iterator over wrapped lines of at most `width` characters.
///
/// Breaks at the last space that fits; words longer than `width` are split.
pub struct WrapLines<'a> {
    rest: &'a str,
    width: usize,
}

/// Wrap `text` into lines of at most `width` characters.
pub fn wrap(
    text: &str,
    width: usize,
) -> WrapLines<'_> {
    WrapLines { rest: text, width: width.max(1) }
}

impl<'a> Iterator for WrapLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }

        // Byte offset just past `width` characters, if the text is longer.
        let Some((limit, next)) = rest.char_indices().nth(self.width) else {
            self.rest = "";
            return Some(rest.trim_end());
        };

        let (line, tail) = match rest[..limit + next.len_utf8()].rfind(' ') {
            Some(space) if space > 0 => (&rest[..space], &rest[space..]),
            _ => (&rest[..limit], &rest[limit..]),
        };
        self.rest = tail;
        Some(line.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str, width: usize) -> Vec<&str> { wrap(text, width).collect() }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(lines("Breathe easy.", 20), ["Breathe easy."]);
    }

    #[test]
    fn test_breaks_at_spaces() {
        assert_eq!(
            lines("Air is fresh and clear. Breathe easy.", 16),
            ["Air is fresh and", "clear. Breathe", "easy."]
        );
    }

    #[test]
    fn test_exact_fit_breaks_on_following_space() {
        assert_eq!(lines("abcd efgh", 4), ["abcd", "efgh"]);
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(lines("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(lines("", 10).is_empty());
        assert!(lines("   ", 10).is_empty());
    }

    #[test]
    fn test_never_exceeds_width() {
        let messages = [
            "Sensitive groups should reduce outdoor activity.",
            "Critical! Avoid outdoor air at all costs.",
            "Aero will analyze and display the environment mood.",
            "Carry a reusable mask on high AQI days.",
        ];
        for text in messages {
            for width in 5..40 {
                for line in wrap(text, width) {
                    assert!(
                        line.chars().count() <= width,
                        "{line:?} is wider than {width}"
                    );
                    assert!(!line.is_empty(), "no empty lines for {text:?}");
                }
            }
        }
    }

    #[test]
    fn test_keeps_every_word() {
        let text = "Stay indoors and use air purifiers.";
        let joined: Vec<&str> = wrap(text, 11).flat_map(str::split_whitespace).collect();
        let words: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(joined, words);
    }
}

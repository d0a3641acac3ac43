use itertools::{EitherOrBoth, Itertools};

/// How a single target char should be shown
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum CharState {
    Correct,
    Mismatch,
    /// next char to type
    Cursor,
    Pending,
}

/// One state per char of `target`, whatever the length of `input`
pub fn classify(target: &str, input: &str) -> Vec<CharState> {
    let mut cursor_placed = false;

    target
        .chars()
        .zip_longest(input.chars())
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(expected, got) if expected == got => Some(CharState::Correct),
            EitherOrBoth::Both(_, _) => Some(CharState::Mismatch),
            EitherOrBoth::Left(_) if !cursor_placed => {
                cursor_placed = true;
                Some(CharState::Cursor)
            }
            EitherOrBoth::Left(_) => Some(CharState::Pending),
            EitherOrBoth::Right(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharState::*;

    #[test]
    fn test_empty_input_puts_cursor_first() {
        assert_eq!(classify("abc", ""), vec![Cursor, Pending, Pending]);
    }

    #[test]
    fn test_partial_input() {
        assert_eq!(classify("abcd", "ax"), vec![Correct, Mismatch, Cursor, Pending]);
    }

    #[test]
    fn test_full_input_has_no_cursor() {
        assert_eq!(classify("abc", "abd"), vec![Correct, Correct, Mismatch]);
    }

    #[test]
    fn test_input_longer_than_target() {
        let states = classify("ab", "abcdef");
        assert_eq!(states, vec![Correct, Correct]);
    }

    #[test]
    fn test_length_matches_target() {
        let target = "const x = 1;\nreturn x;";
        for end in 0..=target.len() + 3 {
            let input: String = target.chars().chain("zzz".chars()).take(end).collect();
            assert_eq!(classify(target, &input).len(), target.chars().count());
        }
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(classify("hello", "hxl"), classify("hello", "hxl"));
    }

    #[test]
    fn test_multibyte_chars() {
        assert_eq!(classify("→✓", "→"), vec![Correct, Cursor]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cursor.to_string(), "Cursor");
    }
}

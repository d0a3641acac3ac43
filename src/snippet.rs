use std::fmt;

/// Text the user is asked to reproduce. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    text: String,
    char_count: usize,
}

impl Snippet {
    /// Returns `None` for empty text
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let char_count = text.chars().count();
        if char_count == 0 {
            return None;
        }
        Some(Self { text, char_count })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in chars, always at least one
    pub fn char_count(&self) -> usize {
        self.char_count
    }
}

impl AsRef<str> for Snippet {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

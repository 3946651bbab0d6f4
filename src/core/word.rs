//! Dictionary word representation
//!
//! A Word stores its text along with the decoded character sequence used for
//! positional comparison. Lengths are counted in characters, never bytes.

use super::adjacency::differs_by_one;
use std::fmt;

/// A dictionary word with its character sequence
///
/// Equality is exact text equality, which is the same as character-sequence
/// equality.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is stored as given. Case folding is the caller's decision.
    ///
    /// # Examples
    /// ```
    /// use metagram::core::Word;
    ///
    /// let word = Word::new("ёлка");
    /// assert_eq!(word.text(), "ёлка");
    /// assert_eq!(word.len(), 4);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Create a Word with its text lower-cased (Unicode-aware)
    #[must_use]
    pub fn lowercase(text: &str) -> Self {
        Self::new(text.to_lowercase())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character sequence
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check whether `other` is exactly one substitution away
    #[inline]
    #[must_use]
    pub fn differs_by_one(&self, other: &Self) -> bool {
        differs_by_one(&self.chars, &other.chars)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl std::hash::Hash for Word {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

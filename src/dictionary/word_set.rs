//! The shrinking pool of unused dictionary words
//!
//! Every word handed out by [`WordSet::take_neighbors_of`] is removed for
//! good, so a single search never sees the same word twice.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Ordered, consumable set of distinct same-length words
///
/// Words keep their dictionary order; repeated entries are kept once. Removed
/// entries leave a hole that is skipped during scans and compacted away once
/// holes outnumber live words.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    slots: Vec<Option<Word>>,
    positions: FxHashMap<String, usize>,
    word_length: usize,
}

impl WordSet {
    /// Build a set from dictionary lines, keeping those of `word_length` characters
    ///
    /// Lines are trimmed before measuring. No case folding is applied.
    #[must_use]
    pub fn load<I, S>(lines: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = crate::dictionary::loader::words_from_lines(lines, word_length, false);
        Self::from_words(words, word_length)
    }

    /// Build a set from already-filtered words
    ///
    /// Words whose length differs from `word_length` are skipped, and only the
    /// first occurrence of a repeated word is kept.
    #[must_use]
    pub fn from_words<I>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut set = Self {
            word_length,
            ..Self::default()
        };
        for word in words.into_iter().filter(|w| w.len() == word_length) {
            set.push(word);
        }
        set
    }

    /// Number of words still available
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Character length shared by every word in the set
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Iterate over the remaining words in dictionary order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.slots.iter().flatten()
    }

    /// Remove `word` and every word one character away from it
    ///
    /// `word` itself is dropped first if present. Then the remaining words are
    /// scanned in order and each neighbor is removed as soon as it matches.
    /// Returns the neighbors in scan order.
    pub fn take_neighbors_of(&mut self, word: &Word) -> Vec<Word> {
        if let Some(&pos) = self.positions.get(word.text()) {
            self.remove_at(pos);
        }

        let mut neighbors = Vec::new();
        for pos in 0..self.slots.len() {
            let matched = self.slots[pos]
                .as_ref()
                .is_some_and(|candidate| word.differs_by_one(candidate));
            if matched {
                if let Some(neighbor) = self.remove_at(pos) {
                    neighbors.push(neighbor);
                }
            }
        }

        if self.len() * 2 < self.slots.len() {
            self.compact();
        }

        neighbors
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, word: &Word) -> bool {
        self.positions.contains_key(word.text())
    }

    fn push(&mut self, word: Word) {
        if self.positions.contains_key(word.text()) {
            return;
        }
        self.positions.insert(word.text().to_string(), self.slots.len());
        self.slots.push(Some(word));
    }

    fn remove_at(&mut self, pos: usize) -> Option<Word> {
        let word = self.slots.get_mut(pos)?.take()?;
        self.positions.remove(word.text());
        Some(word)
    }

    fn compact(&mut self) {
        let words: Vec<Word> = self.slots.drain(..).flatten().collect();
        self.positions.clear();
        for word in words {
            self.push(word);
        }
    }
}

//! One-character adjacency between words
//!
//! Two words are adjacent when they have the same length and differ at
//! exactly one position. Only substitutions count; insertions and deletions
//! never apply because the dictionary is filtered to a single length.

/// Check whether `a` and `b` differ at exactly one position
///
/// Returns `false` for words of different lengths, identical words, and words
/// differing at two or more positions.
///
/// # Examples
/// ```
/// use metagram::core::differs_by_one;
///
/// let cat: Vec<char> = "cat".chars().collect();
/// let cot: Vec<char> = "cot".chars().collect();
/// let dog: Vec<char> = "dog".chars().collect();
///
/// assert!(differs_by_one(&cat, &cot));
/// assert!(!differs_by_one(&cat, &dog));
/// ```
#[must_use]
pub fn differs_by_one(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut mismatches = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            mismatches += 1;
            if mismatches > 1 {
                return false;
            }
        }
    }

    mismatches == 1
}

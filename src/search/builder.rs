//! Depth-first path tree construction
//!
//! Starting from the root word, each node claims its one-letter neighbors
//! from the shared [`WordSet`], becomes their parent, and then every child is
//! expanded in turn before its next sibling. Whenever a node's neighbors
//! include the target, the path to it is reported.

use super::tree::{PATH_SEPARATOR, PathTree};
use crate::core::Word;
use crate::dictionary::WordSet;
use crate::output::Sink;
use tracing::{debug, instrument, trace};

/// Build the search tree from `start`, reporting every path to `target`
///
/// The set is consumed as the tree grows: each word ends up in at most one
/// node. Expansion order, set mutation and reported paths follow a pre-order
/// depth-first walk over neighbors in dictionary order. An explicit stack
/// replaces recursion, so long chains cannot exhaust the call stack.
///
/// A start word equal to the target is not special-cased. The set holds each
/// word once and the root consumes the start word, so no path is reported.
///
/// # Examples
/// ```
/// use metagram::core::Word;
/// use metagram::dictionary::WordSet;
/// use metagram::output::CollectingSink;
/// use metagram::search::build_tree;
///
/// let mut words = WordSet::load(["cat", "cot", "cog", "dog", "bat"], 3);
/// let mut sink = CollectingSink::new();
///
/// build_tree(&Word::new("cat"), &Word::new("dog"), &mut words, &mut sink);
/// assert_eq!(sink.paths, ["cat -> cot -> cog -> dog"]);
/// ```
#[instrument(level = "debug", skip_all, fields(start = %start, target = %target))]
pub fn build_tree<S>(start: &Word, target: &Word, words: &mut WordSet, sink: &mut S) -> PathTree
where
    S: Sink + ?Sized,
{
    let mut tree = PathTree::new(start.clone());
    let mut pending = vec![tree.root()];
    let mut found = 0usize;

    while let Some(idx) = pending.pop() {
        let Some(node) = tree.node(idx) else {
            continue;
        };
        let name = node.name.clone();
        let neighbors = words.take_neighbors_of(&name);
        trace!(word = %name, neighbors = neighbors.len(), remaining = words.len(), "Expanded");

        if neighbors.is_empty() {
            continue;
        }

        if neighbors.contains(target) {
            let path = format!("{}{PATH_SEPARATOR}{target}", tree.path_to(idx));
            debug!(%path, "Path found");
            sink.path(&path);
            found += 1;
        }

        let children = tree.set_children(idx, neighbors);
        pending.extend(children.into_iter().rev());
    }

    debug!(
        nodes = tree.len(),
        depth = tree.depth(),
        paths = found,
        "Search tree complete"
    );
    tree
}

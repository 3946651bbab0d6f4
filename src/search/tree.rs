//! Arena-backed search tree
//!
//! Nodes refer to their parent by arena index, so the tree has a single
//! owner and no reference cycles.

use crate::core::Word;
use generational_arena::{Arena, Index};

/// Separator between words in a formatted path
pub const PATH_SEPARATOR: &str = " -> ";

/// One word reached during the search
#[derive(Debug)]
pub struct TreeNode {
    /// Word at this node
    pub name: Word,
    /// Node this word was reached from, None for the root
    pub parent: Option<Index>,
    /// Words reached from this node, in discovery order
    pub children: Vec<Index>,
}

/// Search tree rooted at the start word
#[derive(Debug)]
pub struct PathTree {
    arena: Arena<TreeNode>,
    root: Index,
}

impl PathTree {
    /// Create a tree holding only the root word
    #[must_use]
    pub fn new(root: Word) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TreeNode {
            name: root,
            parent: None,
            children: Vec::new(),
        });
        Self { arena, root }
    }

    #[must_use]
    pub const fn root(&self) -> Index {
        self.root
    }

    #[must_use]
    pub fn node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    /// Number of nodes in the tree
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: a tree has at least its root
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Attach `names` as the children of `parent`, in order
    ///
    /// Returns the new child indices. A node's children are set exactly once;
    /// attaching to a node that already has children or to an unknown index
    /// adds nothing.
    pub fn set_children(&mut self, parent: Index, names: Vec<Word>) -> Vec<Index> {
        match self.arena.get(parent) {
            Some(node) if node.children.is_empty() => {}
            _ => return Vec::new(),
        }

        let children: Vec<Index> = names
            .into_iter()
            .map(|name| {
                self.arena.insert(TreeNode {
                    name,
                    parent: Some(parent),
                    children: Vec::new(),
                })
            })
            .collect();

        if let Some(node) = self.arena.get_mut(parent) {
            node.children.clone_from(&children);
        }
        children
    }

    /// Words from the root down to `idx`, joined by `" -> "`
    ///
    /// A node without a parent yields just its own word.
    #[must_use]
    pub fn path_to(&self, idx: Index) -> String {
        let mut names = Vec::new();
        let mut current = self.arena.get(idx);
        while let Some(node) = current {
            names.push(node.name.text());
            current = node.parent.and_then(|p| self.arena.get(p));
        }
        names.reverse();
        names.join(PATH_SEPARATOR)
    }

    /// Number of nodes on the longest root-to-leaf chain
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 1)];
        while let Some((idx, level)) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                deepest = deepest.max(level);
                stack.extend(node.children.iter().map(|&child| (child, level + 1)));
            }
        }
        deepest
    }

    /// Every word in the tree, in no particular order
    #[cfg(test)]
    pub(crate) fn words(&self) -> impl Iterator<Item = &Word> {
        self.arena.iter().map(|(_, node)| &node.name)
    }
}

//! Category hierarchy built from flat parent-pointer rows.
//!
//! Categories are stored as `(id, parent_id)` rows. [`CategoryTree`] indexes
//! those rows by parent so subtree walks, ancestry checks, and nesting for
//! display run over plain ids instead of linked objects. The index is built on
//! demand for each operation and never cached.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::DbId;

/// Parent-pointer arena plus a parent -> children index.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    parents: HashMap<DbId, Option<DbId>>,
    children: HashMap<DbId, Vec<DbId>>,
    roots: Vec<DbId>,
}

impl CategoryTree {
    /// Build the tree from `(id, parent_id)` pairs.
    ///
    /// A row whose parent is not part of the input is treated as a root.
    /// Sibling lists and roots are ordered by id.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (DbId, Option<DbId>)>,
    {
        let parents: HashMap<DbId, Option<DbId>> = edges.into_iter().collect();
        let mut children: HashMap<DbId, Vec<DbId>> = HashMap::new();
        let mut roots = Vec::new();

        for (&id, &parent) in &parents {
            match parent {
                Some(p) if parents.contains_key(&p) => children.entry(p).or_default().push(id),
                _ => roots.push(id),
            }
        }

        for siblings in children.values_mut() {
            siblings.sort_unstable();
        }
        roots.sort_unstable();

        Self {
            parents,
            children,
            roots,
        }
    }

    pub fn contains(&self, id: DbId) -> bool {
        self.parents.contains_key(&id)
    }

    /// Parent of `id`, or `None` for roots and unknown ids.
    pub fn parent(&self, id: DbId) -> Option<DbId> {
        self.parents.get(&id).copied().flatten()
    }

    /// Direct children of `id`, ordered by id.
    pub fn children(&self, id: DbId) -> &[DbId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Root categories, ordered by id.
    pub fn roots(&self) -> &[DbId] {
        &self.roots
    }

    /// `id` and all of its transitive descendants, depth-first.
    ///
    /// Every descendant appears before its ancestors, so deleting rows in the
    /// returned order never leaves a child pointing at a removed parent.
    /// Returns an empty list when `id` is unknown.
    pub fn subtree(&self, id: DbId) -> Vec<DbId> {
        if !self.contains(id) {
            return Vec::new();
        }

        let mut order = Vec::new();
        let mut visited = HashSet::new();
        // (node, children already pushed)
        let mut stack = vec![(id, false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                order.push(node);
                continue;
            }
            if !visited.insert(node) {
                continue;
            }
            stack.push((node, true));
            for &child in self.children(node).iter().rev() {
                stack.push((child, false));
            }
        }

        order
    }

    /// Whether `candidate` lies strictly below `ancestor`.
    pub fn is_descendant(&self, candidate: DbId, ancestor: DbId) -> bool {
        let mut current = self.parent(candidate);
        let mut steps = 0;
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            // Bounded walk: stored data may already contain a loop.
            steps += 1;
            if steps > self.parents.len() {
                return false;
            }
            current = self.parent(node);
        }
        false
    }

    /// Whether moving `id` under `new_parent` would make it its own ancestor.
    pub fn would_create_cycle(&self, id: DbId, new_parent: Option<DbId>) -> bool {
        match new_parent {
            None => false,
            Some(p) => p == id || self.is_descendant(p, id),
        }
    }
}

/// A category (or any row keyed by category id) with its nested children.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode<T> {
    #[serde(flatten)]
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

/// Nest flat rows into a forest using their `(id, parent_id)` keys.
pub fn nest<T, F>(items: Vec<T>, key: F) -> Vec<TreeNode<T>>
where
    F: Fn(&T) -> (DbId, Option<DbId>),
{
    let tree = CategoryTree::from_edges(items.iter().map(&key));
    let mut by_id: HashMap<DbId, T> = items.into_iter().map(|item| (key(&item).0, item)).collect();

    tree.roots()
        .iter()
        .filter_map(|&root| build_node(root, &tree, &mut by_id))
        .collect()
}

fn build_node<T>(
    id: DbId,
    tree: &CategoryTree,
    by_id: &mut HashMap<DbId, T>,
) -> Option<TreeNode<T>> {
    let item = by_id.remove(&id)?;
    let children = tree
        .children(id)
        .iter()
        .filter_map(|&child| build_node(child, tree, by_id))
        .collect();
    Some(TreeNode { item, children })
}

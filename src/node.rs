use std::{fmt::Debug, hash::Hash};

use derivative::Derivative;
use indexmap::IndexMap;

use crate::attrs::{Attrs, merge_attrs};

/// A trait for values usable as node identifiers.
///
/// Any immutable, hashable, ordered value qualifies; the trait is implemented
/// automatically.  `Ord` is needed so that conversions which must pick one of
/// two reciprocal edges can do so deterministically.
pub trait NodeKey: Eq + Hash + Clone + Debug + Ord {}

impl<T> NodeKey for T where T: Eq + Hash + Clone + Debug + Ord {}

/// One item accepted by [`Graph::add_nodes_from`](crate::Graph::add_nodes_from):
/// either a bare node or a node with attributes to merge.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeEntry<N> {
    Bare(N),
    WithAttrs(N, Attrs),
}

impl<N> NodeEntry<N> {
    pub fn into_parts(self) -> (N, Attrs) {
        match self {
            NodeEntry::Bare(node) => (node, Attrs::new()),
            NodeEntry::WithAttrs(node, attrs) => (node, attrs),
        }
    }
}

impl<N> From<N> for NodeEntry<N> {
    fn from(node: N) -> Self {
        NodeEntry::Bare(node)
    }
}

impl<N> From<(N, Attrs)> for NodeEntry<N> {
    fn from((node, attrs): (N, Attrs)) -> Self {
        NodeEntry::WithAttrs(node, attrs)
    }
}

/// Node set plus per-node attributes, in insertion order.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Default(bound = ""),
    Debug(bound = "N: Debug"),
    PartialEq(bound = "N: Eq + Hash")
)]
pub(crate) struct NodeStore<N> {
    nodes: IndexMap<N, Attrs>,
}

impl<N: NodeKey> NodeStore<N> {
    /// Inserts `node` if absent and merges `attrs` into its attributes.
    /// Returns true if the node was newly inserted.
    pub fn upsert(&mut self, node: N, attrs: Attrs) -> bool {
        match self.nodes.get_mut(&node) {
            Some(existing) => {
                merge_attrs(existing, attrs);
                false
            }
            None => {
                self.nodes.insert(node, attrs);
                true
            }
        }
    }

    pub fn remove(&mut self, node: &N) -> Option<Attrs> {
        self.nodes.shift_remove(node)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// The graph-owned copy of `node`.
    pub fn key(&self, node: &N) -> Option<&N> {
        self.nodes.get_key_value(node).map(|(key, _)| key)
    }

    pub fn attrs(&self, node: &N) -> Option<&Attrs> {
        self.nodes.get(node)
    }

    pub fn attrs_mut(&mut self, node: &N) -> Option<&mut Attrs> {
        self.nodes.get_mut(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, N, Attrs> {
        self.nodes.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, N, Attrs> {
        self.nodes.iter()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upsert_merges() {
        let mut store = NodeStore::default();
        assert!(store.upsert(1, crate::attrs! { "color" => "red" }));
        assert!(!store.upsert(1, crate::attrs! { "size" => 2 }));
        assert_eq!(store.len(), 1);
        let attrs = store.attrs(&1).expect("node 1 present");
        assert_eq!(attrs["color"], json!("red"));
        assert_eq!(attrs["size"], json!(2));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut store = NodeStore::default();
        for n in [3, 1, 2] {
            store.upsert(n, Attrs::new());
        }
        store.remove(&1);
        assert_eq!(store.keys().copied().collect::<Vec<_>>(), vec![3, 2]);
        assert!(store.attrs(&1).is_none());
    }

    #[test]
    fn test_node_entry_conversions() {
        assert_eq!(NodeEntry::from(5).into_parts(), (5, Attrs::new()));
        let entry: NodeEntry<i32> = (5, crate::attrs! { "a" => 1 }).into();
        assert_eq!(entry.into_parts().1["a"], json!(1));
    }
}

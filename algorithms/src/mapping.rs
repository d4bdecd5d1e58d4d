//! The result type a successful search produces: an association from
//! pattern vertices to target vertices, in matching order, with `O(1)`
//! lookup either way.

use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexMap;

/// A mapping from `G1` (pattern) vertices to `G2` (target) vertices.
/// Iterating it yields pairs in matching order -- the order the search
/// placed them in -- which is useful for callers that want to replay or
/// explain a match, not just test membership.
#[derive(Debug, Clone)]
pub struct Mapping<K, V> {
    forward: IndexMap<K, V>,
    backward: HashMap<V, K>,
}

impl<K, V> Mapping<K, V>
where
    K: Copy + Eq + Hash,
    V: Copy + Eq + Hash,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Mapping {
            forward: IndexMap::with_capacity(capacity),
            backward: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, k: K, v: V) {
        self.forward.insert(k, v);
        self.backward.insert(v, k);
    }

    /// Number of pairs in the mapping. In `Sub`/`Ind` mode this is
    /// `G1::node_count()`, the size of the pattern; it is never partial.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The target vertex `k` (a pattern vertex) maps to, if any.
    pub fn image_of(&self, k: K) -> Option<V> {
        self.forward.get(&k).copied()
    }

    /// The pattern vertex that maps to target vertex `v`, if any.
    pub fn preimage_of(&self, v: V) -> Option<K> {
        self.backward.get(&v).copied()
    }

    /// Pairs in matching order.
    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.forward.iter().map(|(&k, &v)| (k, v))
    }
}

impl<'a, K, V> IntoIterator for &'a Mapping<K, V>
where
    K: Copy + Eq + Hash,
    V: Copy + Eq + Hash,
{
    type Item = (K, V);
    type IntoIter = std::iter::Map<indexmap::map::Iter<'a, K, V>, fn((&'a K, &'a V)) -> (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.forward.iter().map(|(&k, &v)| (k, v))
    }
}

/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::{fmt, hash::Hash};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{ActionNode, Literal};

/// A node that can be stored in a layer of the planning graph.
///
/// Literal layers and action layers alternate, so the nodes of the layers
/// around a literal layer are actions, and vice versa.
pub trait LayerNode: Clone + Eq + Hash + fmt::Display + fmt::Debug {
    /// The kind of node stored in the neighbouring layers.
    type Neighbor: Clone + Eq + Hash + fmt::Display + fmt::Debug;
}

impl LayerNode for Literal {
    type Neighbor = ActionNode;
}

impl LayerNode for ActionNode {
    type Neighbor = Literal;
}

/// One level of the planning graph: its members, the edges to the neighbouring
/// layers, and the mutual exclusions between its members.
pub struct Layer<N: LayerNode> {
    pub(crate) members: FxHashSet<N>,
    pub(crate) parents: FxHashMap<N, FxHashSet<N::Neighbor>>,
    pub(crate) children: FxHashMap<N, FxHashSet<N::Neighbor>>,
    pub(crate) mutexes: FxHashMap<N, FxHashSet<N>>,
}

/// A layer of literals.
pub type LiteralLayer = Layer<Literal>;

/// A layer of actions.
pub type ActionLayer = Layer<ActionNode>;

impl<N: LayerNode> Default for Layer<N> {
    fn default() -> Self {
        Self {
            members: Default::default(),
            parents: Default::default(),
            children: Default::default(),
            mutexes: Default::default(),
        }
    }
}

impl<N: LayerNode> FromIterator<N> for Layer<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl<N: LayerNode> Extend<N> for Layer<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<'a, N: LayerNode> IntoIterator for &'a Layer<N> {
    type Item = &'a N;
    type IntoIter = std::collections::hash_set::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<N: LayerNode> Layer<N> {
    /// Creates a layer holding the given members, without edges nor mutexes.
    pub fn new(members: impl IntoIterator<Item = N>) -> Self {
        members.into_iter().collect()
    }

    /// Creates the next layer of the same kind, with the members and edges of `previous`.
    ///
    /// Mutexes are not carried over, they must be recomputed once the layer is complete.
    pub fn carry_forward(previous: &Self) -> Self {
        Self {
            members: previous.members.clone(),
            parents: previous.parents.clone(),
            children: previous.children.clone(),
            mutexes: Default::default(),
        }
    }

    pub fn add(&mut self, node: N) -> bool {
        self.members.insert(node)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.members.contains(node)
    }

    /// Returns whether all `nodes` are members of this layer.
    pub fn contains_all<'a>(&self, nodes: impl IntoIterator<Item = &'a N>) -> bool
    where
        N: 'a,
    {
        nodes.into_iter().all(|node| self.members.contains(node))
    }

    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Marks `a` and `b` as mutually exclusive.
    pub fn set_mutex(&mut self, a: N, b: N) {
        debug_assert!(a != b, "{a} cannot be mutex with itself");
        self.mutexes.entry(a.clone()).or_default().insert(b.clone());
        self.mutexes.entry(b).or_default().insert(a);
    }

    /// Returns whether `a` and `b` are mutually exclusive in this layer.
    pub fn is_mutex(&self, a: &N, b: &N) -> bool {
        self.mutexes
            .get(a)
            .map_or(false, |mutexes| mutexes.contains(b))
    }

    /// Returns the members that are mutually exclusive with `node`.
    pub fn mutexes_of(&self, node: &N) -> impl Iterator<Item = &N> {
        self.mutexes.get(node).into_iter().flatten()
    }

    /// Returns the number of unordered mutex pairs.
    pub fn mutex_count(&self) -> usize {
        self.mutexes.values().map(FxHashSet::len).sum::<usize>() / 2
    }

    /// Returns the nodes of the preceding layer connected to `node`.
    pub fn parents_of(&self, node: &N) -> impl Iterator<Item = &N::Neighbor> {
        self.parents.get(node).into_iter().flatten()
    }

    /// Returns the nodes of the following layer connected to `node`.
    pub fn children_of(&self, node: &N) -> impl Iterator<Item = &N::Neighbor> {
        self.children.get(node).into_iter().flatten()
    }

    /// Returns whether `node` is connected to `neighbor` in the following layer.
    pub fn has_child(&self, node: &N, neighbor: &N::Neighbor) -> bool {
        self.children
            .get(node)
            .map_or(false, |children| children.contains(neighbor))
    }

    /// Marks as mutex every unordered pair of distinct members for which `is_mutex` holds.
    pub(crate) fn set_mutexes_where(&mut self, mut is_mutex: impl FnMut(&N, &N) -> bool) {
        let members = self.members.iter().cloned().collect::<Vec<_>>();
        for (index, a) in members.iter().enumerate() {
            for b in &members[index + 1..] {
                if is_mutex(a, b) {
                    self.set_mutex(a.clone(), b.clone());
                }
            }
        }
    }
}

impl<N: LayerNode> PartialEq for Layer<N> {
    /// Layers are equal if they have the same members and the same mutexes, edges are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members && self.mutexes == other.mutexes
    }
}

impl<N: LayerNode> Eq for Layer<N> {}

impl<N: LayerNode> fmt::Debug for Layer<N> {
    fn fmt(&self, f: &'_ mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Layer")
            .field("members", &self.members)
            .field("mutexes", &self.mutexes)
            .finish()
    }
}

//! Fact containers: per-point abstract states and the per-solve result.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cfg::NodeId;
use crate::ir::Var;

use super::constant_propagation::Value;

/// Constant-propagation fact: a map from variable to abstract [`Value`].
///
/// An absent key means UNDEF. `update` never stores UNDEF (it removes
/// the key instead), so structural map equality coincides with the
/// fact equality of the lattice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CPFact {
    map: FxHashMap<Var, Value>,
}

impl CPFact {
    /// Empty fact: every variable is implicitly UNDEF.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Abstract value of `var`; UNDEF when unbound.
    #[must_use]
    pub fn get(&self, var: Var) -> Value {
        self.map.get(&var).copied().unwrap_or(Value::Undef)
    }

    /// Bind `var` to `value`; returns whether the fact changed.
    pub fn update(&mut self, var: Var, value: Value) -> bool {
        if value.is_undef() {
            self.map.remove(&var).is_some()
        } else {
            self.map.insert(var, value) != Some(value)
        }
    }

    /// Iterate the explicitly bound pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Var, Value)> + '_ {
        self.map.iter().map(|(var, value)| (*var, *value))
    }

    /// Explicitly bound variables.
    pub fn keys(&self) -> impl Iterator<Item = Var> + '_ {
        self.map.keys().copied()
    }

    /// Number of explicit bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// A set-valued fact, e.g. the live variables at a program point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFact<T: Eq + Hash> {
    set: FxHashSet<T>,
}

impl<T: Eq + Hash> Default for SetFact<T> {
    fn default() -> Self {
        Self {
            set: FxHashSet::default(),
        }
    }
}

impl<T: Eq + Hash + Clone> SetFact<T> {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.set.contains(item)
    }

    /// Returns whether the set changed.
    pub fn insert(&mut self, item: T) -> bool {
        self.set.insert(item)
    }

    /// Returns whether the set changed.
    pub fn remove(&mut self, item: &T) -> bool {
        self.set.remove(item)
    }

    /// Add every element of `other`; returns whether the set changed.
    pub fn union_with(&mut self, other: &Self) -> bool {
        let before = self.set.len();
        for item in &other.set {
            if !self.set.contains(item) {
                self.set.insert(item.clone());
            }
        }
        self.set.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.set.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// IN/OUT facts of every CFG node for one analysis run.
///
/// Populated by the solver, then handed to consumers read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct DataflowResult<F> {
    pub(crate) in_facts: Vec<F>,
    pub(crate) out_facts: Vec<F>,
}

impl<F> DataflowResult<F> {
    pub(crate) fn new_with(node_count: usize, mut make: impl FnMut() -> F) -> Self {
        Self {
            in_facts: (0..node_count).map(|_| make()).collect(),
            out_facts: (0..node_count).map(|_| make()).collect(),
        }
    }

    /// Fact flowing into `node`.
    #[must_use]
    pub fn in_fact(&self, node: NodeId) -> &F {
        &self.in_facts[node.0]
    }

    /// Fact flowing out of `node`.
    #[must_use]
    pub fn out_fact(&self, node: NodeId) -> &F {
        &self.out_facts[node.0]
    }
}

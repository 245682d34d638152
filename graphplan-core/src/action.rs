/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::{
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use rustc_hash::FxHashMap;

use crate::{Fluent, Literal, PlanningError, Result};

/// A ground action as defined by a planning problem, with separate positive and negative lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroundAction {
    /// the action signature, for example `Fly(P1, SFO, JFK)`
    pub name: String,
    /// fluents that must be true before executing
    pub precond_pos: Vec<Fluent>,
    /// fluents that must be false before executing
    pub precond_neg: Vec<Fluent>,
    /// fluents made true by executing
    pub effect_add: Vec<Fluent>,
    /// fluents made false by executing
    pub effect_rem: Vec<Fluent>,
}

impl GroundAction {
    pub fn new(
        name: impl Into<String>,
        (precond_pos, precond_neg): (Vec<Fluent>, Vec<Fluent>),
        (effect_add, effect_rem): (Vec<Fluent>, Vec<Fluent>),
    ) -> Self {
        GroundAction {
            name: name.into(),
            precond_pos,
            precond_neg,
            effect_add,
            effect_rem,
        }
    }

    /// Iterates over every fluent mentioned by this action.
    pub fn fluents(&self) -> impl Iterator<Item = &Fluent> {
        self.precond_pos
            .iter()
            .chain(&self.precond_neg)
            .chain(&self.effect_add)
            .chain(&self.effect_rem)
    }
}

impl fmt::Display for GroundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Name prefix of persistence actions, which domain actions may not use.
pub const NO_OP_PREFIX: &str = "NoOp::";

/// Strong atomic reference counted action node, shared between all layers and graphs of a domain.
pub type ActionNode = Arc<ActionNodeInner>;

/// An action as seen by the planning graph: signed preconditions and signed effects.
///
/// Two nodes are the same node if they have the same name.
pub struct ActionNodeInner {
    name: Arc<str>,
    preconditions: BTreeSet<Literal>,
    effects: BTreeSet<Literal>,
    is_no_op: bool,
}

impl ActionNodeInner {
    /// Creates a node, checking that neither preconditions nor effects contradict themselves.
    pub fn new(
        name: &str,
        preconditions: BTreeSet<Literal>,
        effects: BTreeSet<Literal>,
        is_no_op: bool,
    ) -> Result<Self> {
        for literals in [&preconditions, &effects] {
            if let Some(literal) = literals.iter().find(|literal| literals.contains(&!*literal)) {
                return Err(PlanningError::MalformedAction {
                    action: name.to_owned(),
                    literal: literal.clone(),
                });
            }
        }
        Ok(ActionNodeInner {
            name: Arc::from(name),
            preconditions,
            effects,
            is_no_op,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preconditions(&self) -> &BTreeSet<Literal> {
        &self.preconditions
    }

    pub fn effects(&self) -> &BTreeSet<Literal> {
        &self.effects
    }

    /// Returns true for the synthetic persistence actions.
    pub fn is_no_op(&self) -> bool {
        self.is_no_op
    }

    /// Returns true if an effect of one action negates an effect of the other.
    pub fn has_inconsistent_effects(&self, other: &ActionNodeInner) -> bool {
        self.effects
            .iter()
            .any(|effect| other.effects.contains(&!effect))
    }

    /// Returns true if the effects of either action negate the preconditions of the other.
    pub fn interferes_with(&self, other: &ActionNodeInner) -> bool {
        fn negates(effects: &BTreeSet<Literal>, preconditions: &BTreeSet<Literal>) -> bool {
            effects
                .iter()
                .any(|effect| preconditions.contains(&!effect))
        }
        negates(&self.effects, &other.preconditions) || negates(&other.effects, &self.preconditions)
    }
}

impl fmt::Debug for ActionNodeInner {
    fn fmt(&self, f: &'_ mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ActionNode")
            .field("name", &self.name)
            .field("preconditions", &self.preconditions)
            .field("effects", &self.effects)
            .field("is_no_op", &self.is_no_op)
            .finish()
    }
}

impl fmt::Display for ActionNodeInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Hash for ActionNodeInner {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.name.hash(hasher);
    }
}

impl PartialEq for ActionNodeInner {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ActionNodeInner {}

/// Builds action nodes, returning the already-built node when asked again for the same name.
///
/// A factory is typically shared by all planning graphs of a domain.
#[derive(Default)]
pub struct ActionNodeFactory {
    nodes: FxHashMap<Arc<str>, ActionNode>,
}

impl ActionNodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a ground action into a node, folding negative preconditions and
    /// removed effects into negated literals.
    pub fn make_node(&mut self, action: &GroundAction) -> Result<ActionNode> {
        if action.name.starts_with(NO_OP_PREFIX) {
            return Err(PlanningError::ReservedActionName {
                action: action.name.clone(),
            });
        }
        if let Some(node) = self.nodes.get(action.name.as_str()) {
            return Ok(node.clone());
        }
        let preconditions = signed_literals(&action.precond_pos, &action.precond_neg);
        let effects = signed_literals(&action.effect_add, &action.effect_rem);
        let node = ActionNodeInner::new(&action.name, preconditions, effects, false)?;
        Ok(self.insert(node))
    }

    /// Returns the two persistence actions of a fluent, for its positive and negative literal.
    pub fn make_no_ops(&mut self, fluent: &Fluent) -> [ActionNode; 2] {
        [
            Literal::positive(fluent.clone()),
            Literal::negative(fluent.clone()),
        ]
        .map(|literal| {
            let name = format!("{NO_OP_PREFIX}{literal}");
            if let Some(node) = self.nodes.get(name.as_str()) {
                return node.clone();
            }
            let singleton = BTreeSet::from([literal]);
            // a single literal cannot contradict itself
            let node = ActionNodeInner {
                name: Arc::from(name.as_str()),
                preconditions: singleton.clone(),
                effects: singleton,
                is_no_op: true,
            };
            self.insert(node)
        })
    }

    /// Returns the number of distinct nodes built so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert(&mut self, node: ActionNodeInner) -> ActionNode {
        let node = Arc::new(node);
        self.nodes.insert(node.name.clone(), node.clone());
        node
    }
}

fn signed_literals(positive: &[Fluent], negative: &[Fluent]) -> BTreeSet<Literal> {
    positive
        .iter()
        .cloned()
        .map(Literal::positive)
        .chain(negative.iter().cloned().map(Literal::negative))
        .collect()
}

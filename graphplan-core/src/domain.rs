/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use rustc_hash::FxHashSet;

use crate::{ActionNode, ActionNodeFactory, Fluent, GroundAction, Literal, PlanningError, Result};

/// The fixed part of a planning problem: the tracked fluents and every action node,
/// including the persistence actions.
///
/// A domain is built once and shared by all the planning graphs built for its states.
#[derive(Clone, Debug)]
pub struct PlanningDomain {
    fluents: Vec<Fluent>,
    action_nodes: Vec<ActionNode>,
}

impl PlanningDomain {
    /// Builds the domain for the given state map and ground actions.
    ///
    /// The order of `fluents` defines the encoding of states as boolean slices.
    pub fn new(
        fluents: Vec<Fluent>,
        actions: &[GroundAction],
        factory: &mut ActionNodeFactory,
    ) -> Result<Self> {
        let tracked = fluents.iter().collect::<FxHashSet<_>>();
        for action in actions {
            if let Some(fluent) = action.fluents().find(|fluent| !tracked.contains(fluent)) {
                return Err(PlanningError::UntrackedFluent {
                    action: action.name.clone(),
                    fluent: fluent.clone(),
                });
            }
        }

        let mut action_nodes = fluents
            .iter()
            .flat_map(|fluent| factory.make_no_ops(fluent))
            .collect::<Vec<_>>();
        let mut seen = FxHashSet::default();
        for action in actions {
            let node = factory.make_node(action)?;
            if seen.insert(node.clone()) {
                action_nodes.push(node);
            } else {
                log::warn!("Duplicate action {} ignored", action.name);
            }
        }
        log::debug!(
            "Domain built with {} fluents and {} action nodes",
            fluents.len(),
            action_nodes.len()
        );

        Ok(PlanningDomain {
            fluents,
            action_nodes,
        })
    }

    /// Returns the tracked fluents, in state encoding order.
    pub fn fluents(&self) -> &[Fluent] {
        &self.fluents
    }

    /// Checks that every goal literal is over a tracked fluent.
    pub fn check_goal<'a>(&self, goal: impl IntoIterator<Item = &'a Literal>) -> Result<()> {
        match goal
            .into_iter()
            .find(|literal| !self.fluents.contains(literal.fluent()))
        {
            Some(literal) => Err(PlanningError::UntrackedGoal {
                literal: literal.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Returns all action nodes, persistence actions first.
    pub fn action_nodes(&self) -> &[ActionNode] {
        &self.action_nodes
    }

    /// Returns the action nodes that are not persistence actions.
    pub fn domain_action_nodes(&self) -> impl Iterator<Item = &ActionNode> {
        self.action_nodes.iter().filter(|action| !action.is_no_op())
    }

    /// Converts an encoded state into one literal per tracked fluent.
    pub fn literals(&self, state: &[bool]) -> Result<Vec<Literal>> {
        if state.len() != self.fluents.len() {
            return Err(PlanningError::StateSizeMismatch {
                expected: self.fluents.len(),
                got: state.len(),
            });
        }
        Ok(self
            .fluents
            .iter()
            .zip(state)
            .map(|(fluent, &value)| Literal::with_value(fluent.clone(), value))
            .collect())
    }
}

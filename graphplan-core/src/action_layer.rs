/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use crate::{ActionLayer, ActionNode, Literal, LiteralLayer, PlanningGraphConfiguration};

impl ActionLayer {
    /// Records the preconditions of `action` as its parents (many-to-one).
    pub fn add_inbound_edges<'a>(
        &mut self,
        action: &ActionNode,
        literals: impl IntoIterator<Item = &'a Literal>,
    ) {
        self.parents
            .entry(action.clone())
            .or_default()
            .extend(literals.into_iter().cloned());
    }

    /// Records the effects of `action` as its children (one-to-many).
    pub fn add_outbound_edges<'a>(
        &mut self,
        action: &ActionNode,
        literals: impl IntoIterator<Item = &'a Literal>,
    ) {
        self.children
            .entry(action.clone())
            .or_default()
            .extend(literals.into_iter().cloned());
    }

    /// Computes the mutexes between every pair of actions of this layer.
    ///
    /// `parent` is the literal layer holding the preconditions of these actions.
    pub fn update_mutexes(&mut self, parent: &LiteralLayer, config: &PlanningGraphConfiguration) {
        let serialize = config.serialize;
        let ignore_dynamic_mutexes = config.ignore_dynamic_mutexes;
        self.set_mutexes_where(|a, b| {
            if serialize && !a.is_no_op() && !b.is_no_op() {
                return true;
            }
            if a.has_inconsistent_effects(b) || a.interferes_with(b) {
                return true;
            }
            !ignore_dynamic_mutexes && Self::competing_needs(a, b, parent)
        });
    }

    /// Returns true if any preconditions of the two actions are pairwise mutex in `parent`.
    pub fn competing_needs(a: &ActionNode, b: &ActionNode, parent: &LiteralLayer) -> bool {
        a.preconditions().iter().any(|precondition_a| {
            b.preconditions()
                .iter()
                .any(|precondition_b| parent.is_mutex(precondition_a, precondition_b))
        })
    }
}

/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use crate::{ActionLayer, ActionNode, Literal, LiteralLayer, PlanningGraphConfiguration};

impl LiteralLayer {
    /// Records `action` as a producer of each of `literals` (many-to-many).
    pub fn add_inbound_edges<'a>(
        &mut self,
        action: &ActionNode,
        literals: impl IntoIterator<Item = &'a Literal>,
    ) {
        for literal in literals {
            self.parents
                .entry(literal.clone())
                .or_default()
                .insert(action.clone());
        }
    }

    /// Records `action` as a consumer of each of `literals` (many-to-many).
    pub fn add_outbound_edges<'a>(
        &mut self,
        action: &ActionNode,
        literals: impl IntoIterator<Item = &'a Literal>,
    ) {
        for literal in literals {
            self.children
                .entry(literal.clone())
                .or_default()
                .insert(action.clone());
        }
    }

    /// Computes the mutexes between every pair of literals of this layer.
    ///
    /// `parent` is the action layer producing these literals; for the root layer it is empty
    /// and only negation mutexes are computed.
    pub fn update_mutexes(&mut self, parent: &ActionLayer, config: &PlanningGraphConfiguration) {
        let check_support = !config.ignore_dynamic_mutexes && !parent.is_empty();
        self.set_mutexes_where(|a, b| {
            a.is_negation_of(b) || (check_support && Self::inconsistent_support(a, b, parent))
        });
    }

    /// Returns true if all ways to achieve both literals are pairwise mutex in `parent`.
    ///
    /// A literal without any producer in `parent` is never considered inconsistently supported.
    pub fn inconsistent_support(a: &Literal, b: &Literal, parent: &ActionLayer) -> bool {
        let producers = |literal: &Literal| {
            parent
                .iter()
                .filter(|action| parent.has_child(action, literal))
                .collect::<Vec<_>>()
        };
        let producers_a = producers(a);
        let producers_b = producers(b);
        if producers_a.is_empty() || producers_b.is_empty() {
            return false;
        }
        producers_a.iter().all(|action_a| {
            producers_b
                .iter()
                .all(|action_b| parent.is_mutex(action_a, action_b))
        })
    }
}

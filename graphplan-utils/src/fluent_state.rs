/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::collections::BTreeSet;

use graphplan_core::{Fluent, Literal, PlanningError, Result};

/// A state given as the sets of fluents that are true and false.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FluentState {
    pub pos: BTreeSet<Fluent>,
    pub neg: BTreeSet<Fluent>,
}

impl FluentState {
    pub fn new(
        pos: impl IntoIterator<Item = Fluent>,
        neg: impl IntoIterator<Item = Fluent>,
    ) -> Self {
        FluentState {
            pos: pos.into_iter().collect(),
            neg: neg.into_iter().collect(),
        }
    }

    /// Returns all fluents of this state, true ones first.
    pub fn fluents(&self) -> impl Iterator<Item = &Fluent> {
        self.pos.iter().chain(&self.neg)
    }

    /// Returns one literal per fluent of this state.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.pos
            .iter()
            .cloned()
            .map(Literal::positive)
            .chain(self.neg.iter().cloned().map(Literal::negative))
    }
}

/// Encodes a state as one boolean per fluent of `state_map`, true if the fluent is in `pos`.
pub fn encode_state(state: &FluentState, state_map: &[Fluent]) -> Vec<bool> {
    state_map
        .iter()
        .map(|fluent| state.pos.contains(fluent))
        .collect()
}

/// Decodes a state encoded with [encode_state].
pub fn decode_state(state: &[bool], state_map: &[Fluent]) -> Result<FluentState> {
    if state.len() != state_map.len() {
        return Err(PlanningError::StateSizeMismatch {
            expected: state_map.len(),
            got: state.len(),
        });
    }
    let mut decoded = FluentState::default();
    for (fluent, &value) in state_map.iter().zip(state) {
        if value {
            decoded.pos.insert(fluent.clone());
        } else {
            decoded.neg.insert(fluent.clone());
        }
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use graphplan_core::{Fluent, PlanningError};

    use crate::*;

    #[test]
    fn encoding() {
        let state_map = ["Eaten(Cake)", "Have(Cake)"].map(Fluent::new);
        let state = FluentState::new([state_map[1].clone()], [state_map[0].clone()]);
        let encoded = encode_state(&state, &state_map);
        assert_eq!(encoded, vec![false, true]);
        assert_eq!(decode_state(&encoded, &state_map).unwrap(), state);
        assert_eq!(
            decode_state(&[true], &state_map).unwrap_err(),
            PlanningError::StateSizeMismatch {
                expected: 2,
                got: 1
            }
        );
    }
}

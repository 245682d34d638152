/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use graphplan_core::{Fluent, GroundAction, Result};

use crate::{create_expressions, FluentState, StripsProblem};

/// The "have cake and eat it too" problem: starting with a cake, end up having a cake and having eaten one.
///
/// Eating needs a cake and consumes it; baking needs no cake and produces one.
pub fn have_cake() -> Result<StripsProblem> {
    let have = Fluent::new("Have(Cake)");
    let eaten = Fluent::new("Eaten(Cake)");
    let actions = vec![
        GroundAction::new(
            "Eat(Cake)",
            (vec![have.clone()], vec![]),
            (vec![eaten.clone()], vec![have.clone()]),
        ),
        GroundAction::new(
            "Bake(Cake)",
            (vec![], vec![have.clone()]),
            (vec![have.clone()], vec![]),
        ),
    ];
    let initial = FluentState::new([have], [eaten]);
    let goal = create_expressions(&["Have(Cake)", "Eaten(Cake)"])?;
    StripsProblem::new("have-cake", initial, goal, actions)
}

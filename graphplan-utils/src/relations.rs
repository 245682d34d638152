/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use graphplan_core::Fluent;

/// Creates the fluents `name(a, b, ...)` for every combination of arguments,
/// taking the first argument from `arguments[0]`, the second from `arguments[1]`, and so on.
///
/// Combinations are listed with the last argument varying fastest.
pub fn make_relations(name: &str, arguments: &[&[&str]]) -> Vec<Fluent> {
    let mut tuples: Vec<Vec<&str>> = vec![Vec::new()];
    for values in arguments {
        tuples = tuples
            .iter()
            .flat_map(|tuple| {
                values.iter().map(move |value| {
                    let mut tuple = tuple.clone();
                    tuple.push(*value);
                    tuple
                })
            })
            .collect();
    }
    tuples
        .into_iter()
        .map(|tuple| Fluent::new(&format!("{name}({})", tuple.join(", "))))
        .collect()
}

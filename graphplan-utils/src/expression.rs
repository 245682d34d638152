/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use graphplan_core::{Fluent, Literal, PlanningError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXPRESSION: Regex =
        Regex::new(r"^\s*(~)?\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?:\(([^()]*)\))?\s*$").unwrap();
    static ref ARGUMENT: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

/// Parses a literal such as `At(C1, SFO)` or `~Have(Cake)`.
///
/// Whitespace is ignored, and the fluent is stored in the canonical `Name(a, b)` form.
pub fn expr(text: &str) -> Result<Literal> {
    let invalid = || PlanningError::InvalidExpression(text.to_owned());
    let captures = EXPRESSION.captures(text).ok_or_else(invalid)?;
    let positive = captures.get(1).is_none();
    let name = &captures[2];
    let fluent = match captures.get(3) {
        Some(arguments) => {
            let arguments = arguments.as_str().split(',').map(str::trim).collect::<Vec<_>>();
            if !arguments.iter().all(|argument| ARGUMENT.is_match(argument)) {
                return Err(invalid());
            }
            Fluent::new(&format!("{name}({})", arguments.join(", ")))
        }
        None => Fluent::new(name),
    };
    Ok(Literal::with_value(fluent, positive))
}

/// Parses every text with [expr].
pub fn create_expressions(texts: &[&str]) -> Result<Vec<Literal>> {
    texts.iter().map(|text| expr(text)).collect()
}

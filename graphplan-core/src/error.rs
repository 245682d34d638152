/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use thiserror::Error;

use crate::{Fluent, Literal};

/// Errors raised while building domains and planning graphs, or evaluating heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    /// A precondition or effect set of an action contains both a literal and its negation.
    #[error("action {action} is malformed: it contains both {literal} and its negation")]
    MalformedAction { action: String, literal: Literal },

    /// A ground action refers to a fluent that is not part of the domain state map.
    #[error("action {action} refers to untracked fluent {fluent}")]
    UntrackedFluent { action: String, fluent: Fluent },

    /// A goal literal refers to a fluent that is not part of the domain state map.
    #[error("goal {literal} refers to an untracked fluent")]
    UntrackedGoal { literal: Literal },

    /// A ground action uses the name prefix reserved for persistence actions.
    #[error("action {action} uses the reserved persistence prefix \"NoOp::\"")]
    ReservedActionName { action: String },

    /// An encoded state does not have one value per tracked fluent.
    #[error("state has {got} values but the domain tracks {expected} fluents")]
    StateSizeMismatch { expected: usize, got: usize },

    /// The planning graph leveled off before the goal condition could be met.
    #[error("goal is unreachable: planning graph leveled off at level {level}")]
    GoalUnreachable { level: usize },

    /// A textual expression could not be parsed as a literal.
    #[error("invalid expression: {0:?}")]
    InvalidExpression(String),
}

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlanningError>;

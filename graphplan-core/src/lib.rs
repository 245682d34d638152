/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

//! This is the core of graphplan, containing the [PlanningGraph] implementation and the heuristics computed from it.
//!
//! A planning graph alternates [literal layers](LiteralLayer) and [action layers](ActionLayer),
//! starting from the literals of a state and growing level by level until it levels off.
//! Each layer records which of its members are mutually exclusive.
//! From the graph, the [level sum](PlanningGraph::h_levelsum), [max level](PlanningGraph::h_maxlevel)
//! and [set level](PlanningGraph::h_setlevel) heuristics can be computed.
//!
//! STRIPS problems, reference domains and support code are available in the `graphplan-utils` crate.

mod action;
mod action_layer;
mod config;
mod domain;
mod error;
mod graph;
mod heuristic;
mod layer;
mod literal;
mod literal_layer;

/// When `graphviz` feature is enabled, provides plotting of planning graphs.
#[cfg(feature = "graphviz")]
pub mod graphviz;

pub use action::*;
pub use config::*;
pub use domain::*;
pub use error::*;
pub use graph::*;
pub use heuristic::*;
pub use layer::*;
pub use literal::*;

/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

//! This is the utility module of [graphplan](https://crates.io/crates/graphplan-core/), containing STRIPS problems and helpful utility code.
//!
//! It contains the following features:
//! - Parsing of literals from text ([expr] and [create_expressions]) and generation of relations ([make_relations]).
//! - States as sets of true and false fluents ([FluentState]) and their boolean encoding ([encode_state], [decode_state]).
//! - The interface that search strategies use ([SearchProblem]), and its implementation for STRIPS problems ([StripsProblem]), which also provides memoized heuristics.
//! - Reference problems: [have_cake] and the air cargo problems [air_cargo_p1] to [air_cargo_p4].
//! - Helper functions to inspect planning graphs: [plot_graph_in_tmp] and [describe_layers].

mod air_cargo;
mod expression;
mod fluent_state;
mod graphs;
mod have_cake;
mod problem;
mod relations;
mod report;

pub use air_cargo::*;
pub use expression::*;
pub use fluent_state::*;
pub use graphs::*;
pub use have_cake::*;
pub use problem::*;
pub use relations::*;
pub use report::*;

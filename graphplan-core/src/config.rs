/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use serde::{Deserialize, Serialize};

/// The configuration of a planning graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlanningGraphConfiguration {
    /// if true, two actions that are not no-ops are always mutex, so at most one real action fires per level
    pub serialize: bool,
    /// if true, competing needs and inconsistent support mutexes are not computed, only static ones
    pub ignore_dynamic_mutexes: bool,
}

impl Default for PlanningGraphConfiguration {
    fn default() -> Self {
        Self {
            serialize: true,
            ignore_dynamic_mutexes: false,
        }
    }
}

impl PlanningGraphConfiguration {
    /// Serialized graph without dynamic mutexes, sufficient for heuristics that only look at literal membership.
    pub const fn relaxed() -> Self {
        Self {
            serialize: true,
            ignore_dynamic_mutexes: true,
        }
    }
}

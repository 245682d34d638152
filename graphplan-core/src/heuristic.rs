/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use serde::{Deserialize, Serialize};

use crate::{Literal, PlanningError, PlanningGraph, PlanningGraphConfiguration, Result};

/// The planning-graph heuristics.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Sum of the level costs of the goal literals.
    LevelSum,
    /// Largest level cost of the goal literals.
    MaxLevel,
    /// First level where all goal literals appear and no pair of them is mutex.
    SetLevel,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::LevelSum, Heuristic::MaxLevel, Heuristic::SetLevel];

    /// The graph configuration to use for this heuristic.
    ///
    /// Level costs only depend on literal membership, so dynamic mutexes are skipped for them.
    pub fn configuration(self) -> PlanningGraphConfiguration {
        match self {
            Heuristic::LevelSum | Heuristic::MaxLevel => PlanningGraphConfiguration::relaxed(),
            Heuristic::SetLevel => PlanningGraphConfiguration::default(),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::LevelSum => "level-sum",
            Heuristic::MaxLevel => "max-level",
            Heuristic::SetLevel => "set-level",
        };
        f.write_str(name)
    }
}

/// What the deepest literal layer of a graph says about its goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalStatus {
    /// level of the deepest literal layer
    pub level: usize,
    /// goal literals present in that layer
    pub achieved: BTreeSet<Literal>,
    /// whether every goal literal is present
    pub all_achieved: bool,
    /// whether no two present goal literals are mutex
    pub mutex_free: bool,
}

impl PlanningGraph {
    /// Inspects the goal literals in the deepest literal layer.
    pub fn current_goal_status(&self) -> GoalStatus {
        let layer = self.last_literal_layer();
        let achieved = self
            .goal()
            .iter()
            .filter(|literal| layer.contains(literal))
            .cloned()
            .collect::<BTreeSet<_>>();
        let literals = achieved.iter().collect::<Vec<_>>();
        let mutex_free = literals.iter().enumerate().all(|(index, a)| {
            literals[index + 1..]
                .iter()
                .all(|b| !layer.is_mutex(a, b))
        });
        GoalStatus {
            level: self.level_count(),
            all_achieved: achieved.len() == self.goal().len(),
            achieved,
            mutex_free,
        }
    }

    /// Expands the graph one level at a time until `is_done` holds for the goal status.
    ///
    /// Returns the level at which it holds, or an error if the graph leveled off before.
    fn expand_until(&mut self, mut is_done: impl FnMut(&GoalStatus) -> bool) -> Result<usize> {
        loop {
            let status = self.current_goal_status();
            if is_done(&status) {
                return Ok(status.level);
            }
            if self.is_leveled() {
                log::debug!(
                    "L{}\tGraph leveled with goals {:?} achieved out of {:?}",
                    status.level,
                    status.achieved,
                    self.goal()
                );
                return Err(PlanningError::GoalUnreachable {
                    level: status.level,
                });
            }
            self.extend();
        }
    }

    /// Returns the level cost of every goal literal: the level of the first literal layer it appears in.
    pub fn level_costs(&mut self) -> Result<BTreeMap<Literal, usize>> {
        let goal_count = self.goal().len();
        let mut costs = BTreeMap::new();
        self.expand_until(|status| {
            for literal in &status.achieved {
                costs.entry(literal.clone()).or_insert(status.level);
            }
            costs.len() == goal_count
        })?;
        Ok(costs)
    }

    /// Calculates the level sum heuristic: the sum of the level costs of all goal literals.
    ///
    /// This counts each goal independently, so it may overestimate when goals share sub-plans.
    pub fn h_levelsum(&mut self) -> Result<usize> {
        if self.goal().is_empty() {
            return Ok(0);
        }
        let value = self.level_costs()?.values().sum();
        log::debug!("Level sum {value}");
        Ok(value)
    }

    /// Calculates the max level heuristic: the largest level cost of any goal literal.
    pub fn h_maxlevel(&mut self) -> Result<usize> {
        if self.goal().is_empty() {
            return Ok(0);
        }
        let value = self.level_costs()?.values().copied().max().unwrap_or(0);
        log::debug!("Max level {value}");
        Ok(value)
    }

    /// Calculates the set level heuristic: the first level in which all goal literals
    /// appear and no pair of them is mutex.
    pub fn h_setlevel(&mut self) -> Result<usize> {
        if self.goal().is_empty() {
            return Ok(0);
        }
        let value = self.expand_until(|status| status.all_achieved && status.mutex_free)?;
        log::debug!("Set level {value}");
        Ok(value)
    }

    /// Calculates the given heuristic.
    pub fn heuristic(&mut self, heuristic: Heuristic) -> Result<usize> {
        match heuristic {
            Heuristic::LevelSum => self.h_levelsum(),
            Heuristic::MaxLevel => self.h_maxlevel(),
            Heuristic::SetLevel => self.h_setlevel(),
        }
    }
}

/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::cell::RefCell;

use cached::{Cached, UnboundCache};
use graphplan_core::{
    ActionNodeFactory, Fluent, GroundAction, Heuristic, Literal, PlanningDomain, PlanningGraph,
    PlanningGraphConfiguration, Result,
};

use crate::{encode_state, FluentState};

/// What a search strategy needs from a problem.
pub trait SearchProblem {
    /// State of the problem
    type State: Clone;
    /// Action that transforms a state into another
    type Action: Clone;

    /// Returns the state the search starts from.
    fn initial(&self) -> Self::State;
    /// Returns the actions that can be executed in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;
    /// Returns the state resulting from executing `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;
    /// Returns whether `state` satisfies the goal.
    fn goal_test(&self, state: &Self::State) -> bool;
    /// Returns the cost of going from `state` to `next` through `action` (by default 1)
    fn step_cost(&self, _state: &Self::State, _action: &Self::Action, _next: &Self::State) -> usize {
        1
    }
}

/// A STRIPS planning problem, whose states are encoded as one boolean per fluent.
///
/// Besides the search interface, it provides heuristics for its states, and memoizes the
/// ones computed from planning graphs.
pub struct StripsProblem {
    name: String,
    initial: Vec<bool>,
    goal: Vec<Literal>,
    actions: Vec<GroundAction>,
    domain: PlanningDomain,
    cache: RefCell<UnboundCache<(Heuristic, Vec<bool>), Result<usize>>>,
}

impl StripsProblem {
    /// Creates a problem, the fluents of `initial` forming its state map.
    pub fn new(
        name: impl Into<String>,
        initial: FluentState,
        goal: Vec<Literal>,
        actions: Vec<GroundAction>,
    ) -> Result<Self> {
        let mut state_map = initial.fluents().cloned().collect::<Vec<_>>();
        state_map.sort();
        state_map.dedup();
        let initial = encode_state(&initial, &state_map);
        let mut factory = ActionNodeFactory::new();
        let domain = PlanningDomain::new(state_map, &actions, &mut factory)?;
        domain.check_goal(&goal)?;
        let name = name.into();
        log::debug!(
            "Problem {} created with {} fluents, {} actions and {} goals",
            name,
            domain.fluents().len(),
            actions.len(),
            goal.len()
        );
        Ok(StripsProblem {
            name,
            initial,
            goal,
            actions,
            domain,
            cache: RefCell::new(UnboundCache::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fluents of the problem, in state encoding order.
    pub fn state_map(&self) -> &[Fluent] {
        self.domain.fluents()
    }

    pub fn goal(&self) -> &[Literal] {
        &self.goal
    }

    pub fn ground_actions(&self) -> &[GroundAction] {
        &self.actions
    }

    /// Returns the planning domain shared by the planning graphs of this problem.
    pub fn domain(&self) -> &PlanningDomain {
        &self.domain
    }

    /// Returns the value of `fluent` in `state`, or `None` if `fluent` is not tracked.
    ///
    /// Panics if `state` does not hold one value per tracked fluent.
    pub fn value_of(&self, state: &[bool], fluent: &Fluent) -> Option<bool> {
        self.assert_state_size(state);
        let index = self.state_map().binary_search(fluent).ok()?;
        state.get(index).copied()
    }

    fn assert_state_size(&self, state: &[bool]) {
        assert_eq!(
            state.len(),
            self.state_map().len(),
            "state of problem {} has the wrong number of values",
            self.name
        );
    }

    fn holds(&self, state: &[bool], literal: &Literal) -> bool {
        self.value_of(state, literal.fluent()) == Some(literal.is_positive())
    }

    /// Builds the planning graph rooted at `state`, only containing its root literal layer.
    pub fn planning_graph(
        &self,
        state: &[bool],
        config: PlanningGraphConfiguration,
    ) -> Result<PlanningGraph> {
        PlanningGraph::new(&self.domain, state, &self.goal, config)
    }

    /// Counts the goal literals that do not hold in `state`.
    pub fn h_unmet_goals(&self, state: &[bool]) -> usize {
        self.assert_state_size(state);
        self.goal
            .iter()
            .filter(|literal| !self.holds(state, literal))
            .count()
    }

    /// Computes a planning-graph heuristic for `state`, with the graph configuration it requires.
    ///
    /// Results, including unreachable goals, are memoized per heuristic and state.
    pub fn h_pg(&self, heuristic: Heuristic, state: &[bool]) -> Result<usize> {
        let key = (heuristic, state.to_vec());
        let cached = self.cache.borrow_mut().cache_get(&key).cloned();
        if let Some(value) = cached {
            log::trace!("{} {} reused", self.name, heuristic);
            return value;
        }
        let value = self
            .planning_graph(state, heuristic.configuration())
            .and_then(|mut graph| graph.heuristic(heuristic));
        self.cache.borrow_mut().cache_set(key, value.clone());
        value
    }

    /// The level sum heuristic, see [PlanningGraph::h_levelsum].
    pub fn h_pg_levelsum(&self, state: &[bool]) -> Result<usize> {
        self.h_pg(Heuristic::LevelSum, state)
    }

    /// The max level heuristic, see [PlanningGraph::h_maxlevel].
    pub fn h_pg_maxlevel(&self, state: &[bool]) -> Result<usize> {
        self.h_pg(Heuristic::MaxLevel, state)
    }

    /// The set level heuristic, see [PlanningGraph::h_setlevel].
    pub fn h_pg_setlevel(&self, state: &[bool]) -> Result<usize> {
        self.h_pg(Heuristic::SetLevel, state)
    }

    /// Returns the number of memoized heuristic values.
    pub fn cached_heuristic_count(&self) -> usize {
        self.cache.borrow().cache_size()
    }
}

impl SearchProblem for StripsProblem {
    type State = Vec<bool>;
    type Action = GroundAction;

    fn initial(&self) -> Self::State {
        self.initial.clone()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.assert_state_size(state);
        self.actions
            .iter()
            .filter(|action| {
                action
                    .precond_pos
                    .iter()
                    .all(|fluent| self.value_of(state, fluent) == Some(true))
                    && action
                        .precond_neg
                        .iter()
                        .all(|fluent| self.value_of(state, fluent) == Some(false))
            })
            .cloned()
            .collect()
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.assert_state_size(state);
        self.state_map()
            .iter()
            .zip(state)
            .map(|(fluent, &value)| {
                (value && !action.effect_rem.contains(fluent)) || action.effect_add.contains(fluent)
            })
            .collect()
    }

    fn goal_test(&self, state: &Self::State) -> bool {
        self.assert_state_size(state);
        self.goal.iter().all(|literal| self.holds(state, literal))
    }
}

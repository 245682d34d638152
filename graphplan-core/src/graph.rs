/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::collections::BTreeSet;

use crate::{
    ActionLayer, ActionNode, Literal, LiteralLayer, PlanningDomain, PlanningGraphConfiguration,
    Result,
};

/// A planning graph: alternating literal and action layers, grown one level at a time.
///
/// Action layer `i` sits between literal layers `i` and `i + 1`.
/// Layers only grow: a literal or action present at some level is present at all later levels.
pub struct PlanningGraph {
    config: PlanningGraphConfiguration,
    goal: BTreeSet<Literal>,
    action_nodes: Vec<ActionNode>,
    // parent of the root literal layer, always empty
    root_parent: ActionLayer,
    literal_layers: Vec<LiteralLayer>,
    action_layers: Vec<ActionLayer>,
    is_leveled: bool,
}

impl PlanningGraph {
    /// Creates the graph rooted at `state`, an encoded state of `domain`.
    ///
    /// Only the root literal layer is built; further levels are added on demand.
    /// Goal literals over fluents the domain does not track are rejected.
    pub fn new<'a>(
        domain: &PlanningDomain,
        state: &[bool],
        goal: impl IntoIterator<Item = &'a Literal>,
        config: PlanningGraphConfiguration,
    ) -> Result<Self> {
        let goal = goal.into_iter().cloned().collect::<BTreeSet<_>>();
        domain.check_goal(&goal)?;
        let root_parent = ActionLayer::default();
        let mut root = LiteralLayer::new(domain.literals(state)?);
        root.update_mutexes(&root_parent, &config);
        Ok(PlanningGraph {
            config,
            goal,
            action_nodes: domain.action_nodes().to_vec(),
            root_parent,
            literal_layers: vec![root],
            action_layers: Vec::new(),
            is_leveled: false,
        })
    }

    /// Returns the configuration of this graph.
    pub fn config(&self) -> &PlanningGraphConfiguration {
        &self.config
    }

    /// Returns the goal literals.
    pub fn goal(&self) -> &BTreeSet<Literal> {
        &self.goal
    }

    /// Returns every action node considered by this graph, including persistence actions.
    pub fn action_nodes(&self) -> &[ActionNode] {
        &self.action_nodes
    }

    /// Returns the literal layers, the root first.
    pub fn literal_layers(&self) -> &[LiteralLayer] {
        &self.literal_layers
    }

    /// Returns the action layers, the first one following the root literal layer.
    pub fn action_layers(&self) -> &[ActionLayer] {
        &self.action_layers
    }

    /// Returns the deepest literal layer.
    pub fn last_literal_layer(&self) -> &LiteralLayer {
        // there is always a root layer
        &self.literal_layers[self.literal_layers.len() - 1]
    }

    /// Returns the level of the deepest literal layer, 0 for the root.
    pub fn level_count(&self) -> usize {
        self.literal_layers.len() - 1
    }

    /// Returns true once the last expansion added neither literals nor changed literal mutexes.
    pub fn is_leveled(&self) -> bool {
        self.is_leveled
    }

    /// Returns the action layer preceding literal layer `level`, empty for the root.
    pub fn parent_of_literal_layer(&self, level: usize) -> &ActionLayer {
        if level == 0 {
            &self.root_parent
        } else {
            &self.action_layers[level - 1]
        }
    }

    /// Returns the literal layer preceding action layer `level`.
    pub fn parent_of_action_layer(&self, level: usize) -> &LiteralLayer {
        &self.literal_layers[level]
    }

    /// Extends the graph until it is leveled, or until `max_levels` levels have been added.
    ///
    /// `None` never interrupts the expansion.
    pub fn fill(&mut self, max_levels: Option<usize>) -> &mut Self {
        let mut remaining = max_levels;
        while !self.is_leveled {
            if remaining == Some(0) {
                break;
            }
            self.extend();
            remaining = remaining.map(|levels| levels - 1);
        }
        self
    }

    /// Extends the graph by one action layer and one literal layer.
    ///
    /// The new action layer holds every action whose preconditions are all in the deepest
    /// literal layer, and the new literal layer every literal that these actions could produce.
    /// Does nothing if the graph is leveled.
    pub fn extend(&mut self) {
        if self.is_leveled {
            return;
        }

        let level = self.level_count();
        let parent_literals = &self.literal_layers[level];
        let parent_actions = self.parent_of_literal_layer(level);
        let mut action_layer = ActionLayer::carry_forward(parent_actions);
        let mut literal_layer = LiteralLayer::carry_forward(parent_literals);

        // actions of the parent layer are already in the carried-forward layers
        let new_actions = self
            .action_nodes
            .iter()
            .filter(|action| {
                !parent_actions.contains(action)
                    && parent_literals.contains_all(action.preconditions())
            })
            .cloned()
            .collect::<Vec<_>>();
        for action in &new_actions {
            log::trace!("L{}\tNew action {}", level, action);
            action_layer.add(action.clone());
            literal_layer.extend(action.effects().iter().cloned());
            action_layer.add_inbound_edges(action, action.preconditions());
            action_layer.add_outbound_edges(action, action.effects());
            literal_layer.add_inbound_edges(action, action.effects());
        }

        // literal mutexes depend on the mutexes of their parent action layer
        action_layer.update_mutexes(parent_literals, &self.config);
        literal_layer.update_mutexes(&action_layer, &self.config);

        let parent_literals = &mut self.literal_layers[level];
        for action in &new_actions {
            parent_literals.add_outbound_edges(action, action.preconditions());
        }
        self.is_leveled = literal_layer == *parent_literals;
        log::debug!(
            "L{}\tExtended with {} new actions: {} actions ({} mutexes), {} literals ({} mutexes){}",
            level + 1,
            new_actions.len(),
            action_layer.len(),
            action_layer.mutex_count(),
            literal_layer.len(),
            literal_layer.mutex_count(),
            if self.is_leveled { ", leveled" } else { "" }
        );

        self.action_layers.push(action_layer);
        self.literal_layers.push(literal_layer);
    }

    /// Extends the graph by one level, returning whether it changed.
    pub fn expand_one_level(&mut self) -> bool {
        let leveled = self.is_leveled;
        self.extend();
        !leveled
    }
}

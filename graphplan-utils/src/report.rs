/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::fmt::Write;

use ansi_term::Style;
use graphplan_core::{Layer, LayerNode, PlanningGraph, NO_OP_PREFIX};

fn highlight_style() -> Style {
    ansi_term::Style::new().bold().fg(ansi_term::Colour::Green)
}

fn highlight_goal(text: &str) -> String {
    ansi_term::Style::new()
        .bold()
        .fg(ansi_term::Colour::Yellow)
        .paint(text)
        .to_string()
}

fn sorted_names<N: LayerNode>(layer: &Layer<N>) -> Vec<(String, usize)> {
    let mut names = layer
        .iter()
        .map(|node| (node.to_string(), layer.mutexes_of(node).count()))
        .collect::<Vec<_>>();
    names.sort();
    names
}

/// Describes every layer of the graph, one member per line with its number of mutexes.
///
/// Goal literals are highlighted, and persistence actions are omitted.
pub fn describe_layers(graph: &PlanningGraph) -> String {
    let goals = graph
        .goal()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    let mut text = String::new();
    for (level, literals) in graph.literal_layers().iter().enumerate() {
        let title = format!("L{level}");
        // writing to a string cannot fail
        let _ = writeln!(
            text,
            "{} {} literals, {} mutexes",
            highlight_style().paint(&title),
            literals.len(),
            literals.mutex_count()
        );
        for (name, mutexes) in sorted_names(literals) {
            let name = if goals.contains(&name) {
                highlight_goal(&name)
            } else {
                name
            };
            let _ = writeln!(text, "  {name} ({mutexes})");
        }
        if let Some(actions) = graph.action_layers().get(level) {
            let title = format!("A{level}");
            let _ = writeln!(
                text,
                "{} {} actions, {} mutexes",
                highlight_style().paint(&title),
                actions.len(),
                actions.mutex_count()
            );
            for (name, mutexes) in sorted_names(actions) {
                if !name.starts_with(NO_OP_PREFIX) {
                    let _ = writeln!(text, "  {name} ({mutexes})");
                }
            }
        }
    }
    if graph.is_leveled() {
        let _ = writeln!(text, "leveled");
    }
    text
}

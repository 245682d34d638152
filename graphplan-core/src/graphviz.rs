/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::{
    borrow::Cow,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    io::{self, Write},
};

use dot::{Arrow, Edges, GraphWalk, Id, Kind, LabelText, Labeller, Nodes, Style};

use crate::{ActionNode, Literal, PlanningGraph};

/// Renders the planning graph as graphviz's dot format.
pub fn plot_planning_graph<W: Write>(graph: &PlanningGraph, w: &mut W) -> io::Result<()> {
    dot::render(graph, w)
}

/// A node of the rendered graph, tagged with its level.
#[derive(Clone, Debug)]
pub enum GraphNode {
    Literal(usize, Literal),
    Action(usize, ActionNode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeKind {
    Precondition,
    Effect,
    Mutex,
}

#[derive(Clone, Debug)]
pub struct GraphEdge {
    source: GraphNode,
    target: GraphNode,
    kind: EdgeKind,
}

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

// actions of the same schema, e.g. all `Fly(...)`, share a color
fn schema_color_hsv(action: &ActionNode) -> (f32, f32, f32) {
    use palette::IntoColor;
    let schema = action.name().split('(').next().unwrap_or_default();
    let bytes: [u8; 8] = hash_of(&schema).to_ne_bytes();
    let (h, s, v) = palette::Srgb::from_components((bytes[5], bytes[6], bytes[7]))
        .into_format::<f32>()
        .into_hsv::<palette::encoding::Srgb>()
        .into_components();

    ((h.to_degrees() + 180.) / 360., s, v)
}

impl<'a> GraphWalk<'a, GraphNode, GraphEdge> for PlanningGraph {
    fn nodes(&'a self) -> Nodes<'a, GraphNode> {
        let literals = self
            .literal_layers()
            .iter()
            .enumerate()
            .flat_map(|(level, layer)| {
                layer
                    .iter()
                    .map(move |literal| GraphNode::Literal(level, literal.clone()))
            });
        let actions = self
            .action_layers()
            .iter()
            .enumerate()
            .flat_map(|(level, layer)| {
                layer
                    .iter()
                    .map(move |action| GraphNode::Action(level, action.clone()))
            });
        Nodes::Owned(literals.chain(actions).collect())
    }

    fn edges(&'a self) -> Edges<'a, GraphEdge> {
        let mut edges = Vec::new();
        for (level, layer) in self.action_layers().iter().enumerate() {
            for action in layer {
                let node = GraphNode::Action(level, action.clone());
                for literal in layer.parents_of(action) {
                    edges.push(GraphEdge {
                        source: GraphNode::Literal(level, literal.clone()),
                        target: node.clone(),
                        kind: EdgeKind::Precondition,
                    });
                }
                for literal in layer.children_of(action) {
                    edges.push(GraphEdge {
                        source: node.clone(),
                        target: GraphNode::Literal(level + 1, literal.clone()),
                        kind: EdgeKind::Effect,
                    });
                }
                for other in layer.mutexes_of(action) {
                    if action.name() < other.name() {
                        edges.push(GraphEdge {
                            source: node.clone(),
                            target: GraphNode::Action(level, other.clone()),
                            kind: EdgeKind::Mutex,
                        });
                    }
                }
            }
        }
        for (level, layer) in self.literal_layers().iter().enumerate() {
            for literal in layer {
                for other in layer.mutexes_of(literal) {
                    if literal < other {
                        edges.push(GraphEdge {
                            source: GraphNode::Literal(level, literal.clone()),
                            target: GraphNode::Literal(level, other.clone()),
                            kind: EdgeKind::Mutex,
                        });
                    }
                }
            }
        }
        Edges::Owned(edges)
    }

    fn source(&'a self, edge: &GraphEdge) -> GraphNode {
        edge.source.clone()
    }

    fn target(&'a self, edge: &GraphEdge) -> GraphNode {
        edge.target.clone()
    }
}

impl<'a> Labeller<'a, GraphNode, GraphEdge> for PlanningGraph {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("planning_graph").unwrap()
    }

    fn node_id(&'a self, n: &GraphNode) -> Id<'a> {
        let id = match n {
            GraphNode::Literal(level, literal) => format!("l{level}_{:x}", hash_of(literal)),
            GraphNode::Action(level, action) => format!("a{level}_{:x}", hash_of(action)),
        };
        Id::new(id).unwrap()
    }

    fn node_label(&'a self, n: &GraphNode) -> LabelText<'a> {
        let label = match n {
            GraphNode::Literal(level, literal) => format!("{literal}\nL{level}"),
            GraphNode::Action(level, action) => format!("{action}\nA{level}"),
        };
        LabelText::LabelStr(Cow::Owned(label))
    }

    fn node_shape(&'a self, n: &GraphNode) -> Option<LabelText<'a>> {
        let shape = match n {
            GraphNode::Literal(..) => "ellipse",
            GraphNode::Action(..) => "box",
        };
        Some(LabelText::LabelStr(Cow::Borrowed(shape)))
    }

    fn node_style(&'a self, n: &GraphNode) -> Style {
        match n {
            GraphNode::Literal(..) => Style::Solid,
            GraphNode::Action(_, action) if action.is_no_op() => Style::Dashed,
            GraphNode::Action(..) => Style::Filled,
        }
    }

    fn node_color(&'a self, n: &GraphNode) -> Option<LabelText<'a>> {
        match n {
            GraphNode::Action(_, action) if !action.is_no_op() => {
                let (h, s, _v) = schema_color_hsv(action);
                Some(LabelText::LabelStr(Cow::Owned(format!(
                    "{:.3} {:.3} 1.000",
                    h,
                    s.max(0.3)
                ))))
            }
            _ => None,
        }
    }

    fn edge_style(&'a self, e: &GraphEdge) -> Style {
        if e.kind == EdgeKind::Mutex {
            Style::Dashed
        } else {
            Style::Solid
        }
    }

    fn edge_color(&'a self, e: &GraphEdge) -> Option<LabelText<'a>> {
        match e.kind {
            EdgeKind::Mutex => Some(LabelText::LabelStr(Cow::Borrowed("red"))),
            EdgeKind::Precondition => Some(LabelText::LabelStr(Cow::Borrowed("gray40"))),
            EdgeKind::Effect => None,
        }
    }

    fn edge_start_arrow(&'a self, _e: &GraphEdge) -> Arrow {
        Arrow::none()
    }

    fn edge_end_arrow(&'a self, e: &GraphEdge) -> Arrow {
        if e.kind == EdgeKind::Mutex {
            Arrow::none()
        } else {
            Arrow::normal()
        }
    }

    fn kind(&self) -> Kind {
        Kind::Digraph
    }
}

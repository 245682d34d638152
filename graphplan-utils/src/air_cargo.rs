/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::collections::BTreeSet;

use graphplan_core::{Fluent, GroundAction, Result};

use crate::{create_expressions, make_relations, FluentState, StripsProblem};

fn at(thing: &str, airport: &str) -> Fluent {
    Fluent::new(&format!("At({thing}, {airport})"))
}

fn inside(cargo: &str, plane: &str) -> Fluent {
    Fluent::new(&format!("In({cargo}, {plane})"))
}

/// Creates the ground `Load`, `Unload` and `Fly` actions.
pub fn air_cargo_actions(cargos: &[&str], planes: &[&str], airports: &[&str]) -> Vec<GroundAction> {
    let mut loads = Vec::new();
    let mut unloads = Vec::new();
    for cargo in cargos {
        for plane in planes {
            for airport in airports {
                loads.push(GroundAction::new(
                    format!("Load({cargo}, {plane}, {airport})"),
                    (vec![at(cargo, airport), at(plane, airport)], vec![]),
                    (vec![inside(cargo, plane)], vec![at(cargo, airport)]),
                ));
                unloads.push(GroundAction::new(
                    format!("Unload({cargo}, {plane}, {airport})"),
                    (vec![inside(cargo, plane), at(plane, airport)], vec![]),
                    (vec![at(cargo, airport)], vec![inside(cargo, plane)]),
                ));
            }
        }
    }
    let mut flies = Vec::new();
    for plane in planes {
        for from in airports {
            for to in airports.iter().filter(|to| *to != from) {
                flies.push(GroundAction::new(
                    format!("Fly({plane}, {from}, {to})"),
                    (vec![at(plane, from)], vec![]),
                    (vec![at(plane, to)], vec![at(plane, from)]),
                ));
            }
        }
    }
    loads.into_iter().chain(unloads).chain(flies).collect()
}

/// Creates an air cargo problem; every `At` and `In` fluent not listed in `pos` is initially false.
pub fn air_cargo(
    name: &str,
    cargos: &[&str],
    planes: &[&str],
    airports: &[&str],
    pos: &[&str],
    goal: &[&str],
) -> Result<StripsProblem> {
    let things = cargos.iter().chain(planes).copied().collect::<Vec<_>>();
    let mut fluents = make_relations("At", &[&things[..], airports]);
    fluents.extend(make_relations("In", &[cargos, planes]));
    let pos = create_expressions(pos)?
        .into_iter()
        .map(|literal| literal.fluent().clone())
        .collect::<BTreeSet<_>>();
    let neg = fluents
        .into_iter()
        .filter(|fluent| !pos.contains(fluent))
        .collect::<Vec<_>>();
    let initial = FluentState::new(pos, neg);
    let goal = create_expressions(goal)?;
    StripsProblem::new(
        name,
        initial,
        goal,
        air_cargo_actions(cargos, planes, airports),
    )
}

/// Two cargos to swap between two airports, each starting next to a plane.
pub fn air_cargo_p1() -> Result<StripsProblem> {
    air_cargo(
        "air-cargo-p1",
        &["C1", "C2"],
        &["P1", "P2"],
        &["JFK", "SFO"],
        &["At(C1, SFO)", "At(C2, JFK)", "At(P1, SFO)", "At(P2, JFK)"],
        &["At(C1, JFK)", "At(C2, SFO)"],
    )
}

/// Three cargos, three planes and three airports.
pub fn air_cargo_p2() -> Result<StripsProblem> {
    air_cargo(
        "air-cargo-p2",
        &["C1", "C2", "C3"],
        &["P1", "P2", "P3"],
        &["JFK", "SFO", "ATL"],
        &[
            "At(C1, SFO)",
            "At(C2, JFK)",
            "At(C3, ATL)",
            "At(P1, SFO)",
            "At(P2, JFK)",
            "At(P3, ATL)",
        ],
        &["At(C1, JFK)", "At(C2, SFO)", "At(C3, SFO)"],
    )
}

/// Four cargos and four airports, but only two planes.
pub fn air_cargo_p3() -> Result<StripsProblem> {
    air_cargo(
        "air-cargo-p3",
        &["C1", "C2", "C3", "C4"],
        &["P1", "P2"],
        &["JFK", "SFO", "ATL", "ORD"],
        &[
            "At(C1, SFO)",
            "At(C2, JFK)",
            "At(C3, ATL)",
            "At(C4, ORD)",
            "At(P1, SFO)",
            "At(P2, JFK)",
        ],
        &["At(C1, JFK)", "At(C2, SFO)", "At(C3, JFK)", "At(C4, SFO)"],
    )
}

/// Like [air_cargo_p3], with a fifth cargo.
pub fn air_cargo_p4() -> Result<StripsProblem> {
    air_cargo(
        "air-cargo-p4",
        &["C1", "C2", "C3", "C4", "C5"],
        &["P1", "P2"],
        &["JFK", "SFO", "ATL", "ORD"],
        &[
            "At(C1, SFO)",
            "At(C2, JFK)",
            "At(C3, ATL)",
            "At(C4, ORD)",
            "At(C5, ORD)",
            "At(P1, SFO)",
            "At(P2, JFK)",
        ],
        &[
            "At(C1, JFK)",
            "At(C2, SFO)",
            "At(C3, JFK)",
            "At(C4, SFO)",
            "At(C5, JFK)",
        ],
    )
}

/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use graphplan_core::{Heuristic, PlanningGraphConfiguration};
use graphplan_utils::{
    air_cargo_p1, air_cargo_p2, air_cargo_p3, air_cargo_p4, describe_layers, have_cake,
    plot_graph_in_tmp, SearchProblem,
};

fn main() {
    env_logger::init();

    let problems = [
        have_cake(),
        air_cargo_p1(),
        air_cargo_p2(),
        air_cargo_p3(),
        air_cargo_p4(),
    ];
    for problem in problems {
        let problem = match problem {
            Ok(problem) => problem,
            Err(e) => {
                println!("Cannot create problem: {e}");
                continue;
            }
        };
        let initial = problem.initial();
        print!(
            "{}: {} fluents, {} actions, unmet goals {}",
            problem.name(),
            problem.state_map().len(),
            problem.ground_actions().len(),
            problem.h_unmet_goals(&initial)
        );
        for heuristic in Heuristic::ALL {
            match problem.h_pg(heuristic, &initial) {
                Ok(value) => print!(", {heuristic} {value}"),
                Err(e) => print!(", {heuristic} failed ({e})"),
            }
        }
        println!();
    }

    let cake = match have_cake() {
        Ok(cake) => cake,
        Err(e) => {
            println!("Cannot create problem: {e}");
            return;
        }
    };
    let mut graph = match cake.planning_graph(&cake.initial(), PlanningGraphConfiguration::default())
    {
        Ok(graph) => graph,
        Err(e) => {
            println!("Cannot build planning graph: {e}");
            return;
        }
    };
    graph.fill(None);
    println!("{}", describe_layers(&graph));
    if let Err(e) = plot_graph_in_tmp(&graph, "graphplan_graphs", "have-cake") {
        println!("Cannot write planning graph: {e}");
    }
}

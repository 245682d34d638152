/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::fs;

use graphplan_core::{graphviz, PlanningGraph};

/// Writes the graph as `{file_name}.dot` in the directory `base_dir_name` of the temporary directory,
/// creating it if needed.
pub fn plot_graph_in_tmp(
    graph: &PlanningGraph,
    base_dir_name: &str,
    file_name: &str,
) -> std::io::Result<()> {
    let temp_dir = std::env::temp_dir().display().to_string();
    let path = format!("{temp_dir}/{base_dir_name}/");
    fs::create_dir_all(&path)?;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(format!("{path}{file_name}.dot"))?;
    graphviz::plot_planning_graph(graph, &mut file)
}

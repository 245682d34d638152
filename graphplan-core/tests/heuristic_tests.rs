/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use graphplan_core::{
    ActionNodeFactory, Fluent, GroundAction, Heuristic, Literal, PlanningDomain, PlanningError,
    PlanningGraph, PlanningGraphConfiguration,
};
use graphplan_utils::{have_cake, SearchProblem};

const NO_GOAL: [Literal; 0] = [];

fn cake_graph(heuristic: Heuristic) -> PlanningGraph {
    env_logger::try_init().ok();
    let problem = have_cake().unwrap();
    PlanningGraph::new(
        problem.domain(),
        &problem.initial(),
        problem.goal(),
        heuristic.configuration(),
    )
    .unwrap()
}

/// A domain with a single fluent `X` and, optionally, an action making it true.
fn single_fluent_domain(with_action: bool) -> PlanningDomain {
    let x = Fluent::new("X");
    let actions = if with_action {
        vec![GroundAction::new(
            "MakeX",
            (vec![], vec![]),
            (vec![x.clone()], vec![]),
        )]
    } else {
        vec![]
    };
    PlanningDomain::new(vec![x], &actions, &mut ActionNodeFactory::new()).unwrap()
}

#[test]
fn cake_heuristics() {
    assert_eq!(cake_graph(Heuristic::LevelSum).h_levelsum(), Ok(1));
    assert_eq!(cake_graph(Heuristic::MaxLevel).h_maxlevel(), Ok(1));
    assert_eq!(cake_graph(Heuristic::SetLevel).h_setlevel(), Ok(2));
}

#[test]
fn dispatch() {
    for (heuristic, expected) in Heuristic::ALL.into_iter().zip([1, 1, 2]) {
        assert_eq!(cake_graph(heuristic).heuristic(heuristic), Ok(expected));
    }
}

#[test]
fn configurations() {
    assert_eq!(
        Heuristic::LevelSum.configuration(),
        PlanningGraphConfiguration::relaxed()
    );
    assert_eq!(
        Heuristic::MaxLevel.configuration(),
        PlanningGraphConfiguration::relaxed()
    );
    assert_eq!(
        Heuristic::SetLevel.configuration(),
        PlanningGraphConfiguration::default()
    );
    assert!(PlanningGraphConfiguration::default().serialize);
    assert!(!PlanningGraphConfiguration::default().ignore_dynamic_mutexes);
    assert_eq!(Heuristic::SetLevel.to_string(), "set-level");
}

#[test]
fn level_costs() {
    let mut graph = cake_graph(Heuristic::LevelSum);
    let costs = graph.level_costs().unwrap();
    assert_eq!(costs[&Literal::positive(Fluent::new("Have(Cake)"))], 0);
    assert_eq!(costs[&Literal::positive(Fluent::new("Eaten(Cake)"))], 1);
    // expansion stops as soon as all goals appeared
    assert_eq!(graph.level_count(), 1);
}

#[test]
fn goal_status() {
    let mut graph = cake_graph(Heuristic::SetLevel);
    let status = graph.current_goal_status();
    assert_eq!(status.level, 0);
    assert_eq!(status.achieved.len(), 1);
    assert!(!status.all_achieved);
    assert!(status.mutex_free);

    graph.extend();
    let status = graph.current_goal_status();
    assert_eq!(status.level, 1);
    assert!(status.all_achieved);
    assert!(!status.mutex_free);

    graph.extend();
    let status = graph.current_goal_status();
    assert!(status.all_achieved && status.mutex_free);
}

#[test]
fn empty_goal() {
    let domain = single_fluent_domain(false);
    for heuristic in Heuristic::ALL {
        let mut graph =
            PlanningGraph::new(&domain, &[false], &NO_GOAL, heuristic.configuration()).unwrap();
        assert_eq!(graph.heuristic(heuristic), Ok(0));
        assert_eq!(graph.level_count(), 0);
    }
}

#[test]
fn unreachable_goal() {
    let domain = single_fluent_domain(false);
    let goal = [Literal::positive(Fluent::new("X"))];
    for heuristic in Heuristic::ALL {
        let mut graph =
            PlanningGraph::new(&domain, &[false], &goal, heuristic.configuration()).unwrap();
        assert_eq!(
            graph.heuristic(heuristic),
            Err(PlanningError::GoalUnreachable { level: 1 })
        );
        assert!(graph.is_leveled());
    }
}

#[test]
fn permanently_mutex_goals() {
    let domain = single_fluent_domain(true);
    let x = Literal::positive(Fluent::new("X"));
    let goal = [x.clone(), !&x];

    let mut graph =
        PlanningGraph::new(&domain, &[false], &goal, PlanningGraphConfiguration::default())
            .unwrap();
    assert_eq!(
        graph.h_setlevel(),
        Err(PlanningError::GoalUnreachable { level: 2 })
    );

    // each goal literal is reachable on its own
    let mut graph = PlanningGraph::new(
        &domain,
        &[false],
        &goal,
        PlanningGraphConfiguration::relaxed(),
    )
    .unwrap();
    assert_eq!(graph.h_levelsum(), Ok(1));
    assert_eq!(graph.h_maxlevel(), Ok(1));
}

#[test]
fn leveled_extend_is_idempotent() {
    let mut graph = cake_graph(Heuristic::SetLevel);
    graph.fill(None);
    assert!(graph.is_leveled());
    let levels = graph.level_count();
    let last = format!("{:?}", graph.last_literal_layer());
    graph.extend();
    assert!(!graph.expand_one_level());
    graph.fill(Some(3));
    assert_eq!(graph.level_count(), levels);
    assert_eq!(format!("{:?}", graph.last_literal_layer()), last);
}

#[test]
fn leveled_layers_are_equal() {
    let mut graph = cake_graph(Heuristic::SetLevel);
    graph.fill(None);
    let layers = graph.literal_layers();
    let count = layers.len();
    assert!(count >= 2);
    assert_eq!(layers[count - 1], layers[count - 2]);
    for window in layers[..count - 1].windows(2) {
        assert_ne!(window[0], window[1]);
    }
}

#[test]
fn fill_with_limit() {
    let mut graph = cake_graph(Heuristic::SetLevel);
    graph.fill(Some(0));
    assert_eq!(graph.level_count(), 0);
    graph.fill(Some(1));
    assert_eq!(graph.level_count(), 1);
    assert!(graph.expand_one_level());
    assert_eq!(graph.level_count(), 2);
    assert_eq!(graph.action_layers().len(), 2);
}

#[test]
fn monotonic_growth() {
    let mut graph = cake_graph(Heuristic::SetLevel);
    graph.fill(None);
    for window in graph.literal_layers().windows(2) {
        assert!(window[1].contains_all(window[0].iter()));
    }
    for window in graph.action_layers().windows(2) {
        assert!(window[1].contains_all(window[0].iter()));
    }
}

#[test]
fn max_level_at_most_set_level() {
    let max_level = cake_graph(Heuristic::MaxLevel).h_maxlevel().unwrap();
    let set_level = cake_graph(Heuristic::SetLevel).h_setlevel().unwrap();
    assert!(max_level <= set_level);
}

#[test]
fn state_size_mismatch() {
    let domain = single_fluent_domain(false);
    let result = PlanningGraph::new(
        &domain,
        &[false, true],
        &NO_GOAL,
        PlanningGraphConfiguration::default(),
    );
    assert_eq!(
        result.err(),
        Some(PlanningError::StateSizeMismatch {
            expected: 1,
            got: 2
        })
    );
}

#[test]
fn untracked_fluent() {
    let action = GroundAction::new(
        "MakeY",
        (vec![], vec![]),
        (vec![Fluent::new("Y")], vec![]),
    );
    let result = PlanningDomain::new(
        vec![Fluent::new("X")],
        &[action],
        &mut ActionNodeFactory::new(),
    );
    assert_eq!(
        result.err().map(|error| error.to_string()),
        Some("action MakeY refers to untracked fluent Y".to_owned())
    );
}

#[test]
fn untracked_goal() {
    let problem = have_cake().unwrap();
    let typo = Literal::positive(Fluent::new("Have(Cakee)"));
    let result = PlanningGraph::new(
        problem.domain(),
        &problem.initial(),
        [&typo],
        PlanningGraphConfiguration::default(),
    );
    assert_eq!(
        result.err(),
        Some(PlanningError::UntrackedGoal { literal: typo })
    );
}

#[test]
fn duplicate_actions() {
    let x = Fluent::new("X");
    let make_x = GroundAction::new("MakeX", (vec![], vec![]), (vec![x.clone()], vec![]));
    let domain = PlanningDomain::new(
        vec![x],
        &[make_x.clone(), make_x],
        &mut ActionNodeFactory::new(),
    )
    .unwrap();
    assert_eq!(domain.domain_action_nodes().count(), 1);
    assert_eq!(domain.action_nodes().len(), 3);
}

#[test]
fn reserved_action_name() {
    let x = Fluent::new("X");
    let fake = GroundAction::new("NoOp::X", (vec![], vec![]), (vec![], vec![x.clone()]));
    let result = PlanningDomain::new(vec![x], &[fake], &mut ActionNodeFactory::new());
    assert_eq!(
        result.err(),
        Some(PlanningError::ReservedActionName {
            action: "NoOp::X".into()
        })
    );
}

#[test]
fn domain_action_nodes() {
    let domain = single_fluent_domain(true);
    let names = domain
        .action_nodes()
        .iter()
        .map(|action| action.name())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["NoOp::X", "NoOp::~X", "MakeX"]);
    assert_eq!(domain.domain_action_nodes().count(), 1);
}

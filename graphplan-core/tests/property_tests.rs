/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use graphplan_core::{
    ActionNodeFactory, Fluent, GroundAction, Heuristic, Layer, LayerNode, Literal, PlanningDomain,
    PlanningGraph, PlanningGraphConfiguration,
};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEED_COUNT: u64 = 64;

struct RandomProblem {
    domain: PlanningDomain,
    state: Vec<bool>,
    goal: Vec<Literal>,
}

/// Splits a random subset of `fluents` in two disjoint lists.
fn signed_subset(rng: &mut ChaCha8Rng, fluents: &[Fluent]) -> (Vec<Fluent>, Vec<Fluent>) {
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    for fluent in fluents {
        match rng.gen_range(0..4) {
            0 => positive.push(fluent.clone()),
            1 => negative.push(fluent.clone()),
            _ => {}
        }
    }
    (positive, negative)
}

fn random_problem(seed: u64) -> RandomProblem {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let fluents = (0..rng.gen_range(2..6))
        .map(|index| Fluent::new(&format!("F{index}")))
        .collect::<Vec<_>>();
    let actions = (0..rng.gen_range(1..6))
        .map(|index| {
            let preconditions = signed_subset(&mut rng, &fluents);
            let effects = signed_subset(&mut rng, &fluents);
            GroundAction::new(format!("Act{index}"), preconditions, effects)
        })
        .collect::<Vec<_>>();
    let state = fluents.iter().map(|_| rng.gen_bool(0.5)).collect();
    let goal_size = rng.gen_range(1..=fluents.len().min(3));
    let goal = fluents
        .choose_multiple(&mut rng, goal_size)
        .map(|fluent| Literal::with_value(fluent.clone(), rng.gen_bool(0.7)))
        .collect();
    let domain = PlanningDomain::new(fluents, &actions, &mut ActionNodeFactory::new()).unwrap();
    RandomProblem {
        domain,
        state,
        goal,
    }
}

fn graph_for(problem: &RandomProblem, config: PlanningGraphConfiguration) -> PlanningGraph {
    PlanningGraph::new(&problem.domain, &problem.state, &problem.goal, config).unwrap()
}

fn configurations() -> Vec<PlanningGraphConfiguration> {
    let mut configurations = Vec::new();
    for serialize in [false, true] {
        for ignore_dynamic_mutexes in [false, true] {
            configurations.push(PlanningGraphConfiguration {
                serialize,
                ignore_dynamic_mutexes,
            });
        }
    }
    configurations
}

fn check_mutex_table<N: LayerNode>(layer: &Layer<N>) {
    for a in layer {
        assert!(!layer.is_mutex(a, a), "{a} is mutex with itself");
        for b in layer.mutexes_of(a) {
            assert!(layer.contains(b));
            assert!(layer.is_mutex(b, a), "mutex between {a} and {b} is not symmetric");
        }
    }
}

#[test]
fn mutexes_are_symmetric_and_irreflexive() {
    for seed in 0..SEED_COUNT {
        let problem = random_problem(seed);
        for config in configurations() {
            let mut graph = graph_for(&problem, config);
            graph.fill(None);
            graph.literal_layers().iter().for_each(check_mutex_table);
            graph.action_layers().iter().for_each(check_mutex_table);
        }
    }
}

#[test]
fn negations_are_always_mutex() {
    for seed in 0..SEED_COUNT {
        let problem = random_problem(seed);
        for config in configurations() {
            let mut graph = graph_for(&problem, config);
            graph.fill(None);
            for layer in graph.literal_layers() {
                for literal in layer {
                    let negation = !literal;
                    if layer.contains(&negation) {
                        assert!(layer.is_mutex(literal, &negation));
                    }
                }
            }
        }
    }
}

#[test]
fn static_mutexes_are_always_present() {
    for seed in 0..SEED_COUNT {
        let problem = random_problem(seed);
        for config in configurations() {
            let mut graph = graph_for(&problem, config);
            graph.fill(None);
            for layer in graph.action_layers() {
                for a in layer {
                    for b in layer {
                        if a != b && (a.has_inconsistent_effects(b) || a.interferes_with(b)) {
                            assert!(layer.is_mutex(a, b), "{a} and {b} should be mutex");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn layers_grow_monotonically() {
    for seed in 0..SEED_COUNT {
        let problem = random_problem(seed);
        let mut graph = graph_for(&problem, PlanningGraphConfiguration::default());
        graph.fill(None);
        assert!(graph.is_leveled());
        assert_eq!(
            graph.literal_layers().len(),
            graph.action_layers().len() + 1
        );
        for window in graph.literal_layers().windows(2) {
            assert!(window[1].contains_all(window[0].iter()));
        }
        for window in graph.action_layers().windows(2) {
            assert!(window[1].contains_all(window[0].iter()));
        }
        // every action is applicable in the literal layer preceding it
        for (level, layer) in graph.action_layers().iter().enumerate() {
            let parent = graph.parent_of_action_layer(level);
            for action in layer {
                assert!(parent.contains_all(action.preconditions()));
            }
        }
    }
}

#[test]
fn heuristics_are_consistent() {
    for seed in 0..SEED_COUNT {
        let problem = random_problem(seed);
        let evaluate = |heuristic: Heuristic| {
            graph_for(&problem, heuristic.configuration()).heuristic(heuristic)
        };
        let level_sum = evaluate(Heuristic::LevelSum);
        let max_level = evaluate(Heuristic::MaxLevel);
        let set_level = evaluate(Heuristic::SetLevel);
        assert_eq!(level_sum.is_ok(), max_level.is_ok());
        match (level_sum, max_level, set_level) {
            (Ok(level_sum), Ok(max_level), Ok(set_level)) => {
                assert!(max_level <= level_sum);
                assert!(max_level <= set_level);
            }
            (_, Err(_), set_level) => assert!(set_level.is_err()),
            _ => {}
        }
    }
}

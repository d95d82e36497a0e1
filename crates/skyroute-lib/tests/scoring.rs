mod common;

use std::time::Duration;

use common::{diamond, mesh, A, B, C, D};
use skyroute_lib::{
    analyze_path, best_path, best_path_with_limits, build_graph, enumerate_simple_paths,
    AggregateCost, EdgeCost, EdgeSpec, Error, Node, NotFoundReason, RouteOutcome, SearchLimit,
    SearchLimits, Weights,
};

#[test]
fn unit_weights_prefer_the_cheaper_diamond_side() {
    let graph = diamond();
    let weights = Weights::default();

    let best = best_path(&graph, A, D, &weights)
        .expect("valid weights")
        .found()
        .expect("route exists");
    assert_eq!(best.path, vec![A, C, D]);
    assert!((best.score - 256.1).abs() < 1e-9, "score was {}", best.score);

    let other = AggregateCost::along(&graph, &[A, B, D])
        .expect("valid path")
        .score(&weights);
    assert!((other - 260.2).abs() < 1e-9, "score was {other}");
    assert!(best.score < other);
}

#[test]
fn heavy_congestion_weight_keeps_the_quieter_side() {
    // A -> C -> D is also the less congested side.
    let weights = Weights::new(1.0, 1.0, 1.0, 1000.0);
    let best = best_path(&diamond(), A, D, &weights)
        .expect("valid weights")
        .found()
        .expect("route exists");
    assert_eq!(best.path, vec![A, C, D]);
}

#[test]
fn equal_scores_keep_the_first_enumerated_path() {
    let equal = EdgeCost::new(10.0, 10.0, 10.0, 0.0);
    let nodes = || (1..=4).map(|id| Node::new(id, format!("N{id}"), 0.0, 0.0));

    // 1 -> 3 is declared before 1 -> 2, so depth-first order reaches 3 first.
    let graph = build_graph(
        nodes(),
        vec![
            EdgeSpec::new(1, 3, equal),
            EdgeSpec::new(1, 2, equal),
            EdgeSpec::new(2, 4, equal),
            EdgeSpec::new(3, 4, equal),
        ],
    )
    .expect("graph builds")
    .calm();
    let first: Vec<_> = enumerate_simple_paths(&graph, 1, 4).collect();
    assert_eq!(first, vec![vec![1, 3, 4], vec![1, 2, 4]]);
    let best = best_path(&graph, 1, 4, &Weights::default())
        .expect("valid weights")
        .found()
        .expect("route exists");
    assert_eq!(best.path, vec![1, 3, 4]);

    // Swapping the declaration order swaps the winner.
    let graph = build_graph(
        nodes(),
        vec![
            EdgeSpec::new(1, 2, equal),
            EdgeSpec::new(1, 3, equal),
            EdgeSpec::new(2, 4, equal),
            EdgeSpec::new(3, 4, equal),
        ],
    )
    .expect("graph builds")
    .calm();
    let best = best_path(&graph, 1, 4, &Weights::default())
        .expect("valid weights")
        .found()
        .expect("route exists");
    assert_eq!(best.path, vec![1, 2, 4]);
}

#[test]
fn best_score_is_no_worse_than_any_simple_path() {
    let graph = mesh();
    let weight_sets = [
        Weights::default(),
        Weights::new(0.0, 1.0, 0.0, 0.0),
        Weights::new(2.5, 0.0, 0.3, 100.0),
        Weights::new(0.01, 5.0, 1.0, 0.0),
    ];

    for weights in weight_sets {
        for (start, goal) in [(1, 4), (1, 6), (3, 6), (2, 1)] {
            let best = best_path(&graph, start, goal, &weights)
                .expect("valid weights")
                .found()
                .expect("mesh is strongly connected along these pairs");
            let mut candidates = 0;
            for path in enumerate_simple_paths(&graph, start, goal) {
                candidates += 1;
                let score = AggregateCost::along(&graph, &path)
                    .expect("enumerated paths are valid")
                    .score(&weights);
                assert!(
                    best.score <= score,
                    "{:?} scored {score} below best {}",
                    path,
                    best.score
                );
            }
            assert!(candidates >= 1);
        }
    }
}

#[test]
fn analyzer_agrees_with_scorer_exactly() {
    let graph = mesh();
    let best = best_path(&graph, 1, 6, &Weights::default())
        .expect("valid weights")
        .found()
        .expect("route exists");
    let metrics = analyze_path(&graph, &best.path).expect("valid path");

    let summed: f64 = best
        .path
        .windows(2)
        .map(|pair| graph.edge(pair[0], pair[1]).expect("edge").distance)
        .fold(0.0, |acc, distance| acc + distance);

    assert_eq!(metrics.total_distance_km.to_bits(), summed.to_bits());
    assert_eq!(
        metrics.total_distance_km.to_bits(),
        best.cost.distance.to_bits()
    );
    assert_eq!(
        metrics.flight_duration_min.to_bits(),
        best.cost.duration.to_bits()
    );
    assert_eq!(metrics.fuel_consumed_l.to_bits(), best.cost.fuel.to_bits());
    assert_eq!(metrics.legs, best.path.len() - 1);
}

#[test]
fn start_equal_to_goal_is_a_zero_cost_path() {
    let graph = diamond();
    let best = best_path(&graph, B, B, &Weights::default())
        .expect("valid weights")
        .found()
        .expect("trivial route");
    assert_eq!(best.path, vec![B]);
    assert_eq!(best.score, 0.0);
    assert_eq!(best.cost, AggregateCost::default());

    let metrics = analyze_path(&graph, &best.path).expect("valid path");
    assert_eq!(metrics.avg_congestion, 0.0);
    assert_eq!(metrics.legs, 0);
}

#[test]
fn disconnected_and_unknown_airports_are_not_found() {
    let graph = diamond();
    let weights = Weights::default();

    assert_eq!(
        best_path(&graph, D, A, &weights).expect("valid weights"),
        RouteOutcome::NotFound {
            reason: NotFoundReason::Unreachable
        }
    );
    assert_eq!(
        best_path(&graph, 99, A, &weights).expect("valid weights"),
        RouteOutcome::NotFound {
            reason: NotFoundReason::UnknownStart
        }
    );
    assert_eq!(
        best_path(&graph, A, 99, &weights).expect("valid weights"),
        RouteOutcome::NotFound {
            reason: NotFoundReason::UnknownGoal
        }
    );
}

#[test]
fn invalid_weights_are_rejected_before_search() {
    let err = best_path(&diamond(), A, D, &Weights::new(1.0, -1.0, 1.0, 1.0))
        .expect_err("negative weight");
    assert!(matches!(err, Error::InvalidWeight { value, .. } if value == -1.0));

    let err = best_path(&diamond(), A, D, &Weights::new(f64::NAN, 1.0, 1.0, 1.0))
        .expect_err("nan weight");
    assert!(matches!(err, Error::InvalidWeight { .. }));
}

#[test]
fn expansion_cap_reports_search_limit() {
    let limits = SearchLimits {
        max_expansions: Some(1),
        ..SearchLimits::default()
    };
    let err = best_path_with_limits(&mesh(), 1, 6, &Weights::default(), &limits)
        .expect_err("cap stops enumeration");
    assert!(matches!(
        err,
        Error::SearchLimitExceeded {
            limit: SearchLimit::Expansions(1)
        }
    ));
}

#[test]
fn depth_cap_restricts_candidate_paths() {
    let limits = SearchLimits {
        max_depth: Some(1),
        ..SearchLimits::default()
    };
    let outcome = best_path_with_limits(&diamond(), A, D, &Weights::default(), &limits)
        .expect("depth cap is not an error");
    assert_eq!(
        outcome,
        RouteOutcome::NotFound {
            reason: NotFoundReason::Unreachable
        }
    );
}

#[test]
fn zero_time_budget_reports_deadline() {
    let limits = SearchLimits {
        max_duration: Some(Duration::ZERO),
        ..SearchLimits::default()
    };
    let err = best_path_with_limits(&mesh(), 1, 6, &Weights::default(), &limits)
        .expect_err("budget is spent before the first expansion");
    assert!(matches!(
        err,
        Error::SearchLimitExceeded {
            limit: SearchLimit::Deadline(budget)
        } if budget == Duration::ZERO
    ));

    let trivial = best_path_with_limits(&mesh(), 1, 1, &Weights::default(), &limits)
        .expect("no search needed")
        .found()
        .expect("trivial route");
    assert_eq!(trivial.path, vec![1]);
    assert_eq!(trivial.score, 0.0);
}

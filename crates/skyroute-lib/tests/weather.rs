mod common;

use common::fixtures_dir;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use skyroute_lib::{
    apply_weather, apply_weather_with, load_network, DatasetPaths, Error, RawGraph, WeatherConfig,
};

fn raw() -> RawGraph {
    let paths = DatasetPaths::resolve(Some(&fixtures_dir())).expect("fixture tables exist");
    load_network(&paths).expect("fixture loads")
}

#[test]
fn weather_stays_within_default_bounds() {
    let calm = raw().calm();
    let stormy = apply_weather(raw(), &mut SmallRng::seed_from_u64(2024));

    for node in calm.nodes() {
        for edge in calm.neighbours(node.id) {
            let after = stormy.edge(node.id, edge.target).expect("edge survives");
            let delay = after.duration - edge.cost.duration;
            let extra = after.congestion - edge.cost.congestion;
            assert!((0.0..=20.0).contains(&delay), "delay {delay} out of range");
            assert!((0.0..=0.2).contains(&extra), "congestion {extra} out of range");
            assert_eq!(after.distance, edge.cost.distance);
            assert_eq!(after.fuel, edge.cost.fuel);
        }
    }
}

#[test]
fn fixed_seed_reproduces_the_same_network() {
    let first = apply_weather(raw(), &mut SmallRng::seed_from_u64(11));
    let second = apply_weather(raw(), &mut SmallRng::seed_from_u64(11));

    for node in first.nodes() {
        assert_eq!(first.neighbours(node.id), second.neighbours(node.id));
    }
}

#[test]
fn custom_bounds_are_validated() {
    let config = WeatherConfig {
        max_delay_minutes: f64::INFINITY,
        ..WeatherConfig::default()
    };
    let err = apply_weather_with(raw(), &mut SmallRng::seed_from_u64(1), &config)
        .expect_err("infinite delay");
    assert!(matches!(err, Error::InvalidWeatherConfig { .. }));
}

#[test]
fn zero_bounds_leave_costs_untouched() {
    let config = WeatherConfig {
        max_delay_minutes: 0.0,
        max_congestion: 0.0,
    };
    let calm = raw().calm();
    let still = apply_weather_with(raw(), &mut SmallRng::seed_from_u64(5), &config)
        .expect("valid bounds");
    for node in calm.nodes() {
        assert_eq!(calm.neighbours(node.id), still.neighbours(node.id));
    }
}

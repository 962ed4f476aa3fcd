//! Unit tests for run configuration validation.

use tsp_ga::config::Config;

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_builder_pattern() {
    let config = Config::new()
        .with_population_size(40)
        .with_elite_split(0.25)
        .with_tournament_split(0.5)
        .with_crossover_rate(0.8)
        .with_mutation_rate(0.05)
        .with_generations(123)
        .with_seed(7)
        .with_parallel(false);

    assert_eq!(config.population_size, 40);
    assert_eq!(config.elite_split, 0.25);
    assert_eq!(config.tournament_split, 0.5);
    assert_eq!(config.crossover_rate, 0.8);
    assert_eq!(config.mutation_rate, 0.05);
    assert_eq!(config.generations, 123);
    assert_eq!(config.seed, Some(7));
    assert!(!config.parallel);
}

#[test]
fn test_zero_population_rejected() {
    let config = Config::new().with_population_size(0);
    assert!(config.validate().is_err());
}

#[test]
fn test_elite_split_out_of_range_rejected() {
    assert!(Config::new().with_elite_split(-0.1).validate().is_err());
    assert!(Config::new().with_elite_split(1.1).validate().is_err());
    assert!(Config::new().with_elite_split(0.0).validate().is_ok());
    assert!(Config::new().with_elite_split(1.0).validate().is_ok());
}

#[test]
fn test_tournament_split_out_of_range_rejected() {
    assert!(Config::new().with_tournament_split(0.0).validate().is_err());
    assert!(Config::new().with_tournament_split(-0.5).validate().is_err());
    assert!(Config::new().with_tournament_split(1.5).validate().is_err());
    assert!(Config::new().with_tournament_split(1.0).validate().is_ok());
}

#[test]
fn test_rates_out_of_range_rejected() {
    assert!(Config::new().with_crossover_rate(-0.1).validate().is_err());
    assert!(Config::new().with_crossover_rate(1.01).validate().is_err());
    assert!(Config::new().with_mutation_rate(-0.1).validate().is_err());
    assert!(Config::new().with_mutation_rate(1.01).validate().is_err());
}

#[test]
fn test_elite_size_floors() {
    let config = Config::new().with_population_size(10).with_elite_split(0.25);
    assert_eq!(config.elite_size(), 2);

    let config = Config::new().with_population_size(10).with_elite_split(1.0);
    assert_eq!(config.elite_size(), 10);

    let config = Config::new().with_population_size(10).with_elite_split(0.0);
    assert_eq!(config.elite_size(), 0);
}

#[test]
fn test_tournament_size_is_at_least_one() {
    let config = Config::new()
        .with_population_size(10)
        .with_tournament_split(0.01);
    assert_eq!(config.tournament_size(), 1);

    let config = Config::new()
        .with_population_size(10)
        .with_tournament_split(1.0);
    assert_eq!(config.tournament_size(), 10);

    let config = Config::new()
        .with_population_size(10)
        .with_tournament_split(0.55);
    assert_eq!(config.tournament_size(), 5);
}

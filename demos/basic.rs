//! Basic example of using the TSP-GA library.
//!
//! Loads city coordinates from a JSON file (`[[x, y], ...]`) or, when no
//! file is given, generates cities evenly spaced on a circle so the optimal
//! cycle length is known.

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tsp_ga::config::Config;
use tsp_ga::problem::{City, Problem};
use tsp_ga::utils::format_duration;

#[derive(Parser, Debug)]
#[command(about = "Solve a TSP instance with a genetic algorithm")]
struct Args {
    /// JSON file with city coordinates as [[x, y], ...]
    #[arg(long)]
    cities: Option<PathBuf>,

    /// Number of generated cities when no file is given
    #[arg(long, default_value_t = 50)]
    n_cities: usize,

    /// Population size
    #[arg(long, default_value_t = 100)]
    population: usize,

    /// Number of generations
    #[arg(long, default_value_t = 500)]
    generations: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let problem = match &args.cities {
        Some(path) => {
            println!("Loading cities from: {}", path.display());
            let data = std::fs::read_to_string(path)?;
            let coords: Vec<(f64, f64)> = serde_json::from_str(&data)?;
            let cities: Vec<City> = coords.iter().map(|&(x, y)| City::new(x, y)).collect();
            Problem::from_cities(path.display().to_string(), &cities)?
        }
        None => {
            // Cities on a unit circle: the optimal tour follows the circle,
            // with cost n * chord(2*pi/n).
            let n = args.n_cities;
            let cities: Vec<City> = (0..n)
                .map(|i| {
                    let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                    City::new(angle.cos(), angle.sin())
                })
                .collect();
            let chord = 2.0 * (std::f64::consts::PI / n as f64).sin();
            Problem::from_cities(format!("circle-{}", n), &cities)?
                .with_reference_cost(n as f64 * chord)
        }
    };
    println!(
        "Loaded problem: {} with {} cities",
        problem.name, problem.n_cities
    );

    let mut config = Config::new()
        .with_population_size(args.population)
        .with_generations(args.generations);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    println!("Starting search ({} generations)", config.generations);
    let start_time = Instant::now();
    let (best_cost, best_tour) = tsp_ga::solve(&problem, &config)?;
    let runtime = start_time.elapsed();

    println!("Search completed in {}", format_duration(runtime));
    println!("Best cycle length: {:.4}", best_cost);
    if let Some(reference) = problem.reference_cost {
        println!(
            "Known optimum: {:.4} (gap {:.2}%)",
            reference,
            100.0 * (best_cost - reference) / reference
        );
    }
    println!("Best tour: {:?}", best_tour.cities);

    Ok(())
}

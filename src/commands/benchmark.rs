//! Random search benchmark
//!
//! Runs many independent random probes in parallel and measures how often and
//! how quickly they find something.

use crate::core::{Alphabet, Space};
use crate::navigation::Direction;
use crate::search::{History, RandomSearch, RngSource, SearchConfig, uniform_below};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Shape of a benchmark run
pub struct BenchmarkConfig {
    /// Number of probes
    pub count: usize,
    /// Symbols per random query
    pub query_length: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            query_length: 2,
            show_progress: true,
        }
    }
}

/// Aggregate result of a benchmark run
pub struct BenchmarkResult {
    pub probes: usize,
    pub budget: usize,
    pub found: usize,
    pub total_hits: usize,
    pub min_latency: Duration,
    pub max_latency: Duration,
    pub average_latency: Duration,
    pub duration: Duration,
    pub probes_per_second: f64,
}

struct ProbeSample {
    found: bool,
    hits: usize,
    latency: Duration,
}

fn random_query(rng: &mut StdRng, length: usize) -> String {
    (0..length)
        .map(|_| Alphabet::symbol(rng.random_range(0..90)))
        .collect()
}

fn run_probe(seed: u64, search: RandomSearch, query_length: usize) -> ProbeSample {
    let mut rng = StdRng::seed_from_u64(seed);
    let query = random_query(&mut rng, query_length);
    let current = uniform_below(&mut rng, Space::global().total());
    let direction = Direction::from_lower(rng.random_bool(0.5));
    let mut source = RngSource::new(rng);

    let start = Instant::now();
    let probe = search.probe(&mut source, &query, direction, &current, &History::new());
    ProbeSample {
        found: probe.best.is_some(),
        hits: probe.hits,
        latency: start.elapsed(),
    }
}

/// Run `config.count` random probes spread over the rayon pool
///
/// Each probe gets its own generator derived from `search.seed` (or from the
/// OS when no seed is set), a random query, a random starting index and a
/// random direction.
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig, search: &SearchConfig) -> BenchmarkResult {
    let base_seed = search.seed.unwrap_or_else(|| rand::rng().random());
    let random = RandomSearch::new(search.budget);

    info!(
        probes = config.count,
        budget = search.budget,
        base_seed,
        "starting benchmark"
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.count as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let samples: Vec<ProbeSample> = (0..config.count as u64)
        .into_par_iter()
        .map(|i| {
            let sample = run_probe(base_seed.wrapping_add(i), random, config.query_length);
            pb.inc(1);
            sample
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let probes = samples.len();
    let found = samples.iter().filter(|s| s.found).count();
    let total_hits = samples.iter().map(|s| s.hits).sum();
    let min_latency = samples.iter().map(|s| s.latency).min().unwrap_or_default();
    let max_latency = samples.iter().map(|s| s.latency).max().unwrap_or_default();
    let total_latency: Duration = samples.iter().map(|s| s.latency).sum();
    let average_latency = if probes == 0 {
        Duration::ZERO
    } else {
        total_latency / probes as u32
    };

    BenchmarkResult {
        probes,
        budget: search.budget,
        found,
        total_hits,
        min_latency,
        max_latency,
        average_latency,
        duration,
        probes_per_second: probes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

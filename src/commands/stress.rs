//! Misspelling stress check
//!
//! Generates many misspellings in parallel and counts any that turned out to
//! be real words.

use crate::corpus::Dictionary;
use crate::puzzles::misspelling::{Misspelling, MisspellingConfig, MisspellingGenerator, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a stress run
#[derive(Debug, Clone, Copy)]
pub struct StressConfig {
    pub count: usize,
    pub seed: u64,
    pub misspelling: MisspellingConfig,
    pub show_progress: bool,
}

impl StressConfig {
    #[must_use]
    pub const fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            misspelling: MisspellingConfig::new(),
            show_progress: true,
        }
    }
}

/// Statistics from a stress run
#[derive(Debug)]
pub struct StressResult {
    pub total: usize,
    /// Misspellings that are dictionary words or equal their source
    pub collisions: Vec<Misspelling>,
    pub stage_distribution: FxHashMap<Stage, usize>,
    pub duration: Duration,
    pub per_second: f64,
    /// A few generated pairs for display
    pub samples: Vec<Misspelling>,
}

const SAMPLE_COUNT: usize = 5;

fn create_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Misspell `config.count` dictionary words in parallel
///
/// Each index gets its own generator seeded from `config.seed`, so a run is
/// reproducible regardless of thread scheduling.
///
/// # Errors
///
/// Returns an error if the dictionary is empty.
pub fn run_stress(dictionary: &Dictionary, config: StressConfig) -> Result<StressResult, String> {
    let words: Vec<&str> = dictionary.iter().collect();
    if words.is_empty() {
        return Err("Dictionary is empty".to_string());
    }

    let generator = MisspellingGenerator::new(dictionary, config.misspelling);
    let pb = create_bar(config.count, config.show_progress);
    pb.set_message("Misspelling");

    let start = Instant::now();
    let results: Vec<Misspelling> = (0..config.count)
        .into_par_iter()
        .filter_map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let word = words.choose(&mut rng)?;
            let result = generator.generate(word, &mut rng);
            pb.inc(1);
            Some(result)
        })
        .collect();
    let duration = start.elapsed();

    pb.finish_with_message("Complete!");

    let mut stage_distribution: FxHashMap<Stage, usize> = FxHashMap::default();
    for result in &results {
        *stage_distribution.entry(result.stage).or_insert(0) += 1;
    }

    let collisions: Vec<Misspelling> = results
        .iter()
        .filter(|m| m.incorrect == m.correct || dictionary.contains(&m.incorrect))
        .cloned()
        .collect();

    if !collisions.is_empty() {
        tracing::warn!(count = collisions.len(), "misspellings collided with real words");
    }

    let total = results.len();
    Ok(StressResult {
        total,
        collisions,
        stage_distribution,
        duration,
        per_second: total as f64 / duration.as_secs_f64().max(f64::EPSILON),
        samples: results.into_iter().take(SAMPLE_COUNT).collect(),
    })
}

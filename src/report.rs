//! Per-generation snapshots and their text rendering.

use crate::ga::Population;
use std::fmt::Write as _;

/// Formats a fraction in [0, 1] as a percentage with two decimals.
///
/// ```
/// use phrase_evolver::report::format_percent;
///
/// assert_eq!(format_percent(0.425), "42.50%");
/// assert_eq!(format_percent(1.0), "100.00%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// One row of the ranked member table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedMember {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub phrase: String,
    pub fitness: f64,
}

/// Everything a driver shows after a generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    pub generation: usize,
    pub target: String,
    pub mutation_rate: f64,
    pub best: String,
    /// Whether each symbol of `best` equals the target symbol at that position.
    pub best_matches: Vec<bool>,
    pub best_fitness: f64,
    pub average_fitness: f64,
    pub finished: bool,
    pub top: Vec<RankedMember>,
}

impl GenerationReport {
    /// Snapshots `population` with its `top_n` fittest members.
    pub fn capture(population: &Population, top_n: usize) -> Self {
        let best = population.best();
        let top = population
            .ranked(top_n)
            .into_iter()
            .enumerate()
            .map(|(i, c)| RankedMember {
                rank: i + 1,
                phrase: c.to_string(),
                fitness: c.fitness().unwrap_or(0.0),
            })
            .collect();

        Self {
            generation: population.generation(),
            target: population.target().to_string(),
            mutation_rate: population.mutation_rate(),
            best: best.to_string(),
            best_matches: best.matches(population.target_symbols()),
            best_fitness: population.best_fitness(),
            average_fitness: population.average_fitness(),
            finished: population.finished(),
            top,
        }
    }

    /// Marker line for [`best`](Self::best): `^` under each wrong symbol.
    pub fn mismatch_markers(&self) -> String {
        self.best_matches
            .iter()
            .map(|&ok| if ok { ' ' } else { '^' })
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Multi-line plain-text rendering.
    pub fn render_text(&self) -> String {
        let width = self.target.chars().count().max("Phrase".len());
        let mut out = String::new();

        let _ = writeln!(out, "Generation:      {}", self.generation);
        let _ = writeln!(out, "Best fitness:    {}", format_percent(self.best_fitness));
        let _ = writeln!(out, "Average fitness: {}", format_percent(self.average_fitness));
        let _ = writeln!(out, "Mutation rate:   {}", format_percent(self.mutation_rate));
        let _ = writeln!(out, "Best phrase:     {}", self.best);
        let markers = self.mismatch_markers();
        if !markers.is_empty() {
            let _ = writeln!(out, "                 {markers}");
        }

        if !self.top.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{:>4}  {:<width$}  {:>8}", "#", "Phrase", "Fitness");
            for row in &self.top {
                let _ = writeln!(
                    out,
                    "{:>4}  {:<width$}  {:>8}",
                    row.rank,
                    row.phrase,
                    format_percent(row.fitness)
                );
            }
        }
        out
    }
}

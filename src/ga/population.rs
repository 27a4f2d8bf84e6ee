//! One generation of candidates and the evolutionary step.
//!
//! [`Population`] drives a single run:
//! evaluation → mating pool → crossover → mutation → evaluation → ...

use super::alphabet::Alphabet;
use super::candidate::Candidate;
use super::config::PopulationConfig;
use super::selection::MatingPool;
use crate::error::{EvolveError, Result};
use rand::Rng;

/// Score of a candidate that spells the target exactly.
pub const PERFECT_SCORE: f64 = 1.0;

/// A generation of candidates evolving toward a fixed target.
///
/// The population owns its members and its mating pool. Summary
/// statistics reflect the last call to [`evaluate_all`](Self::evaluate_all).
///
/// # Usage
///
/// ```
/// use phrase_evolver::ga::{Population, PopulationConfig};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let config = PopulationConfig::new("cat").with_population_size(50);
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut population = Population::initialize(&config, &mut rng).unwrap();
///
/// while !population.finished() && population.generation() < 10_000 {
///     population.step(&mut rng).unwrap();
/// }
/// assert!(population.finished());
/// assert_eq!(population.best().to_string(), "cat");
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    target: Vec<char>,
    target_text: String,
    mutation_rate: f64,
    alphabet: Alphabet,
    members: Vec<Candidate>,
    mating_pool: MatingPool,
    generation: usize,
    best: Candidate,
    best_fitness: f64,
    average_fitness: f64,
    finished: bool,
}

impl Population {
    /// Creates `config.population_size` random candidates and evaluates them.
    pub fn initialize<R: Rng>(config: &PopulationConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let length = config.target_len();
        let members = (0..config.population_size)
            .map(|_| Candidate::random(length, &config.alphabet, rng))
            .collect::<Result<Vec<_>>>()?;
        Self::assemble(config, members)
    }

    /// Builds a population from explicit members and evaluates them.
    ///
    /// The population size is taken from `members`; `config.population_size`
    /// is ignored. Every member must match the target length and use only
    /// alphabet symbols.
    pub fn from_members(config: &PopulationConfig, members: Vec<Candidate>) -> Result<Self> {
        config
            .clone()
            .with_population_size(members.len())
            .validate()?;
        let length = config.target_len();
        for member in &members {
            if member.len() != length {
                return Err(EvolveError::LengthMismatch {
                    expected: length,
                    actual: member.len(),
                });
            }
            if let Some(&c) = member.symbols().iter().find(|&&c| !config.alphabet.contains(c)) {
                return Err(EvolveError::SymbolNotInAlphabet(c));
            }
        }
        Self::assemble(config, members)
    }

    fn assemble(config: &PopulationConfig, members: Vec<Candidate>) -> Result<Self> {
        let best = members[0].clone();
        let mut population = Self {
            target: config.target.chars().collect(),
            target_text: config.target.clone(),
            mutation_rate: config.mutation_rate,
            alphabet: config.alphabet.clone(),
            members,
            mating_pool: MatingPool::default(),
            generation: 0,
            best,
            best_fitness: 0.0,
            average_fitness: 0.0,
            finished: false,
        };
        population.evaluate_all()?;
        Ok(population)
    }

    /// Scores every member and refreshes the summary statistics.
    ///
    /// The best candidate is the first member, in order, that reaches the
    /// maximum score. Calling this twice without changing members gives the
    /// same result.
    pub fn evaluate_all(&mut self) -> Result<()> {
        let mut best_index = 0;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut total = 0.0;

        for (i, member) in self.members.iter_mut().enumerate() {
            let fitness = member.evaluate(&self.target)?;
            if fitness > best_fitness {
                best_fitness = fitness;
                best_index = i;
            }
            total += fitness;
        }

        self.best = self.members[best_index].clone();
        self.best_fitness = best_fitness;
        self.average_fitness = total / self.members.len() as f64;
        self.finished = best_fitness >= PERFECT_SCORE;
        Ok(())
    }

    /// Rebuilds the mating pool from the current members' fitness.
    ///
    /// # Errors
    /// [`EvolveError::Unevaluated`] if members were not evaluated since
    /// they last changed.
    pub fn build_mating_pool(&mut self) -> Result<&MatingPool> {
        self.mating_pool = MatingPool::build(&self.members)?;
        Ok(&self.mating_pool)
    }

    /// Replaces every member with a mutated crossover child of two parents
    /// drawn from the mating pool.
    ///
    /// The new generation is assembled aside and swapped in whole. The pool
    /// is consumed, `finished` is reset and the generation counter advances.
    /// Statistics are stale until the next [`evaluate_all`](Self::evaluate_all).
    ///
    /// # Errors
    /// [`EvolveError::EmptyMatingPool`] if the pool was not built for the
    /// current generation.
    pub fn breed_generation<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        if self.mating_pool.is_empty() {
            return Err(EvolveError::EmptyMatingPool);
        }

        let mut next_gen = Vec::with_capacity(self.members.len());
        for _ in 0..self.members.len() {
            let a = self.mating_pool.pick(rng).ok_or(EvolveError::EmptyMatingPool)?;
            let b = self.mating_pool.pick(rng).ok_or(EvolveError::EmptyMatingPool)?;
            let mut child = self.members[a].crossover(&self.members[b], rng)?;
            child.mutate(self.mutation_rate, &self.alphabet, rng);
            next_gen.push(child);
        }

        self.members = next_gen;
        self.mating_pool.clear();
        self.finished = false;
        self.generation += 1;
        Ok(())
    }

    /// Runs one full generation: mating pool, breeding, evaluation.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.build_mating_pool()?;
        self.breed_generation(rng)?;
        self.evaluate_all()
    }

    /// Members ordered by descending fitness, at most `n` of them.
    ///
    /// Ties keep member order. The members themselves are not reordered.
    pub fn ranked(&self, n: usize) -> Vec<&Candidate> {
        let mut ranked: Vec<&Candidate> = self.members.iter().collect();
        ranked.sort_by(|a, b| {
            let fa = a.fitness().unwrap_or(0.0);
            let fb = b.fitness().unwrap_or(0.0);
            fb.partial_cmp(&fa).unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    pub fn target(&self) -> &str {
        &self.target_text
    }

    pub fn target_symbols(&self) -> &[char] {
        &self.target
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn mating_pool(&self) -> &MatingPool {
        &self.mating_pool
    }

    /// Number of generations bred since initialization.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best candidate as of the last evaluation.
    pub fn best(&self) -> &Candidate {
        &self.best
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    pub fn average_fitness(&self) -> f64 {
        self.average_fitness
    }

    /// `true` once some member spells the target exactly.
    pub fn finished(&self) -> bool {
        self.finished
    }
}

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use phrase_evolver::ga::{Alphabet, PopulationConfig};
use phrase_evolver::report::{format_percent, GenerationReport};
use phrase_evolver::session::{Session, SessionConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Phrase Evolver: watch a genetic algorithm spell out a phrase
///
/// Starts from random strings and breeds them, generation by generation,
/// until one of them matches the target exactly.
#[derive(Parser, Debug)]
#[command(name = "phrase-evolver")]
#[command(author, version, about = "Evolves random strings into a target phrase", long_about = None)]
struct Cli {
    /// Phrase to evolve toward
    #[arg(short, long)]
    target: Option<String>,

    /// Probability (0-1) that each symbol of a child is redrawn
    #[arg(short, long)]
    mutation_rate: Option<f64>,

    /// Candidates per generation (clamped to 2..=1000)
    #[arg(short, long)]
    population: Option<usize>,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pause between generations, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Stop after this many generations even without a match
    #[arg(short = 'g', long)]
    max_generations: Option<usize>,

    /// Number of ranked members to show per generation
    #[arg(long)]
    top: Option<usize>,

    /// TOML file with default settings (flags take precedence)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print only the final generation
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable summary and table
    Text,
    /// One JSON object per generation
    Json,
}

/// Settings read from `--config`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    target: Option<String>,
    mutation_rate: Option<f64>,
    population_size: Option<usize>,
    alphabet: Option<String>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    max_generations: Option<usize>,
    top_n: Option<usize>,
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}

/// Merges CLI flags over file settings over defaults.
fn build_config(cli: &Cli, file: FileConfig) -> Result<SessionConfig> {
    let defaults = SessionConfig::default();
    let mut population = defaults.population.clone();

    if let Some(symbols) = file.alphabet {
        population = population.with_alphabet(Alphabet::new(&symbols).context("invalid alphabet")?);
    }
    if let Some(target) = cli.target.clone().or(file.target) {
        population = population.with_target(target);
    }
    if let Some(rate) = cli.mutation_rate.or(file.mutation_rate) {
        population = population.with_mutation_rate(rate);
    }
    if let Some(requested) = cli.population.or(file.population_size) {
        let size = PopulationConfig::clamp_population_size(requested);
        if size != requested {
            log::warn!("population size {requested} is out of range, using {size}");
        }
        population = population.with_population_size(size);
    }

    let config = SessionConfig {
        population,
        seed: cli.seed.or(file.seed),
        delay_ms: cli.delay_ms.or(file.delay_ms).unwrap_or(defaults.delay_ms),
        max_generations: cli.max_generations.or(file.max_generations),
        top_n: cli.top.or(file.top_n).unwrap_or(defaults.top_n),
    };
    config.validate().context("invalid settings")?;
    Ok(config)
}

fn print_report(report: &GenerationReport, format: Format) -> Result<()> {
    match format {
        Format::Text => println!("{}", report.render_text()),
        Format::Json => println!("{}", serde_json::to_string(report)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let file = match &cli.config {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };
    let config = build_config(&cli, file)?;

    let mut session = Session::new(config)?;
    let format = cli.format;
    let quiet = cli.quiet;

    if !quiet {
        print_report(&session.report(), format)?;
    }

    let mut print_error = None;
    let outcome = session.run(|report| {
        if quiet || print_error.is_some() {
            return;
        }
        if let Err(e) = print_report(report, format) {
            print_error = Some(e);
        }
    })?;
    if let Some(e) = print_error {
        return Err(e);
    }

    if quiet {
        print_report(&outcome.report, format)?;
    }
    if format == Format::Text {
        if outcome.finished {
            println!(
                "Matched after {} generations.",
                outcome.report.generation
            );
        } else {
            println!(
                "Stopped after {} generations at {}.",
                outcome.report.generation,
                format_percent(outcome.report.best_fitness)
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("phrase-evolver").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = build_config(&parse(&[]), FileConfig::default()).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let file: FileConfig = toml::from_str(
            r#"
            target = "from file"
            mutation_rate = 0.2
            population_size = 300
            top_n = 4
            "#,
        )
        .unwrap();
        let cli = parse(&["--target", "from flag", "--population", "50"]);
        let config = build_config(&cli, file).unwrap();

        assert_eq!(config.population.target, "from flag");
        assert_eq!(config.population.population_size, 50);
        assert!((config.population.mutation_rate - 0.2).abs() < 1e-12);
        assert_eq!(config.top_n, 4);
    }

    #[test]
    fn test_population_is_clamped() {
        let config = build_config(&parse(&["-p", "5000"]), FileConfig::default()).unwrap();
        assert_eq!(config.population.population_size, 1000);
        let config = build_config(&parse(&["-p", "1"]), FileConfig::default()).unwrap();
        assert_eq!(config.population.population_size, 2);
    }

    #[test]
    fn test_invalid_mutation_rate_is_rejected() {
        assert!(build_config(&parse(&["-m", "1.5"]), FileConfig::default()).is_err());
    }

    #[test]
    fn test_file_alphabet() {
        let file: FileConfig = toml::from_str("alphabet = \"ACGT\"\ntarget = \"GATTACA\"").unwrap();
        let config = build_config(&parse(&[]), file).unwrap();
        assert_eq!(config.population.alphabet.len(), 4);

        let file: FileConfig = toml::from_str("alphabet = \"ACGT\"").unwrap();
        // Default target uses symbols outside ACGT.
        assert!(build_config(&parse(&[]), file).is_err());
    }

    #[test]
    fn test_unknown_file_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("speed = 3").is_err());
    }
}

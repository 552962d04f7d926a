//! `horde-lab` command line.
//!
//! - `simulate`: play a deck against a Horde on seeds `0..N` and print the
//!   metrics as JSON
//! - `optimize`: run a population search and report the best deck

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use horde_lab::cards::catalog::{basic_horde, default_pool, starter_cards};
use horde_lab::cards::{ApiCardSource, CardRegistry, CardSource, Layered, DEFAULT_API_URL};
use horde_lab::deck::{format_decklist, load_card_file, load_deck};
use horde_lab::search::{PopulationSearch, SearchConfig};
use horde_lab::sim::{simulate, ReplayLog};
use horde_lab::{logging, Deck, MatchConfig, SeedBank};

#[derive(Parser)]
#[command(name = "horde-lab")]
#[command(about = "Horde match simulator and deck optimizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a deck against a Horde and print metrics as JSON
    Simulate {
        /// Player deck (.json card records or .txt decklist)
        #[arg(long)]
        deck: PathBuf,

        /// Horde deck (.json card records or .txt decklist)
        #[arg(long)]
        horde: PathBuf,

        /// Card database for resolving .txt decklists (JSON records).
        /// Defaults to the built-in catalog.
        #[arg(long)]
        cards: Option<PathBuf>,

        /// Resolve names missing from the card database over HTTP
        #[arg(long)]
        api: bool,

        /// Card search endpoint used with --api
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Number of matches, seeded 0..N
        #[arg(long, default_value_t = 10)]
        seeds: usize,

        /// Write every match event to this file as JSON lines
        #[arg(long)]
        logfile: Option<PathBuf>,

        /// Round cap per match
        #[arg(long, default_value_t = horde_lab::core::DEFAULT_MAX_ROUNDS)]
        max_rounds: u32,
    },

    /// Search for a better deck, starting from the starter list
    Optimize {
        /// Population size
        #[arg(long, default_value_t = 30)]
        pop: usize,

        /// Generations to evaluate
        #[arg(long, default_value_t = 5)]
        gens: usize,

        /// Seed bank (JSON array of integers). Defaults to the bundled bank.
        #[arg(long)]
        seed_bank: Option<PathBuf>,

        /// Horde deck. Defaults to the built-in basic Horde.
        #[arg(long)]
        horde: Option<PathBuf>,

        /// Search RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Write the best deck here as a text decklist
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            deck,
            horde,
            cards,
            api,
            api_url,
            seeds,
            logfile,
            max_rounds,
        } => run_simulate(
            &deck,
            &horde,
            cards.as_deref(),
            api.then_some(api_url.as_str()),
            seeds,
            logfile.as_deref(),
            max_rounds,
        ),
        Commands::Optimize {
            pop,
            gens,
            seed_bank,
            horde,
            seed,
            output,
        } => run_optimize(pop, gens, seed_bank.as_deref(), horde.as_deref(), seed, output.as_deref()),
    }
}

/// Card database for text decklists: a JSON file if given, otherwise the
/// built-in catalog.
fn card_database(path: Option<&Path>) -> Result<CardRegistry> {
    match path {
        Some(path) => CardRegistry::load_json(path)
            .with_context(|| format!("loading card database {}", path.display())),
        None => Ok(CardRegistry::from_cards(
            default_pool().into_iter().chain(basic_horde()),
        )),
    }
}

fn run_simulate(
    deck_path: &Path,
    horde_path: &Path,
    cards: Option<&Path>,
    api_url: Option<&str>,
    seeds: usize,
    logfile: Option<&Path>,
    max_rounds: u32,
) -> Result<()> {
    let registry = card_database(cards)?;
    let layered;
    let source: &dyn CardSource = match api_url {
        Some(url) => {
            let api = ApiCardSource::new()
                .context("building HTTP client")?
                .with_base_url(url);
            layered = Layered::new(&registry, api);
            &layered
        }
        None => &registry,
    };

    let deck = load_deck(deck_path, Some(source))
        .with_context(|| format!("loading deck {}", deck_path.display()))?;
    let horde = load_card_file(horde_path, Some(source))
        .with_context(|| format!("loading horde {}", horde_path.display()))?;

    let seeds: Vec<u64> = (0..seeds as u64).collect();
    let config = MatchConfig::default().with_max_rounds(max_rounds);

    let metrics = match logfile {
        Some(path) => {
            let mut log = ReplayLog::new();
            let metrics = simulate(&deck, &horde, &seeds, &config, Some(&mut log))?;
            log.save(path)
                .with_context(|| format!("writing log {}", path.display()))?;
            info!(path = %path.display(), events = log.len(), "event log written");
            metrics
        }
        None => simulate(&deck, &horde, &seeds, &config, None)?,
    };

    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}

fn run_optimize(
    pop: usize,
    gens: usize,
    seed_bank: Option<&Path>,
    horde: Option<&Path>,
    seed: u64,
    output: Option<&Path>,
) -> Result<()> {
    let config = SearchConfig::new(pop, gens).with_seed(seed);

    let bank = match seed_bank {
        Some(path) => SeedBank::load(path)
            .with_context(|| format!("loading seed bank {}", path.display()))?,
        None => SeedBank::bundled().context("parsing bundled seed bank")?,
    };

    let horde = match horde {
        Some(path) => {
            let registry = card_database(None)?;
            let source: &dyn CardSource = &registry;
            load_card_file(path, Some(source))
                .with_context(|| format!("loading horde {}", path.display()))?
        }
        None => basic_horde(),
    };

    let template = Deck::new(starter_cards())?;
    let outcome = PopulationSearch::new(template, default_pool(), horde, &bank, config)?.run()?;
    let best = &outcome.best;

    info!(
        fitness = best.fitness,
        winrate = best.metrics.winrate,
        penalty = best.penalty,
        "search finished"
    );
    println!("Best deck has {} cards", best.deck.len());

    if let Some(path) = output {
        std::fs::write(path, format_decklist(&best.deck))
            .with_context(|| format!("writing decklist {}", path.display()))?;
    }

    Ok(())
}

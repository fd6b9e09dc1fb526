//! Terminal flashcard drilling application.
//!
//! Wires the session engine to its concrete collaborators: stdin/stdout
//! terminal, on-disk set storage, the interactive set picker and the
//! config file. The engine itself lives in `flashdrill-core`.

pub mod config;
pub mod menu;
pub mod picker;
pub mod storage;
pub mod terminal;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flashdrill_core::{parse, run_session, SessionQueue};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::picker::{SetLibrary, SetPicker};
use crate::storage::FileScoreStore;
use crate::terminal::Terminal;

#[derive(Debug, Parser)]
#[command(name = "flashdrill")]
#[command(about = "Study two-field flashcard sets in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Set to study, by name (file stem) or path; more sets can be queued
    /// interactively
    pub set: Option<String>,

    /// Directory holding the card set files
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Validate set files and report malformed lines instead of studying
    #[arg(long)]
    pub check: bool,
}

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = Config::default_path();
    let mut config = Config::load_from(&config_path);

    let sets_dir = cli
        .dir
        .clone()
        .or_else(|| config.sets_dir.clone())
        .unwrap_or_else(|| PathBuf::from("sets"));
    let library = SetLibrary::new(sets_dir);

    if cli.check {
        return check_sets(&library, cli.set.as_deref());
    }

    let mut term = Terminal::new();
    if menu::edit_settings(&mut term, &mut config.settings)? {
        if let Err(err) = config.save_to(&config_path) {
            tracing::warn!("Could not save settings to {}: {}", config_path.display(), err);
        }
    }

    let mut queue = SessionQueue::new();
    if let Some(name) = &cli.set {
        let loaded = library
            .load_named(name)
            .with_context(|| format!("could not load set \"{name}\""))?;
        queue.enqueue(loaded.set);
    }

    let mut source = SetPicker::new(library);
    let mut store = FileScoreStore::default();
    let mut rng = rand::rng();

    let summary = run_session(
        &mut queue,
        &config.settings,
        &mut term,
        &mut source,
        &mut store,
        &mut rng,
    )?;

    if summary.is_empty() {
        term.print_line("Nothing studied. Goodbye!")?;
    } else {
        term.print_line(&format!("Studied {} set(s). Goodbye!", summary.len()))?;
    }
    Ok(())
}

/// `--check`: parse the named set, or every set in the directory, and
/// report malformed lines. Fails (exit 1) if any are found.
fn check_sets(library: &SetLibrary, set: Option<&str>) -> anyhow::Result<()> {
    let paths = match set {
        Some(name) => vec![library.resolve(name)],
        None => library
            .set_paths()
            .with_context(|| format!("could not list sets in {}", library.dir().display()))?,
    };
    anyhow::ensure!(
        !paths.is_empty(),
        "no set files in {}",
        library.dir().display()
    );

    let mut bad_lines = 0usize;
    for path in &paths {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let parsed = parse(&content);
        let name = storage::set_name(path);
        if parsed.is_clean() {
            println!("{}: {} cards, ok", name, parsed.cards.len());
        } else {
            println!(
                "{}: {} cards, {} malformed",
                name,
                parsed.cards.len(),
                parsed.malformed.len()
            );
            for malformed in &parsed.malformed {
                println!("  line {}: {:?}", malformed.line, malformed.text);
            }
            bad_lines += parsed.malformed.len();
        }
    }
    anyhow::ensure!(bad_lines == 0, "{bad_lines} malformed line(s) found");
    Ok(())
}

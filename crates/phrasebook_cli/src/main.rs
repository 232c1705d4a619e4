//! Phrasebook command-line front end.
//!
//! # Responsibility
//! - Drive a `PhraseSession` over a SQLite-backed key-value store.
//! - Keep output line-oriented so it can be piped and diffed.

use clap::{Parser, Subcommand};
use log::info;
use phrasebook_core::{
    core_version, init_logging, ping, GridView, Phrase, PhraseId, PhraseSession, PhrasebookConfig,
    SqliteKvStore,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "phrasebook")]
#[command(about = "Store, search and delete short phrases", long_about = None)]
struct Cli {
    /// SQLite database file holding the phrase collection
    #[arg(long, default_value = "phrasebook.sqlite3")]
    db: PathBuf,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long)]
    log_dir: Option<String>,

    /// Overrides the configured log level
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a phrase
    Add {
        #[arg(value_name = "TEXT")]
        text: String,

        #[arg(short, long)]
        author: Option<String>,
    },

    /// List all phrases, oldest first
    List,

    /// Show phrases whose text or author contains TERM
    Search {
        #[arg(value_name = "TERM")]
        term: String,
    },

    /// Delete a phrase by id
    Delete {
        #[arg(value_name = "PHRASE_ID")]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Check core linkage
    Ping,

    /// Print the core version
    Version,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    match &cli.command {
        Commands::Ping => {
            println!("{}", ping());
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Version => {
            println!("phrasebook_core {}", core_version());
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let config = match &cli.config {
        Some(path) => PhrasebookConfig::load(path)?,
        None => PhrasebookConfig::default(),
    };
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
        init_logging(level, log_dir)?;
    }

    let storage = SqliteKvStore::open(&cli.db)?;
    let mut session = PhraseSession::open(storage, &config);
    info!(
        "event=cli_start module=cli status=ok total={}",
        session.store().len()
    );

    let code = match cli.command {
        Commands::Add { text, author } => {
            match session.submit_phrase(&text, author.as_deref()) {
                Some(id) => {
                    println!("{id}");
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("error: phrase text cannot be blank");
                    ExitCode::FAILURE
                }
            }
        }
        Commands::List => {
            for phrase in session.store().phrases().iter() {
                print_phrase(phrase);
            }
            ExitCode::SUCCESS
        }
        Commands::Search { term } => {
            session.search_now(term);
            for phrase in session.visible_phrases().iter() {
                print_phrase(phrase);
            }
            print_summary(&session.grid_view());
            ExitCode::SUCCESS
        }
        Commands::Delete { id, yes } => {
            let id = PhraseId::parse_str(id.trim())?;
            if !session.request_delete(id) {
                eprintln!("error: phrase not found: {id}");
                return Ok(ExitCode::FAILURE);
            }
            if !yes {
                if let Some(phrase) = session.pending_delete() {
                    print_phrase(phrase);
                }
                if !confirm("Delete this phrase? [y/N] ")? {
                    session.cancel_delete();
                    println!("cancelled");
                    return Ok(ExitCode::SUCCESS);
                }
            }
            if let Some(phrase) = session.confirm_delete() {
                println!("deleted {}", phrase.id);
            }
            ExitCode::SUCCESS
        }
        Commands::Ping | Commands::Version => ExitCode::SUCCESS,
    };

    session.teardown();
    Ok(code)
}

fn print_phrase(phrase: &Phrase) {
    println!(
        "{}\t{}\t\"{}\"\t{}",
        phrase.id, phrase.created_at, phrase.text, phrase.author
    );
}

fn print_summary(view: &GridView) {
    match view {
        GridView::Empty => println!("no phrases yet"),
        GridView::NoResults { term } => println!("no phrases match \"{term}\""),
        GridView::Results {
            shown,
            total,
            filtering,
        } => {
            if *filtering {
                let noun = if *total == 1 { "phrase" } else { "phrases" };
                println!("showing {shown} of {total} {noun}");
            }
        }
    }
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    ))
}

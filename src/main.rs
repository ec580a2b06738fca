//! epubdb CLI entry point

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use epubdb::{
    commands::{
        cmd_chapter, cmd_debug, cmd_init, cmd_inspect, cmd_list, cmd_seed, print_debug_report,
        print_documents, print_init_report, print_inspect_report, print_seed_report,
    },
    config::Config,
    db::DocumentDb,
    error::Result,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "epubdb")]
#[command(version, about = "Inspect and seed EPUB document databases", long_about = None)]
struct Cli {
    /// Path to config file (defaults to ./epubdb.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the SQLite database
    #[arg(long, global = true)]
    db: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the chapter keys stored for the inspection document
    Inspect,

    /// Report on a document's metadata and chapters_html
    Debug {
        /// Document ID (defaults to debug_document_id)
        id: Option<i64>,
    },

    /// Replace a document's chapters_html with placeholder pages
    Seed {
        /// Document ID (defaults to seed_document_id)
        id: Option<i64>,
    },

    /// Create the database and documents table if missing
    Init,

    /// List stored documents
    List,

    /// Print the stored HTML of one chapter
    Chapter {
        /// Document ID
        id: i64,

        /// Zero-based position in the metadata chapter list
        index: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Reports go to stdout, so logs stay on stderr and quiet by default
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "epubdb", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(db_path) = cli.db {
        config.db_path = db_path;
        config.validate()?;
    }
    debug!("Using database {}", config.db_path);

    if let Commands::Init = cli.command {
        let report = cmd_init(&config.db_file()).await?;
        if cli.json {
            print_json(&report)?;
        } else {
            print_init_report(&report);
        }
        return Ok(());
    }

    let db = DocumentDb::open(&config.db_file()).await?;
    let result = handle_command(&config, &db, cli.command, cli.json).await;
    db.close().await;
    result
}

async fn handle_command(
    config: &Config,
    db: &DocumentDb,
    command: Commands,
    json: bool,
) -> Result<()> {
    match command {
        Commands::Inspect => {
            let id = config.inspect_document_id;
            match cmd_inspect(config, db).await? {
                Some(report) if json => print_json(&report)?,
                Some(report) => print_inspect_report(&report),
                None => print_not_found(id, json)?,
            }
        }

        Commands::Debug { id } => {
            let id = id.unwrap_or(config.debug_document_id);
            match cmd_debug(config, db, id).await? {
                Some(report) if json => print_json(&report)?,
                Some(report) => print_debug_report(&report),
                None => print_not_found(id, json)?,
            }
        }

        Commands::Seed { id } => {
            let id = id.unwrap_or(config.seed_document_id);
            let report = cmd_seed(db, id).await?;
            if json {
                print_json(&report)?;
            } else {
                print_seed_report(&report);
            }
        }

        Commands::List => {
            let docs = cmd_list(db).await?;
            if json {
                print_json(&docs)?;
            } else {
                print_documents(&docs);
            }
        }

        Commands::Chapter { id, index } => {
            let chapter = cmd_chapter(db, id, index).await?;
            if json {
                print_json(&chapter)?;
            } else {
                println!("{}", chapter.html);
            }
        }

        Commands::Init | Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_not_found(id: i64, json: bool) -> Result<()> {
    if json {
        print_json(&serde_json::json!({ "id": id, "found": false }))
    } else {
        println!("No document found with ID {}", id);
        Ok(())
    }
}

//! Lanai - command line entrypoint.
//!
//! Loads an entries file into a path trie and runs lookups against it.

use clap::{Parser, Subcommand};
use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_lib::data_structures::{SyncTrie, Trie};
use lanai_lib::entries::EntrySet;
use lanai_lib::error::{
    report_error, set_error_reporter, ErrorContext, LanaiError, LanaiResult, TracingErrorReporter,
};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to a TOML or JSON entries file
    #[clap(short, long, value_parser)]
    entries: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every entry
    List,

    /// Look up one path
    Query {
        /// Path to look up
        path: String,
    },

    /// Print every entry under a prefix
    Prefix {
        /// Prefix to search for
        prefix: String,
    },

    /// Hammer a shared trie from several threads
    Stress {
        /// Number of threads (defaults to the number of CPUs)
        #[clap(short, long)]
        threads: Option<usize>,

        /// Operations per thread
        #[clap(short, long, default_value_t = 10_000)]
        ops: usize,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr so stdout only carries results.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_trie(entries: Option<&Path>, config: &LanaiConfig) -> LanaiResult<Trie<String>> {
    let path = entries
        .ok_or_else(|| LanaiError::Custom("--entries is required for this command".to_string()))?;
    EntrySet::load(path)?.into_trie(config)
}

fn print_entries(mut entries: Vec<(String, String)>) {
    entries.sort();
    for (path, value) in entries {
        println!("{path}\t{value}");
    }
}

fn stress(config: &LanaiConfig, threads: usize, ops: usize) -> LanaiResult<()> {
    let trie = Arc::new(SyncTrie::from_trie(config.build_trie::<usize>()));
    let started = Instant::now();

    let handles: Vec<_> = (0..threads)
        .map(|id| {
            let trie = Arc::clone(&trie);
            thread::spawn(move || -> LanaiResult<()> {
                for op in 0..ops {
                    let path = format!("t{id}/{op}");
                    trie.upsert(&path, op)?;
                    trie.query(&path)?;
                    if op % 2 == 1 {
                        trie.remove(&path)?;
                    }
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| LanaiError::Custom("stress worker panicked".to_string()))??;
    }

    info!(
        threads,
        ops,
        entries = trie.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "stress run finished"
    );
    println!("{}", trie.len());
    Ok(())
}

fn run(args: Args, config: LanaiConfig) -> LanaiResult<()> {
    let delimiter = config.trie.join_delimiter.as_str();
    match args.command.unwrap_or(Command::List) {
        Command::List => {
            let trie = load_trie(args.entries.as_deref(), &config)?;
            print_entries(trie.to_slice(Some(delimiter)));
        }
        Command::Query { path } => {
            let trie = load_trie(args.entries.as_deref(), &config)?;
            println!("{}", trie.query(&path)?);
        }
        Command::Prefix { prefix } => {
            let trie = load_trie(args.entries.as_deref(), &config)?;
            print_entries(trie.query_by_prefix(&prefix, Some(delimiter)));
        }
        Command::Stress { threads, ops } => {
            stress(&config, threads.unwrap_or_else(num_cpus::get), ops)?;
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, toml::to_string_pretty(&LanaiConfig::default())?)?;
            info!("Default configuration written to {:?}", output);
        }
    }
    Ok(())
}

/// Main entry point for the application.
fn main() -> LanaiResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            set_error_reporter(Arc::new(TracingErrorReporter));
            report_error(ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Err(e) = run(args, config) {
        report_error(ErrorContext::new(e, "cli"));
        process::exit(1);
    }
    Ok(())
}

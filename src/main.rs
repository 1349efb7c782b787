//! Wordspace - CLI
//!
//! Browse and search every 4-32 symbol password by its exact index, in a
//! terminal browser or through one-shot commands.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;
use wordspace::{
    commands::{
        BenchmarkConfig, SearchRequest, jump_to_text, list_neighbors, lookup_index, lookup_word,
        run_benchmark, run_search, summarize_space,
    },
    navigation::Direction,
    output::{
        print_benchmark_result, print_jump_result, print_lookup_result, print_neighbors_result,
        print_search_result, print_space_summary,
    },
    search::{DEFAULT_BUDGET, DEFAULT_LOOKAHEAD, DEFAULT_LOOKBACK, SearchConfig},
};

#[derive(Parser)]
#[command(
    name = "wordspace",
    about = "Browse and search the space of every 4-32 symbol password by exact index",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Entries scanned behind the current position for downward searches
    #[arg(long, global = true, default_value_t = DEFAULT_LOOKBACK)]
    lookback: usize,

    /// Entries scanned past the displayed rows for upward searches
    #[arg(long, global = true, default_value_t = DEFAULT_LOOKAHEAD)]
    lookahead: usize,

    /// Random trials per search when nothing is found nearby
    #[arg(short, long, global = true, default_value_t = DEFAULT_BUDGET)]
    budget: usize,

    /// Seed for random search (OS-seeded when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            lookback: self.lookback,
            lookahead: self.lookahead,
            budget: self.budget,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI browser (default)
    Browse,

    /// Print the word at an index
    Decode {
        /// Decimal index; `_` separators are allowed
        index: String,
    },

    /// Print the index of a word
    Encode {
        /// Word of 4-32 symbols
        word: String,
    },

    /// Print the words around an index
    Neighbors {
        /// Decimal index
        index: String,

        /// Entries to show before the index
        #[arg(long, default_value = "5")]
        before: usize,

        /// Entries to show after the index
        #[arg(long, default_value = "5")]
        after: usize,
    },

    /// Find the next word containing a substring
    Search {
        /// Substring to look for
        query: String,

        /// Index to search from (default: 0)
        #[arg(short, long)]
        from: Option<String>,

        /// Search toward lower indices
        #[arg(short, long)]
        lower: bool,

        /// Rows treated as displayed below the starting word
        #[arg(short, long, default_value = "30")]
        rows: usize,

        /// Allow the starting word itself to match
        #[arg(short, long)]
        include_current: bool,
    },

    /// Jump to the word spelled by some text, padding short text
    Jump {
        /// Text to jump to
        text: String,
    },

    /// Print per-length counts and offsets
    Space,

    /// Benchmark random search on random queries
    Benchmark {
        /// Number of probes to run
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Symbols per random query
        #[arg(short, long, default_value = "2")]
        query_length: usize,
    },
}

/// Log to stderr, filtered by `RUST_LOG` or the `-v` count
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.search_config();

    // Default to the browser if no command given
    let command = cli.command.unwrap_or(Commands::Browse);

    // The browser owns the terminal, so only plain commands get a log writer
    if !matches!(command, Commands::Browse) {
        init_logging(cli.verbose);
    }

    match command {
        Commands::Browse => run_browse_command(&config),
        Commands::Decode { index } => run_decode_command(&index),
        Commands::Encode { word } => run_encode_command(&word),
        Commands::Neighbors {
            index,
            before,
            after,
        } => run_neighbors_command(&index, before, after),
        Commands::Search {
            query,
            from,
            lower,
            rows,
            include_current,
        } => {
            let request = SearchRequest {
                query,
                from,
                direction: Direction::from_lower(lower),
                rows,
                include_current,
            };
            run_search_command(&request, &config, cli.verbose > 0)
        }
        Commands::Jump { text } => run_jump_command(&text),
        Commands::Space => {
            print_space_summary(&summarize_space());
            Ok(())
        }
        Commands::Benchmark {
            count,
            query_length,
        } => {
            run_benchmark_command(count, query_length, &config);
            Ok(())
        }
    }
}

fn run_decode_command(index: &str) -> Result<()> {
    let result = lookup_index(index).with_context(|| format!("cannot decode '{index}'"))?;
    print_lookup_result(&result);
    Ok(())
}

fn run_encode_command(word: &str) -> Result<()> {
    let result = lookup_word(word).with_context(|| format!("cannot encode '{word}'"))?;
    print_lookup_result(&result);
    Ok(())
}

fn run_neighbors_command(index: &str, before: usize, after: usize) -> Result<()> {
    let result = list_neighbors(index, before, after)
        .with_context(|| format!("cannot list neighbors of '{index}'"))?;
    print_neighbors_result(&result);
    Ok(())
}

fn run_search_command(request: &SearchRequest, config: &SearchConfig, verbose: bool) -> Result<()> {
    let result = run_search(request, config).context("cannot start search")?;
    print_search_result(&result, verbose);
    Ok(())
}

fn run_jump_command(text: &str) -> Result<()> {
    let result = jump_to_text(text).with_context(|| format!("cannot jump to '{text}'"))?;
    print_jump_result(&result);
    Ok(())
}

fn run_benchmark_command(count: usize, query_length: usize, config: &SearchConfig) {
    println!(
        "Running {count} random probes of {} trials each...",
        config.budget
    );

    let benchmark = BenchmarkConfig {
        count,
        query_length,
        show_progress: true,
    };
    let result = run_benchmark(&benchmark, config);
    print_benchmark_result(&result);
}

fn run_browse_command(config: &SearchConfig) -> Result<()> {
    use wordspace::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nicknames::roster::{InvalidWordPolicy, Roster};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Builds a radix trie of nicknames and finds the shortest prefix for each
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list to read, one nickname per line (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Skip malformed lines instead of stopping at the first one
    #[arg(long)]
    skip_invalid: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Print the trie after every line, then the final trie and prefixes
    Echo,
    /// Print only the final trie
    Tree,
    /// Print the shortest unique prefix of every nickname
    Prefixes,
    /// List nicknames starting with prefix
    Complete { prefix: String },
}

impl Cli {
    fn policy(&self) -> InvalidWordPolicy {
        if self.skip_invalid {
            InvalidWordPolicy::Skip
        } else {
            InvalidWordPolicy::Reject
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Feeds `input` into a roster and writes the output of `command` to `out`
fn run<R: BufRead, W: Write>(
    command: Commands,
    policy: InvalidWordPolicy,
    input: R,
    out: &mut W,
) -> Result<()> {
    let roster = if command == Commands::Echo {
        Roster::load(input, policy, |trie| {
            write!(out, "{trie}").context("Failed to write trie")
        })?
    } else {
        Roster::load(input, policy, |_| Ok(()))?
    };

    match command {
        Commands::Echo => {
            write!(out, "{}", roster.trie())?;
            roster.write_prefixes(&mut *out)?;
        }
        Commands::Tree => write!(out, "{}", roster.trie())?,
        Commands::Prefixes => roster.write_prefixes(&mut *out)?,
        Commands::Complete { prefix } => {
            for word in roster.nicknames_starting_with(&prefix) {
                writeln!(out, "{word}")?;
            }
        }
    }

    out.flush().context("Failed to flush output")
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let policy = cli.policy();
    let input = Roster::open_input(cli.input.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Echo);
    run(command, policy, input, &mut io::stdout().lock())
}

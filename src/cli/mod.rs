//! CLI command definitions and handlers

mod identify;
mod languages;
mod profile;

use crate::config::LangscoutConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate the top-N count (1-100)
fn parse_top(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("top must be at least 1".to_string())
    } else if n > 100 {
        Err("top cannot exceed 100".to_string())
    } else {
        Ok(n)
    }
}

/// Langscout - trigram-based language identification
///
/// 100% LOCAL - identification runs entirely against on-disk profiles.
#[derive(Parser, Debug)]
#[command(name = "langscout")]
#[command(
    version,
    about = "Identify the natural language of short texts by trigram frequency",
    long_about = "Langscout builds a character-trigram frequency profile of the input \
and compares it against precomputed reference profiles under cosine similarity, \
reporting the closest language.\n\n\
Run without a subcommand to identify files (or stdin):\n  \
langscout letter.txt",
    after_help = "\
Examples:
  langscout letter.txt                     Identify one file
  echo 'bonjour tout le monde' | langscout   Identify stdin
  langscout a.txt b.txt --top 3            Show the 3 best candidates per file
  langscout --format json letter.txt       JSON output for scripting
  langscout languages                      List available reference profiles
  langscout profile corpus.txt --code fr --name French
                                           Build a reference profile from a corpus"
)]
pub struct Cli {
    /// Files to identify when no subcommand is given (default: stdin)
    pub inputs: Vec<PathBuf>,

    /// Directory of reference trigram profiles
    #[arg(long, global = true, env = "LANGSCOUT_PROFILES_DIR")]
    pub profiles_dir: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, short = 'f', global = true, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Number of best-scoring candidates to show per input (1-100)
    #[arg(long, global = true, default_value = "1", value_parser = parse_top)]
    pub top: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Identify the language of files or stdin
    #[command(after_help = "\
Examples:
  langscout identify letter.txt            Identify one file
  langscout identify a.txt b.txt c.txt     Identify several files in parallel
  langscout identify --top 5 letter.txt    Show the 5 best candidates")]
    Identify {
        /// Files to identify (default: stdin)
        files: Vec<PathBuf>,
    },

    /// List the languages available in the profile store
    Languages,

    /// Build a reference trigram profile from a corpus text file
    #[command(after_help = "\
Examples:
  langscout profile corpus_fr.txt --code fr --name French
  langscout profile corpus_sv.txt --code sv")]
    Profile {
        /// Corpus text file to profile
        corpus: PathBuf,

        /// Language code to store the profile under (e.g. \"fr\")
        #[arg(long)]
        code: String,

        /// Human-readable language name (default: the code)
        #[arg(long)]
        name: Option<String>,
    },
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    let config = LangscoutConfig::load().unwrap_or_default();
    let profiles_dir = config.resolve_profiles_dir(cli.profiles_dir.as_deref());

    match cli.command {
        Some(Commands::Identify { files }) => identify::run(
            &profiles_dir,
            &files,
            &cli.format,
            cli.top,
            config.languages(),
        ),
        Some(Commands::Languages) => languages::run(&profiles_dir),
        Some(Commands::Profile { corpus, code, name }) => {
            profile::run(&profiles_dir, &corpus, &code, name.as_deref())
        }
        None => identify::run(
            &profiles_dir,
            &cli.inputs,
            &cli.format,
            cli.top,
            config.languages(),
        ),
    }
}

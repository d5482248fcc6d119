use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use words_parser_lib::{output, parse_word_with, ParseOptions, ParseResult, Tables, WordsError};

#[derive(Parser)]
#[command(name = "words-parser", about = "Latin word-form parser")]
struct Cli {
    /// Latin word to parse. If omitted, reads one word per line from stdin.
    input: Option<String>,

    /// Lexicon tables as JSON. Defaults to the built-in sample lexicon.
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Print plain text instead of JSON.
    #[arg(long)]
    text: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Leave principal parts as bare stems.
    #[arg(long)]
    no_endings: bool,

    /// Do not strip prefixes/suffixes when nothing matches.
    #[arg(long)]
    no_reduce: bool,

    /// More logging on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> ParseOptions {
        ParseOptions {
            reconstruct_endings: !self.no_endings,
            reduce: !self.no_reduce,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let tables = match &cli.tables {
        Some(path) => Tables::from_path(path)
            .with_context(|| format!("failed to load tables from {}", path.display()))?,
        None => Tables::embedded().context("built-in lexicon is invalid")?,
    };

    match cli.input {
        Some(ref word) => process_word(word, &tables, &cli)?,
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read stdin")?;
                if !line.trim().is_empty() {
                    process_word(&line, &tables, &cli)?;
                }
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn process_word(line: &str, tables: &Tables, cli: &Cli) -> Result<()> {
    let word = line.trim().trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | '!' | '?'));
    let result = match parse_word_with(word, tables, &cli.options()) {
        Ok(result) => result,
        Err(err @ WordsError::InvalidInput { .. }) => {
            warn!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    print_result(&result, cli)
}

fn print_result(result: &ParseResult, cli: &Cli) -> Result<()> {
    if cli.text {
        println!("{}", output::to_text(result));
        return Ok(());
    }
    let json = if cli.pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    println!("{}", json.context("JSON serialization failed")?);
    Ok(())
}

//! Scan command — segment a text against a known-words list and score it.

use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use hanscan_core::{Highlight, WordList, scan};

use super::read_input_file;

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// File containing the text to score.
    pub file: Utf8PathBuf,

    /// File containing the reader's known words, one per line.
    #[arg(short, long)]
    pub words: Utf8PathBuf,

    /// Opening delimiter wrapped around known spans in the markup.
    #[arg(long, default_value = "<b>")]
    pub open: String,

    /// Closing delimiter wrapped around known spans in the markup.
    #[arg(long, default_value = "</b>")]
    pub close: String,
}

/// Scan a text file against a word-list file and print the readability
/// report.
#[instrument(name = "cmd_scan", skip_all, fields(file = %args.file, words = %args.words))]
pub fn cmd_scan(args: ScanArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(file = %args.file, words = %args.words, "executing scan command");

    let text = read_input_file(&args.file)?;

    let words_file = File::open(args.words.as_std_path())
        .with_context(|| format!("failed to open {}", args.words))?;
    let words = WordList::from_reader(BufReader::new(words_file))
        .with_context(|| format!("failed to read word list {}", args.words))?;

    let highlight = Highlight::new(args.open.as_str(), args.close.as_str());
    let report = scan(&text, &words, &highlight);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let score = format!("{}%", report.score);
    match report.score {
        80..=100 => println!("readability: {}", score.green()),
        50..=79 => println!("readability: {}", score.yellow()),
        _ => println!("readability: {}", score.red()),
    }
    println!(
        "known: {} chars, unknown: {} chars",
        report.known_chars, report.unknown_chars
    );
    println!("{}", report.markup);

    Ok(())
}

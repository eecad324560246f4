//! Command-line interface: word-ladder queries over a word list file.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

use crate::error::{Result, WordGraphError};
use crate::ladder::WordLadderGraph;
use crate::types::VertexPath;

// ---------------------------------------------------------------------------
// Argument definitions
// ---------------------------------------------------------------------------

/// Word-ladder queries over a word list.
#[derive(Debug, Parser)]
#[command(name = "wordgraph", version, about)]
pub struct Cli {
    /// Word list file, one word per line. Blank lines and `#` comments
    /// are skipped.
    #[arg(short, long)]
    pub words: PathBuf,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the words one substitution away from a word.
    Neighbors { word: String },

    /// Print a shortest ladder between two words.
    Ladder { start: String, target: String },

    /// Print every shortest ladder between two words.
    AllShortest { start: String, target: String },

    /// Exhaustively enumerate ladders up to a rung bound.
    Enumerate {
        start: String,
        target: String,

        /// Largest ladder to report, measured in rungs.
        #[arg(long)]
        max_rungs: usize,
    },
}

// ---------------------------------------------------------------------------
// Word list loading
// ---------------------------------------------------------------------------

/// Read a word list file: one word per line, `#` comments and blank
/// lines skipped. An empty result is rejected.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(WordGraphError::InvalidInput(format!(
            "no words in {}",
            path.display()
        )));
    }
    Ok(words)
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Load the word list, build the graph, and run one query.
pub fn run(cli: Cli) -> Result<()> {
    let words = load_word_list(&cli.words)?;
    info!(count = words.len(), "loaded word list");
    let graph = WordLadderGraph::new(&words);

    let output = match &cli.command {
        Command::Neighbors { word } => render_word_set(&graph.neighbors(word), cli.json)?,
        Command::Ladder { start, target } => {
            render_ladder(&graph.shortest_ladder(start, target), cli.json)?
        }
        Command::AllShortest { start, target } => {
            render_ladder_set(&graph.all_shortest_ladders(start, target), cli.json)?
        }
        Command::Enumerate {
            start,
            target,
            max_rungs,
        } => render_ladder_set(&graph.all_ladders(start, target, *max_rungs), cli.json)?,
    };

    println!("{output}");
    Ok(())
}

fn render_word_set(words: &BTreeSet<String>, as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string(&json!({ "words": words }))?);
    }
    if words.is_empty() {
        return Ok("(none)".to_string());
    }
    Ok(words.iter().cloned().collect::<Vec<_>>().join(" "))
}

fn render_ladder(ladder: &VertexPath, as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string(&json!({
            "ladder": ladder,
            "rungs": rungs_of(ladder),
        }))?);
    }
    if ladder.is_empty() {
        return Ok("no ladder".to_string());
    }
    Ok(ladder.join(" -> "))
}

fn render_ladder_set(ladders: &BTreeSet<VertexPath>, as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string(&json!({
            "count": ladders.len(),
            "ladders": ladders,
        }))?);
    }
    if ladders.is_empty() {
        return Ok("no ladders".to_string());
    }
    let mut lines = Vec::with_capacity(ladders.len() + 1);
    lines.push(format!("{} ladder(s):", ladders.len()));
    for ladder in ladders {
        lines.push(ladder.join(" -> "));
    }
    Ok(lines.join("\n"))
}

fn rungs_of(ladder: &VertexPath) -> i64 {
    if ladder.len() < 2 {
        return -1;
    }
    ladder.len() as i64 - 2
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Ramble Libs **
//! Fill in the blanks of a story template, then read the result.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::Colorize;
use log::info;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use textwrap::{fill as wrap, termwidth};

use ramble_libs::data_paths::data_path;
use ramble_libs::{RAMBLE_LIBS_VERSION, collect, extract, fill};

#[derive(Parser, Debug)]
#[command(name = "ramble_libs", version, about = "Fill in the blanks of a story template")]
struct Cli {
    /// Story template to fill (defaults to the bundled sample story)
    story: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let story_path = cli.story.unwrap_or_else(|| data_path("sample_story.txt"));

    info!("ramble_libs v{RAMBLE_LIBS_VERSION}");
    info!("Start: reading story template from '{}'", story_path.display());
    let story = fs::read_to_string(&story_path)
        .with_context(|| format!("reading story template from '{}'", story_path.display()))?;

    let placeholders = extract(&story);
    info!("{} placeholders found in story", placeholders.len());

    let mut editor = DefaultEditor::new().context("while starting line editor")?;
    let answers = collect(&placeholders, |prompt| answer_from(editor.readline(&prompt.bold().to_string())))?;

    let completed = fill(&story, &answers);
    println!("\n{}\n", "Your completed story:".bright_yellow().underline());
    println!("{}", wrap(&completed, termwidth()));
    Ok(())
}

/// Turn one line editor read into an answer. The line is kept exactly as typed.
fn answer_from(read: rustyline::Result<String>) -> Result<String> {
    match read {
        Ok(line) => Ok(line),
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
            Err(anyhow!("input ended before every blank was filled"))
        },
        Err(e) => Err(e).context("while reading an answer"),
    }
}

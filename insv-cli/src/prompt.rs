//! Interactive path prompts

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const INPUT_PROMPT: &str = ".insv input file path: ";
pub const OUTPUT_PROMPT: &str = "output directory: ";

/// Paths collected from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

/// Ask for the input video and the output directory, in that order
pub fn prompt_paths<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Paths> {
    let video = ask(input, out, INPUT_PROMPT)?;
    let output_dir = ask(input, out, OUTPUT_PROMPT)?;
    Ok(Paths {
        input: PathBuf::from(video),
        output_dir: PathBuf::from(output_dir),
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        bail!("No answer for prompt '{}'", prompt.trim_end());
    }

    Ok(clean_path(&line).to_string())
}

/// Trim whitespace and the quotes a terminal adds to dragged-in paths
fn clean_path(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix('"')
        .and_then(|l| l.strip_suffix('"'))
        .unwrap_or(line)
}

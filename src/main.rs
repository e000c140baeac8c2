use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use keypad_conundrum::total_complexity;

#[derive(Debug, Parser)]
struct Args {
    /// File with one door code per line.
    input_path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let door_codes = read_door_codes(&args.input_path)?;

    println!("Part 1: {}", total_complexity(&door_codes, 2)?);
    println!("Part 2: {}", total_complexity(&door_codes, 25)?);

    Ok(())
}

fn read_door_codes(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input file ({})", path.display()))?;

    let mut codes = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .with_context(|| format!("failed to read line {} of {}", index + 1, path.display()))?;
        let line = line.trim();
        if !line.is_empty() {
            codes.push(line.to_owned());
        }
    }
    Ok(codes)
}

//! inspect_table.rs
//!
//! Parses an input table the same way the generator does and prints the
//! resulting dataset as YAML, so label derivation, padding and duplicate
//! handling can be checked before generating anything.
//!
//! Usage: `inspect_table <TABLE> [SEPARATOR]`

use anyhow::{bail, Context, Result};
use constgen::{
    generate::load_dataset,
    table::{TableFormat, DEFAULT_SEPARATOR},
};
use std::{env, io::Write, path::PathBuf};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .context("Usage: inspect_table <TABLE> [SEPARATOR]")?;
    let separator = match args.next() {
        None => DEFAULT_SEPARATOR,
        Some(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => bail!("separator must be a single character, got {:?}", s),
            }
        }
    };

    let dataset = load_dataset(&input, &TableFormat::new(separator))?;
    let yaml = serde_yaml::to_string(&dataset)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(yaml.as_bytes())?;
    if dataset.duplicates() > 0 {
        writeln!(out, "# {} duplicate label(s) overwritten", dataset.duplicates())?;
    }
    Ok(())
}

// src/config.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::render::Language;
use crate::table::{TableFormat, DEFAULT_SEPARATOR};

const DEFAULT_INPUT: &str = "error-code.csv";
const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Parser, Debug, Default)]
#[command(
    name = "constgen",
    about = "Generate constant and enumeration source files from a delimited table",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        short,
        env = "CONSTGEN_INPUT",
        value_name = "FILE",
        help = "Input table; first line is the header [default: ./error-code.csv]"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        long,
        short,
        env = "CONSTGEN_OUTPUT_DIR",
        value_name = "DIR",
        help = "Directory for generated files [default: ./output/<language>]"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        long,
        short,
        env = "CONSTGEN_LANGUAGE",
        value_enum,
        help = "Target language [default: java]"
    )]
    pub language: Option<Language>,

    #[arg(
        long,
        short,
        env = "CONSTGEN_SEPARATOR",
        value_name = "CHAR",
        help = "Cell separator [default: |]"
    )]
    pub separator: Option<char>,

    #[arg(
        long,
        env = "CONSTGEN_SKIP_BLANK_LINES",
        help = "Drop whitespace-only lines instead of reading them as one-cell rows"
    )]
    pub skip_blank_lines: bool,

    #[arg(long, value_name = "FILE", help = "Write a JSON run report to this file")]
    pub report: Option<PathBuf>,

    #[arg(long, help = "Exit non-zero if any output file could not be written")]
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub language: Language,
    pub separator: char,
    pub skip_blank_lines: bool,
    pub report: Option<PathBuf>,
    pub strict: bool,
}

impl GeneratorConfig {
    /// Fill unset arguments with defaults relative to the working directory.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("resolving working directory")?;
        Ok(Self::resolve(args, &cwd))
    }

    /// Same as [`from_args`](Self::from_args) with an explicit base directory.
    pub fn resolve(args: CliArgs, base: &Path) -> Self {
        let CliArgs {
            input,
            output_dir,
            language,
            separator,
            skip_blank_lines,
            report,
            strict,
        } = args;

        let language = language.unwrap_or_default();
        let input = input.unwrap_or_else(|| base.join(DEFAULT_INPUT));
        let output_dir = output_dir
            .unwrap_or_else(|| base.join(DEFAULT_OUTPUT_DIR).join(language.to_string()));

        Self {
            input,
            output_dir,
            language,
            separator: separator.unwrap_or(DEFAULT_SEPARATOR),
            skip_blank_lines,
            report,
            strict,
        }
    }

    pub fn table_format(&self) -> TableFormat {
        TableFormat {
            separator: self.separator,
            skip_blank_lines: self.skip_blank_lines,
        }
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.separator.is_whitespace(),
            "separator must not be whitespace (cells are trimmed), got {:?}",
            self.separator
        );
        Ok(())
    }
}

// src/render/mod.rs
//! Source text for the generated files.
//!
//! Each target language implements [`Target`]: one constant-holder file per
//! attribute plus one combined enumeration file. Output is built by plain
//! string formatting and is fully determined by the dataset, so re-running on
//! the same table yields byte-identical files.

pub mod go;
pub mod java;
pub mod javascript;
pub mod kotlin;
pub mod python;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dataset::Dataset;
use crate::naming::big_hump;

/// A language the generator can emit.
pub trait Target {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    /// File stem of the combined enumeration file.
    fn enum_name(&self) -> &'static str;

    /// File stem (and type name) of the constants file for `attribute`.
    fn constants_name(&self, attribute: &str) -> String {
        big_hump(attribute)
    }

    fn render_constants(&self, attribute: &str, dataset: &Dataset) -> String;

    fn render_enum(&self, dataset: &Dataset) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    #[value(alias = "kt")]
    Kotlin,
    #[value(alias = "golang")]
    Go,
    #[value(alias = "py")]
    Python,
    #[value(alias = "js")]
    Javascript,
}

impl Language {
    pub fn target(self) -> &'static dyn Target {
        match self {
            Language::Java => &java::Java,
            Language::Kotlin => &kotlin::Kotlin,
            Language::Go => &go::Go,
            Language::Python => &python::Python,
            Language::Javascript => &javascript::JavaScript,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Java => write!(f, "java"),
            Language::Kotlin => write!(f, "kotlin"),
            Language::Go => write!(f, "go"),
            Language::Python => write!(f, "python"),
            Language::Javascript => write!(f, "javascript"),
        }
    }
}

/// Escape a value for a `quote`-delimited string literal.
pub(crate) fn escape(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `"a", "b", "c"` in header order for `label`.
pub(crate) fn quoted_values(dataset: &Dataset, label: &str, quote: char) -> String {
    dataset
        .attributes()
        .iter()
        .map(|attr| format!("{q}{}{q}", escape(dataset.value(label, attr), quote), q = quote))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Separator after member `idx` of `len`: `more` for all but the last.
pub(crate) fn member_separator<'a>(idx: usize, len: usize, more: &'a str, last: &'a str) -> &'a str {
    if idx + 1 < len {
        more
    } else {
        last
    }
}

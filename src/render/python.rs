// src/render/python.rs
use std::fmt::Write;

use super::{escape, quoted_values, Target};
use crate::dataset::Dataset;
use crate::naming::{small_hump, snake_name};

/// Plain classes for constants and a `namedtuple`-valued `Enum`.
pub struct Python;

const ENUM_NAME: &str = "error_enum";
const TUPLE: &str = "Tuple";

impl Target for Python {
    fn extension(&self) -> &'static str {
        "py"
    }

    fn enum_name(&self) -> &'static str {
        ENUM_NAME
    }

    /// The attribute with spaces and hyphens folded to `_`, so the class name
    /// and module name stay valid identifiers.
    fn constants_name(&self, attribute: &str) -> String {
        snake_name(attribute)
    }

    fn render_constants(&self, attribute: &str, dataset: &Dataset) -> String {
        let mut out = format!("class {}:\n", self.constants_name(attribute));
        for label in dataset.labels() {
            let _ = writeln!(
                out,
                "\t{} = '{}'",
                label,
                escape(dataset.value(label, attribute), '\'')
            );
        }
        out.push_str("\r\n");
        out
    }

    fn render_enum(&self, dataset: &Dataset) -> String {
        let fields: Vec<String> = dataset.attributes().iter().map(|a| small_hump(a)).collect();

        let mut out = String::from("from enum import Enum, unique\nfrom collections import namedtuple\n\n");
        let _ = writeln!(
            out,
            "{} = namedtuple('data', [{}])\n",
            TUPLE,
            fields
                .iter()
                .map(|f| format!("'{}'", f))
                .collect::<Vec<_>>()
                .join(", ")
        );
        let _ = writeln!(out, "@unique\nclass {}(Enum):", ENUM_NAME);
        for label in dataset.labels() {
            let _ = writeln!(out, "\t{} = {}({})", label, TUPLE, quoted_values(dataset, label, '\''));
        }
        out.push('\n');
        for field in &fields {
            let _ = write!(
                out,
                "\t@property\n\tdef {0}(self):\n\t\treturn self.value.{0}\n\n",
                field
            );
        }
        out
    }
}

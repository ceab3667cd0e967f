// src/render/javascript.rs
use std::fmt::Write;

use super::{escape, member_separator, Target};
use crate::dataset::Dataset;
use crate::naming::small_hump;

/// Frozen CommonJS objects.
pub struct JavaScript;

const ENUM_NAME: &str = "error_enum";

impl Target for JavaScript {
    fn extension(&self) -> &'static str {
        "js"
    }

    fn enum_name(&self) -> &'static str {
        ENUM_NAME
    }

    /// Only used as the file name; the module body is an anonymous object.
    fn constants_name(&self, attribute: &str) -> String {
        attribute.to_string()
    }

    fn render_constants(&self, attribute: &str, dataset: &Dataset) -> String {
        let mut out = String::from("module.exports = Object.freeze({\n");
        for label in dataset.labels() {
            let _ = writeln!(
                out,
                "\t{}: \"{}\",",
                label,
                escape(dataset.value(label, attribute), '"')
            );
        }
        out.push_str("})\r\n");
        out
    }

    /// Entries carry every attribute but the first, which already names the entry.
    fn render_enum(&self, dataset: &Dataset) -> String {
        let properties = dataset.attributes().get(1..).unwrap_or_default();
        let mut out = String::from("module.exports = Object.freeze({\n");
        let len = dataset.len();
        for (idx, label) in dataset.labels().enumerate() {
            let body = properties
                .iter()
                .map(|p| {
                    format!(
                        "{}: \"{}\"",
                        small_hump(p),
                        escape(dataset.value(label, p), '"')
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "\t{}: {{{}}}{}",
                label,
                body,
                member_separator(idx, len, ",", "")
            );
        }
        out.push_str("});\n");
        out
    }
}

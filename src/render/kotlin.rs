// src/render/kotlin.rs
use std::fmt::Write;

use super::{member_separator, Target};
use crate::dataset::Dataset;
use crate::naming::small_hump;

/// `object` constants and an `enum class` with `val` properties.
pub struct Kotlin;

const ENUM_NAME: &str = "ErrorEnum";

/// Kotlin string literals also interpolate `$`.
fn escape(value: &str) -> String {
    super::escape(value, '"').replace('$', "\\$")
}

impl Target for Kotlin {
    fn extension(&self) -> &'static str {
        "kt"
    }

    fn enum_name(&self) -> &'static str {
        ENUM_NAME
    }

    fn render_constants(&self, attribute: &str, dataset: &Dataset) -> String {
        let mut out = format!("object {} {{\n", self.constants_name(attribute));
        for label in dataset.labels() {
            let _ = writeln!(
                out,
                "\tval {} = \"{}\"",
                label,
                escape(dataset.value(label, attribute))
            );
        }
        out.push_str("}\r\n");
        out
    }

    fn render_enum(&self, dataset: &Dataset) -> String {
        let props = dataset
            .attributes()
            .iter()
            .map(|a| format!("val {}: String", small_hump(a)))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = format!("enum class {}({}) {{\n", ENUM_NAME, props);
        let len = dataset.len();
        for (idx, label) in dataset.labels().enumerate() {
            let args = dataset
                .attributes()
                .iter()
                .map(|a| format!("\"{}\"", escape(dataset.value(label, a))))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "\t{}({}){}",
                label,
                args,
                member_separator(idx, len, ",", "")
            );
        }
        out.push('}');
        out
    }
}

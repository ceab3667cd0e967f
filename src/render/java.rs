// src/render/java.rs
use std::fmt::Write;

use super::{escape, member_separator, quoted_values, Target};
use crate::dataset::Dataset;
use crate::naming::{big_hump, small_hump};

/// `public interface` constants and a `public enum` with fields and getters.
pub struct Java;

const ENUM_NAME: &str = "ErrorEnum";

impl Target for Java {
    fn extension(&self) -> &'static str {
        "java"
    }

    fn enum_name(&self) -> &'static str {
        ENUM_NAME
    }

    fn render_constants(&self, attribute: &str, dataset: &Dataset) -> String {
        let mut out = format!("public interface {} {{\n", self.constants_name(attribute));
        for label in dataset.labels() {
            let value = escape(dataset.value(label, attribute), '"');
            let _ = writeln!(out, "\tString {} = \"{}\";", label, value);
        }
        out.push_str("}\r\n");
        out
    }

    fn render_enum(&self, dataset: &Dataset) -> String {
        format!(
            "public enum {name} {{\n{members}\n{ctor}\n{fields}\n{getters}}}",
            name = ENUM_NAME,
            members = members(dataset),
            ctor = constructor(dataset.attributes()),
            fields = fields(dataset.attributes()),
            getters = getters(dataset.attributes()),
        )
    }
}

fn members(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        // an enum body needs the terminator even without constants
        return "\t;\n".to_string();
    }
    let mut out = String::new();
    let len = dataset.len();
    for (idx, label) in dataset.labels().enumerate() {
        let _ = writeln!(
            out,
            "\t{}({}){}",
            label,
            quoted_values(dataset, label, '"'),
            member_separator(idx, len, ",", ";")
        );
    }
    out
}

fn constructor(attributes: &[String]) -> String {
    let params = attributes
        .iter()
        .map(|a| format!("String {}", small_hump(a)))
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = format!("\t{}({}) {{\n", ENUM_NAME, params);
    for attr in attributes {
        let field = small_hump(attr);
        let _ = writeln!(out, "\t\tthis.{0} = {0};", field);
    }
    out.push_str("\t}\n");
    out
}

fn fields(attributes: &[String]) -> String {
    attributes
        .iter()
        .map(|a| format!("\tprivate String {};\n", small_hump(a)))
        .collect()
}

fn getters(attributes: &[String]) -> String {
    let mut out = String::new();
    for attr in attributes {
        let _ = write!(
            out,
            "\tpublic String get{}() {{\n\t\treturn {};\n\t}}\n\n",
            big_hump(attr),
            small_hump(attr)
        );
    }
    out
}

// src/render/go.rs
use std::fmt::Write;

use super::{escape, quoted_values, Target};
use crate::dataset::Dataset;
use crate::naming::{big_hump, small_hump};

/// `const` blocks and a struct-valued `var` block with accessor methods.
///
/// All files share one package, so constants are named
/// `{Attribute}_{LABEL}` to stay clear of each other and of the enum values,
/// which keep the bare label.
pub struct Go;

const ENUM_NAME: &str = "ErrorEnum";
const PACKAGE: &str = "errorcode";

impl Target for Go {
    fn extension(&self) -> &'static str {
        "go"
    }

    fn enum_name(&self) -> &'static str {
        ENUM_NAME
    }

    fn render_constants(&self, attribute: &str, dataset: &Dataset) -> String {
        let prefix = self.constants_name(attribute);
        let mut out = format!("package {}\n\nconst (\n", PACKAGE);
        for label in dataset.labels() {
            let _ = writeln!(
                out,
                "\t{}_{} = \"{}\"",
                prefix,
                label,
                escape(dataset.value(label, attribute), '"')
            );
        }
        out.push_str(")\r\n");
        out
    }

    fn render_enum(&self, dataset: &Dataset) -> String {
        let attributes = dataset.attributes();
        let mut out = format!("package {}\n\ntype {} struct {{\n", PACKAGE, ENUM_NAME);
        for attr in attributes {
            let _ = writeln!(out, "\t{} string", small_hump(attr));
        }
        out.push_str("}\r\n\nvar (\n");
        for label in dataset.labels() {
            let _ = writeln!(
                out,
                "\t{} = {}{{{}}}",
                label,
                ENUM_NAME,
                quoted_values(dataset, label, '"')
            );
        }
        out.push_str(")\r\n");
        for attr in attributes {
            let _ = write!(
                out,
                "\nfunc (e {}) {}() string {{\n\treturn e.{}\n}}\n",
                ENUM_NAME,
                big_hump(attr),
                small_hump(attr)
            );
        }
        out
    }
}

// src/dataset.rs

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::naming::label_name;
use crate::table::RawTable;

/// Attribute name → value, in header order.
pub type Record = IndexMap<String, String>;

/// Label → record, in input row order.
///
/// Every record carries exactly the header's attributes. Labels that occur
/// twice keep the position of their first row and the values of their last.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    attributes: Vec<String>,
    records: IndexMap<String, Record>,
    #[serde(skip)]
    duplicates: usize,
}

impl Dataset {
    #[instrument(level = "debug", skip_all, fields(rows = table.rows.len()))]
    pub fn from_table(table: RawTable) -> Self {
        let RawTable { headers, rows } = table;
        let width = headers.len();

        if rows.iter().any(|r| r.len() > width) {
            warn!(
                "some rows have more cells than the header ({} columns); extra cells are ignored",
                width
            );
        }

        let mut records: IndexMap<String, Record> = IndexMap::with_capacity(rows.len());
        let mut duplicates = 0;

        for mut row in rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
            let label = label_name(&row[0]);
            let record: Record = headers
                .iter()
                .cloned()
                .zip(row.into_iter().take(width))
                .collect();

            if records.insert(label.clone(), record).is_some() {
                debug!(label = %label, "duplicate label, later row wins");
                duplicates += 1;
            }
        }

        debug!(records = records.len(), duplicates, "built dataset");
        Self {
            attributes: headers,
            records,
            duplicates,
        }
    }

    /// Header attributes in column order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn records(&self) -> &IndexMap<String, Record> {
        &self.records
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn get(&self, label: &str) -> Option<&Record> {
        self.records.get(label)
    }

    /// Value of `attribute` for `label`; empty when either is unknown.
    pub fn value(&self, label: &str, attribute: &str) -> &str {
        self.records
            .get(label)
            .and_then(|r| r.get(attribute))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose label had already been seen.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}

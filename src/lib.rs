pub mod config;
pub mod dataset;
pub mod generate;
pub mod naming;
pub mod render;
pub mod table;
pub mod write;

pub use config::{CliArgs, GeneratorConfig};
pub use dataset::{Dataset, Record};
pub use generate::{finish, run, FileOutcome, GenerationReport};
pub use render::{Language, Target};

// src/generate.rs
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{error, info, instrument, warn};

use crate::config::GeneratorConfig;
use crate::dataset::Dataset;
use crate::render::{Language, Target};
use crate::table::{self, TableFormat};
use crate::write::{output_path, write_output};

/// Result of one attempted output file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Logical name (type / file stem).
    pub name: String,
    pub path: PathBuf,
    pub bytes: usize,
    /// Error chain when the write failed.
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub language: Language,
    pub records: usize,
    pub duplicate_labels: usize,
    pub attributes: Vec<String>,
    pub files: Vec<FileOutcome>,
}

impl GenerationReport {
    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.is_ok())
    }

    pub fn written(&self) -> usize {
        self.files.iter().filter(|f| f.is_ok()).count()
    }

    /// Pretty JSON with a trailing newline.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut text = serde_json::to_string_pretty(self).context("serializing run report")?;
        text.push('\n');
        fs::write(path, text).with_context(|| format!("writing run report {:?}", path))
    }
}

/// Parse the input table and build the dataset. Any failure here is fatal.
pub fn load_dataset(input: &Path, format: &TableFormat) -> Result<Dataset> {
    let raw = table::parse_file(input, format)?;
    Ok(Dataset::from_table(raw))
}

/// Render and write every file for `dataset`: one constants file per
/// attribute, then the enumeration file. A failed write is recorded and the
/// remaining files are still attempted.
pub fn generate_files(dataset: &Dataset, target: &dyn Target, output_dir: &Path) -> Vec<FileOutcome> {
    let mut outcomes = Vec::with_capacity(dataset.attributes().len() + 1);

    for attribute in dataset.attributes() {
        let name = target.constants_name(attribute);
        let content = target.render_constants(attribute, dataset);
        outcomes.push(emit(output_dir, name, target.extension(), &content));
    }

    let content = target.render_enum(dataset);
    outcomes.push(emit(
        output_dir,
        target.enum_name().to_string(),
        target.extension(),
        &content,
    ));

    outcomes
}

fn emit(dir: &Path, name: String, extension: &str, content: &str) -> FileOutcome {
    match write_output(dir, &name, extension, content) {
        Ok(path) => {
            info!(name = %name, path = %path.display(), "generated");
            FileOutcome {
                name,
                path,
                bytes: content.len(),
                error: None,
            }
        }
        Err(e) => {
            error!("generating {} failed: {:#}", name, e);
            FileOutcome {
                path: output_path(dir, &name, extension),
                name,
                bytes: 0,
                error: Some(format!("{:#}", e)),
            }
        }
    }
}

/// Full run: load, render, write.
///
/// Errors only when the input table cannot be loaded; per-file failures are
/// collected in the returned report.
#[instrument(level = "info", skip(config), fields(input = %config.input.display(), language = %config.language))]
pub fn run(config: &GeneratorConfig) -> Result<GenerationReport> {
    let start = Instant::now();

    let dataset = load_dataset(&config.input, &config.table_format())?;
    info!(
        records = dataset.len(),
        attributes = dataset.attributes().len(),
        duplicates = dataset.duplicates(),
        "loaded table"
    );

    let files = generate_files(&dataset, config.language.target(), &config.output_dir);

    let report = GenerationReport {
        input: config.input.clone(),
        output_dir: config.output_dir.clone(),
        language: config.language,
        records: dataset.len(),
        duplicate_labels: dataset.duplicates(),
        attributes: dataset.attributes().to_vec(),
        files,
    };
    info!(
        written = report.written(),
        failed = report.failed().count(),
        elapsed = ?start.elapsed(),
        "completed"
    );
    Ok(report)
}

/// Wrap up a run: write the JSON report when one was asked for, then decide
/// the exit status.
///
/// Failed files and a failed report write are always logged. They only turn
/// into an error under `strict`, after every file has been attempted.
pub fn finish(report: &GenerationReport, config: &GeneratorConfig) -> Result<()> {
    let mut report_failed = false;
    if let Some(path) = &config.report {
        match report.write_json(path) {
            Ok(()) => info!("wrote report {}", path.display()),
            Err(e) => {
                error!("{:#}", e);
                report_failed = true;
            }
        }
    }

    let failed: Vec<_> = report.failed().map(|f| f.name.as_str()).collect();
    if !failed.is_empty() {
        error!(
            "{} of {} files failed: {}",
            failed.len(),
            report.files.len(),
            failed.join(", ")
        );
    }

    if config.strict {
        anyhow::ensure!(
            failed.is_empty(),
            "{} output file(s) could not be written",
            failed.len()
        );
        anyhow::ensure!(!report_failed, "run report could not be written");
    } else if !failed.is_empty() || report_failed {
        warn!("partial output accepted (run with --strict to fail instead)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Language;
    use crate::table::parse_str;
    use glob::glob;
    use tempfile::tempdir;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,constgen=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn sample() -> Dataset {
        Dataset::from_table(
            parse_str("code|msg|http_status\nnot found|missing|404\ndup|duplicate|409\n", '|')
                .unwrap(),
        )
    }

    #[test]
    fn test_one_file_per_attribute_plus_enum() -> Result<()> {
        init_test_logging();
        let tmp = tempdir()?;
        let outcomes = generate_files(&sample(), Language::Java.target(), tmp.path());

        let names: Vec<_> = outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Code", "Msg", "HttpStatus", "ErrorEnum"]);
        assert!(outcomes.iter().all(FileOutcome::is_ok));

        let files = glob(&format!("{}/*.java", tmp.path().display()))?
            .filter_map(Result::ok)
            .count();
        assert_eq!(files, 4);
        Ok(())
    }

    #[test]
    fn test_failed_write_does_not_stop_others() -> Result<()> {
        init_test_logging();
        let tmp = tempdir()?;
        // a directory squatting on one output path makes only that file fail
        fs::create_dir(tmp.path().join("Msg.java"))?;

        let outcomes = generate_files(&sample(), Language::Java.target(), tmp.path());
        assert_eq!(outcomes.len(), 4);
        let failed: Vec<_> = outcomes.iter().filter(|o| !o.is_ok()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].name, "Msg");
        assert!(tmp.path().join("Code.java").is_file());
        assert!(tmp.path().join("HttpStatus.java").is_file());
        assert!(tmp.path().join("ErrorEnum.java").is_file());
        Ok(())
    }

    #[test]
    fn test_run_missing_input_is_fatal() {
        init_test_logging();
        let tmp = tempdir().unwrap();
        let config = GeneratorConfig {
            input: tmp.path().join("missing.csv"),
            output_dir: tmp.path().join("out"),
            language: Language::Java,
            separator: '|',
            skip_blank_lines: false,
            report: None,
            strict: false,
        };
        assert!(run(&config).is_err());
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_report_json() -> Result<()> {
        let tmp = tempdir()?;
        let input = tmp.path().join("error-code.csv");
        fs::write(&input, "code|msg\na|one\nA|two\n")?;
        let config = GeneratorConfig {
            input,
            output_dir: tmp.path().join("out"),
            language: Language::Python,
            separator: '|',
            skip_blank_lines: false,
            report: None,
            strict: false,
        };
        let report = run(&config)?;
        assert_eq!(report.records, 1);
        assert_eq!(report.duplicate_labels, 1);
        assert_eq!(report.written(), 3);

        let path = tmp.path().join("report.json");
        report.write_json(&path)?;
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(value["language"], "python");
        assert_eq!(value["files"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["files"][2]["name"], "error_enum");
        Ok(())
    }

    fn config_in(dir: &Path) -> GeneratorConfig {
        GeneratorConfig {
            input: dir.join("error-code.csv"),
            output_dir: dir.join("out"),
            language: Language::Java,
            separator: '|',
            skip_blank_lines: false,
            report: None,
            strict: false,
        }
    }

    fn report_with(files: Vec<FileOutcome>) -> GenerationReport {
        GenerationReport {
            input: PathBuf::from("error-code.csv"),
            output_dir: PathBuf::from("out"),
            language: Language::Java,
            records: 1,
            duplicate_labels: 0,
            attributes: vec!["code".into()],
            files,
        }
    }

    fn outcome(name: &str, error: Option<&str>) -> FileOutcome {
        FileOutcome {
            name: name.to_string(),
            path: PathBuf::from(format!("out/{}.java", name)),
            bytes: 0,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_blank_line_counts_as_row() -> Result<()> {
        init_test_logging();
        let tmp = tempdir()?;
        let mut config = config_in(tmp.path());
        fs::write(
            &config.input,
            "code|msg|http_status\nnot found|missing|404\ndup|duplicate|409\n\nlast|x|1\n",
        )?;
        assert_eq!(run(&config)?.records, 4);

        config.skip_blank_lines = true;
        assert_eq!(run(&config)?.records, 3);
        Ok(())
    }

    #[test]
    fn test_finish_tolerates_failures_unless_strict() {
        init_test_logging();
        let tmp = tempdir().unwrap();
        let mut config = config_in(tmp.path());
        let report = report_with(vec![outcome("Code", None), outcome("Msg", Some("denied"))]);

        assert!(finish(&report, &config).is_ok());
        config.strict = true;
        let err = finish(&report, &config).unwrap_err();
        assert!(err.to_string().contains("1 output file(s)"));
    }

    #[test]
    fn test_finish_strict_all_written() {
        let tmp = tempdir().unwrap();
        let mut config = config_in(tmp.path());
        config.strict = true;
        let report = report_with(vec![outcome("Code", None), outcome("ErrorEnum", None)]);
        assert!(finish(&report, &config).is_ok());
    }

    #[test]
    fn test_finish_writes_report() -> Result<()> {
        let tmp = tempdir()?;
        let mut config = config_in(tmp.path());
        let path = tmp.path().join("report.json");
        config.report = Some(path.clone());
        finish(&report_with(vec![outcome("Code", None)]), &config)?;
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(value["files"][0]["name"], "Code");
        Ok(())
    }

    #[test]
    fn test_finish_report_write_failure() {
        init_test_logging();
        let tmp = tempdir().unwrap();
        let mut config = config_in(tmp.path());
        config.report = Some(tmp.path().join("no-such-dir").join("report.json"));
        let report = report_with(vec![outcome("Code", None)]);

        // logged only
        assert!(finish(&report, &config).is_ok());
        config.strict = true;
        let err = finish(&report, &config).unwrap_err();
        assert!(err.to_string().contains("run report"));
    }
}

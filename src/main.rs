use anyhow::Result;
use clap::Parser;
use constgen::{finish, run, CliArgs, GeneratorConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) resolve config ───────────────────────────────────────────
    let config = GeneratorConfig::from_args(CliArgs::parse())?;
    config.validate()?;
    info!(
        input = %config.input.display(),
        output_dir = %config.output_dir.display(),
        language = %config.language,
        "startup"
    );

    // ─── 3) generate ─────────────────────────────────────────────────
    let report = run(&config)?;

    finish(&report, &config)?;

    info!("all done");
    Ok(())
}

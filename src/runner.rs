use std::path::Path;

use anyhow::Context;

use crate::cli::Cli;
use scope_hunter::config::Config;
use scope_hunter::filter::FilterConfig;
use scope_hunter::http_client::{ApiClient, Credentials};
use scope_hunter::output::open_sink;
use scope_hunter::pipeline::Pipeline;

fn init_logging(cli: &Cli) {
    // stdout carries results only, so logs go to stderr. External crates stay at
    // INFO even in debug mode.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!(
        "scope_hunter={level},reqwest=info,hyper=info,rustls=warn",
        level = crate_level
    );
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .init();
}

/// Config file (if any) first, then command line flags on top.
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::from_file(Path::new(path))?,
        None => Config::default(),
    };
    if let Some(timeout) = cli.timeout {
        cfg.timeout_secs = timeout;
    }
    if let Some(concurrency) = cli.concurrency {
        cfg.concurrency = concurrency;
    }
    if let Some(base) = &cli.api_base {
        cfg.api_base = base.clone();
    }
    cfg.paid_only |= cli.paid;
    cfg.validate()?;
    Ok(cfg)
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(&cli);

    let cfg = build_config(&cli)?;
    tracing::info!(api_base = %cfg.api_base, paid_only = cfg.paid_only, concurrency = cfg.concurrency, timeout = cfg.timeout_secs, "Starting crawl");

    let creds = Credentials { username: cli.username.clone(), token: cli.token.clone() };
    let client = ApiClient::from_config(&cfg, creds).context("building HTTP client")?;
    let mut sink = open_sink(cli.output.as_deref().map(Path::new)).context("opening output")?;

    let started = std::time::Instant::now();
    let pipeline = Pipeline::new(&client, &cfg, FilterConfig::new(cfg.paid_only));
    let summary = pipeline.run(&mut sink).await.context("crawl aborted")?;

    tracing::info!(
        pages = summary.pages,
        programs = summary.programs,
        emitted = summary.emitted,
        failed = summary.failed.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Crawl finished"
    );
    if !summary.failed.is_empty() {
        tracing::warn!(handles = ?summary.failed, "some programs could not be fetched");
    }
    Ok(())
}

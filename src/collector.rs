//! Collector run: discovery followed by export

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::config::{CollectorConfig, log_path};
use crate::discovery::builder::FamilyBuilder;
use crate::discovery::error::DiscoveryError;
use crate::discovery::probers::HttpProber;
use crate::discovery::resolver::PlatformReleaseResolver;
use crate::discovery::types::Family;
use crate::discovery::url::UrlCalculator;
use crate::export::writer::write_catalog_files;

/// Options taken from the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub write_dir: PathBuf,
    pub config_path: Option<PathBuf>,
    /// `Some(None)` logs to the default log file
    pub log_file: Option<Option<PathBuf>>,
    pub json_logs: bool,
    pub verbose: u8,
}

fn filter_for(verbose: u8) -> EnvFilter {
    let default_directive = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber. Keep the returned guard alive to flush the log file.
pub fn init_logging(options: &RunOptions) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = if options.json_logs {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .boxed()
    };

    let (file_layer, guard) = match &options.log_file {
        Some(path) => {
            let path = path.clone().unwrap_or_else(log_path);
            let (writer, guard) = file_writer(&path)?;
            let layer = fmt::layer().with_ansi(false).with_writer(writer).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter_for(options.verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

/// Discovers families using the HTTP prober described by `config`
pub async fn discover<F>(config: &CollectorConfig, cancel: F) -> anyhow::Result<Vec<Family>>
where
    F: std::future::Future<Output = ()>,
{
    let prober = HttpProber::new(Duration::from_millis(config.probe_timeout_ms))?;
    let resolver = PlatformReleaseResolver::with_concurrency(
        Arc::new(prober),
        UrlCalculator::new(&config.base_url),
        config.max_concurrent_probes,
    );
    let builder =
        FamilyBuilder::new(Arc::new(resolver)).with_first_version(config.first_version);

    info!(
        "Discovering releases from {} starting at {}",
        config.base_url, config.first_version
    );
    match builder.discover_until(cancel).await {
        Ok(families) => Ok(families),
        Err(DiscoveryError::Cancelled) => bail!("discovery cancelled; no files written"),
        Err(e) => Err(e.into()),
    }
}

/// Runs discovery and writes the catalog files
pub async fn run(options: RunOptions) -> anyhow::Result<()> {
    let _guard = init_logging(&options)?;

    let config = CollectorConfig::load(options.config_path.as_deref())?;
    let cancel = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let families = discover(&config, cancel).await?;
    if families.is_empty() {
        warn!(
            "No releases found at {}; the host may be unreachable. Skipping export.",
            config.base_url
        );
        bail!("no releases discovered");
    }
    info!("Done collecting all families data.");

    let written = write_catalog_files(&options.write_dir, families, chrono::Utc::now())?;
    info!("Done writing {} JSON files.", written.len());
    Ok(())
}

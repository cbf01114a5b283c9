//! Closet host: wires the catalog and onboarding use cases to their
//! file-backed adapters.

pub mod bootstrap;

use std::path::Path;

use closet_app::usecases::onboarding::OnboardingStatusDto;
use closet_app::{CatalogSession, ClosetSnapshot};
use closet_core::config::AppConfig;
use serde::Serialize;
use tracing::{error, info, info_span, Instrument};

use bootstrap::{init_tracing_subscriber, load_config, wire_dependencies, AppPaths};

/// What the host prints on start-up.
#[derive(Debug, Serialize)]
pub struct StartupReport {
    pub closet: ClosetSnapshot,
    pub onboarding: OnboardingStatusDto,
}

/// Load config, start logging, then build the start-up report.
pub async fn run(config_path: Option<&Path>) -> anyhow::Result<StartupReport> {
    // Logging is not up yet, so config errors are kept until it is.
    let (config, config_error) = match config_path.map(load_config) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (AppConfig::default(), Some(err)),
        None => (AppConfig::default(), None),
    };

    let paths = AppPaths::resolve(&config)?;
    init_tracing_subscriber(paths.file_logging.then_some(paths.logs_dir.as_path()))?;
    if let Some(err) = config_error {
        error!(error = %format!("{err:#}"), "failed to load config, continuing with defaults");
    }

    build_report(paths)
        .instrument(info_span!("host.startup"))
        .await
}

/// Everything after logging is initialised. Split out so it can run
/// without installing a global subscriber.
pub async fn build_report(paths: AppPaths) -> anyhow::Result<StartupReport> {
    info!(
        data_dir = %paths.data_dir.display(),
        products = %paths.products_path.display(),
        "starting closet"
    );
    let deps = wire_dependencies(paths);

    let closet = deps.load_catalog().execute().await?;
    let session = CatalogSession::new(closet);
    let onboarding = deps.get_onboarding_status().execute().await?;

    Ok(StartupReport {
        closet: session.snapshot(),
        onboarding,
    })
}

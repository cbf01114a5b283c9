//! # Dependency Injection
//!
//! The only place that depends on `closet-infra` and `closet-app` at the
//! same time. It assembles adapters behind ports and hands out use cases;
//! it makes no decisions of its own.

use std::sync::Arc;

use async_trait::async_trait;
use closet_app::usecases::onboarding::{
    CompleteOnboarding, GetOnboardingStatus, IntroTourSession, OnboardingOrchestrator,
    ResetOnboarding,
};
use closet_app::LoadCatalog;
use closet_core::onboarding::{OnboardingExit, OnboardingStep};
use closet_core::ports::{
    CatalogSourcePort, OnboardingEventPort, OnboardingFlagPort, TimerPort,
};
use closet_infra::{FileOnboardingFlagStore, JsonCatalogSource, Timer};
use tokio::sync::Mutex;
use tracing::info;

use super::paths::AppPaths;

/// Capacity of the timer expiration channel. One scan timer is live at a time.
const TIMER_CHANNEL_CAPACITY: usize = 8;

/// Assembled host dependencies.
pub struct AppDeps {
    pub paths: AppPaths,
    catalog_source: Arc<dyn CatalogSourcePort>,
    onboarding_flag: Arc<dyn OnboardingFlagPort>,
}

impl AppDeps {
    pub fn load_catalog(&self) -> LoadCatalog {
        LoadCatalog::from_ports(self.catalog_source.clone())
    }

    pub fn get_onboarding_status(&self) -> GetOnboardingStatus {
        GetOnboardingStatus::from_ports(self.onboarding_flag.clone())
    }

    pub fn complete_onboarding(&self) -> CompleteOnboarding {
        CompleteOnboarding::from_ports(self.onboarding_flag.clone())
    }

    pub fn reset_onboarding(&self) -> ResetOnboarding {
        ResetOnboarding::from_ports(self.onboarding_flag.clone())
    }

    /// Intro tour whose completion is stored in the same flag file.
    pub fn start_intro_tour(&self) -> IntroTourSession {
        IntroTourSession::new(Arc::new(self.complete_onboarding()))
    }

    /// Fresh wizard session with its own scan timer and expiration listener.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start_onboarding_session(
        &self,
        event_port: Arc<dyn OnboardingEventPort>,
    ) -> Arc<OnboardingOrchestrator> {
        let (timer, expirations) = Timer::channel(TIMER_CHANNEL_CAPACITY);
        let timer_port: Arc<Mutex<dyn TimerPort>> = Arc::new(Mutex::new(timer));

        let orchestrator = Arc::new(OnboardingOrchestrator::new(
            Arc::new(self.complete_onboarding()),
            event_port,
            timer_port,
            self.paths.scan_duration,
        ));
        orchestrator.spawn_timer_listener(expirations);
        orchestrator
    }
}

pub fn wire_dependencies(paths: AppPaths) -> AppDeps {
    let catalog_source: Arc<dyn CatalogSourcePort> =
        Arc::new(JsonCatalogSource::new(paths.products_path.clone()));
    let onboarding_flag: Arc<dyn OnboardingFlagPort> = Arc::new(
        FileOnboardingFlagStore::with_defaults(paths.data_dir.clone()),
    );

    AppDeps {
        paths,
        catalog_source,
        onboarding_flag,
    }
}

/// Host-side event sink that only logs. A UI host would route these to
/// its navigation instead.
pub struct LoggingOnboardingEventPort;

#[async_trait]
impl OnboardingEventPort for LoggingOnboardingEventPort {
    async fn emit_step_changed(&self, step: OnboardingStep) {
        info!(step = %step, "onboarding step changed");
    }

    async fn emit_exit(&self, exit: OnboardingExit) {
        info!(?exit, target = exit.target(), "onboarding finished");
    }
}

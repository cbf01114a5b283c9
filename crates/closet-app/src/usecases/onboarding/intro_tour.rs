use std::sync::Arc;

use closet_core::onboarding::{IntroTour, TourOutcome, TourSlide};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::usecases::onboarding::CompleteOnboarding;

/// Drives the in-app intro tour.
///
/// Finishing or skipping the tour marks onboarding complete through
/// [`CompleteOnboarding`], the same path the wizard uses.
pub struct IntroTourSession {
    tour: Mutex<IntroTour>,
    complete_onboarding: Arc<CompleteOnboarding>,
}

impl IntroTourSession {
    pub fn new(complete_onboarding: Arc<CompleteOnboarding>) -> Self {
        Self {
            tour: Mutex::new(IntroTour::new()),
            complete_onboarding,
        }
    }

    pub async fn current(&self) -> TourSlide {
        self.tour.lock().await.current()
    }

    pub async fn next(&self) -> anyhow::Result<TourOutcome> {
        let outcome = self.tour.lock().await.next();
        self.settle(outcome).await
    }

    pub async fn previous(&self) -> anyhow::Result<TourOutcome> {
        let outcome = self.tour.lock().await.previous();
        self.settle(outcome).await
    }

    pub async fn go_to(&self, index: usize) -> anyhow::Result<TourOutcome> {
        let outcome = self.tour.lock().await.go_to(index);
        self.settle(outcome).await
    }

    pub async fn skip(&self) -> anyhow::Result<TourOutcome> {
        let outcome = self.tour.lock().await.skip();
        self.settle(outcome).await
    }

    async fn settle(&self, outcome: TourOutcome) -> anyhow::Result<TourOutcome> {
        match outcome {
            TourOutcome::Showing(slide) => debug!(?slide, "intro tour slide"),
            TourOutcome::Completed => {
                self.complete_onboarding.execute().await?;
                info!("intro tour finished");
            }
        }
        Ok(outcome)
    }
}

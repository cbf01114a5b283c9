//! Onboarding orchestrator.
//!
//! This module coordinates the onboarding state machine and its side effects:
//! the scanning step's auto-advance timer, the durable completion flag and
//! the exit signal to the host.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use closet_core::{
    ids::TimerId,
    onboarding::{
        EmailProvider, OnboardingAction, OnboardingEvent, OnboardingExit, OnboardingState,
        OnboardingStateMachine, OnboardingStep, PersonalDetailsPatch,
    },
    ports::{OnboardingEventPort, TimerPort},
};

use crate::usecases::onboarding::context::OnboardingContext;
use crate::usecases::onboarding::CompleteOnboarding;

/// Errors produced by the onboarding orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("persist onboarding completion failed: {0}")]
    PersistCompletion(#[source] anyhow::Error),
    #[error("scan timer failed: {0}")]
    ScanTimer(#[source] anyhow::Error),
    #[error("onboarding session already ended")]
    SessionEnded,
}

/// Orchestrator that drives one wizard session.
pub struct OnboardingOrchestrator {
    context: Arc<OnboardingContext>,

    /// Set once the wizard exits or the host tears it down.
    ended: AtomicBool,
    scan_generation: AtomicU64,
    active_scan_timer: Mutex<Option<TimerId>>,
    scan_duration: Duration,

    complete_onboarding: Arc<CompleteOnboarding>,
    event_port: Arc<dyn OnboardingEventPort>,
    timer_port: Arc<Mutex<dyn TimerPort>>,
}

impl OnboardingOrchestrator {
    pub fn new(
        complete_onboarding: Arc<CompleteOnboarding>,
        event_port: Arc<dyn OnboardingEventPort>,
        timer_port: Arc<Mutex<dyn TimerPort>>,
        scan_duration: Duration,
    ) -> Self {
        Self::with_state(
            OnboardingState::default(),
            complete_onboarding,
            event_port,
            timer_port,
            scan_duration,
        )
    }

    /// Starts the session from `initial` instead of the demo defaults.
    ///
    /// The scan timer is only armed by transitions, so `initial` should not
    /// already sit on the scanning step.
    pub fn with_state(
        initial: OnboardingState,
        complete_onboarding: Arc<CompleteOnboarding>,
        event_port: Arc<dyn OnboardingEventPort>,
        timer_port: Arc<Mutex<dyn TimerPort>>,
        scan_duration: Duration,
    ) -> Self {
        Self {
            context: OnboardingContext::new(initial).arc(),
            ended: AtomicBool::new(false),
            scan_generation: AtomicU64::new(0),
            active_scan_timer: Mutex::new(None),
            scan_duration,
            complete_onboarding,
            event_port,
            timer_port,
        }
    }

    pub async fn get_state(&self) -> OnboardingState {
        self.context.get_state().await
    }

    pub fn has_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }

    pub async fn advance(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::Advance).await
    }

    pub async fn retreat(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::Retreat).await
    }

    pub async fn jump_to(&self, step: OnboardingStep) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::JumpTo { step }).await
    }

    pub async fn log_in(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::LogIn).await
    }

    pub async fn complete(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::Complete).await
    }

    pub async fn select_provider(
        &self,
        provider: EmailProvider,
    ) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::SelectProvider { provider })
            .await
    }

    pub async fn update_details(
        &self,
        patch: PersonalDetailsPatch,
    ) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::UpdateDetails { patch }).await
    }

    pub async fn toggle_item(&self, id: &str) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::ToggleItem { id: id.to_string() })
            .await
    }

    pub async fn dispatch(&self, event: OnboardingEvent) -> Result<OnboardingState, OnboardingError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if self.has_ended() {
            return Err(OnboardingError::SessionEnded);
        }
        self.apply(event).await
    }

    /// Handles an expiration reported by the timer port.
    ///
    /// Returns `Ok(None)` when the expiration is stale: the session has ended,
    /// the scanning step was left, or a newer scan timer has replaced it.
    pub async fn handle_timer_expired(
        &self,
        timer_id: &TimerId,
    ) -> Result<Option<OnboardingState>, OnboardingError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if self.has_ended() {
            debug!(timer_id = %timer_id, "timer expired after onboarding ended; ignored");
            return Ok(None);
        }

        let is_current = self.active_scan_timer.lock().await.as_ref() == Some(timer_id);
        if !is_current {
            debug!(timer_id = %timer_id, "stale scan timer expiration ignored");
            return Ok(None);
        }

        self.apply(OnboardingEvent::ScanElapsed).await.map(Some)
    }

    /// Forwards expirations from `rx` until the channel closes.
    pub fn spawn_timer_listener(self: &Arc<Self>, mut rx: mpsc::Receiver<TimerId>) -> JoinHandle<()> {
        let orchestrator = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(timer_id) = rx.recv().await {
                if let Err(err) = orchestrator.handle_timer_expired(&timer_id).await {
                    warn!(error = %err, timer_id = %timer_id, "failed to handle scan timer expiration");
                }
            }
        })
    }

    /// Ends the session without completing it. Cancels the pending scan
    /// timer; any expiration delivered afterwards is ignored.
    pub async fn teardown(&self) -> Result<(), OnboardingError> {
        self.ended.store(true, Ordering::SeqCst);
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.cancel_scan_timer().await?;
        info!("onboarding session torn down");
        Ok(())
    }

    /// Runs one transition. Caller holds the dispatch lock.
    async fn apply(&self, event: OnboardingEvent) -> Result<OnboardingState, OnboardingError> {
        let span = info_span!("usecase.onboarding_orchestrator.dispatch", event = ?event);
        async {
            let current = self.context.get_state().await;
            let from = current.step;
            let event_name = format!("{:?}", event);
            let (next, actions) = OnboardingStateMachine::transition(current, event);
            info!(from = %from, to = %next.step, event = %event_name, "onboarding state transition");

            let exit = self.execute_actions(actions).await?;
            self.context.set_state(next.clone()).await;

            if next.step != from {
                self.event_port.emit_step_changed(next.step).await;
            }
            if let Some(exit) = exit {
                self.ended.store(true, Ordering::SeqCst);
                self.event_port.emit_exit(exit).await;
            }

            Ok(next)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<OnboardingAction>,
    ) -> Result<Option<OnboardingExit>, OnboardingError> {
        let mut exit = None;
        for action in actions {
            debug!(?action, "onboarding executing action");
            match action {
                OnboardingAction::StartScanTimer => self.start_scan_timer().await?,
                OnboardingAction::CancelScanTimer => self.cancel_scan_timer().await?,
                OnboardingAction::PersistCompletion => self
                    .complete_onboarding
                    .execute()
                    .await
                    .map_err(OnboardingError::PersistCompletion)?,
                OnboardingAction::NavigateAway { exit: reason } => exit = Some(reason),
            }
        }
        Ok(exit)
    }

    async fn start_scan_timer(&self) -> Result<(), OnboardingError> {
        let generation = self.scan_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let timer_id = TimerId::scan(generation);

        let mut active = self.active_scan_timer.lock().await;
        let mut timer = self.timer_port.lock().await;
        if let Some(previous) = active.as_ref() {
            timer
                .stop(previous)
                .await
                .map_err(OnboardingError::ScanTimer)?;
            *active = None;
        }
        timer
            .start(&timer_id, self.scan_duration)
            .await
            .map_err(OnboardingError::ScanTimer)?;
        debug!(timer_id = %timer_id, delay_ms = self.scan_duration.as_millis() as u64, "scan timer started");
        *active = Some(timer_id);
        Ok(())
    }

    /// The slot is cleared only once the port has stopped the timer, so a
    /// failed stop leaves the expiration tracked.
    async fn cancel_scan_timer(&self) -> Result<(), OnboardingError> {
        let mut active = self.active_scan_timer.lock().await;
        let Some(timer_id) = active.as_ref() else {
            return Ok(());
        };
        self.timer_port
            .lock()
            .await
            .stop(timer_id)
            .await
            .map_err(OnboardingError::ScanTimer)?;
        debug!(timer_id = %timer_id, "scan timer cancelled");
        *active = None;
        Ok(())
    }
}

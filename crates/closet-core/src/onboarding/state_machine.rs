//! Onboarding state machine.
//!
//! Defines a pure state transition function for the onboarding wizard.
//! Side effects (timers, persistence, navigation) are returned as actions
//! for the caller to execute.

use serde::{Deserialize, Serialize};

use super::details::PersonalDetailsPatch;
use super::provider::EmailProvider;
use super::state::OnboardingState;
use super::step::OnboardingStep;

/// Events that drive the onboarding wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingEvent {
    /// Move to the next step. Stays put on the last step.
    Advance,
    /// Move to the previous step. Stays put on the first step.
    Retreat,
    /// Jump straight to a step, ignoring the sequence.
    JumpTo { step: OnboardingStep },
    /// Welcome screen's "log in" shortcut.
    LogIn,
    /// Finish the wizard from the activation step.
    Complete,
    SelectProvider { provider: EmailProvider },
    UpdateDetails { patch: PersonalDetailsPatch },
    ToggleItem { id: String },
    /// The simulated scan finished.
    ScanElapsed,
}

/// Why the wizard hands control back to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingExit {
    Completed,
    LogIn,
}

impl OnboardingExit {
    /// Route the host should show next.
    pub fn target(self) -> &'static str {
        "/"
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingAction {
    /// Schedule the scanning step's auto-advance.
    StartScanTimer,
    /// Cancel a pending scan auto-advance.
    CancelScanTimer,
    /// Write the durable completion flag.
    PersistCompletion,
    /// Leave the wizard.
    NavigateAway { exit: OnboardingExit },
}

/// Pure onboarding state machine.
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        mut state: OnboardingState,
        event: OnboardingEvent,
    ) -> (OnboardingState, Vec<OnboardingAction>) {
        let from = state.step;

        let target = match event {
            OnboardingEvent::Advance => from.next(),
            OnboardingEvent::Retreat => from.previous(),
            OnboardingEvent::JumpTo { step } => Some(step),
            OnboardingEvent::ScanElapsed if from == OnboardingStep::Scanning => from.next(),
            OnboardingEvent::ScanElapsed => None,
            OnboardingEvent::LogIn if from == OnboardingStep::Welcome => {
                return (
                    state,
                    vec![OnboardingAction::NavigateAway {
                        exit: OnboardingExit::LogIn,
                    }],
                );
            }
            OnboardingEvent::Complete if from == OnboardingStep::Activation => {
                return (
                    state,
                    vec![
                        OnboardingAction::PersistCompletion,
                        OnboardingAction::NavigateAway {
                            exit: OnboardingExit::Completed,
                        },
                    ],
                );
            }
            OnboardingEvent::LogIn | OnboardingEvent::Complete => None,
            OnboardingEvent::SelectProvider { provider } => {
                state.selected_provider = Some(provider);
                None
            }
            OnboardingEvent::UpdateDetails { patch } => {
                state.personal_details.merge(patch);
                None
            }
            OnboardingEvent::ToggleItem { id } => {
                state.toggle_item(&id);
                None
            }
        };

        let mut actions = Vec::new();
        if let Some(to) = target.filter(|to| *to != from) {
            if from == OnboardingStep::Scanning {
                actions.push(OnboardingAction::CancelScanTimer);
            }
            if to == OnboardingStep::Scanning {
                actions.push(OnboardingAction::StartScanTimer);
            }
            state.step = to;
        }

        (state, actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::details::PersonalDetailsPatch;

    fn at(step: OnboardingStep) -> OnboardingState {
        OnboardingState {
            step,
            ..Default::default()
        }
    }

    #[test]
    fn onboarding_state_machine_retreat_at_welcome_is_noop() {
        let (next, actions) =
            OnboardingStateMachine::transition(at(OnboardingStep::Welcome), OnboardingEvent::Retreat);
        assert_eq!(next.step, OnboardingStep::Welcome);
        assert!(actions.is_empty());
    }

    #[test]
    fn onboarding_state_machine_advance_at_activation_is_noop() {
        let (next, actions) = OnboardingStateMachine::transition(
            at(OnboardingStep::Activation),
            OnboardingEvent::Advance,
        );
        assert_eq!(next.step, OnboardingStep::Activation);
        assert!(actions.is_empty());
    }

    #[test]
    fn onboarding_state_machine_walks_every_step_forward_and_back() {
        let mut state = OnboardingState::default();
        let mut visited = vec![state.step];
        for _ in 0..9 {
            state = OnboardingStateMachine::transition(state, OnboardingEvent::Advance).0;
            visited.push(state.step);
        }
        assert_eq!(visited, crate::onboarding::STEP_ORDER.to_vec());

        for _ in 0..9 {
            state = OnboardingStateMachine::transition(state, OnboardingEvent::Retreat).0;
        }
        assert_eq!(state.step, OnboardingStep::Welcome);
    }

    #[test]
    fn onboarding_state_machine_entering_scanning_starts_timer() {
        let (next, actions) = OnboardingStateMachine::transition(
            at(OnboardingStep::Permissions),
            OnboardingEvent::Advance,
        );
        assert_eq!(next.step, OnboardingStep::Scanning);
        assert_eq!(actions, vec![OnboardingAction::StartScanTimer]);
    }

    #[test]
    fn onboarding_state_machine_leaving_scanning_cancels_timer() {
        let (next, actions) =
            OnboardingStateMachine::transition(at(OnboardingStep::Scanning), OnboardingEvent::Retreat);
        assert_eq!(next.step, OnboardingStep::Permissions);
        assert_eq!(actions, vec![OnboardingAction::CancelScanTimer]);

        let (next, actions) = OnboardingStateMachine::transition(
            at(OnboardingStep::Scanning),
            OnboardingEvent::JumpTo {
                step: OnboardingStep::Activation,
            },
        );
        assert_eq!(next.step, OnboardingStep::Activation);
        assert_eq!(actions, vec![OnboardingAction::CancelScanTimer]);
    }

    #[test]
    fn onboarding_state_machine_scan_elapsed_advances_only_while_scanning() {
        let (next, actions) = OnboardingStateMachine::transition(
            at(OnboardingStep::Scanning),
            OnboardingEvent::ScanElapsed,
        );
        assert_eq!(next.step, OnboardingStep::PersonalDetails);
        assert_eq!(actions, vec![OnboardingAction::CancelScanTimer]);

        let (next, actions) = OnboardingStateMachine::transition(
            at(OnboardingStep::Overview),
            OnboardingEvent::ScanElapsed,
        );
        assert_eq!(next.step, OnboardingStep::Overview);
        assert!(actions.is_empty());
    }

    #[test]
    fn onboarding_state_machine_jump_to_same_step_has_no_actions() {
        let (next, actions) = OnboardingStateMachine::transition(
            at(OnboardingStep::Scanning),
            OnboardingEvent::JumpTo {
                step: OnboardingStep::Scanning,
            },
        );
        assert_eq!(next.step, OnboardingStep::Scanning);
        assert!(actions.is_empty());
    }

    #[test]
    fn onboarding_state_machine_complete_only_from_activation() {
        let (next, actions) = OnboardingStateMachine::transition(
            at(OnboardingStep::Activation),
            OnboardingEvent::Complete,
        );
        assert_eq!(next.step, OnboardingStep::Activation);
        assert_eq!(
            actions,
            vec![
                OnboardingAction::PersistCompletion,
                OnboardingAction::NavigateAway {
                    exit: OnboardingExit::Completed
                }
            ]
        );

        let (_, actions) = OnboardingStateMachine::transition(
            at(OnboardingStep::Confirmation),
            OnboardingEvent::Complete,
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn onboarding_state_machine_log_in_only_from_welcome() {
        let (_, actions) =
            OnboardingStateMachine::transition(at(OnboardingStep::Welcome), OnboardingEvent::LogIn);
        assert_eq!(
            actions,
            vec![OnboardingAction::NavigateAway {
                exit: OnboardingExit::LogIn
            }]
        );

        let (_, actions) =
            OnboardingStateMachine::transition(at(OnboardingStep::Overview), OnboardingEvent::LogIn);
        assert!(actions.is_empty());
    }

    #[test]
    fn onboarding_state_machine_data_events_keep_step() {
        let state = at(OnboardingStep::EmailConnection);
        let (state, _) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::SelectProvider {
                provider: EmailProvider::Google,
            },
        );
        let (state, _) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::SelectProvider {
                provider: EmailProvider::Apple,
            },
        );
        assert_eq!(state.selected_provider, Some(EmailProvider::Apple));
        assert_eq!(state.step, OnboardingStep::EmailConnection);

        let (state, _) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::UpdateDetails {
                patch: PersonalDetailsPatch {
                    pant_size: Some("32".into()),
                    ..Default::default()
                },
            },
        );
        let (state, actions) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::ToggleItem { id: "1".into() },
        );
        assert_eq!(state.personal_details.pant_size.as_deref(), Some("32"));
        assert!(!state.scanned_items[0].selected);
        assert!(actions.is_empty());
    }
}

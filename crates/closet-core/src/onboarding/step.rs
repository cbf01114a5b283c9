use serde::{Deserialize, Serialize};

/// Onboarding wizard screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    Welcome,
    EmailConnection,
    Overview,
    Permissions,
    Scanning,
    PersonalDetails,
    ScanResults,
    ItemReview,
    Confirmation,
    Activation,
}

/// Wizard order. Navigation walks this table and nothing else.
pub const STEP_ORDER: [OnboardingStep; 10] = [
    OnboardingStep::Welcome,
    OnboardingStep::EmailConnection,
    OnboardingStep::Overview,
    OnboardingStep::Permissions,
    OnboardingStep::Scanning,
    OnboardingStep::PersonalDetails,
    OnboardingStep::ScanResults,
    OnboardingStep::ItemReview,
    OnboardingStep::Confirmation,
    OnboardingStep::Activation,
];

impl OnboardingStep {
    pub const FIRST: OnboardingStep = OnboardingStep::Welcome;
    pub const LAST: OnboardingStep = OnboardingStep::Activation;

    /// Zero-based position in [`STEP_ORDER`].
    pub fn index(self) -> usize {
        STEP_ORDER
            .iter()
            .position(|step| *step == self)
            .unwrap_or_default()
    }

    /// Following step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        STEP_ORDER.get(self.index() + 1).copied()
    }

    /// Preceding step, or `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|idx| STEP_ORDER[idx])
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "welcome",
            OnboardingStep::EmailConnection => "email-connection",
            OnboardingStep::Overview => "overview",
            OnboardingStep::Permissions => "permissions",
            OnboardingStep::Scanning => "scanning",
            OnboardingStep::PersonalDetails => "personal-details",
            OnboardingStep::ScanResults => "scan-results",
            OnboardingStep::ItemReview => "item-review",
            OnboardingStep::Confirmation => "confirmation",
            OnboardingStep::Activation => "activation",
        }
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of the cursor for progress indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProgress {
    /// One-based.
    pub position: usize,
    pub total: usize,
}

impl From<OnboardingStep> for StepProgress {
    fn from(step: OnboardingStep) -> Self {
        Self {
            position: step.index() + 1,
            total: STEP_ORDER.len(),
        }
    }
}

use serde::{Deserialize, Serialize};

use super::details::PersonalDetails;
use super::provider::EmailProvider;
use super::scanned_item::{demo_scanned_items, ItemCategory, ScannedItem};
use super::step::{OnboardingStep, StepProgress};

/// Thumbnails shown on the confirmation screen before the "+N" badge.
pub const CONFIRMATION_PREVIEW_LIMIT: usize = 5;

/// In-memory wizard session.
///
/// Created fresh on wizard entry and dropped on completion or abandonment;
/// never persisted mid-flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    pub selected_provider: Option<EmailProvider>,
    pub personal_details: PersonalDetails,
    pub scanned_items: Vec<ScannedItem>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::with_items(demo_scanned_items())
    }
}

impl OnboardingState {
    pub fn with_items(scanned_items: Vec<ScannedItem>) -> Self {
        Self {
            step: OnboardingStep::FIRST,
            selected_provider: None,
            personal_details: PersonalDetails::default(),
            scanned_items,
        }
    }

    pub fn progress(&self) -> StepProgress {
        StepProgress::from(self.step)
    }

    pub fn selected_items(&self) -> Vec<&ScannedItem> {
        self.scanned_items.iter().filter(|item| item.selected).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.scanned_items.iter().filter(|item| item.selected).count()
    }

    pub fn items_in_category(&self, category: ItemCategory) -> Vec<&ScannedItem> {
        self.scanned_items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Whether the current screen's primary "continue" action is enabled.
    pub fn can_continue(&self) -> bool {
        match self.step {
            OnboardingStep::EmailConnection => self.selected_provider.is_some(),
            OnboardingStep::ItemReview => self.selected_count() > 0,
            _ => true,
        }
    }

    /// Flip the `selected` flag of one item. Returns false when no item
    /// has that id.
    pub fn toggle_item(&mut self, id: &str) -> bool {
        match self.scanned_items.iter_mut().find(|item| item.id.as_str() == id) {
            Some(item) => {
                item.selected = !item.selected;
                true
            }
            None => false,
        }
    }

    pub fn confirmation_summary(&self) -> ConfirmationSummary {
        let selected = self.selected_items();

        let mut category_counts: Vec<CategoryCount> = Vec::new();
        for item in &selected {
            match category_counts.iter_mut().find(|c| c.category == item.category) {
                Some(entry) => entry.count += 1,
                None => category_counts.push(CategoryCount {
                    category: item.category,
                    count: 1,
                }),
            }
        }

        let preview: Vec<ScannedItem> = selected
            .iter()
            .take(CONFIRMATION_PREVIEW_LIMIT)
            .map(|item| (*item).clone())
            .collect();

        ConfirmationSummary {
            total_selected: selected.len(),
            overflow: selected.len().saturating_sub(preview.len()),
            category_counts,
            preview,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: ItemCategory,
    pub count: usize,
}

/// What the confirmation screen shows: only selected items, grouped by
/// category in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationSummary {
    pub total_selected: usize,
    pub category_counts: Vec<CategoryCount>,
    pub preview: Vec<ScannedItem>,
    pub overflow: usize,
}

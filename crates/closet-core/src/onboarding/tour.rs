//! In-app intro tour.
//!
//! A short slide deck shown over the closet for users who have not
//! completed onboarding. Finishing or skipping it counts as completion.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourSlide {
    Welcome,
    SmartFiltering,
    VisualGallery,
    AllSet,
}

impl TourSlide {
    pub fn title(self) -> &'static str {
        match self {
            TourSlide::Welcome => "Welcome to Your Closet",
            TourSlide::SmartFiltering => "Smart Filtering",
            TourSlide::VisualGallery => "Visual Gallery",
            TourSlide::AllSet => "You're All Set!",
        }
    }
}

pub const TOUR_SLIDES: [TourSlide; 4] = [
    TourSlide::Welcome,
    TourSlide::SmartFiltering,
    TourSlide::VisualGallery,
    TourSlide::AllSet,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourOutcome {
    /// Still showing a slide.
    Showing(TourSlide),
    /// The tour is over; the host should persist completion.
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntroTour {
    index: usize,
}

impl IntroTour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> TourSlide {
        TOUR_SLIDES[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_last(&self) -> bool {
        self.index == TOUR_SLIDES.len() - 1
    }

    /// On the last slide this completes instead of moving.
    pub fn next(&mut self) -> TourOutcome {
        if self.is_last() {
            return TourOutcome::Completed;
        }
        self.index += 1;
        TourOutcome::Showing(self.current())
    }

    pub fn previous(&mut self) -> TourOutcome {
        self.index = self.index.saturating_sub(1);
        TourOutcome::Showing(self.current())
    }

    /// Progress-dot navigation. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> TourOutcome {
        if index < TOUR_SLIDES.len() {
            self.index = index;
        }
        TourOutcome::Showing(self.current())
    }

    pub fn skip(&mut self) -> TourOutcome {
        TourOutcome::Completed
    }
}

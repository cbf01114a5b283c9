//! Personal sizing details collected during onboarding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    NonBinary,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::PreferNotToSay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// Every field is optional; the step can be skipped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub gender: Option<Gender>,
    pub shirt_size: Option<String>,
    pub pant_size: Option<String>,
    pub shoe_size: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub skin_tone: Option<String>,
}

/// Partial update. `None` leaves the stored field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetailsPatch {
    pub gender: Option<Gender>,
    pub shirt_size: Option<String>,
    pub pant_size: Option<String>,
    pub shoe_size: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub skin_tone: Option<String>,
}

impl PersonalDetails {
    /// Field-level merge: only fields set in `patch` change.
    pub fn merge(&mut self, patch: PersonalDetailsPatch) {
        fn apply<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        apply(&mut self.gender, patch.gender);
        apply(&mut self.shirt_size, patch.shirt_size);
        apply(&mut self.pant_size, patch.pant_size);
        apply(&mut self.shoe_size, patch.shoe_size);
        apply(&mut self.height, patch.height);
        apply(&mut self.weight, patch.weight);
        apply(&mut self.skin_tone, patch.skin_tone);
    }

    pub fn size_options(&self) -> SizeOptions {
        SizeOptions::for_gender(self.gender)
    }
}

const SHIRT_SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];
const SHOE_SIZES: [&str; 8] = ["6", "7", "8", "9", "10", "11", "12", "13"];

const FEMALE_PANT_SIZES: [&str; 13] = [
    "22", "23", "24", "25", "26", "27", "28", "30", "32", "34", "36", "38", "40",
];
const MALE_PANT_SIZES: [&str; 7] = ["28", "30", "32", "34", "36", "38", "40"];

const FEMALE_HEIGHTS: [&str; 20] = [
    "4'8\"", "4'9\"", "4'10\"", "4'11\"", "5'0\"", "5'1\"", "5'2\"", "5'3\"", "5'4\"", "5'5\"",
    "5'6\"", "5'7\"", "5'8\"", "5'9\"", "5'10\"", "5'11\"", "6'0\"", "6'1\"", "6'2\"", "6'3\"",
];
const MALE_HEIGHTS: [&str; 12] = [
    "5'4\"", "5'5\"", "5'6\"", "5'7\"", "5'8\"", "5'9\"", "5'10\"", "5'11\"", "6'0\"", "6'1\"",
    "6'2\"", "6'3\"",
];

const FEMALE_WEIGHTS: [&str; 7] = [
    "100-120 lbs",
    "120-140 lbs",
    "140-160 lbs",
    "160-180 lbs",
    "180-200 lbs",
    "200-220 lbs",
    "220+ lbs",
];
const MALE_WEIGHTS: [&str; 6] = [
    "120-140 lbs",
    "140-160 lbs",
    "160-180 lbs",
    "180-200 lbs",
    "200-220 lbs",
    "220+ lbs",
];

/// Choice lists offered by the personal details form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeOptions {
    pub shirt_sizes: Vec<&'static str>,
    pub shoe_sizes: Vec<&'static str>,
    pub pant_sizes: Vec<&'static str>,
    pub heights: Vec<&'static str>,
    pub weights: Vec<&'static str>,
}

impl SizeOptions {
    /// Female and Male get their own ranges; anything else gets the union.
    pub fn for_gender(gender: Option<Gender>) -> Self {
        let (pant_sizes, heights, weights) = match gender {
            Some(Gender::Female) => (
                FEMALE_PANT_SIZES.to_vec(),
                FEMALE_HEIGHTS.to_vec(),
                FEMALE_WEIGHTS.to_vec(),
            ),
            Some(Gender::Male) => (
                MALE_PANT_SIZES.to_vec(),
                MALE_HEIGHTS.to_vec(),
                MALE_WEIGHTS.to_vec(),
            ),
            _ => {
                let mut pants: Vec<&'static str> = FEMALE_PANT_SIZES
                    .iter()
                    .chain(MALE_PANT_SIZES.iter())
                    .copied()
                    .collect();
                pants.sort_by_key(|size| size.parse::<u32>().unwrap_or_default());
                pants.dedup();
                // female ranges already cover the male ones
                (pants, FEMALE_HEIGHTS.to_vec(), FEMALE_WEIGHTS.to_vec())
            }
        };

        Self {
            shirt_sizes: SHIRT_SIZES.to_vec(),
            shoe_sizes: SHOE_SIZES.to_vec(),
            pant_sizes,
            heights,
            weights,
        }
    }
}

//! Advisory notes attached to a score. They explain the breakdown and
//! never change the numbers.

use crate::core::factors::has_pet_conflict;
use crate::models::{
    Cleanliness, CookingStyle, PetPreference, ScoreBreakdown, Smoking, UserAttributes,
};

pub const LOCATION_CONCERN_BELOW: u8 = 50;
pub const BUDGET_CONCERN_BELOW: u8 = 30;
pub const LOCATION_STRENGTH_FROM: u8 = 85;
pub const BUDGET_STRENGTH_FROM: u8 = 80;

/// Conditions likely to make a houseshare impractical, in a fixed order
pub fn find_deal_breakers(
    a: &UserAttributes,
    b: &UserAttributes,
    breakdown: &ScoreBreakdown,
) -> Vec<String> {
    let mut deal_breakers = Vec::new();

    if breakdown.location < LOCATION_CONCERN_BELOW {
        deal_breakers.push("Different locations may make arrangement difficult".to_string());
    }
    if breakdown.budget < BUDGET_CONCERN_BELOW {
        deal_breakers.push("Budget ranges don't align well".to_string());
    }
    if breakdown.housing == 0 {
        deal_breakers.push("Both have same housing status".to_string());
    }
    if has_pet_conflict(a, b) {
        deal_breakers.push("Pet ownership conflict".to_string());
    }
    if is_pair(a.smoking, b.smoking, Smoking::NonSmoker, Smoking::RegularSmoker) {
        deal_breakers.push("Smoking habits are incompatible".to_string());
    }
    if is_pair(
        a.cleanliness_level,
        b.cleanliness_level,
        Cleanliness::VeryTidy,
        Cleanliness::RelaxedAboutMess,
    ) {
        deal_breakers.push("Very different cleanliness standards".to_string());
    }

    deal_breakers
}

/// Conditions pointing to an easy houseshare, in a fixed order
pub fn find_strengths(
    a: &UserAttributes,
    b: &UserAttributes,
    breakdown: &ScoreBreakdown,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if breakdown.location >= LOCATION_STRENGTH_FROM {
        strengths.push("Same city/nearby location".to_string());
    }
    if breakdown.budget >= BUDGET_STRENGTH_FROM {
        strengths.push("Very compatible budget ranges".to_string());
    }
    if a.pets == PetPreference::LovePets && b.pets == PetPreference::LovePets {
        strengths.push("Both love pets".to_string());
    }
    if a.smoking == Smoking::NonSmoker && b.smoking == Smoking::NonSmoker {
        strengths.push("Both non-smokers".to_string());
    }
    if a.cooking_style == CookingStyle::LoveCooking && b.cooking_style == CookingStyle::LoveCooking {
        strengths.push("Both enjoy cooking".to_string());
    }
    if a.social_level.is_known() && a.social_level == b.social_level {
        strengths.push("Similar social preferences".to_string());
    }
    if a.cleanliness_level.is_known() && a.cleanliness_level == b.cleanliness_level {
        strengths.push("Same cleanliness standards".to_string());
    }
    if a.morning_person.is_known() && a.morning_person == b.morning_person {
        strengths.push("Same daily schedule preferences".to_string());
    }

    strengths
}

/// `{a, b}` is exactly `{x, y}` in either order
#[inline]
fn is_pair<T: PartialEq + Copy>(a: T, b: T, x: T, y: T) -> bool {
    (a == x && b == y) || (a == y && b == x)
}

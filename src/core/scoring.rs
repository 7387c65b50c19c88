use crate::core::{
    budget::budget_score,
    factors::{compatibility_score, lifestyle_score},
    insights::{find_deal_breakers, find_strengths},
    location::location_score,
};
use crate::models::{MatchScore, ScoreBreakdown, ScoringWeights, UserAttributes};

/// Housing score for one offering a room and one looking for one
pub const COMPLEMENTARY_HOUSING_SCORE: u8 = 100;

/// Housing score for two people in the same housing situation
pub const SAME_HOUSING_SCORE: u8 = 0;

/// Housing score when either status is missing
pub const UNKNOWN_HOUSING_SCORE: u8 = 50;

/// Calculate a compatibility score (0-100) between two housemate profiles
///
/// Scoring formula:
/// score = round(
///     location * 0.25 +        # Same city / region
///     budget * 0.20 +          # Overlap of budget brackets
///     housing * 0.15 +         # One has space, the other is looking
///     lifestyle * 0.20 +       # Pets, smoking, drinking, social level
///     compatibility * 0.20     # Schedule, cooking, TV, cleanliness, guests
/// )
///
/// The function is total: unrecognized attribute values fall back to a
/// neutral contribution instead of failing.
pub fn calculate_match_score(
    a: &UserAttributes,
    b: &UserAttributes,
    weights: &ScoringWeights,
) -> MatchScore {
    let breakdown = calculate_breakdown(a, b);
    let overall_score = weighted_score(&breakdown, weights);

    MatchScore {
        overall_score,
        breakdown,
        deal_breakers: find_deal_breakers(a, b, &breakdown),
        strengths: find_strengths(a, b, &breakdown),
    }
}

/// The five independent category sub-scores
pub fn calculate_breakdown(a: &UserAttributes, b: &UserAttributes) -> ScoreBreakdown {
    ScoreBreakdown {
        location: location_score(a.region(), b.region()),
        budget: budget_score(&a.monthly_budget, &b.monthly_budget),
        housing: housing_score(a, b),
        lifestyle: lifestyle_score(a, b),
        compatibility: compatibility_score(a, b),
    }
}

/// Combine a breakdown with weights into the overall score
#[inline]
pub fn weighted_score(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> u8 {
    let total = breakdown.location as f64 * weights.location
        + breakdown.budget as f64 * weights.budget
        + breakdown.housing as f64 * weights.housing
        + breakdown.lifestyle as f64 * weights.lifestyle
        + breakdown.compatibility as f64 * weights.compatibility;

    total.round().clamp(0.0, 100.0) as u8
}

#[inline]
fn housing_score(a: &UserAttributes, b: &UserAttributes) -> u8 {
    match a.housing_status.complements(&b.housing_status) {
        Some(true) => COMPLEMENTARY_HOUSING_SCORE,
        Some(false) => SAME_HOUSING_SCORE,
        None => UNKNOWN_HOUSING_SCORE,
    }
}

/// Compatibility scorer bound to a weight configuration
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn score(&self, a: &UserAttributes, b: &UserAttributes) -> MatchScore {
        calculate_match_score(a, b, &self.weights)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HousingStatus, PetPreference};

    fn create_test_attributes(status: HousingStatus) -> UserAttributes {
        UserAttributes {
            user_id: "test_user".to_string(),
            region: "Wellington".to_string(),
            monthly_budget: "500-800".to_string(),
            housing_status: status,
            pets: PetPreference::OkWithPets,
            ..UserAttributes::default()
        }
    }

    #[test]
    fn test_housing_score() {
        let host = create_test_attributes(HousingStatus::HasSpace);
        let seeker = create_test_attributes(HousingStatus::LookingForSpace);
        let unknown = create_test_attributes(HousingStatus::Unknown);

        assert_eq!(housing_score(&host, &seeker), 100);
        assert_eq!(housing_score(&host, &host), 0);
        assert_eq!(housing_score(&seeker, &unknown), 50);
    }

    #[test]
    fn test_weighted_score_rounds() {
        let breakdown = ScoreBreakdown {
            location: 70,
            budget: 20,
            housing: 100,
            lifestyle: 64,
            compatibility: 57,
        };
        // 17.5 + 4 + 15 + 12.8 + 11.4 = 60.7
        assert_eq!(weighted_score(&breakdown, &ScoringWeights::default()), 61);
    }

    #[test]
    fn test_scorer_uses_bound_weights() {
        let host = create_test_attributes(HousingStatus::HasSpace);
        let other_host = create_test_attributes(HousingStatus::HasSpace);

        let housing_only = Scorer::new(ScoringWeights {
            location: 0.0,
            budget: 0.0,
            housing: 1.0,
            lifestyle: 0.0,
            compatibility: 0.0,
        });

        assert_eq!(housing_only.score(&host, &other_host).overall_score, 0);
        assert!(Scorer::default().score(&host, &other_host).overall_score > 0);
    }

    #[test]
    fn test_calculate_match_score_in_range() {
        let host = create_test_attributes(HousingStatus::HasSpace);
        let seeker = create_test_attributes(HousingStatus::LookingForSpace);

        let score = calculate_match_score(&host, &seeker, &ScoringWeights::default());

        assert!(score.overall_score <= 100);
        assert_eq!(score.breakdown.location, 100);
        assert_eq!(score.breakdown.budget, 100);
    }
}

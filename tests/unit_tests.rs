// Unit tests for ShareSpace Match

use sharespace_match::core::{
    budget::{budget_score, parse_budget, BudgetRange},
    labels::{match_color, match_label},
    location::location_score,
    scoring::{calculate_match_score, weighted_score},
};
use sharespace_match::models::{
    Cleanliness, CookingStyle, Drinking, GuestPolicy, HousingStatus, PetPreference, Schedule,
    ScoringWeights, Smoking, SocialLevel, TvHabits, UserAttributes,
};

fn create_attributes(id: &str, housing_status: HousingStatus) -> UserAttributes {
    UserAttributes {
        user_id: id.to_string(),
        region: "Auckland".to_string(),
        monthly_budget: "800-1200".to_string(),
        housing_status,
        pets: PetPreference::LovePets,
        pet_owner: Some(true),
        smoking: Smoking::NonSmoker,
        drinking: Drinking::SocialDrinker,
        social_level: SocialLevel::ModeratelySocial,
        morning_person: Schedule::EarlyBird,
        cooking_style: CookingStyle::LoveCooking,
        tv_watching: TvHabits::OccasionalViewer,
        cleanliness_level: Cleanliness::ModeratelyClean,
        guest_policy: GuestPolicy::OccasionalGuests,
        ..UserAttributes::default()
    }
}

/// A spread of profiles covering known, unknown and conflicting values
fn sample_population() -> Vec<UserAttributes> {
    let brackets = ["under-500", "500-800", "800-1200", "1200-1600", "over-2000", "", "$650-900"];
    let regions = ["Auckland", "Auckland, Auckland", "Wellington", "Napier, Hawke's Bay", ""];

    let mut population = Vec::new();
    for (i, budget) in brackets.iter().enumerate() {
        for (j, region) in regions.iter().enumerate() {
            let k = i + j;
            population.push(UserAttributes {
                user_id: format!("u-{}-{}", i, j),
                region: region.to_string(),
                monthly_budget: budget.to_string(),
                housing_status: HousingStatus::ALL.get(k % 3).copied().unwrap_or_default(),
                pets: PetPreference::ALL.get(k % 4).copied().unwrap_or_default(),
                pet_owner: Some(k % 2 == 0),
                smoking: Smoking::ALL.get(k % 4).copied().unwrap_or_default(),
                drinking: Drinking::ALL.get((k + 1) % 4).copied().unwrap_or_default(),
                social_level: SocialLevel::ALL.get((k + 2) % 4).copied().unwrap_or_default(),
                morning_person: Schedule::ALL.get(j % 4).copied().unwrap_or_default(),
                cooking_style: CookingStyle::ALL.get(i % 4).copied().unwrap_or_default(),
                tv_watching: TvHabits::ALL.get(k % 4).copied().unwrap_or_default(),
                cleanliness_level: Cleanliness::ALL.get((i * j) % 4).copied().unwrap_or_default(),
                guest_policy: GuestPolicy::ALL.get((k + 3) % 4).copied().unwrap_or_default(),
                ..UserAttributes::default()
            });
        }
    }
    population
}

#[test]
fn test_scores_stay_in_range() {
    let population = sample_population();
    let weights = ScoringWeights::default();

    for a in &population {
        for b in &population {
            let score = calculate_match_score(a, b, &weights);
            let breakdown = score.breakdown;

            assert!(score.overall_score <= 100);
            for sub in [
                breakdown.location,
                breakdown.budget,
                breakdown.housing,
                breakdown.lifestyle,
                breakdown.compatibility,
            ] {
                assert!(sub <= 100, "{} vs {} produced sub-score {}", a.user_id, b.user_id, sub);
            }
        }
    }
}

#[test]
fn test_overall_is_rounded_weighted_sum() {
    let population = sample_population();
    let weights = ScoringWeights::default();

    assert!((weights.sum() - 1.0).abs() < 1e-9);

    for a in &population {
        for b in &population {
            let score = calculate_match_score(a, b, &weights);
            let bd = score.breakdown;
            let expected = (bd.location as f64 * 0.25
                + bd.budget as f64 * 0.20
                + bd.housing as f64 * 0.15
                + bd.lifestyle as f64 * 0.20
                + bd.compatibility as f64 * 0.20)
                .round() as u8;

            assert_eq!(score.overall_score, expected);
            assert_eq!(score.overall_score, weighted_score(&score.breakdown, &weights));
        }
    }
}

#[test]
fn test_housing_opposite_and_same() {
    let host = create_attributes("a", HousingStatus::HasSpace);
    let seeker = create_attributes("b", HousingStatus::LookingForSpace);
    let weights = ScoringWeights::default();

    assert_eq!(calculate_match_score(&host, &seeker, &weights).breakdown.housing, 100);
    assert_eq!(calculate_match_score(&seeker, &host, &weights).breakdown.housing, 100);
    assert_eq!(calculate_match_score(&host, &host, &weights).breakdown.housing, 0);
    assert_eq!(calculate_match_score(&seeker, &seeker, &weights).breakdown.housing, 0);
}

#[test]
fn test_budget_floor_and_full_overlap() {
    assert_eq!(budget_score("under-500", "over-2000"), 20);
    assert_eq!(budget_score("over-2000", "under-500"), 20);
    assert_eq!(budget_score("800-1200", "800-1200"), 100);
    assert_eq!(budget_score("under-500", "under-500"), 100);
}

#[test]
fn test_free_form_budget_is_neutral_without_deal_breaker() {
    let viewer = UserAttributes {
        monthly_budget: "$250-350".to_string(),
        ..create_attributes("a", HousingStatus::HasSpace)
    };
    let candidate = create_attributes("b", HousingStatus::LookingForSpace);

    let score = calculate_match_score(&viewer, &candidate, &ScoringWeights::default());

    assert_eq!(score.breakdown.budget, 50);
    assert!(!score.deal_breakers.contains(&"Budget ranges don't align well".to_string()));
}

#[test]
fn test_budget_parsing() {
    assert_eq!(parse_budget("800-1200"), Some(BudgetRange::new(800, 1200)));
    assert_eq!(parse_budget("over-2000"), Some(BudgetRange::new(2000, 3000)));
    assert_eq!(parse_budget("$650 - $900"), Some(BudgetRange::new(650, 900)));
    assert_eq!(parse_budget("flexible"), None);
}

#[test]
fn test_location_tiers() {
    assert_eq!(location_score("Auckland", "auckland"), 100);
    assert_eq!(location_score("Napier, Hawke's Bay", "Hastings, Hawke's Bay"), 70);
    assert_eq!(location_score("Auckland", "Dunedin"), 30);
    assert_eq!(location_score("", "Dunedin"), 50);
}

#[test]
fn test_pet_conflict_is_symmetric() {
    let weights = ScoringWeights::default();
    let owner = UserAttributes {
        pets: PetPreference::LovePets,
        pet_owner: Some(true),
        ..create_attributes("owner", HousingStatus::HasSpace)
    };
    let pet_free = UserAttributes {
        pets: PetPreference::NoPets,
        pet_owner: Some(false),
        ..create_attributes("pet-free", HousingStatus::LookingForSpace)
    };

    let forward = calculate_match_score(&owner, &pet_free, &weights);
    let backward = calculate_match_score(&pet_free, &owner, &weights);

    let conflict = "Pet ownership conflict".to_string();
    assert!(forward.deal_breakers.contains(&conflict));
    assert!(backward.deal_breakers.contains(&conflict));
    assert_eq!(forward.breakdown, backward.breakdown);
}

#[test]
fn test_label_boundaries() {
    assert_eq!(match_label(39), "Poor Match");
    assert_eq!(match_label(40), "Fair Match");
    assert_eq!(match_label(59), "Fair Match");
    assert_eq!(match_label(60), "Good Match");
    assert_eq!(match_label(79), "Good Match");
    assert_eq!(match_label(80), "Excellent Match");
    assert_eq!(match_label(100), "Excellent Match");

    assert_eq!(match_color(100), "text-green-600");
    assert_eq!(match_color(80), "text-green-600");
    assert_eq!(match_color(79), "text-yellow-600");
    assert_eq!(match_color(60), "text-yellow-600");
    assert_eq!(match_color(59), "text-red-600");
    assert_eq!(match_color(40), "text-red-600");
    assert_eq!(match_color(39), "text-red-600");
}

#[test]
fn test_unknown_values_score_neutral() {
    let weights = ScoringWeights::default();
    let blank = UserAttributes::default();
    let filled = create_attributes("a", HousingStatus::HasSpace);

    let score = calculate_match_score(&blank, &filled, &weights);
    assert_eq!(score.breakdown.location, 50);
    assert_eq!(score.breakdown.budget, 50);
    assert_eq!(score.breakdown.housing, 50);
    assert_eq!(score.breakdown.lifestyle, 50);
    assert_eq!(score.breakdown.compatibility, 50);
    assert_eq!(score.overall_score, 50);
}

use crate::models::{OrdinalAttribute, PetPreference, UserAttributes};

/// Score for two identical known values
pub const IDENTICAL_SCORE: u8 = 100;

/// Score when either side's value is missing or unrecognized
pub const NEUTRAL_FACTOR_SCORE: u8 = 50;

/// Taken off the pets factor when one side owns a pet and the other wants none
pub const PET_CONFLICT_PENALTY: u8 = 30;

/// Partial credit for two different values on a three-step scale
///
/// `adjacent` applies one step apart, `opposite` two steps apart.
/// Every table keeps `IDENTICAL_SCORE > adjacent > opposite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorCredit {
    pub adjacent: u8,
    pub opposite: u8,
}

impl FactorCredit {
    pub const fn new(adjacent: u8, opposite: u8) -> Self {
        Self { adjacent, opposite }
    }
}

pub const PETS_CREDIT: FactorCredit = FactorCredit::new(70, 50);
pub const SMOKING_CREDIT: FactorCredit = FactorCredit::new(60, 20);
pub const DRINKING_CREDIT: FactorCredit = FactorCredit::new(70, 40);
pub const SOCIAL_CREDIT: FactorCredit = FactorCredit::new(70, 40);
pub const SCHEDULE_CREDIT: FactorCredit = FactorCredit::new(70, 40);
pub const COOKING_CREDIT: FactorCredit = FactorCredit::new(80, 60);
pub const TV_CREDIT: FactorCredit = FactorCredit::new(70, 50);
pub const CLEANLINESS_CREDIT: FactorCredit = FactorCredit::new(60, 20);
pub const GUESTS_CREDIT: FactorCredit = FactorCredit::new(70, 40);

/// Compare one attribute of both parties
#[inline]
pub fn factor_score<T: OrdinalAttribute>(a: &T, b: &T, credit: FactorCredit) -> u8 {
    match (a.rank(), b.rank()) {
        (Some(a), Some(b)) => match a.abs_diff(b) {
            0 => IDENTICAL_SCORE,
            1 => credit.adjacent,
            _ => credit.opposite,
        },
        _ => NEUTRAL_FACTOR_SCORE,
    }
}

/// One party owns a pet while the other asked for a pet-free home
#[inline]
pub fn has_pet_conflict(a: &UserAttributes, b: &UserAttributes) -> bool {
    (a.pets == PetPreference::NoPets && b.owns_pet())
        || (b.pets == PetPreference::NoPets && a.owns_pet())
}

/// Pets factor, with the ownership conflict scored below any plain mismatch
pub fn pets_score(a: &UserAttributes, b: &UserAttributes) -> u8 {
    if has_pet_conflict(a, b) {
        return PETS_CREDIT.opposite.saturating_sub(PET_CONFLICT_PENALTY);
    }
    factor_score(&a.pets, &b.pets, PETS_CREDIT)
}

/// Lifestyle sub-score: pets, smoking, drinking and social level
pub fn lifestyle_score(a: &UserAttributes, b: &UserAttributes) -> u8 {
    average(&[
        pets_score(a, b),
        factor_score(&a.smoking, &b.smoking, SMOKING_CREDIT),
        factor_score(&a.drinking, &b.drinking, DRINKING_CREDIT),
        factor_score(&a.social_level, &b.social_level, SOCIAL_CREDIT),
    ])
}

/// Compatibility sub-score: schedule, cooking, TV, cleanliness and guests
pub fn compatibility_score(a: &UserAttributes, b: &UserAttributes) -> u8 {
    average(&[
        factor_score(&a.morning_person, &b.morning_person, SCHEDULE_CREDIT),
        factor_score(&a.cooking_style, &b.cooking_style, COOKING_CREDIT),
        factor_score(&a.tv_watching, &b.tv_watching, TV_CREDIT),
        factor_score(&a.cleanliness_level, &b.cleanliness_level, CLEANLINESS_CREDIT),
        factor_score(&a.guest_policy, &b.guest_policy, GUESTS_CREDIT),
    ])
}

fn average(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return NEUTRAL_FACTOR_SCORE;
    }
    let total: u32 = scores.iter().map(|&s| s as u32).sum();
    (total as f64 / scores.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cleanliness, Smoking, SocialLevel};

    fn attributes(pets: PetPreference, pet_owner: bool) -> UserAttributes {
        UserAttributes {
            pets,
            pet_owner: Some(pet_owner),
            ..UserAttributes::default()
        }
    }

    #[test]
    fn test_credit_tables_are_ordered() {
        for credit in [
            PETS_CREDIT,
            SMOKING_CREDIT,
            DRINKING_CREDIT,
            SOCIAL_CREDIT,
            SCHEDULE_CREDIT,
            COOKING_CREDIT,
            TV_CREDIT,
            CLEANLINESS_CREDIT,
            GUESTS_CREDIT,
        ] {
            assert!(IDENTICAL_SCORE > credit.adjacent);
            assert!(credit.adjacent > credit.opposite);
        }
    }

    #[test]
    fn test_factor_score_by_distance() {
        assert_eq!(factor_score(&Smoking::NonSmoker, &Smoking::NonSmoker, SMOKING_CREDIT), 100);
        assert_eq!(factor_score(&Smoking::NonSmoker, &Smoking::OccasionalSmoker, SMOKING_CREDIT), 60);
        assert_eq!(factor_score(&Smoking::NonSmoker, &Smoking::RegularSmoker, SMOKING_CREDIT), 20);
    }

    #[test]
    fn test_unknown_factor_is_neutral() {
        assert_eq!(factor_score(&Cleanliness::Unknown, &Cleanliness::VeryTidy, CLEANLINESS_CREDIT), 50);
        assert_eq!(factor_score(&Cleanliness::Unknown, &Cleanliness::Unknown, CLEANLINESS_CREDIT), 50);
    }

    #[test]
    fn test_ok_with_pets_bridges_extremes() {
        let lover = attributes(PetPreference::LovePets, false);
        let easygoing = attributes(PetPreference::OkWithPets, false);
        let averse = attributes(PetPreference::NoPets, false);

        assert_eq!(pets_score(&lover, &easygoing), 70);
        assert_eq!(pets_score(&easygoing, &averse), 70);
        assert_eq!(pets_score(&lover, &averse), 50);
    }

    #[test]
    fn test_pet_conflict_scores_below_plain_mismatch() {
        let owner = attributes(PetPreference::OkWithPets, true);
        let averse = attributes(PetPreference::NoPets, false);
        let plain_lover = attributes(PetPreference::LovePets, false);

        let conflict = pets_score(&owner, &averse);
        let mismatch = pets_score(&plain_lover, &averse);

        assert!(has_pet_conflict(&owner, &averse));
        assert!(has_pet_conflict(&averse, &owner));
        assert_eq!(conflict, 20);
        assert!(conflict < mismatch);
        assert_eq!(pets_score(&averse, &owner), conflict);
    }

    #[test]
    fn test_lifestyle_average() {
        let a = UserAttributes {
            pets: PetPreference::LovePets,
            smoking: Smoking::NonSmoker,
            social_level: SocialLevel::VerySocial,
            ..UserAttributes::default()
        };
        let b = UserAttributes {
            pets: PetPreference::LovePets,
            smoking: Smoking::RegularSmoker,
            social_level: SocialLevel::ModeratelySocial,
            ..UserAttributes::default()
        };

        // pets 100, smoking 20, drinking unknown 50, social 70 => 60
        assert_eq!(lifestyle_score(&a, &b), 60);
    }

    #[test]
    fn test_empty_profiles_are_neutral() {
        let blank = UserAttributes::default();
        assert_eq!(lifestyle_score(&blank, &blank), 50);
        assert_eq!(compatibility_score(&blank, &blank), 50);
    }
}

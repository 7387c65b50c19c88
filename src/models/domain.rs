use serde::{Deserialize, Serialize};

use crate::models::attributes::{
    lenient_bool, lenient_optional_string, lenient_string, Cleanliness, CookingStyle, Drinking, GuestPolicy,
    HousingStatus, PetPreference, Schedule, Smoking, SocialLevel, TvHabits,
};

/// Housing and lifestyle attributes the scorer compares
///
/// Field names follow the stored profile documents. Every field has a
/// default, so partially filled profiles still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttributes {
    #[serde(rename = "userID", alias = "userId", default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: String,
    /// Older profiles carry `location` instead of `region`
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub monthly_budget: String,
    #[serde(default)]
    pub housing_status: HousingStatus,
    #[serde(default)]
    pub pets: PetPreference,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub pet_owner: Option<bool>,
    #[serde(default)]
    pub smoking: Smoking,
    #[serde(default)]
    pub drinking: Drinking,
    #[serde(default)]
    pub social_level: SocialLevel,
    #[serde(default)]
    pub morning_person: Schedule,
    #[serde(default)]
    pub cooking_style: CookingStyle,
    #[serde(default)]
    pub tv_watching: TvHabits,
    #[serde(default)]
    pub cleanliness_level: Cleanliness,
    #[serde(default)]
    pub guest_policy: GuestPolicy,
}

impl UserAttributes {
    /// Region text, falling back to the legacy `location` field
    pub fn region(&self) -> &str {
        if !self.region.trim().is_empty() {
            return &self.region;
        }
        self.location.as_deref().unwrap_or("")
    }

    /// Helper to get pet_owner as a bool, defaulting to false
    pub fn owns_pet(&self) -> bool {
        self.pet_owner.unwrap_or(false)
    }
}

/// A stored profile: scoring attributes plus display-only fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    pub attributes: UserAttributes,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Older profiles carry `name` instead of, or next to, `fullName`
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub work_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub age: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserProfile {
    pub fn user_id(&self) -> &str {
        &self.attributes.user_id
    }

    /// Display name, falling back to the legacy `name` field
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.name.as_deref())
    }
}

/// Per-category sub-scores, each in 0..=100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub location: u8,
    pub budget: u8,
    pub housing: u8,
    pub lifestyle: u8,
    pub compatibility: u8,
}

/// Result of comparing two profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub overall_score: u8,
    pub breakdown: ScoreBreakdown,
    pub deal_breakers: Vec<String>,
    pub strengths: Vec<String>,
}

/// One entry of a ranked browse list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub profile: UserProfile,
    pub match_score: MatchScore,
    pub label: String,
    pub color: String,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub location: f64,
    pub budget: f64,
    pub housing: f64,
    pub lifestyle: f64,
    pub compatibility: f64,
}

impl ScoringWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    pub fn sum(&self) -> f64 {
        self.location + self.budget + self.housing + self.lifestyle + self.compatibility
    }

    /// Weights must be finite, non-negative and sum to 1.0
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            ("location", self.location),
            ("budget", self.budget),
            ("housing", self.housing),
            ("lifestyle", self.lifestyle),
            ("compatibility", self.compatibility),
        ];

        for (name, weight) in all {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!("weight `{}` must be a non-negative number, got {}", name, weight));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(format!("weights must sum to 1.0, got {}", sum));
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 0.25,
            budget: 0.20,
            housing: 0.15,
            lifestyle: 0.20,
            compatibility: 0.20,
        }
    }
}

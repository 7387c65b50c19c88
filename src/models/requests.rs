use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::attributes::HousingStatus;
use crate::models::domain::UserAttributes;

/// Request to score two attribute records directly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub viewer: UserAttributes,
    pub candidate: UserAttributes,
}

/// Request to rank stored profiles for a viewer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", alias = "userID")]
    pub user_id: String,
    /// Falls back to the configured default when absent
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    pub exclude_user_ids: Vec<String>,
    #[serde(default)]
    pub filters: BrowseFilters,
}

/// Optional narrowing of a browse list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseFilters {
    /// Case-insensitive text searched in name and bio
    #[serde(default)]
    pub search: Option<String>,
    /// Case-insensitive text searched in the region
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub housing_status: Option<HousingStatus>,
    #[serde(default)]
    pub min_budget: Option<u32>,
    #[serde(default)]
    pub max_budget: Option<u32>,
    #[serde(default)]
    pub min_score: Option<u8>,
}

impl BrowseFilters {
    /// Reject filters that can never match anything
    pub fn check(&self) -> Result<(), String> {
        if let (Some(min), Some(max)) = (self.min_budget, self.max_budget) {
            if min > max {
                return Err(format!("minBudget ({}) is greater than maxBudget ({})", min, max));
            }
        }
        if let Some(score) = self.min_score {
            if score > 100 {
                return Err(format!("minScore must be at most 100, got {}", score));
            }
        }
        Ok(())
    }
}

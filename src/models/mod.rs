// Model exports
pub mod attributes;
pub mod domain;
pub mod requests;
pub mod responses;

pub use attributes::{
    Cleanliness, CookingStyle, Drinking, GuestPolicy, HousingStatus, OrdinalAttribute,
    PetPreference, Schedule, Smoking, SocialLevel, TvHabits,
};
pub use domain::{MatchScore, ScoreBreakdown, ScoredMatch, ScoringWeights, UserAttributes, UserProfile};
pub use requests::{BrowseFilters, FindMatchesRequest, ScoreRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, ScoreResponse};

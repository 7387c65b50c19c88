//! ShareSpace Match - housemate compatibility scoring service
//!
//! This library scores how well two housemate profiles fit together across
//! location, budget, housing situation, lifestyle and day-to-day habits, and
//! ranks stored profiles for a viewer.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_match_score, match_color, match_label, Matcher, Scorer};
pub use models::{
    BrowseFilters, FindMatchesRequest, FindMatchesResponse, MatchScore, ScoreBreakdown,
    ScoredMatch, ScoringWeights, UserAttributes, UserProfile,
};

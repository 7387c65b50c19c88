// Core algorithm exports
pub mod budget;
pub mod factors;
pub mod filters;
pub mod insights;
pub mod labels;
pub mod location;
pub mod matcher;
pub mod scoring;

pub use budget::{bracket, budget_score, parse_budget, BudgetRange};
pub use filters::matches_filters;
pub use labels::{match_color, match_label, MatchTier};
pub use location::location_score;
pub use matcher::{MatchResult, Matcher};
pub use scoring::{calculate_breakdown, calculate_match_score, Scorer};

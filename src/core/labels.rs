use serde::{Deserialize, Serialize};

/// Coarse quality band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => MatchTier::Excellent,
            60..=79 => MatchTier::Good,
            40..=59 => MatchTier::Fair,
            _ => MatchTier::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match",
            MatchTier::Good => "Good Match",
            MatchTier::Fair => "Fair Match",
            MatchTier::Poor => "Poor Match",
        }
    }

    /// Severity color class; fair and poor share red
    pub fn color(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "text-green-600",
            MatchTier::Good => "text-yellow-600",
            MatchTier::Fair | MatchTier::Poor => "text-red-600",
        }
    }
}

pub fn match_label(score: u8) -> &'static str {
    MatchTier::from_score(score).label()
}

pub fn match_color(score: u8) -> &'static str {
    MatchTier::from_score(score).color()
}

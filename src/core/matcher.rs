use crate::core::{filters::matches_filters, labels::MatchTier, scoring::Scorer};
use crate::models::{BrowseFilters, ScoredMatch, ScoringWeights, UserAttributes, UserProfile};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Browse-list ranker
///
/// # Pipeline Stages
/// 1. Exclusion of the viewer and explicitly excluded ids
/// 2. Browse filters (search, location, housing, budget)
/// 3. Scoring and the optional score floor
/// 4. Ranking by overall score
#[derive(Debug, Clone)]
pub struct Matcher {
    scorer: Scorer,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            scorer: Scorer::new(weights),
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            scorer: Scorer::with_default_weights(),
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Rank candidate profiles for a viewer
    ///
    /// # Arguments
    /// * `viewer` - Attributes of the person browsing
    /// * `candidates` - Profiles listed from the store
    /// * `filters` - Optional browse filters
    /// * `exclude_user_ids` - Ids never to return
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with matches sorted by score (descending), ties broken by user id
    pub fn find_matches(
        &self,
        viewer: &UserAttributes,
        candidates: Vec<UserProfile>,
        filters: &BrowseFilters,
        exclude_user_ids: &[String],
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();
        let min_score = filters.min_score.unwrap_or(0);

        let mut scored_matches: Vec<ScoredMatch> = candidates
            .into_iter()
            // Stage 1: Exclusions
            .filter(|profile| !is_excluded(profile, viewer, exclude_user_ids))
            // Stage 2: Browse filters
            .filter(|profile| matches_filters(profile, filters))
            // Stage 3: Scoring
            .filter_map(|profile| {
                let match_score = self.scorer.score(viewer, &profile.attributes);

                if match_score.overall_score < min_score {
                    return None;
                }

                let tier = MatchTier::from_score(match_score.overall_score);
                Some(ScoredMatch {
                    profile,
                    match_score,
                    label: tier.label().to_string(),
                    color: tier.color().to_string(),
                })
            })
            .collect();

        // Stage 4: Sort by score (descending) and then by user id for a stable order
        scored_matches.sort_by(|a, b| {
            b.match_score
                .overall_score
                .cmp(&a.match_score.overall_score)
                .then_with(|| a.profile.user_id().cmp(b.profile.user_id()))
        });

        scored_matches.truncate(limit);

        tracing::trace!(
            "Ranked {} of {} candidates for {}",
            scored_matches.len(),
            total_candidates,
            viewer.user_id
        );

        MatchResult {
            matches: scored_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[inline]
fn is_excluded(profile: &UserProfile, viewer: &UserAttributes, exclude_user_ids: &[String]) -> bool {
    let id = profile.user_id();
    (!viewer.user_id.is_empty() && id == viewer.user_id)
        || exclude_user_ids.iter().any(|excluded| excluded == id)
}

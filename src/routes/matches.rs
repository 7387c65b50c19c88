use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{labels::MatchTier, Matcher};
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, ScoreRequest,
    ScoreResponse, UserProfile,
};
use crate::services::{CacheKey, CacheManager, ProfileStoreClient, ProfileStoreError};

/// Limits applied to browse requests
#[derive(Debug, Clone, Copy)]
pub struct MatchLimits {
    pub default_limit: u16,
    pub max_limit: u16,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStoreClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub limits: MatchLimits,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_pair))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/{user_id}/{candidate_id}", web::get().to(score_stored_pair));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache_entries: state.cache.stats().l1_size,
    })
}

/// Score two attribute records supplied by the caller
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "viewer": { "userID": "a", "region": "Auckland", ... },
///   "candidate": { "userID": "b", "region": "Auckland", ... }
/// }
/// ```
async fn score_pair(state: web::Data<AppState>, req: web::Json<ScoreRequest>) -> impl Responder {
    let match_score = state.matcher.scorer().score(&req.viewer, &req.candidate);
    let tier = MatchTier::from_score(match_score.overall_score);

    HttpResponse::Ok().json(ScoreResponse {
        match_score,
        label: tier.label().to_string(),
        color: tier.color().to_string(),
    })
}

/// Score two stored profiles
///
/// GET /api/v1/matches/{userId}/{candidateId}
async fn score_stored_pair(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (user_id, candidate_id) = path.into_inner();

    let viewer = match load_profile(&state, &user_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error_response("Failed to fetch user profile", &user_id, e),
    };
    let candidate = match load_profile(&state, &candidate_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error_response("Failed to fetch candidate profile", &candidate_id, e),
    };

    let match_score = state
        .matcher
        .scorer()
        .score(&viewer.attributes, &candidate.attributes);
    let tier = MatchTier::from_score(match_score.overall_score);

    tracing::debug!(
        "Scored {} against {}: {}",
        user_id,
        candidate_id,
        match_score.overall_score
    );

    HttpResponse::Ok().json(ScoreResponse {
        match_score,
        label: tier.label().to_string(),
        color: tier.color().to_string(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20,
///   "excludeUserIds": ["string"],
///   "filters": { "location": "Auckland", "housingStatus": "has-space", "maxBudget": 1200 }
/// }
/// ```
async fn find_matches(state: web::Data<AppState>, req: web::Json<FindMatchesRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        ));
    }

    if let Err(message) = req.filters.check() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            "Invalid filters",
            message,
        ));
    }

    let user_id = &req.user_id;
    let limit = req
        .limit
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit) as usize;

    tracing::info!("Finding matches for user: {}, limit: {}", user_id, limit);

    let viewer = match load_profile(&state, user_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error_response("Failed to fetch user profile", user_id, e),
    };

    let candidates = match load_listing(&state).await {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("Failed to list profiles for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to list profiles",
                e.to_string(),
            ));
        }
    };

    let result = state.matcher.find_matches(
        &viewer.attributes,
        candidates,
        &req.filters,
        &req.exclude_user_ids,
        limit,
    );

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_results: result.total_candidates,
    })
}

/// Fetch one profile, going through the cache
async fn load_profile(state: &AppState, user_id: &str) -> Result<UserProfile, ProfileStoreError> {
    let key = CacheKey::profile(user_id);

    match state.cache.get::<UserProfile>(&key).await {
        Ok(Some(profile)) => return Ok(profile),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache read failed for {}: {}", key, e),
    }

    let profile = state.store.get_profile(user_id).await?;

    if let Err(e) = state.cache.set(&key, &profile).await {
        tracing::warn!("Cache write failed for {}: {}", key, e);
    }

    Ok(profile)
}

/// Fetch the whole profile listing, going through the cache
async fn load_listing(state: &AppState) -> Result<Vec<UserProfile>, ProfileStoreError> {
    let key = CacheKey::profile_listing();

    match state.cache.get::<Vec<UserProfile>>(&key).await {
        Ok(Some(profiles)) => return Ok(profiles),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache read failed for {}: {}", key, e),
    }

    let profiles = state.store.scan_profiles().await?;
    tracing::debug!("Listed {} profiles from the store", profiles.len());

    if let Err(e) = state.cache.set(&key, &profiles).await {
        tracing::warn!("Cache write failed for {}: {}", key, e);
    }

    Ok(profiles)
}

fn store_error_response(context: &str, user_id: &str, err: ProfileStoreError) -> HttpResponse {
    match err {
        ProfileStoreError::NotFound(message) => {
            tracing::info!("{} for {}: not found", context, user_id);
            HttpResponse::NotFound().json(ErrorResponse::new(StatusCode::NOT_FOUND, context, message))
        }
        other => {
            tracing::error!("{} for {}: {}", context, user_id, other);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                context,
                other.to_string(),
            ))
        }
    }
}

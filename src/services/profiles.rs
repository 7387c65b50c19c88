use crate::models::UserProfile;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on scan pages followed in one listing
const MAX_SCAN_PAGES: usize = 500;

/// Errors that can occur when reading from the profile store
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanRequest<'a> {
    start_key: Option<&'a str>,
    consistent_read: bool,
}

/// Read-only client for the hosted key-value profile store
///
/// Profiles live in a single table keyed by `userID`:
/// - `GET  {endpoint}/tables/{table}/items/{userID}` returns `{"item": {...}}`
/// - `POST {endpoint}/tables/{table}/scan` returns `{"items": [...], "lastKey": ...}`
pub struct ProfileStoreClient {
    base_url: String,
    api_key: String,
    table: String,
    client: Client,
}

impl ProfileStoreClient {
    /// Create a new profile store client
    pub fn new(
        base_url: String,
        api_key: String,
        table: String,
        timeout: Duration,
    ) -> Result<Self, ProfileStoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            table,
            client,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/tables/{}", self.base_url.trim_end_matches('/'), self.table)
    }

    /// Fetch a single profile by user ID
    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile, ProfileStoreError> {
        let url = format!("{}/items/{}", self.table_url(), urlencoding::encode(user_id));

        tracing::debug!("Fetching profile for user: {}", user_id);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProfileStoreError::NotFound(format!("Profile not found for user {}", user_id)));
        }
        let response = check_status(response, "fetch profile").await?;

        let json: Value = response.json().await?;

        let item = json
            .get("item")
            .filter(|item| !item.is_null())
            .ok_or_else(|| ProfileStoreError::NotFound(format!("Profile not found for user {}", user_id)))?;

        serde_json::from_value(item.clone())
            .map_err(|e| ProfileStoreError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// List every profile in the table, following scan pagination
    ///
    /// Items that cannot be decoded or carry no user ID are skipped.
    pub async fn scan_profiles(&self) -> Result<Vec<UserProfile>, ProfileStoreError> {
        let url = format!("{}/scan", self.table_url());
        let mut profiles = Vec::new();
        let mut start_key: Option<String> = None;

        for page in 0..MAX_SCAN_PAGES {
            let response = self
                .client
                .post(&url)
                .header("X-Api-Key", &self.api_key)
                .json(&ScanRequest {
                    start_key: start_key.as_deref(),
                    consistent_read: true,
                })
                .send()
                .await?;

            let response = check_status(response, "scan profiles").await?;
            let json: Value = response.json().await?;

            let items = json
                .get("items")
                .and_then(|items| items.as_array())
                .ok_or_else(|| ProfileStoreError::InvalidResponse("Missing items array".into()))?;

            for item in items {
                match serde_json::from_value::<UserProfile>(item.clone()) {
                    Ok(profile) if !profile.user_id().is_empty() => profiles.push(profile),
                    Ok(_) => tracing::warn!("Skipping stored profile without a userID"),
                    Err(e) => tracing::warn!("Skipping undecodable stored profile: {}", e),
                }
            }

            start_key = json
                .get("lastKey")
                .and_then(|key| key.as_str())
                .map(str::to_string);

            tracing::debug!("Scanned page {} ({} items)", page + 1, items.len());

            if start_key.is_none() {
                return Ok(profiles);
            }
        }

        tracing::warn!(
            "Stopped profile scan after {} pages with {} profiles",
            MAX_SCAN_PAGES,
            profiles.len()
        );
        Ok(profiles)
    }
}

async fn check_status(response: Response, action: &str) -> Result<Response, ProfileStoreError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ProfileStoreError::Unauthorized);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::error!("Failed to {}: {} - {}", action, status, body);

    Err(ProfileStoreError::ApiError(format!("Failed to {}: {}", action, status)))
}

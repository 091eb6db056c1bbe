//! API client for the community REST backend.
//!
//! All endpoints are unauthenticated GETs below the configured base URL.
//! Requests carry the interceptor headers and time out after the configured
//! interval. Each call is a single attempt; retry and fallback policy lives
//! in `crate::provider`.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::models::{
    CampaignRibbon, Department, Medal, Member, MemberResponse, MemberStatsResponse, Rank,
    SlotbotEvent, TwitchStream, UpcomingEventsResponse,
};
use crate::security::{check_transport, default_headers};

use super::ApiError;

/// REST endpoints below the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Members,
    MemberStats,
    Member(&'a str),
    MembersByRank(Rank),
    Medals,
    CampaignRibbons,
    Departments,
    TwitchStreams,
    UpcomingEvents(usize),
}

impl Endpoint<'_> {
    /// Path relative to the base URL, query string included.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Members => "members".to_string(),
            Endpoint::MemberStats => "members/stats".to_string(),
            Endpoint::Member(id) => format!("members/{}", id),
            Endpoint::MembersByRank(rank) => format!("members?rank={}", rank.as_str()),
            Endpoint::Medals => "medals".to_string(),
            Endpoint::CampaignRibbons => "campaign-ribbons".to_string(),
            Endpoint::Departments => "abteilungen".to_string(),
            Endpoint::TwitchStreams => "twitch/streams".to_string(),
            Endpoint::UpcomingEvents(limit) => format!("events/upcoming?limit={}", limit),
        }
    }
}

/// Member ids are short slugs; anything else never reaches the URL.
fn is_valid_member_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// API client for the site backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    secure_context: bool,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(default_headers())
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = config.base_url().to_string();
        let secure_context = base_url
            .get(..8)
            .is_some_and(|s| s.eq_ignore_ascii_case("https://"));

        Ok(Self {
            client,
            base_url,
            secure_context,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let url = self.url(&endpoint.path());
        check_transport(&url, self.secure_context)?;
        let value = self.get_once(&url).await?;
        debug!(url = %url, "Request succeeded");
        Ok(value)
    }

    // ===== Data Fetching Methods =====

    pub async fn fetch_members(&self) -> Result<Vec<Member>> {
        let response: MemberResponse = self.get(Endpoint::Members).await?;
        Ok(response.members)
    }

    pub async fn fetch_member_stats(&self) -> Result<MemberStatsResponse> {
        self.get(Endpoint::MemberStats).await
    }

    pub async fn fetch_member_by_id(&self, member_id: &str) -> Result<Member> {
        if !is_valid_member_id(member_id) {
            let reason = format!("Invalid member id: {member_id}");
            return Err(ApiError::InvalidResponse(reason).into());
        }
        self.get(Endpoint::Member(member_id)).await
    }

    pub async fn fetch_members_by_rank(&self, rank: Rank) -> Result<Vec<Member>> {
        let response: MemberResponse = self.get(Endpoint::MembersByRank(rank)).await?;
        Ok(response.members)
    }

    pub async fn fetch_medals(&self) -> Result<Vec<Medal>> {
        self.get(Endpoint::Medals).await
    }

    pub async fn fetch_campaign_ribbons(&self) -> Result<Vec<CampaignRibbon>> {
        self.get(Endpoint::CampaignRibbons).await
    }

    pub async fn fetch_departments(&self) -> Result<Vec<Department>> {
        self.get(Endpoint::Departments).await
    }

    pub async fn fetch_twitch_streams(&self) -> Result<Vec<TwitchStream>> {
        self.get(Endpoint::TwitchStreams).await
    }

    pub async fn fetch_upcoming_events(&self, limit: usize) -> Result<Vec<SlotbotEvent>> {
        let response: UpcomingEventsResponse = self.get(Endpoint::UpcomingEvents(limit)).await?;
        Ok(response.events)
    }
}

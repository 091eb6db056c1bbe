//! Fetch-or-fallback data providers.
//!
//! Each provider tries its source a bounded number of times and, when every
//! attempt fails, returns canned data. Callers never see an error and never
//! get a partial result.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::config::Config;
use crate::fallback;
use crate::models::{Member, MemberStatsResponse, SlotbotEvent, TwitchStream};
use crate::roster::{complete_counts, RankCounts};

/// Where member data comes from.
pub trait MemberSource {
    fn fetch_members(&self) -> impl Future<Output = Result<Vec<Member>>> + Send;
    fn fetch_member_stats(&self) -> impl Future<Output = Result<MemberStatsResponse>> + Send;
}

pub trait MediaSource {
    fn fetch_twitch_streams(&self) -> impl Future<Output = Result<Vec<TwitchStream>>> + Send;
}

pub trait EventsSource {
    fn fetch_upcoming_events(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SlotbotEvent>>> + Send;
}

impl MemberSource for ApiClient {
    fn fetch_members(&self) -> impl Future<Output = Result<Vec<Member>>> + Send {
        ApiClient::fetch_members(self)
    }

    fn fetch_member_stats(&self) -> impl Future<Output = Result<MemberStatsResponse>> + Send {
        ApiClient::fetch_member_stats(self)
    }
}

impl MediaSource for ApiClient {
    fn fetch_twitch_streams(&self) -> impl Future<Output = Result<Vec<TwitchStream>>> + Send {
        ApiClient::fetch_twitch_streams(self)
    }
}

impl EventsSource for ApiClient {
    fn fetch_upcoming_events(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SlotbotEvent>>> + Send {
        ApiClient::fetch_upcoming_events(self, limit)
    }
}

/// Timeout and retry settings shared by all providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub timeout: Duration,
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.request_timeout(),
            max_retries: config.max_retries,
            delay: config.retry_delay(),
        }
    }

    /// Run `attempt` until it succeeds or the retries are used up. Each try
    /// is cut off after `timeout`; failed tries wait `delay` before the next.
    pub async fn run<T, F, Fut>(&self, what: &str, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut tries = 0;
        loop {
            let outcome = match tokio::time::timeout(self.timeout, attempt()).await {
                Ok(result) => result,
                Err(_) => Err(anyhow::anyhow!(
                    "{} timed out after {}ms",
                    what,
                    self.timeout.as_millis()
                )),
            };
            match outcome {
                Ok(value) => return Ok(value),
                Err(e) if tries < self.max_retries => {
                    tries += 1;
                    warn!(
                        what = what,
                        retry = tries,
                        delay_ms = self.delay.as_millis() as u64,
                        error = %e,
                        "Fetch failed, retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

pub struct MemberProvider<S: MemberSource> {
    source: S,
    policy: RetryPolicy,
}

impl<S: MemberSource> MemberProvider<S> {
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    /// All members, or the fallback roster if the source cannot deliver.
    pub async fn get_all_members(&self) -> Vec<Member> {
        match self.policy.run("members", || self.source.fetch_members()).await {
            Ok(members) => {
                debug!(count = members.len(), "Loaded members");
                members
            }
            Err(e) => {
                warn!(error = %e, "Falling back to built-in roster");
                fallback::members()
            }
        }
    }

    pub async fn get_member_stats(&self) -> RankCounts {
        match self
            .policy
            .run("member stats", || self.source.fetch_member_stats())
            .await
        {
            Ok(response) => complete_counts(response.stats),
            Err(e) => {
                warn!(error = %e, "Falling back to built-in member stats");
                fallback::stats()
            }
        }
    }
}

pub struct MediaProvider<S: MediaSource> {
    source: S,
    policy: RetryPolicy,
}

impl<S: MediaSource> MediaProvider<S> {
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    pub async fn get_twitch_streams(&self) -> Vec<TwitchStream> {
        match self
            .policy
            .run("twitch streams", || self.source.fetch_twitch_streams())
            .await
        {
            Ok(streams) => streams,
            Err(e) => {
                warn!(error = %e, "Falling back to built-in stream list");
                fallback::twitch_streams(Utc::now())
            }
        }
    }
}

pub struct EventsProvider<S: EventsSource> {
    source: S,
    policy: RetryPolicy,
}

impl<S: EventsSource> EventsProvider<S> {
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    /// Upcoming events; an empty list if the source fails.
    pub async fn get_upcoming_events(&self, limit: usize) -> Vec<SlotbotEvent> {
        match self
            .policy
            .run("upcoming events", || self.source.fetch_upcoming_events(limit))
            .await
        {
            Ok(mut events) => {
                events.truncate(limit);
                events
            }
            Err(e) => {
                warn!(error = %e, "Error fetching upcoming events");
                Vec::new()
            }
        }
    }
}

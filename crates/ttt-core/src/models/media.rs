use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TwitchStream {
    pub id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub title: String,
    #[serde(rename = "viewerCount", default)]
    pub viewer_count: u32,
    #[serde(rename = "startedAt")]
    pub started_at: String,
    #[serde(rename = "thumbnailUrl", default)]
    pub thumbnail_url: String,
    #[serde(rename = "isLive", default)]
    pub is_live: bool,
    pub url: String,
}

impl TwitchStream {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.started_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// How long the stream has been running, e.g. "1h 05m".
    pub fn uptime_display(&self, now: DateTime<Utc>) -> Option<String> {
        let started = self.started_at()?;
        let minutes = (now - started).num_minutes().max(0);
        Some(format!("{}h {:02}m", minutes / 60, minutes % 60))
    }
}

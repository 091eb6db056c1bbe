use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Rank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Medal {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct CampaignRibbon {
    pub id: String,
    pub name: String,
    pub image: String,
    pub campaign: String,
    pub year: String,
}

impl CampaignRibbon {
    /// Numeric campaign year, if the wire value is a valid integer.
    pub fn year_number(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }
}

/// A department ("Abteilung") a member works in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Department {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Member {
    pub id: String,
    pub name: String,
    pub rank: Rank,
    #[serde(default)]
    pub avatar: String,
    #[serde(rename = "memberSince")]
    pub member_since: String,
    #[serde(default)]
    pub medals: Vec<Medal>,
    #[serde(rename = "campaignRibbons", default)]
    pub campaign_ribbons: Vec<CampaignRibbon>,
    #[serde(rename = "abteilungen", default)]
    pub departments: Vec<Department>,
}

impl Member {
    pub fn has_avatar(&self) -> bool {
        !self.avatar.trim().is_empty()
    }
}

// API Response wrappers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub members: Vec<Member>,
    #[serde(default)]
    pub total: usize,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStatsResponse {
    pub stats: BTreeMap<Rank, usize>,
    #[serde(rename = "totalMembers", default)]
    pub total_members: usize,
    #[serde(rename = "activeMembers", default)]
    pub active_members: usize,
}

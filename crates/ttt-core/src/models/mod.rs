//! Data models for the site.
//!
//! - `Member`, `Medal`, `CampaignRibbon`, `Department`: roster entities
//! - `Rank`, `RankInfo`: the six ordered membership tiers
//! - `TwitchStream`: live stream entries for the media page
//! - `SlotbotEvent`: upcoming events from the slot bot

pub mod event;
pub mod media;
pub mod member;
pub mod rank;

pub use event::{SlotbotEvent, UpcomingEventsResponse};
pub use media::TwitchStream;
pub use member::{CampaignRibbon, Department, Medal, Member, MemberResponse, MemberStatsResponse};
pub use rank::{Rank, RankInfo, RankParseError};

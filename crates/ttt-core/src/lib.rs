//! Core library for the Tactical Training Team site.
//!
//! Everything the front-end needs that is not rendering lives here:
//!
//! - `models`: members, ranks, media and event wire types
//! - `api`: REST client with bounded timeout and fixed-delay retries
//! - `provider`: fetch-or-fallback data providers
//! - `roster`: grouping by rank and the single-expansion card state
//! - `routes` / `security`: route table, route guard, URL checks
//! - `content`: static page content as typed sections

pub mod api;
pub mod config;
pub mod content;
pub mod fallback;
pub mod models;
pub mod provider;
pub mod roster;
pub mod routes;
pub mod security;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use models::{Member, Rank};
pub use provider::{
    EventsProvider, EventsSource, MediaProvider, MediaSource, MemberProvider, MemberSource,
    RetryPolicy,
};
pub use roster::{count_by_rank, group_by_rank, RankCounts, RosterState};
pub use routes::Route;
pub use security::{GuardDecision, RouteGuard};

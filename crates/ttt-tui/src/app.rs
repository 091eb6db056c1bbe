//! Application state for the terminal front-end.
//!
//! `App` owns the current route, the fetched data, and the transient view
//! state (selection, expanded roster card, slideshow). Network data is
//! loaded by a spawned background task that reports back over an mpsc
//! channel; the event loop drains it once per tick.

use std::cell::RefCell;
use std::time::Instant;

use anyhow::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use ttt_core::content::{self, Slideshow, DISCORD_URL, SLIDES};
use ttt_core::models::{SlotbotEvent, TwitchStream};
use ttt_core::roster::{complete_counts, group_by_rank};
use ttt_core::security::{open_external, Clock, LinkOpener, SystemClock, SystemOpener};
use ttt_core::{
    count_by_rank, ApiClient, Config, EventsProvider, GuardDecision, MediaProvider, Member,
    MemberProvider, RankCounts, RetryPolicy, RosterState, Route, RouteGuard,
};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Lines moved by page up/down on content pages.
pub const PAGE_SCROLL_SIZE: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Messages from the background refresh task.
#[derive(Debug)]
pub enum RefreshResult {
    Members(Vec<Member>),
    MemberStats(RankCounts),
    Streams(Vec<TwitchStream>),
    Events(Vec<SlotbotEvent>),
    RefreshComplete,
}

/// A selectable link on the current page. Static page links and links
/// built from fetched data (streams, events) end up here alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub label: String,
    pub url: String,
}

impl LinkTarget {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.url.starts_with('/')
    }
}

impl From<content::Link> for LinkTarget {
    fn from(link: content::Link) -> Self {
        Self::new(link.label, link.url)
    }
}

/// What a pointer click on a drawn row selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Tab(usize),
    RosterEntry(usize),
    Link(usize),
}

/// Rows of a widget as last drawn, used to map clicks back to items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickRegion {
    area: Rect,
    /// First item visible in the top row of `area`.
    offset: usize,
    rows: Vec<Option<ClickTarget>>,
}

impl ClickRegion {
    pub fn new(area: Rect, offset: usize, rows: Vec<Option<ClickTarget>>) -> Self {
        Self { area, offset, rows }
    }

    fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let inside = column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom();
        if !inside {
            return None;
        }
        let line = usize::from(row - self.area.y) + self.offset;
        self.rows.get(line).copied().flatten()
    }
}

/// Split `/path?key=value&...` into the path and its query parameters.
pub fn split_query(target: &str) -> (&str, Vec<(&str, &str)>) {
    let target = target.split('#').next().unwrap_or_default();
    match target.split_once('?') {
        Some((path, query)) => {
            let params = query
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
                .collect();
            (path, params)
        }
        None => (target, Vec::new()),
    }
}

pub struct App {
    pub config: Config,
    api: ApiClient,
    policy: RetryPolicy,

    pub state: AppState,
    pub current_route: Route,
    guard: RouteGuard<Box<dyn Clock>>,
    opener: Box<dyn LinkOpener>,

    // Fetched data
    pub members: Vec<Member>,
    pub member_stats: RankCounts,
    pub streams: Vec<TwitchStream>,
    pub events: Vec<SlotbotEvent>,

    // View state
    pub roster_state: RosterState,
    pub roster_selection: usize,
    pub link_selection: usize,
    pub scroll: u16,
    pub slideshow: Slideshow,
    pub status_message: Option<String>,
    pub refreshing: bool,
    /// Filled while drawing; rendering only has `&App`.
    click_regions: RefCell<Vec<ClickRegion>>,

    refresh_tx: mpsc::Sender<RefreshResult>,
    refresh_rx: mpsc::Receiver<RefreshResult>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_parts(config, Box::new(SystemClock), Box::new(SystemOpener))
    }

    /// Build with an explicit guard clock and link opener.
    pub fn with_parts(
        config: Config,
        clock: Box<dyn Clock>,
        opener: Box<dyn LinkOpener>,
    ) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        let policy = RetryPolicy::from_config(&config);
        let (refresh_tx, refresh_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Ok(Self {
            config,
            api,
            policy,
            state: AppState::Normal,
            current_route: Route::Home,
            guard: RouteGuard::with_clock(clock),
            opener,
            members: Vec::new(),
            member_stats: RankCounts::new(),
            streams: Vec::new(),
            events: Vec::new(),
            roster_state: RosterState::new(),
            roster_selection: 0,
            link_selection: 0,
            scroll: 0,
            slideshow: Slideshow::new(SLIDES.len(), Instant::now()),
            status_message: None,
            refreshing: false,
            click_regions: RefCell::new(Vec::new()),
            refresh_tx,
            refresh_rx,
        })
    }

    // ===== Navigation =====

    /// Navigate to a site path such as `/chronik` or `/medien?tab=x`.
    /// The route guard has the final word.
    pub fn navigate(&mut self, target: &str) -> GuardDecision {
        let (path, params) = split_query(target);
        let decision = self.guard.check(path, &params);
        match decision {
            GuardDecision::Allow(route) => self.show_route(route),
            GuardDecision::Redirect(route) => {
                self.status_message = Some(format!("Umgeleitet: {}", route.label()));
                self.show_route(route);
            }
            GuardDecision::Throttled => {
                debug!(target = target, "Navigation throttled");
            }
        }
        decision
    }

    fn show_route(&mut self, route: Route) {
        if route != self.current_route {
            info!(route = %route, "Showing page");
            self.current_route = route;
            self.link_selection = 0;
            self.scroll = 0;
            self.click_regions.get_mut().clear();
        }
    }

    pub fn next_route(&mut self) {
        let target = self.current_route.next().path();
        self.navigate(target);
    }

    pub fn prev_route(&mut self) {
        let target = self.current_route.prev().path();
        self.navigate(target);
    }

    /// Window title for the current page.
    pub fn title(&self) -> String {
        self.current_route.title()
    }

    // ===== Roster =====

    /// Members in display order: grouped by rank, sorted by name within a rank.
    pub fn roster_entries(&self) -> Vec<&Member> {
        group_by_rank(&self.members).into_values().flatten().collect()
    }

    pub fn selected_member(&self) -> Option<&Member> {
        self.roster_entries().get(self.roster_selection).copied()
    }

    /// Per-rank counts from the stats endpoint, or counted locally until
    /// the stats arrive.
    pub fn rank_counts(&self) -> RankCounts {
        if self.member_stats.is_empty() {
            count_by_rank(&self.members)
        } else {
            self.member_stats.clone()
        }
    }

    pub fn toggle_selected_member(&mut self) {
        if let Some(id) = self.selected_member().map(|m| m.id.clone()) {
            self.roster_state.toggle(&id);
        }
    }

    // ===== Links =====

    /// Selectable links on the current page, in display order.
    pub fn current_links(&self) -> Vec<LinkTarget> {
        let mut links: Vec<LinkTarget> = Vec::new();
        match self.current_route {
            Route::Home => {
                links.extend(content::home_page().links().into_iter().map(LinkTarget::from));
                links.extend(self.event_links());
                links.push(LinkTarget::new("Discord beitreten", DISCORD_URL));
            }
            Route::Medien => {
                links.extend(
                    self.streams
                        .iter()
                        .filter(|s| s.is_live)
                        .map(|s| LinkTarget::new(format!("LIVE: {}", s.user_name), s.url.clone())),
                );
                let page_links = content::page(Route::Medien).links();
                links.extend(page_links.into_iter().map(LinkTarget::from));
            }
            Route::Aufstellung => return links,
            route => {
                links.extend(content::page(route).links().into_iter().map(LinkTarget::from));
            }
        }
        links.extend(content::footer().links().into_iter().map(LinkTarget::from));
        links
    }

    fn event_links(&self) -> impl Iterator<Item = LinkTarget> + '_ {
        self.events.iter().filter_map(|event| {
            event
                .event_url
                .as_ref()
                .map(|url| LinkTarget::new(event.title.clone(), url.clone()))
        })
    }

    pub fn selected_link(&self) -> Option<LinkTarget> {
        self.current_links().into_iter().nth(self.link_selection)
    }

    // ===== Selection =====

    fn selection_len(&self) -> usize {
        if self.current_route == Route::Aufstellung {
            self.members.len()
        } else {
            self.current_links().len()
        }
    }

    fn selection_mut(&mut self) -> &mut usize {
        if self.current_route == Route::Aufstellung {
            &mut self.roster_selection
        } else {
            &mut self.link_selection
        }
    }

    pub fn select_next(&mut self) {
        let len = self.selection_len();
        let selection = self.selection_mut();
        if len > 0 && *selection + 1 < len {
            *selection += 1;
        }
    }

    pub fn select_prev(&mut self) {
        let selection = self.selection_mut();
        *selection = selection.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        *self.selection_mut() = 0;
    }

    pub fn select_last(&mut self) {
        let len = self.selection_len();
        *self.selection_mut() = len.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(PAGE_SCROLL_SIZE);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(PAGE_SCROLL_SIZE);
    }

    // ===== Activation =====

    /// Enter/Space. On the roster this toggles the selected card; elsewhere
    /// it follows the selected link.
    pub fn activate(&mut self) {
        if self.current_route == Route::Aufstellung {
            self.toggle_selected_member();
            return;
        }
        if let Some(link) = self.selected_link() {
            self.follow_link(&link);
        }
    }

    // ===== Pointer =====

    pub fn clear_click_regions(&self) {
        self.click_regions.borrow_mut().clear();
    }

    pub fn record_click_region(&self, region: ClickRegion) {
        self.click_regions.borrow_mut().push(region);
    }

    /// Left click at a terminal cell: select and activate whatever was
    /// drawn there. Returns false when nothing clickable is under it.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let target = self
            .click_regions
            .get_mut()
            .iter()
            .find_map(|region| region.target_at(column, row));
        let Some(target) = target else {
            return false;
        };

        match target {
            ClickTarget::Tab(index) => {
                if let Some(route) = Route::ALL.get(index) {
                    self.navigate(route.path());
                }
            }
            ClickTarget::RosterEntry(index) => {
                self.roster_selection = index;
                self.activate();
            }
            ClickTarget::Link(index) => {
                self.link_selection = index;
                self.activate();
            }
        }
        true
    }

    pub fn follow_link(&mut self, link: &LinkTarget) {
        if link.is_internal() {
            self.navigate(&link.url);
            return;
        }
        match open_external(self.opener.as_ref(), &link.url) {
            Ok(()) => {
                self.status_message = Some(format!("Geöffnet: {}", link.label));
            }
            Err(e) => {
                warn!(url = %link.url, error = %e, "Could not open link");
                self.status_message = Some(format!("Link nicht geöffnet: {}", e));
            }
        }
    }

    // ===== Slideshow =====

    /// Called once per loop iteration.
    pub fn on_tick(&mut self, now: Instant) {
        if self.current_route == Route::Home {
            self.slideshow.tick(now);
        }
    }

    // ===== Background refresh =====

    /// Fetch members, stats, streams and events in the background.
    /// Does nothing while a refresh is already running.
    pub fn refresh_all_background(&mut self) {
        if self.refreshing {
            return;
        }
        self.refreshing = true;
        self.status_message = Some("Lade Daten...".to_string());

        let tx = self.refresh_tx.clone();
        let api = self.api.clone();
        let policy = self.policy;
        let limit = self.config.upcoming_events_limit;

        tokio::spawn(async move {
            Self::execute_background_refresh(tx, api, policy, limit).await;
        });
    }

    async fn send_result(tx: &mpsc::Sender<RefreshResult>, result: RefreshResult) {
        if let Err(e) = tx.send(result).await {
            error!(error = %e, "Failed to send refresh result - channel closed");
        }
    }

    async fn execute_background_refresh(
        tx: mpsc::Sender<RefreshResult>,
        api: ApiClient,
        policy: RetryPolicy,
        limit: usize,
    ) {
        let members = MemberProvider::new(api.clone(), policy);
        let media = MediaProvider::new(api.clone(), policy);
        let events = EventsProvider::new(api, policy);

        let (member_list, stats, streams, upcoming) = futures::join!(
            members.get_all_members(),
            members.get_member_stats(),
            media.get_twitch_streams(),
            events.get_upcoming_events(limit),
        );

        Self::send_result(&tx, RefreshResult::Members(member_list)).await;
        Self::send_result(&tx, RefreshResult::MemberStats(stats)).await;
        Self::send_result(&tx, RefreshResult::Streams(streams)).await;
        Self::send_result(&tx, RefreshResult::Events(upcoming)).await;
        Self::send_result(&tx, RefreshResult::RefreshComplete).await;
    }

    pub fn check_background_tasks(&mut self) {
        let mut results = Vec::new();
        while let Ok(result) = self.refresh_rx.try_recv() {
            results.push(result);
        }

        for result in results {
            self.process_refresh_result(result);
        }
    }

    fn process_refresh_result(&mut self, result: RefreshResult) {
        match result {
            RefreshResult::Members(data) => {
                self.roster_state.retain_known(&data);
                self.roster_selection = self.roster_selection.min(data.len().saturating_sub(1));
                self.members = data;
            }
            RefreshResult::MemberStats(stats) => {
                self.member_stats = complete_counts(stats);
            }
            RefreshResult::Streams(data) => {
                self.streams = data;
            }
            RefreshResult::Events(data) => {
                self.events = data;
            }
            RefreshResult::RefreshComplete => {
                self.refreshing = false;
                self.link_selection = self
                    .link_selection
                    .min(self.current_links().len().saturating_sub(1));
                self.status_message = Some(format!("{} Mitglieder geladen", self.members.len()));
                info!(
                    members = self.members.len(),
                    streams = self.streams.len(),
                    events = self.events.len(),
                    "Refresh complete"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use std::time::Duration;
    use ttt_core::fallback;
    use ttt_core::security::ManualClock;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct Harness {
        app: App,
        clock: Rc<ManualClock>,
        opened: Rc<RefCell<Vec<String>>>,
    }

    impl Harness {
        /// Navigate after the guard's rate-limit window has passed.
        fn go(&mut self, target: &str) -> GuardDecision {
            self.clock.advance(Duration::from_secs(1));
            self.app.navigate(target)
        }
    }

    fn offline_config() -> Config {
        Config {
            api_base_url: "http://127.0.0.1:9/api/v1".to_string(),
            request_timeout_ms: 100,
            max_retries: 0,
            retry_delay_ms: 1,
            ..Config::default()
        }
    }

    fn harness() -> Harness {
        let clock = Rc::new(ManualClock::new());
        let opener = RecordingOpener::default();
        let opened = Rc::clone(&opener.opened);
        let app = App::with_parts(offline_config(), Box::new(Rc::clone(&clock)), Box::new(opener))
            .unwrap();
        Harness { app, clock, opened }
    }

    fn with_members(h: &mut Harness) {
        h.app.process_refresh_result(RefreshResult::Members(fallback::members()));
    }

    #[test]
    fn test_split_query() {
        assert_eq!(split_query("/chronik"), ("/chronik", vec![]));
        assert_eq!(
            split_query("/medien?tab=live&x"),
            ("/medien", vec![("tab", "live"), ("x", "")])
        );
        assert_eq!(split_query("/impressum#top"), ("/impressum", vec![]));
    }

    #[test]
    fn test_navigate_allows_known_route() {
        let mut h = harness();
        assert_eq!(h.go("/chronik"), GuardDecision::Allow(Route::Chronik));
        assert_eq!(h.app.current_route, Route::Chronik);
        assert_eq!(h.app.title(), "Chronik - Tactical Training Team");
    }

    #[test]
    fn test_navigate_unknown_redirects_home() {
        let mut h = harness();
        h.go("/medien");
        assert_eq!(h.go("/wp-admin"), GuardDecision::Redirect(Route::Home));
        assert_eq!(h.app.current_route, Route::Home);
    }

    #[test]
    fn test_navigate_suspicious_query_redirects() {
        let mut h = harness();
        h.go("/medien");
        let decision = h.go("/medien?q=<script>alert(1)</script>");
        assert_eq!(decision, GuardDecision::Redirect(Route::Home));
        assert_eq!(h.app.current_route, Route::Home);
    }

    #[test]
    fn test_navigate_encoded_script_redirects() {
        let mut h = harness();
        h.go("/medien");
        let decision = h.go("/medien?q=%3Cscript%3Ealert(1)%3C%2Fscript%3E");
        assert_eq!(decision, GuardDecision::Redirect(Route::Home));
        assert_eq!(h.app.current_route, Route::Home);
    }

    #[test]
    fn test_rapid_tab_switch_is_throttled() {
        let mut h = harness();
        h.go("/chronik");
        h.app.next_route();
        assert_eq!(h.app.current_route, Route::Chronik);
        h.clock.advance(Duration::from_millis(150));
        h.app.next_route();
        assert_eq!(h.app.current_route, Route::Medien);
    }

    #[test]
    fn test_roster_entries_follow_rank_order() {
        let mut h = harness();
        with_members(&mut h);
        let ranks: Vec<_> = h.app.roster_entries().iter().map(|m| m.rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
        assert_eq!(ranks.len(), 12);
    }

    #[test]
    fn test_activate_on_roster_toggles_single_card() {
        let mut h = harness();
        with_members(&mut h);
        h.go("/aufstellung");

        h.app.activate();
        let first = h.app.selected_member().map(|m| m.id.clone()).unwrap();
        assert!(h.app.roster_state.is_expanded(&first));

        h.app.select_next();
        h.app.activate();
        let second = h.app.selected_member().map(|m| m.id.clone()).unwrap();
        assert!(h.app.roster_state.is_expanded(&second));
        assert!(!h.app.roster_state.is_expanded(&first));

        h.app.activate();
        assert_eq!(h.app.roster_state.expanded(), None);
    }

    #[test]
    fn test_refresh_drops_vanished_expansion() {
        let mut h = harness();
        with_members(&mut h);
        h.go("/aufstellung");
        h.app.select_last();
        h.app.activate();
        assert!(h.app.roster_state.expanded().is_some());

        let fewer: Vec<Member> = fallback::members().into_iter().take(2).collect();
        h.app.process_refresh_result(RefreshResult::Members(fewer));
        assert_eq!(h.app.roster_state.expanded(), None);
        assert_eq!(h.app.roster_selection, 1);
    }

    #[test]
    fn test_activate_external_link_uses_opener() {
        let mut h = harness();
        h.go("/mitmachen");
        h.app.activate();
        assert_eq!(h.opened.borrow().as_slice(), [DISCORD_URL]);
    }

    #[test]
    fn test_activate_internal_link_navigates() {
        let mut h = harness();
        let target = h
            .app
            .current_links()
            .iter()
            .position(|l| l.url == "/mitmachen")
            .unwrap();
        h.app.link_selection = target;
        h.clock.advance(Duration::from_secs(1));
        h.app.activate();
        assert_eq!(h.app.current_route, Route::Mitmachen);
        assert!(h.opened.borrow().is_empty());
    }

    #[test]
    fn test_click_region_maps_rows_through_offset() {
        let rows = vec![None, Some(ClickTarget::Link(0)), Some(ClickTarget::Link(1))];
        let region = ClickRegion::new(Rect::new(10, 5, 20, 2), 1, rows);
        assert_eq!(region.target_at(10, 5), Some(ClickTarget::Link(0)));
        assert_eq!(region.target_at(29, 6), Some(ClickTarget::Link(1)));
        assert_eq!(region.target_at(30, 5), None);
        assert_eq!(region.target_at(10, 7), None);

        let headed = ClickRegion::new(Rect::new(0, 0, 5, 3), 0, vec![None]);
        assert_eq!(headed.target_at(0, 0), None);
    }

    #[test]
    fn test_click_on_link_row_activates_it() {
        let mut h = harness();
        h.go("/mitmachen");
        let rows = (0..h.app.current_links().len())
            .map(|i| Some(ClickTarget::Link(i)))
            .collect();
        h.app.record_click_region(ClickRegion::new(Rect::new(0, 0, 20, 5), 0, rows));
        assert!(h.app.click(3, 0));
        assert_eq!(h.opened.borrow().as_slice(), [DISCORD_URL]);
        assert!(!h.app.click(3, 10));
    }

    #[test]
    fn test_click_follows_scrolled_link_list() {
        let mut h = harness();
        let links = h.app.current_links();
        let target = links.iter().position(|l| l.url == "/mitmachen").unwrap();
        let rows = (0..links.len()).map(|i| Some(ClickTarget::Link(i))).collect();
        h.app.record_click_region(ClickRegion::new(Rect::new(0, 0, 20, 5), target, rows));
        h.clock.advance(Duration::from_secs(1));
        assert!(h.app.click(0, 0));
        assert_eq!(h.app.current_route, Route::Mitmachen);
    }

    #[test]
    fn test_route_change_drops_click_regions() {
        let mut h = harness();
        let rows = vec![Some(ClickTarget::Tab(2))];
        h.app.record_click_region(ClickRegion::new(Rect::new(0, 0, 5, 1), 0, rows));
        h.go("/medien");
        assert!(!h.app.click(0, 0));
    }

    #[test]
    fn test_unsafe_link_is_refused() {
        let mut h = harness();
        h.app.follow_link(&LinkTarget::new("evil", "javascript:alert(1)"));
        assert!(h.opened.borrow().is_empty());
        assert!(h.app.status_message.as_deref().unwrap().starts_with("Link nicht geöffnet"));
    }

    #[test]
    fn test_live_streams_are_linked_on_medien() {
        let mut h = harness();
        let streams = fallback::twitch_streams(chrono::Utc::now());
        h.app.process_refresh_result(RefreshResult::Streams(streams));
        h.go("/medien");
        let first = h.app.current_links().into_iter().next().unwrap();
        assert!(first.label.starts_with("LIVE: "));
    }

    #[test]
    fn test_roster_has_no_links() {
        let mut h = harness();
        h.go("/aufstellung");
        assert!(h.app.current_links().is_empty());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut h = harness();
        h.app.select_prev();
        assert_eq!(h.app.link_selection, 0);
        h.app.select_last();
        let last = h.app.link_selection;
        h.app.select_next();
        assert_eq!(h.app.link_selection, last);
    }

    #[test]
    fn test_rank_counts_prefer_server_stats() {
        let mut h = harness();
        with_members(&mut h);
        assert_eq!(h.app.rank_counts(), count_by_rank(&h.app.members));

        let mut stats = RankCounts::new();
        stats.insert(ttt_core::Rank::Officer, 9);
        h.app.process_refresh_result(RefreshResult::MemberStats(stats));
        let counts = h.app.rank_counts();
        assert_eq!(counts[&ttt_core::Rank::Officer], 9);
        assert_eq!(counts.len(), 6);
    }

    #[tokio::test]
    async fn test_background_refresh_falls_back_when_offline() {
        let mut h = harness();
        h.app.refresh_all_background();
        assert!(h.app.refreshing);

        let deadline = Instant::now() + Duration::from_secs(5);
        while h.app.refreshing && Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(20)).await;
            h.app.check_background_tasks();
        }

        assert!(!h.app.refreshing);
        assert_eq!(h.app.members, fallback::members());
        assert_eq!(h.app.member_stats, fallback::stats());
        assert!(h.app.events.is_empty());
    }
}

//! Tactical Training Team terminal client.
//!
//! Every page of the community site as a tab: home, roster, history,
//! media, join-us and the legal pages, driven from the keyboard.

mod app;
mod ui;

use std::collections::BTreeMap;
use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ttt_core::config::API_BASE_ENV;
use ttt_core::models::{CampaignRibbon, Department, Medal};
use ttt_core::{
    count_by_rank, group_by_rank, ApiClient, Config, Member, MemberProvider, Rank, RankCounts,
    RetryPolicy,
};

use app::{App, AppState};
use ui::input::{handle_input, handle_mouse};
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const LOG_FILE_NAME: &str = "ttt.log";

fn env_filter() -> EnvFilter {
    // RUST_LOG controls the level, e.g. RUST_LOG=ttt_core=debug
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to a file under the cache directory; the terminal belongs to the UI.
/// The returned guard must live until shutdown so buffered lines get flushed.
fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let log_dir = config.log_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    });

    match log_dir {
        Ok(dir) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(env_filter())
                .init();
            Some(guard)
        }
        Err(_) => {
            // No writable log location; run without a log file
            tracing_subscriber::registry().with(env_filter()).init();
            None
        }
    }
}

/// Stderr logging for the non-interactive commands.
fn init_stderr_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter())
        .init();
}

fn load_config() -> (Config, Option<anyhow::Error>) {
    match Config::load() {
        Ok(config) => (config, None),
        Err(e) => {
            let fallback = Config::default().with_env_override(std::env::var(API_BASE_ENV).ok());
            (fallback, Some(e))
        }
    }
}

/// Value following `flag` on the command line, if any.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let (config, config_error) = load_config();

    // Check for CLI commands
    let args: Vec<String> = std::env::args().collect();
    let dump_command = ["--dump-roster", "--dump-member", "--dump-catalog"]
        .into_iter()
        .find(|flag| args.iter().any(|a| a == flag));
    if let Some(flag) = dump_command {
        init_stderr_tracing();
        if let Some(e) = config_error {
            warn!(error = %e, "Failed to load config, using defaults");
        }
        return match flag {
            "--dump-member" => {
                let id = flag_value(&args, "--dump-member")
                    .context("--dump-member needs a member id")?;
                dump_member(&config, id).await
            }
            "--dump-catalog" => dump_catalog(&config).await,
            _ => {
                let rank = flag_value(&args, "--rank").map(str::parse::<Rank>).transpose()?;
                dump_roster(&config, rank).await
            }
        };
    }
    if args.iter().any(|a| a == "--init-config") {
        if let Some(e) = config_error {
            eprintln!("Existing config unreadable ({:#}), writing defaults", e);
        }
        let path = config.save()?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    let _log_guard = init_tracing(&config);
    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }
    info!(api = %config.base_url(), "TTT terminal starting");

    // Create app before touching the terminal so setup errors print normally
    let mut app = App::new(config)?;
    if let Some(target) = flag_value(&args, "--route") {
        app.navigate(target);
    }
    app.refresh_all_background();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("TTT terminal shutting down");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Medals, campaign ribbons and departments as served by the backend.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Catalog {
    medals: Vec<Medal>,
    campaign_ribbons: Vec<CampaignRibbon>,
    departments: Vec<Department>,
}

/// Print the roster grouped by rank as JSON to stdout.
///
/// Without a rank the provider is used and falls back when the backend is
/// down; with one, the rank is queried directly and failures are reported.
async fn dump_roster(config: &Config, rank: Option<Rank>) -> Result<()> {
    #[derive(Serialize)]
    struct RosterDump<'a> {
        source: &'a str,
        total: usize,
        counts: RankCounts,
        ranks: BTreeMap<Rank, Vec<&'a Member>>,
    }

    eprintln!("Fetching roster from {}...", config.base_url());

    let api = ApiClient::new(config)?;
    let members = match rank {
        Some(rank) => api
            .fetch_members_by_rank(rank)
            .await
            .with_context(|| format!("Failed to fetch rank {}", rank.as_str()))?,
        None => {
            let provider = MemberProvider::new(api, RetryPolicy::from_config(config));
            provider.get_all_members().await
        }
    };

    let dump = RosterDump {
        source: config.base_url(),
        total: members.len(),
        counts: count_by_rank(&members),
        ranks: group_by_rank(&members),
    };

    print_json(&dump)?;

    eprintln!("Done! {} members in {} ranks.", dump.total, dump.ranks.len());
    Ok(())
}

/// Print a single member as JSON to stdout.
async fn dump_member(config: &Config, id: &str) -> Result<()> {
    let api = ApiClient::new(config)?;
    let member = api
        .fetch_member_by_id(id)
        .await
        .with_context(|| format!("Failed to fetch member {}", id))?;
    print_json(&member)
}

/// Print the award and department catalog as JSON to stdout.
async fn dump_catalog(config: &Config) -> Result<()> {
    eprintln!("Fetching catalog from {}...", config.base_url());

    let api = ApiClient::new(config)?;
    let (medals, campaign_ribbons, departments) = futures::try_join!(
        api.fetch_medals(),
        api.fetch_campaign_ribbons(),
        api.fetch_departments()
    )?;

    let catalog = Catalog {
        medals,
        campaign_ribbons,
        departments,
    };
    print_json(&catalog)?;

    eprintln!(
        "Done! {} medals, {} ribbons, {} departments.",
        catalog.medals.len(),
        catalog.campaign_ribbons.len(),
        catalog.departments.len()
    );
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        // Poll for events with timeout to allow background updates
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    // Ctrl+C to quit
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    // Handle input
                    if handle_input(app, key).await? {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                _ => {}
            }
        }

        // Check for completed background tasks
        app.check_background_tasks();
        app.on_tick(Instant::now());

        // Check if we should quit
        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_value() {
        let args: Vec<String> = ["ttt", "--route", "/chronik"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(flag_value(&args, "--route"), Some("/chronik"));
        assert_eq!(flag_value(&args, "--dump-roster"), None);

        let dangling: Vec<String> = ["ttt", "--route"].iter().map(|s| s.to_string()).collect();
        assert_eq!(flag_value(&dangling, "--route"), None);
    }

    #[test]
    fn test_roster_dump_keys_are_wire_ranks() {
        let members = ttt_core::fallback::members();
        let json = serde_json::to_value(group_by_rank(&members)).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert!(keys.contains(&&"offizier".to_string()));
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_catalog_keys_are_camel_case() {
        let members = ttt_core::fallback::members();
        let member = &members[0];
        let catalog = Catalog {
            medals: member.medals.clone(),
            campaign_ribbons: member.campaign_ribbons.clone(),
            departments: member.departments.clone(),
        };
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["medals"].as_array().unwrap().len(), 1);
        assert_eq!(json["campaignRibbons"].as_array().unwrap().len(), 1);
        assert_eq!(json["departments"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_rank_flag_parses_wire_and_display_names() {
        let args: Vec<String> = ["ttt", "--dump-roster", "--rank", "unteroffizier"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rank = flag_value(&args, "--rank").map(str::parse::<Rank>).transpose();
        assert_eq!(rank, Ok(Some(Rank::NonCommissionedOfficer)));
        assert!("general".parse::<Rank>().is_err());
    }

    #[tokio::test]
    async fn test_catalog_dump_reports_unreachable_backend() {
        let config = Config {
            api_base_url: "http://127.0.0.1:9/api/v1".to_string(),
            request_timeout_ms: 100,
            ..Config::default()
        };
        assert!(dump_catalog(&config).await.is_err());
        assert!(dump_roster(&config, Some(Rank::Guest)).await.is_err());
        assert!(dump_member(&config, "member-1").await.is_err());
    }
}

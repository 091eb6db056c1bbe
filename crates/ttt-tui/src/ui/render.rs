use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use ttt_core::content::footer;
use ttt_core::Route;

use crate::app::{App, AppState, ClickRegion, ClickTarget};

use super::styles;
use super::tabs::{aufstellung, home, medien, page};

pub fn render(frame: &mut Frame, app: &App) {
    app.clear_click_regions();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("  {}", app.title());
    let help_hint = "[?] Hilfe";
    let title_len = title.chars().count();

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title_len as u16 + help_hint.len() as u16 + 4)
                as usize,
        )),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    let mut x = area.x + 1;
    for (i, route) in Route::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
            x += 3;
        }
        let label = format!("[{}] {}", i + 1, route.label());
        let width = label.chars().count() as u16;
        let hit = Rect::new(x, area.y, width, 1).intersection(area);
        app.record_click_region(ClickRegion::new(hit, 0, vec![Some(ClickTarget::Tab(i))]));
        x += width;
        if *route == app.current_route {
            spans.push(Span::styled(label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(label, styles::muted_style()));
        }
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.current_route {
        Route::Home => home::render(frame, app, area),
        Route::Aufstellung => aufstellung::render(frame, app, area),
        Route::Medien => medien::render(frame, app, area),
        Route::Chronik | Route::Mitmachen | Route::Impressum | Route::Datenschutz => {
            page::render(frame, app, area)
        }
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = "[r]eload | [q]uit";

    let left_text = match (&app.status_message, app.refreshing) {
        (Some(msg), _) => format!(" {} ", msg),
        (None, true) => " Lade Daten... ".to_string(),
        (None, false) => format!(" Events {} ", footer_line()),
    };
    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.len());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

/// Idle status text: the weekly event schedule from the footer.
fn footer_line() -> &'static str {
    footer().subtitle
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 20, frame.area());

    frame.render_widget(Clear, area);

    let entries: [(&str, &str); 13] = [
        ("Tab / Shift+Tab", "Nächste / vorige Seite"),
        ("1-7", "Seite direkt wählen"),
        ("↑↓ / j k", "Auswahl bewegen"),
        ("g / G", "Erster / letzter Eintrag"),
        ("Enter / Space", "Öffnen / aufklappen"),
        ("Mausklick", "Tab, Link oder Karte wählen"),
        ("Esc", "Karten zuklappen"),
        ("← → / h l", "Banner wechseln (Start)"),
        ("PgUp / PgDn", "Seite scrollen"),
        ("r", "Daten neu laden"),
        ("?", "Hilfe schließen"),
        ("q", "Beenden"),
        ("Ctrl+C", "Sofort beenden"),
    ];

    let mut lines = vec![
        Line::from(Span::styled("  Tastenbelegung", styles::title_style())),
        Line::from(""),
    ];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", key), styles::help_key_style()),
            Span::styled(desc, styles::help_desc_style()),
        ]));
    }

    let block = Block::default()
        .title(" Hilfe ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 10, frame.area());

    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "         ╔╦╗╔╦╗╔╦╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "          ║  ║  ║",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "          ╩  ╩  ╩",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "   Wirklich beenden?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" beenden, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" abbrechen", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use ttt_core::{content, fallback, Config};

    const WIDTH: u16 = 120;

    fn draw_rows(app: &App) -> Vec<String> {
        let backend = TestBackend::new(WIDTH, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let cells = &terminal.backend().buffer().content;
        cells
            .chunks(WIDTH as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn draw(app: &App) -> String {
        draw_rows(app).concat()
    }

    /// Cell where `needle` starts on screen.
    fn locate(app: &App, needle: &str) -> (u16, u16) {
        draw_rows(app)
            .iter()
            .enumerate()
            .find_map(|(y, row)| {
                row.find(needle)
                    .map(|i| (row[..i].chars().count() as u16, y as u16))
            })
            .unwrap()
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let r = centered_rect_fixed(46, 10, Rect::new(0, 0, 30, 8));
        assert_eq!(r, Rect::new(0, 0, 30, 8));
    }

    /// Text only the main area of `route` draws.
    fn body_marker(route: Route) -> String {
        match route {
            Route::Home => " Nächste Events ".to_string(),
            Route::Aufstellung => " Stärke ".to_string(),
            _ => format!("┌ {} ", content::page(route).plain_title()),
        }
    }

    #[test]
    fn test_every_route_renders_its_own_body() {
        let mut app = App::new(Config::default()).unwrap();
        app.members = fallback::members();
        for route in Route::ALL {
            app.current_route = route;
            let screen = draw(&app);
            assert!(screen.contains(&body_marker(route)), "{route}");
            for other in Route::ALL.into_iter().filter(|r| *r != route) {
                assert!(!screen.contains(&body_marker(other)), "{route} shows {other}");
            }
        }
    }

    #[test]
    fn test_roster_body_lists_members() {
        let mut app = App::new(Config::default()).unwrap();
        app.members = fallback::members();
        app.current_route = Route::Aufstellung;
        let screen = draw(&app);
        assert!(screen.contains("TheConen"));
        assert!(screen.contains("Aufstellung (12)"));
    }

    #[test]
    fn test_click_on_tab_navigates() {
        let mut app = App::new(Config::default()).unwrap();
        let (x, y) = locate(&app, "[3] Chronik");
        assert!(app.click(x + 4, y));
        assert_eq!(app.current_route, Route::Chronik);
    }

    #[test]
    fn test_click_on_roster_row_expands_card() {
        let mut app = App::new(Config::default()).unwrap();
        app.members = fallback::members();
        app.current_route = Route::Aufstellung;
        let (x, y) = locate(&app, "TheConen");
        assert!(app.click(x, y));
        assert!(app.roster_state.is_expanded("member-1"));

        // Rank headers are not clickable
        let (x, y) = locate(&app, "Offiziere");
        assert!(!app.click(x, y));
        assert!(app.roster_state.is_expanded("member-1"));
    }

    #[test]
    fn test_quit_overlay_is_drawn() {
        let mut app = App::new(Config::default()).unwrap();
        app.state = AppState::ConfirmingQuit;
        assert!(draw(&app).contains("Wirklich beenden?"));
    }
}

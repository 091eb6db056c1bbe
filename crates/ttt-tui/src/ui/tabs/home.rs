use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ttt_core::content::{home_page, SLIDES};
use ttt_core::utils::strip_html;

use crate::app::App;
use crate::ui::styles;

use super::page::{render_links, render_page_body, split_with_links};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    render_banner(frame, app, rows[0]);

    let columns = split_with_links(rows[1]);
    let page = home_page();
    render_page_body(frame, &page, Vec::new(), app.scroll, columns[0]);

    let event_rows = app.config.upcoming_events_limit.clamp(1, 8) as u16 * 2 + 2;
    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(event_rows), Constraint::Min(5)])
        .split(columns[1]);
    render_events(frame, app, sidebar[0]);
    render_links(frame, app, sidebar[1]);
}

fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    let Some(slide) = SLIDES.get(app.slideshow.current()) else {
        return;
    };

    let mut dots = Vec::new();
    for i in 0..app.slideshow.len() {
        let style = if i == app.slideshow.current() {
            styles::title_style()
        } else {
            styles::muted_style()
        };
        dots.push(Span::styled(if i == app.slideshow.current() { "●" } else { "○" }, style));
        dots.push(Span::raw(" "));
    }
    let remaining = app.slideshow.time_until_advance(Instant::now()).as_secs();
    dots.push(Span::styled(format!(" [←/→] {}s", remaining), styles::muted_style()));

    let lines = vec![
        Line::from(Span::styled(strip_html(slide.title), styles::title_style())),
        Line::from(""),
        Line::from(Span::raw(slide.subtitle)),
        Line::from(""),
        Line::from(dots),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_events(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for event in &app.events {
        lines.push(Line::from(Span::styled(event.title.clone(), styles::heading_style())));
        lines.push(Line::from(vec![
            Span::styled(event.schedule_display(), styles::muted_style()),
            Span::styled(format!("  {}", event.event_type), styles::highlight_style()),
        ]));
    }
    if lines.is_empty() {
        let text = if app.refreshing {
            "  Lade Events..."
        } else {
            "  Keine anstehenden Events"
        };
        lines.push(Line::from(Span::styled(text, styles::muted_style())));
    }

    let block = Block::default()
        .title(" Nächste Events ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

use chrono::Utc;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};
use ttt_core::content;
use ttt_core::models::TwitchStream;
use ttt_core::Route;

use crate::app::App;
use crate::ui::styles;

use super::page::{render_links, render_page_body, split_with_links};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = split_with_links(area);
    let page = content::page(Route::Medien);
    render_page_body(frame, &page, stream_lines(&app.streams), app.scroll, chunks[0]);
    render_links(frame, app, chunks[1]);
}

/// Live stream summary shown above the static channel list.
fn stream_lines(streams: &[TwitchStream]) -> Vec<Line<'static>> {
    let live: Vec<&TwitchStream> = streams.iter().filter(|s| s.is_live).collect();
    if live.is_empty() {
        return Vec::new();
    }

    let now = Utc::now();
    let mut lines = vec![Line::from(Span::styled("Jetzt live", styles::heading_style()))];
    for stream in live {
        let uptime = stream.uptime_display(now).unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled("  ● ", styles::error_style()),
            Span::styled(stream.user_name.clone(), styles::highlight_style()),
            Span::raw(format!("  {}", stream.title)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {} Zuschauer · seit {}", stream.viewer_count, uptime),
            styles::muted_style(),
        )));
    }
    lines.push(Line::from(""));
    lines
}

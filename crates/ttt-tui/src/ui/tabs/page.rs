//! Generic renderer for static content pages.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use ttt_core::content::{self, ContentSection, Page};
use ttt_core::utils::truncate;

use crate::app::{App, ClickRegion, ClickTarget};
use crate::ui::styles;

/// Content on the left, selectable links on the right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = split_with_links(area);
    let page = content::page(app.current_route);
    render_page_body(frame, &page, Vec::new(), app.scroll, chunks[0]);
    render_links(frame, app, chunks[1]);
}

pub fn split_with_links(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area)
}

/// Draw a page's sections, with optional lines placed before them.
pub fn render_page_body(
    frame: &mut Frame,
    page: &Page,
    mut lines: Vec<Line<'static>>,
    scroll: u16,
    area: Rect,
) {
    if !page.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(page.subtitle, styles::muted_style())));
        lines.push(Line::from(""));
    }
    for section in &page.sections {
        lines.extend(section_lines(section));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title(format!(" {} ", page.plain_title()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

pub fn section_lines(section: &ContentSection) -> Vec<Line<'static>> {
    match section {
        ContentSection::Heading { title, subtitle } => {
            let mut lines = vec![Line::from(Span::styled(*title, styles::heading_style()))];
            if let Some(subtitle) = subtitle {
                lines.push(Line::from(Span::raw(*subtitle)));
            }
            lines
        }
        ContentSection::Paragraph(text) => vec![Line::from(Span::raw(*text))],
        ContentSection::Links { title, links } => {
            let mut lines = vec![Line::from(Span::styled(*title, styles::heading_style()))];
            for link in links {
                let mut spans = vec![
                    Span::raw("  → "),
                    Span::styled(link.label, styles::link_style()),
                ];
                if let Some(description) = link.description {
                    spans.push(Span::styled(format!("  {}", description), styles::muted_style()));
                }
                lines.push(Line::from(spans));
            }
            lines
        }
        ContentSection::Timeline(entries) => entries
            .iter()
            .flat_map(|entry| {
                [
                    Line::from(vec![
                        Span::styled(format!("{:<12}", entry.date), styles::highlight_style()),
                        Span::styled(entry.title, styles::heading_style()),
                        Span::styled(format!("  [{}]", entry.kind.label()), styles::muted_style()),
                    ]),
                    Line::from(Span::raw(format!("{:<12}{}", "", entry.description))),
                ]
            })
            .collect(),
        ContentSection::Stats(stats) => {
            let mut spans = Vec::new();
            for (i, stat) in stats.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("   │   ", styles::muted_style()));
                }
                spans.push(Span::styled(stat.value, styles::title_style()));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(stat.label, styles::muted_style()));
            }
            vec![Line::from(spans)]
        }
        ContentSection::Bullets { title, items } => {
            let mut lines = vec![Line::from(Span::styled(*title, styles::heading_style()))];
            lines.extend(items.iter().map(|item| Line::from(format!("  • {}", item))));
            lines
        }
    }
}

pub fn render_links(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(6) as usize;
    let links = app.current_links();

    let items: Vec<ListItem> = links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let marker = if link.is_internal() { "»" } else { "↗" };
            let style = if i == app.link_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            let label = truncate(&link.label, width);
            ListItem::new(Line::from(format!("{} {}", marker, label))).style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Links ({}) ", links.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let inner = block.inner(area);
    let list = List::new(items).block(block);

    let mut state = ListState::default();
    if !links.is_empty() {
        state.select(Some(app.link_selection));
    }

    frame.render_stateful_widget(list, area, &mut state);

    let rows = (0..links.len()).map(|i| Some(ClickTarget::Link(i))).collect();
    app.record_click_region(ClickRegion::new(inner, state.offset(), rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_core::content::{Link, Stat, TimelineEntry, TimelineKind};

    #[test]
    fn test_heading_with_subtitle_is_two_lines() {
        let lines = section_lines(&ContentSection::Heading {
            title: "Struktur",
            subtitle: Some("ORBAT"),
        });
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_timeline_entry_shows_kind_label() {
        let lines = section_lines(&ContentSection::Timeline(vec![TimelineEntry {
            date: "2013",
            title: "Gründung",
            description: "Das TTT entsteht.",
            kind: TimelineKind::Anniversary,
        }]));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].to_string().contains("[Jubiläum]"));
    }

    #[test]
    fn test_links_and_stats_render() {
        let lines = section_lines(&ContentSection::Links {
            title: "Links",
            links: vec![Link::described("Wiki", "https://wiki.tacticalteam.de", "Handbuch")],
        });
        assert!(lines[1].to_string().contains("Wiki  Handbuch"));

        let lines = section_lines(&ContentSection::Stats(vec![
            Stat { value: "80+", label: "Mitglieder" },
            Stat { value: "2013", label: "Gegründet" },
        ]));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].to_string().contains("2013 Gegründet"));
    }
}

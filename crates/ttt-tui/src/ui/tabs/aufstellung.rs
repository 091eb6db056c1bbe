//! Roster page: members grouped by rank, one expandable card at a time.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use ttt_core::roster::{
    format_member_since, group_by_rank, has_expandable_content, member_year,
    sorted_campaign_ribbons,
};
use ttt_core::utils::truncate;
use ttt_core::{Member, Rank};

use crate::app::{App, ClickRegion, ClickTarget};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_roster_list(frame, app, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(chunks[1]);

    render_rank_counts(frame, app, right[0]);
    render_member_card(frame, app, right[1]);
}

fn render_roster_list(frame: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    let mut rows: Vec<Option<ClickTarget>> = Vec::new();
    let mut selected_row = None;
    let mut index = 0;

    for (rank, members) in group_by_rank(&app.members) {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} ({})", rank.plural_name(), members.len()),
            styles::rank_style(rank).add_modifier(Modifier::BOLD),
        ))));
        rows.push(None);

        for member in members {
            if index == app.roster_selection {
                selected_row = Some(items.len());
            }
            let marker = if app.roster_state.is_expanded(&member.id) {
                "▾"
            } else if has_expandable_content(member) {
                "▸"
            } else {
                " "
            };
            let year = member_year(&member.member_since)
                .map(|y| format!("seit {}", y))
                .unwrap_or_default();
            let style = if index == app.roster_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            items.push(
                ListItem::new(Line::from(format!(
                    "  {} {:<20} {}",
                    marker,
                    truncate(&member.name, 20),
                    year
                )))
                .style(style),
            );
            rows.push(Some(ClickTarget::RosterEntry(index)));
            index += 1;
        }
    }

    if app.members.is_empty() {
        let text = if app.refreshing {
            "  Lade Aufstellung..."
        } else {
            "  Keine Mitglieder"
        };
        items.push(ListItem::new(Line::from(Span::styled(text, styles::muted_style()))));
    }

    let block = Block::default()
        .title(format!(" Aufstellung ({}) ", app.members.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let inner = block.inner(area);
    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(selected_row);

    frame.render_stateful_widget(list, area, &mut state);
    app.record_click_region(ClickRegion::new(inner, state.offset(), rows));
}

fn render_rank_counts(frame: &mut Frame, app: &App, area: Rect) {
    let counts = app.rank_counts();
    let mut spans = Vec::new();
    for rank in Rank::ALL {
        let count = counts.get(&rank).copied().unwrap_or(0);
        spans.push(Span::styled(format!(" {} ", rank.info().short_name), styles::rank_style(rank)));
        spans.push(Span::raw(format!("{}  ", count)));
    }

    let block = Block::default()
        .title(" Stärke ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_member_card(frame: &mut Frame, app: &App, area: Rect) {
    let member = app.selected_member();
    let expanded = member.is_some_and(|m| app.roster_state.is_expanded(&m.id));

    let (title, lines) = match member {
        Some(member) => (format!(" {} ", member.name), card_lines(member, expanded)),
        None => (" Mitglied ".to_string(), Vec::new()),
    };

    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(expanded));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn card_lines(member: &Member, expanded: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Rang: ", styles::muted_style()),
            Span::styled(member.rank.display_name(), styles::rank_style(member.rank)),
        ]),
        Line::from(vec![
            Span::styled("Dabei seit: ", styles::muted_style()),
            Span::raw(format_member_since(&member.member_since)),
        ]),
    ];

    if !has_expandable_content(member) {
        return lines;
    }
    if !expanded {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Auszeichnungen anzeigen",
            styles::muted_style(),
        )));
        return lines;
    }

    if !member.medals.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Orden", styles::heading_style())));
        for medal in &member.medals {
            lines.push(Line::from(vec![
                Span::styled(format!("  ★ {}", medal.name), styles::highlight_style()),
                Span::styled(format!("  {}", medal.description), styles::muted_style()),
            ]));
        }
    }

    if !member.campaign_ribbons.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Kampagnen", styles::heading_style())));
        for ribbon in sorted_campaign_ribbons(&member.campaign_ribbons) {
            lines.push(Line::from(format!(
                "  ▬ {} ({}, {})",
                ribbon.name, ribbon.campaign, ribbon.year
            )));
        }
    }

    if !member.departments.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Abteilungen", styles::heading_style())));
        for department in &member.departments {
            lines.push(Line::from(vec![
                Span::styled(format!("  ■ {}", department.name), styles::success_style()),
                Span::styled(format!("  {}", department.description), styles::muted_style()),
            ]));
        }
    }

    lines
}

use ratatui::style::{Color, Modifier, Style};
use ttt_core::Rank;

// Color palette
pub const TTT_RED: Color = Color::Rgb(161, 15, 43);
pub const TTT_GRAY: Color = Color::Rgb(64, 64, 62);
pub const ACCENT: Color = Color::Rgb(234, 179, 8);
pub const SECONDARY: Color = Color::Rgb(34, 197, 94);
pub const ERROR: Color = Color::Rgb(220, 38, 38);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 40, 44);

/// Terminal color for a Tailwind text class used by the rank table.
pub fn tailwind_color(class: &str) -> Color {
    match class {
        "text-yellow-500" => Color::Rgb(234, 179, 8),
        "text-gray-300" => Color::Rgb(209, 213, 219),
        "text-gray-400" => Color::Rgb(156, 163, 175),
        "text-green-500" => Color::Rgb(34, 197, 94),
        // blue-900 is unreadable on a dark terminal; lift it to blue-500
        "text-blue-900" => Color::Rgb(59, 130, 246),
        "text-blue-300" => Color::Rgb(147, 197, 253),
        _ => Color::White,
    }
}

pub fn rank_style(rank: Rank) -> Style {
    Style::default().fg(tailwind_color(rank.info().color))
}

// Styles
pub fn title_style() -> Style {
    Style::default().fg(TTT_RED).add_modifier(Modifier::BOLD)
}

pub fn heading_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn success_style() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn link_style() -> Style {
    Style::default().fg(TTT_RED).add_modifier(Modifier::UNDERLINED)
}

pub fn tab_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(TTT_RED)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(TTT_RED)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn status_bar_style() -> Style {
    Style::default().bg(TTT_GRAY).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(Color::White)
}

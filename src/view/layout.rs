//! Layout rendering (top bar, hint bar)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
};

use crate::model::{ActiveSection, Category, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(38), // Category tabs
        ])
        .split(area);

    let search_focused = ui_state.active_section == ActiveSection::Search;
    let search_style = if search_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_query.is_empty() {
        "Type to search the store..."
    } else {
        &ui_state.search_query
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if search_focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(search, chunks[0]);

    let selected = Category::ALL
        .iter()
        .position(|c| *c == ui_state.category)
        .unwrap_or(0);
    let titles: Vec<Line> = Category::ALL.iter().map(|c| Line::from(c.label())).collect();

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Category (←/→) "),
        );
    frame.render_widget(tabs, chunks[1]);
}

pub fn render_hint_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let hint = match ui_state.active_section {
        ActiveSection::Search => "Enter search · ←/→ category · Esc clear · Tab results · Ctrl-Q quit",
        ActiveSection::Results => {
            "↑/↓ select · Enter detail · ←/→ category · Tab search · H help · Q quit"
        }
    };

    let bar = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

//! Main content area rendering (search outcome: prompt, loading, results)

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
};

use crate::model::{ActiveSection, SearchResult, SearchState, UiState};

use super::utils::{calculate_num_width, format_price, render_scrollable_list, truncate_string};

/// Terminals at least this wide get the card grid instead of the row list.
pub const GRID_MIN_WIDTH: u16 = 100;

const CARD_WIDTH: u16 = 32;

pub fn render_main_content(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    search_state: &SearchState,
) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    match search_state {
        SearchState::NotSearchedYet => {
            let content = Paragraph::new(
                "Type in search and press Enter to find something in the store\n\n\
                 Use ←/→ to pick a category\n\
                 Use ↑/↓ to select results\n\
                 Press Enter on a result to see its details",
            )
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
            frame.render_widget(content, area);
        }
        SearchState::Loading => {
            let loading = Paragraph::new("Searching...")
                .style(Style::default().fg(Color::Yellow))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Results ")
                        .padding(Padding::horizontal(1))
                        .border_style(border_style),
                );
            frame.render_widget(loading, area);
        }
        SearchState::NoResults => {
            let nothing = Paragraph::new("Nothing Found")
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Results ")
                        .padding(Padding::horizontal(1))
                        .border_style(border_style),
                );
            frame.render_widget(nothing, area);
        }
        SearchState::Results(results) => {
            if area.width >= GRID_MIN_WIDTH {
                render_result_grid(frame, area, results, ui_state.selected_result, border_style);
            } else {
                render_result_list(frame, area, results, ui_state.selected_result, border_style);
            }
        }
    }
}

fn render_result_list(
    frame: &mut Frame,
    area: Rect,
    results: &[SearchResult],
    selected_index: usize,
    border_style: Style,
) {
    let num_width = calculate_num_width(results.len());
    let content_width = area.width.saturating_sub(4) as usize;

    // " {num}  {name}  {artist}  {kind}  {price}"
    let price_width = 12;
    let kind_width = 12;
    let fixed = 1 + num_width + 2 + 2 + 2 + kind_width + 2 + price_width;
    let remaining = content_width.saturating_sub(fixed);
    let name_width = (remaining * 55) / 100;
    let artist_width = remaining.saturating_sub(name_width);

    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let artist = if result.artist.is_empty() {
                "Unknown"
            } else {
                &result.artist
            };
            let row = format!(
                " {:>num_width$}  {}  {}  {}  {:>price_width$}",
                i + 1,
                truncate_string(&result.name, name_width),
                truncate_string(artist, artist_width),
                truncate_string(result.kind_for_display(), kind_width),
                format_price(result.price, &result.currency),
            );

            let style = if i == selected_index {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(row).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results ({}) ", results.len()))
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, area, items, selected_index, block);
}

fn render_result_grid(
    frame: &mut Frame,
    area: Rect,
    results: &[SearchResult],
    selected_index: usize,
    border_style: Style,
) {
    let columns = (area.width.saturating_sub(4) / CARD_WIDTH).max(1) as usize;
    let card_text_width = CARD_WIDTH as usize - 2;

    let items: Vec<ListItem> = results
        .chunks(columns)
        .enumerate()
        .map(|(row_index, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(col_index, result)| {
                    let index = row_index * columns + col_index;
                    let artist = if result.artist.is_empty() {
                        "Unknown"
                    } else {
                        &result.artist
                    };
                    let card = truncate_string(
                        &format!("{} · {}", result.name, artist),
                        card_text_width,
                    );

                    let style = if index == selected_index {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Span::styled(format!("{}  ", card), style)
                })
                .collect();
            ListItem::new(Line::from(spans))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results ({}) ", results.len()))
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    // Scroll by grid row; the selected card is highlighted by span style.
    render_scrollable_list(frame, area, items, selected_index / columns, block);
}

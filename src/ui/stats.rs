//! Summary counter card rendering

use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::Counter;
use crate::theme::{CARD_BG, NAVY, TEXT_DARK};

/// Render one card per counter, splitting the area evenly
pub fn render_counter_cards(area: Rect, counters: &[Counter], frame: &mut Frame) {
    if counters.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, counters.len() as u32); counters.len()];
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .spacing(1)
        .split(area);

    for (counter, card_area) in counters.iter().zip(card_layout.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(NAVY))
            .style(Style::default().bg(CARD_BG));

        let content = vec![
            Line::from(Span::styled(
                counter.label,
                Style::default().fg(NAVY).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                counter.value.to_string(),
                Style::default().fg(TEXT_DARK).add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, *card_area);
    }
}

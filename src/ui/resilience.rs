//! Community Resilience Index tab

use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::models::ResilienceIndex;
use crate::theme::{AMBER, CARD_BG, NAVY, TEXT_DARK};

pub fn render_resilience_tab(area: Rect, cri: &ResilienceIndex, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(3), // Description
            Constraint::Length(7), // Score card
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(Span::styled(
        "Community Resilience Index (CRI)",
        Style::default().fg(NAVY).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, layout[0]);

    let description = Paragraph::new(ResilienceIndex::DESCRIPTION).wrap(Wrap { trim: true });
    frame.render_widget(description, layout[1]);

    let card = Block::default()
        .title(" Sample CRI Score ")
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(NAVY))
        .style(Style::default().bg(CARD_BG).fg(TEXT_DARK));
    let inner = card.inner(layout[2]);
    frame.render_widget(card, layout[2]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Score
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Level
        ])
        .margin(1)
        .split(inner);

    let score = Paragraph::new(Span::styled(
        cri.score_label(),
        Style::default().fg(NAVY).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(score, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(AMBER).bg(CARD_BG))
        .ratio(cri.ratio())
        .label("");
    frame.render_widget(gauge, rows[1]);

    let level = Paragraph::new(Line::from(vec![
        Span::raw("Resilience Level: "),
        Span::styled(cri.level, Style::default().add_modifier(Modifier::BOLD)),
    ]));
    frame.render_widget(level, rows[2]);
}

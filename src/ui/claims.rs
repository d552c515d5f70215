//! Filter bar and claims table rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::App;
use crate::theme::{ACTION_BLUE, NAVY, TEXT_MUTED, TEXT_ON_NAVY};

const HEADERS: [&str; 7] = [
    "Claim ID",
    "Name / Community",
    "Type",
    "Village",
    "Status",
    "Schemes",
    "Action",
];

/// Render the single-line filter bar
pub fn render_filter_bar(area: Rect, app: &App, frame: &mut Frame) {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let value = Style::default().fg(TEXT_ON_NAVY).bg(NAVY);

    let line = Line::from(vec![
        Span::styled("Filter : ", label),
        Span::styled(format!(" Type: {} ", app.claim_filter.label()), value),
        Span::raw("  "),
        Span::styled(format!(" Village: {} ", app.village_label()), value),
        Span::styled("   f: type  v: village", Style::default().fg(TEXT_MUTED)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the filtered claims table with the row cursor
pub fn render_claims_table(area: Rect, app: &mut App, frame: &mut Frame) {
    let rows: Vec<Row> = app
        .visible_claims()
        .into_iter()
        .map(|claim| {
            Row::new(vec![
                Cell::from(claim.id.clone()),
                Cell::from(claim.name.clone()),
                Cell::from(claim.claim_type.label()),
                Cell::from(claim.village.clone()),
                Cell::from(claim.status.clone()),
                Cell::from(claim.schemes_label()),
                Cell::from(Span::styled("[View]", Style::default().fg(ACTION_BLUE))),
            ])
        })
        .collect();

    let empty = rows.is_empty();

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(
            Style::default()
                .fg(TEXT_ON_NAVY)
                .bg(NAVY)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let widths = [
        Constraint::Length(10),
        Constraint::Min(18),
        Constraint::Length(5),
        Constraint::Length(13),
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(7),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(NAVY))
        .title(" Claims ");

    if empty {
        let paragraph = Paragraph::new("No claims match the current filters.")
            .style(Style::default().fg(TEXT_MUTED))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
    app.table_area = Some(area);
}

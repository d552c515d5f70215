//! Claim details modal

use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::helpers::{centered_rect, wrap_text};
use crate::models::{scheme_info, Claim};
use crate::theme::{NAVY, SCHEME_BG, TEXT_DARK, TEXT_MUTED};

const MODAL_WIDTH: u16 = 72;

/// Build the modal body: claim summary then one section per scheme
pub fn claim_detail_lines(claim: &Claim, text_width: usize) -> Vec<Line<'static>> {
    let bold = Style::default().fg(TEXT_DARK).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(TEXT_DARK);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name: ", bold),
            Span::styled(claim.name.clone(), body),
        ]),
        Line::from(vec![
            Span::styled("Type: ", bold),
            Span::styled(claim.claim_type.label(), body),
        ]),
        Line::from(vec![
            Span::styled("Village: ", bold),
            Span::styled(claim.village.clone(), body),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Recommended Schemes",
            Style::default().fg(NAVY).add_modifier(Modifier::BOLD),
        )),
    ];

    if claim.schemes.is_empty() {
        lines.push(Line::from(Span::styled(
            "No schemes recommended.",
            Style::default().fg(TEXT_MUTED),
        )));
    }

    for scheme in &claim.schemes {
        let info = scheme_info(scheme);
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            scheme.clone(),
            Style::default()
                .fg(NAVY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));

        for (label, text) in [
            ("Reason", info.reason),
            ("Benefits", info.benefits),
            ("Impact", info.impact),
            ("Suggested action", info.suggestion),
        ] {
            let prefix = format!("{}: ", label);
            let prefix_width = prefix.chars().count();
            let indent = " ".repeat(prefix_width);
            let wrapped = wrap_text(text, text_width.saturating_sub(prefix_width));
            for (i, part) in wrapped.into_iter().enumerate() {
                let lead = if i == 0 {
                    Span::styled(prefix.clone(), bold)
                } else {
                    Span::raw(indent.clone())
                };
                lines.push(Line::from(vec![lead, Span::styled(part, body)]));
            }
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "↑↓: Scroll   Esc / c: Close   (click outside to dismiss)",
        Style::default().fg(TEXT_MUTED),
    )));

    lines
}

/// Render the modal over `area` scrolled down by `scroll` lines.
///
/// Returns the bounds it occupies and the scroll offset actually applied,
/// which is clamped so the last line stays on the bottom row.
pub fn render_claim_modal(
    area: Rect,
    claim: &Claim,
    scroll: u16,
    frame: &mut Frame,
) -> (Rect, u16) {
    let text_width = MODAL_WIDTH.min(area.width).saturating_sub(4) as usize;
    let lines = claim_detail_lines(claim, text_width);

    // Borders plus content, capped to the screen
    let height = (lines.len() as u16).saturating_add(2);
    let modal_area = centered_rect(MODAL_WIDTH, height, area);

    let block = Block::default()
        .title(" Claim Details ")
        .title_style(Style::default().fg(NAVY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(NAVY))
        .style(Style::default().bg(SCHEME_BG))
        .padding(ratatui::widgets::Padding::horizontal(1));

    let visible = modal_area.height.saturating_sub(2);
    let max_scroll = (lines.len() as u16).saturating_sub(visible);
    let scroll = scroll.min(max_scroll);

    frame.render_widget(Clear, modal_area);
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        modal_area,
    );

    (modal_area, scroll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClaimBook;
    use crate::models::schemes::PLACEHOLDER;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_detail_lines_list_every_scheme() {
        let book = ClaimBook::sample();
        let claim = book.get("IFR-001").unwrap();
        let text = text_of(&claim_detail_lines(claim, 200));
        assert!(text.contains("Name: Nek Ram"));
        assert!(text.contains("Type: IFR"));
        for scheme in &claim.schemes {
            assert!(text.contains(scheme.as_str()));
        }
        assert!(text.contains("Reason: Beneficiary has kutcha or semi-pucca house and low income."));
    }

    #[test]
    fn test_detail_lines_unknown_scheme_placeholder() {
        let mut claim = ClaimBook::sample().claims.remove(1);
        claim.schemes = vec!["UNKNOWN".to_string()];
        let text = text_of(&claim_detail_lines(&claim, 200));
        assert!(text.contains(&format!("Reason: {}", PLACEHOLDER)));
        assert!(text.contains(&format!("Benefits: {}", PLACEHOLDER)));
        assert!(text.contains(&format!("Impact: {}", PLACEHOLDER)));
    }

    #[test]
    fn test_detail_lines_fit_text_width() {
        let book = ClaimBook::sample();
        let claim = book.get("IFR-001").unwrap();
        let labelled = ["Reason: ", "Benefits: ", "Impact: ", "Suggested action: "];
        let mut checked = 0;
        for line in claim_detail_lines(claim, 40) {
            let lead = line.spans.first().map(|s| s.content.as_ref()).unwrap_or("");
            let is_text = labelled.contains(&lead) || (!lead.is_empty() && lead.trim().is_empty());
            if !is_text {
                continue;
            }
            let width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
            assert!(width <= 40, "{:?} is {} wide", line, width);
            checked += 1;
        }
        assert!(checked > 12);
    }

    #[test]
    fn test_detail_lines_no_schemes() {
        let mut claim = ClaimBook::sample().claims.remove(0);
        claim.schemes.clear();
        let text = text_of(&claim_detail_lines(&claim, 80));
        assert!(text.contains("No schemes recommended."));
    }
}

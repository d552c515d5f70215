//! Top-level frame layout: navbar, active tab content, key hints

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Tabs},
};

use super::claims::{render_claims_table, render_filter_bar};
use super::modal::render_claim_modal;
use super::resilience::render_resilience_tab;
use super::stats::render_counter_cards;
use crate::app::App;
use crate::models::{ResilienceIndex, Tab, SUMMARY_COUNTERS};
use crate::theme::{NAVY, NAVY_ACTIVE, TEXT_ON_NAVY};

/// Draw the whole dashboard for the current state
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.table_area = None;

    // Navbar, content, bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_navbar(main_layout[0], app.active_tab, frame);

    match app.active_tab {
        Tab::DecisionSupport => render_decision_support(main_layout[1], app, frame),
        Tab::Resilience => {
            render_resilience_tab(main_layout[1], &ResilienceIndex::sample(), frame)
        }
    }

    let hints = if app.selected_claim.is_some() {
        " ↑↓: Scroll | Esc/c: Close | q: Quit "
    } else {
        " Tab/1/2: Switch tab | ↑↓: Move | Enter: View | f: Type | v: Village | q: Quit "
    };
    let keybindings =
        Paragraph::new(hints).style(Style::default().fg(TEXT_ON_NAVY).bg(NAVY));
    frame.render_widget(keybindings, main_layout[2]);
}

fn render_navbar(area: Rect, active: Tab, frame: &mut Frame) {
    let navbar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let tabs = Tabs::new(Tab::ALL.iter().map(|t| format!(" {} ", t.label())))
        .select(active.index())
        .style(Style::default().fg(TEXT_ON_NAVY).bg(NAVY))
        .highlight_style(
            Style::default()
                .bg(NAVY_ACTIVE)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, navbar[0]);

    let title = Paragraph::new("FRA Web GIS ")
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(TEXT_ON_NAVY)
                .bg(NAVY)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, navbar[1]);
}

fn render_decision_support(area: Rect, app: &mut App, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Counter cards
            Constraint::Length(1), // Filter bar
            Constraint::Min(3),    // Claims table
        ])
        .spacing(1)
        .split(area);

    render_counter_cards(layout[0], &SUMMARY_COUNTERS, frame);
    render_filter_bar(layout[1], app, frame);
    render_claims_table(layout[2], app, frame);

    // Modal is drawn last so it sits above the table
    let scroll = app.modal_scroll;
    let modal = app
        .selected()
        .cloned()
        .map(|claim| render_claim_modal(area, &claim, scroll, frame));
    app.modal_area = modal.map(|(rect, _)| rect);
    if let Some((_, scroll)) = modal {
        app.modal_scroll = scroll;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClaimBook;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App) -> String {
        render_sized(app, 120, 40)
    }

    fn render_sized(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_decision_support_tab_shows_claims_and_counters() {
        let mut app = App::new(ClaimBook::sample());
        let screen = render(&mut app);
        assert!(screen.contains("Accepted IFR Claims"));
        assert!(screen.contains("120"));
        assert!(screen.contains("IFR-001"));
        assert!(screen.contains("CR-005"));
        assert!(app.modal_area.is_none());
    }

    #[test]
    fn test_resilience_tab_shows_score() {
        let mut app = App::new(ClaimBook::sample());
        app.select_tab(Tab::Resilience);
        let screen = render(&mut app);
        assert!(screen.contains("68 / 100"));
        assert!(screen.contains("Moderate"));
        assert!(!screen.contains("IFR-001"));
    }

    #[test]
    fn test_selected_claim_renders_modal_and_records_bounds() {
        let mut app = App::new(ClaimBook::sample());
        app.select_claim("CR-005");
        let screen = render(&mut app);
        assert!(screen.contains("Claim Details"));
        assert!(screen.contains("DAJGUA"));
        let modal = app.modal_area.unwrap();
        assert!(modal.width > 0 && modal.height > 0);
    }

    #[test]
    fn test_long_modal_scrolls_to_every_scheme_on_small_screen() {
        let mut app = App::new(ClaimBook::sample());
        app.select_claim("IFR-001");

        let top = render_sized(&mut app, 80, 24);
        assert!(top.contains("Name: Nek Ram"));
        assert!(!top.contains("100 days guaranteed"));

        for _ in 0..100 {
            app.scroll_modal_down();
        }
        let bottom = render_sized(&mut app, 80, 24);
        assert!(bottom.contains("100 days guaranteed"));
        assert!(bottom.contains("Esc / c: Close"));
        assert!(!bottom.contains("Name: Nek Ram"));

        // Clamped to the last page, so one step up moves the view at once
        let clamped = app.modal_scroll;
        assert!(clamped > 0 && clamped < 100);
        app.scroll_modal_up();
        assert_eq!(app.modal_scroll, clamped - 1);
    }

    #[test]
    fn test_claims_table_area_tracked_per_tab() {
        let mut app = App::new(ClaimBook::sample());
        render(&mut app);
        let area = app.table_area.unwrap();

        // First claim row sits under the top border and the header
        app.click(area.x + 5, area.y + 2);
        assert_eq!(app.selected_claim.as_deref(), Some("IFR-001"));

        app.close_modal();
        app.select_tab(Tab::Resilience);
        render(&mut app);
        assert!(app.table_area.is_none());
    }

    #[test]
    fn test_rerender_same_tab_is_stable() {
        let mut app = App::new(ClaimBook::sample());
        let first = render(&mut app);
        app.select_tab(Tab::DecisionSupport);
        let second = render(&mut app);
        assert_eq!(first, second);
    }
}

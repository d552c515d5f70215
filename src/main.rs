mod app;
mod backend;
mod cli;
mod config;
mod error;
mod models;
mod proxy;
mod routes;
mod rules;
mod server;
mod state;
mod theme;
mod ui;

use std::fs::{self, OpenOptions};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use app::App;
use backend::BackendClient;
use cli::{CliAction, Command};
use config::ServerConfig;
use models::{ClaimBook, ClaimType, Tab};
use rules::Row;

fn main() -> io::Result<()> {
    let command = match cli::parse_args()? {
        CliAction::Help => {
            cli::print_usage();
            return Ok(());
        }
        CliAction::Version => {
            println!("fra-dss {}", cli::VERSION);
            return Ok(());
        }
        CliAction::Run(command) => command,
    };

    match command {
        Command::Dashboard { claims_path } => run_dashboard(claims_path),
        Command::Serve { port } => run_serve(port),
        Command::Rules {
            claim_type,
            input,
            json,
        } => run_rules(claim_type, &input, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log file for the dashboard; stdout belongs to the terminal UI
fn dashboard_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("fra-dss").join("dashboard.log"))
}

fn init_dashboard_logging() {
    let Some(path) = dashboard_log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_dashboard(claims_path: Option<PathBuf>) -> io::Result<()> {
    init_dashboard_logging();

    let claims = match claims_path {
        Some(path) => ClaimBook::load(&path)?,
        None => ClaimBook::sample(),
    };
    tracing::info!(claims = claims.claims.len(), "starting dashboard");
    let mut app = App::new(claims);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key.code),
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    app.click(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) {
    // The modal captures everything except quit
    if app.selected_claim.is_some() {
        match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Esc | KeyCode::Char('c') => app.close_modal(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_modal_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_modal_up(),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('1') => app.select_tab(Tab::DecisionSupport),
        KeyCode::Char('2') => app.select_tab(Tab::Resilience),
        _ if app.active_tab != Tab::DecisionSupport => {}
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Enter => app.open_selected_row(),
        KeyCode::Char('f') => app.cycle_claim_filter(),
        KeyCode::Char('v') => app.cycle_village_filter(),
        _ => {}
    }
}

fn run_serve(port: Option<u16>) -> io::Result<()> {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();

    let backend = BackendClient::from_env().map_err(|err| {
        tracing::error!(error = %err, "backend client initialization failed");
        io::Error::other(err)
    })?;
    let mut config = ServerConfig::load().map_err(io::Error::other)?;
    if let Some(port) = port {
        config.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::start_server(config, Arc::new(backend)))
}

fn run_rules(claim_type: ClaimType, input: &Path, json: bool) -> io::Result<()> {
    let invalid = |err: rules::RuleError| io::Error::new(io::ErrorKind::InvalidData, err);

    let contents = fs::read_to_string(input)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    let results = Row::many_from_value(value)
        .map_err(invalid)?
        .iter()
        .map(|row| rules::evaluate(claim_type, row))
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", rules::format_report(claim_type, &results));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(ClaimBook::sample())
    }

    #[test]
    fn test_keys_switch_tabs() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_tab, Tab::Resilience);
        handle_key(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::DecisionSupport);
    }

    #[test]
    fn test_enter_opens_and_esc_closes_modal() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Down);
        handle_key(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_claim.as_deref(), Some("CR-005"));

        // Navigation is ignored while the modal is open
        handle_key(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_tab, Tab::DecisionSupport);

        handle_key(&mut app, KeyCode::Esc);
        assert!(app.selected_claim.is_none());
    }

    #[test]
    fn test_table_keys_ignored_on_resilience_tab() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Char('2'));
        handle_key(&mut app, KeyCode::Enter);
        assert!(app.selected_claim.is_none());
    }

    #[test]
    fn test_arrows_scroll_open_modal() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Enter);
        handle_key(&mut app, KeyCode::Down);
        handle_key(&mut app, KeyCode::Char('j'));
        assert_eq!(app.modal_scroll, 2);
        handle_key(&mut app, KeyCode::Char('k'));
        assert_eq!(app.modal_scroll, 1);
        // The row cursor stays put while the modal is open
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_quit_from_modal() {
        let mut app = app();
        handle_key(&mut app, KeyCode::Enter);
        handle_key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}

use anyhow::Context;
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tui_dialog::config::load_json;
use tui_dialog::{
    dispatch_dialog_key, ActionContext, ActionOutcome, ActionRegistry, Dialog, DialogProperties,
    Renderable,
};

const CONFIG_ENV: &str = "TUI_DIALOG_CONFIG";
const LOG_FILTER_ENV: &str = "TUI_DIALOG_LOG";
const LOG_FILE_ENV: &str = "TUI_DIALOG_LOG_FILE";
const MAX_EVENT_LINES: usize = 8;
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const DEFAULT_CONFIG: &str = r#"{
    "id": "demo_dialog",
    "title": "Save changes",
    "open": true,
    "cancel_action": "on_cancel",
    "cancel_label": "Discard",
    "validate_label": "Save",
    "partial": { "body": "You have unsaved changes.\nSave them before leaving?" }
}"#;

/// Dialog attributes plus the pages this host can resolve by id.
#[derive(Debug, Deserialize)]
struct HostConfig {
    #[serde(flatten)]
    dialog: DialogProperties,
    #[serde(default)]
    pages: BTreeMap<String, String>,
}

impl HostConfig {
    fn load(path: Option<&PathBuf>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Ok(load_json(path)?),
            None => serde_json::from_str(DEFAULT_CONFIG).context("invalid built-in dialog config"),
        }
    }
}

#[derive(Default)]
struct DemoHost {
    events: Vec<String>,
    close_requested: bool,
}

impl DemoHost {
    fn push_event(&mut self, event: impl Into<String>) {
        self.events.push(event.into());
        if self.events.len() > MAX_EVENT_LINES {
            let overflow = self.events.len() - MAX_EVENT_LINES;
            self.events.drain(..overflow);
        }
    }

    fn record_outcome(&mut self, outcome: &ActionOutcome) {
        if let ActionOutcome::Missing { action } = outcome {
            self.push_event(format!("no callback named `{action}`"));
        }
    }
}

// Host policy: every demo action closes the dialog.
fn record_and_close(ctx: ActionContext<'_, DemoHost>) {
    let action = ctx.action.unwrap_or("?");
    let id = ctx.id.unwrap_or("dialog");
    tracing::info!(dialog = id, action, "action callback");
    if let Some(host) = ctx.gui {
        host.push_event(format!("{id}: `{action}` pressed"));
        host.close_requested = true;
    }
}

fn demo_registry() -> ActionRegistry<DemoHost> {
    let mut registry = ActionRegistry::new();
    for name in ["validate", "cancel", "on_cancel", "onCancel"] {
        registry.register(name, record_and_close);
    }
    registry
}

fn parse_config_path_from_args(args: impl IntoIterator<Item = impl AsRef<str>>) -> Option<PathBuf> {
    let mut args = args
        .into_iter()
        .map(|arg| arg.as_ref().to_string())
        .peekable();
    let mut path: Option<String> = None;
    while let Some(arg) = args.next() {
        if let Some(value) = arg.strip_prefix("--config=") {
            path = Some(value.to_string());
            continue;
        }
        if arg == "--config" {
            if let Some(next) = args.peek() {
                if !next.starts_with('-') {
                    path = Some(next.to_string());
                    let _ = args.next();
                }
            }
        }
    }
    path.filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn config_path() -> Option<PathBuf> {
    parse_config_path_from_args(env::args().skip(1)).or_else(|| {
        env::var(CONFIG_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
    })
}

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    match env::var(LOG_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("failed to create log file {path}"))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn hint_line(dialog: &Dialog) -> Line<'static> {
    let hint = if dialog.is_open() {
        "Tab/←/→ focus · Enter press · Esc cancel"
    } else {
        "o open dialog · q quit"
    };
    Line::from(Span::styled(
        hint.to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ))
}

fn draw(f: &mut Frame, dialog: &Dialog, host: &DemoHost, pages: &BTreeMap<String, String>) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let mut lines = vec![hint_line(dialog), Line::from("")];
    lines.extend(host.events.iter().map(|event| Line::from(event.clone())));
    f.render_widget(Paragraph::new(Text::from(lines)), area);

    let overlay = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    dialog.render(overlay, f.buffer_mut(), pages);
}

struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let config = HostConfig::load(config_path().as_ref())?;
    let mut dialog = match Dialog::new(config.dialog) {
        Ok(dialog) => dialog,
        Err(error) => {
            tracing::error!(%error, "dialog configuration rejected");
            return Err(error.into());
        }
    };
    let pages = config.pages;
    let mut registry = demo_registry();
    let mut host = DemoHost::default();

    let mut stdout = std::io::stdout();
    let _restore_guard = TerminalRestoreGuard;
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut needs_redraw = true;
    let mut drawn_version = dialog.render_version();
    loop {
        if needs_redraw || dialog.render_version() != drawn_version {
            terminal.draw(|f| draw(f, &dialog, &host, &pages))?;
            drawn_version = dialog.render_version();
            needs_redraw = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                if dialog.is_open() {
                    if let Some(outcome) =
                        dispatch_dialog_key(&mut dialog, &mut registry, Some(&mut host), key.code)
                    {
                        host.record_outcome(&outcome);
                    }
                    if host.close_requested {
                        host.close_requested = false;
                        dialog.close();
                    }
                } else {
                    match key.code {
                        KeyCode::Char('o') => dialog.open(),
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    }
                }
                needs_redraw = true;
            }
            Event::Resize(_, _) => needs_redraw = true,
            _ => {}
        }
    }
    Ok(())
}

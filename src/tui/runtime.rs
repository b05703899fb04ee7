//! Terminal lifecycle and the event loop.
//!
//! The loop owns the wizard state. Key presses and a ~100ms tick feed the
//! update function; the one effect it can request, submitting the
//! interview, runs as a spawned task whose outcome comes back over a
//! channel as another message. The UI keeps ticking while a submission is
//! in flight, only the finish control is disabled.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tokio::sync::mpsc;

use crate::api::ScoringClient;
use crate::config::Config;
use crate::tui::theme::{Theme, ThemeVariant};
use crate::tui::view;
use crate::tui::wizard::{self, Command, Msg, WizardState};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run(config: Config, variant: ThemeVariant) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_wizard(&mut terminal, config, variant).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_wizard<B: Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
    variant: ThemeVariant,
) -> Result<()> {
    let theme = Theme::new(variant);
    let client = ScoringClient::new(config.endpoint);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut state = WizardState::new();

    log::info!("Wizard ready, endpoint: {}", client.endpoint());

    loop {
        terminal.draw(|frame| view::draw(frame, &state, &theme))?;

        let mut quit = false;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = wizard::key_to_msg(&state, key) {
                        quit |= dispatch(&mut state, msg, &client, &tx);
                    }
                }
            }
        } else {
            quit |= dispatch(&mut state, Msg::Tick, &client, &tx);
        }

        // Fold in results from any finished submission task.
        while let Ok(msg) = rx.try_recv() {
            quit |= dispatch(&mut state, msg, &client, &tx);
        }

        if quit {
            return Ok(());
        }
    }
}

/// Run one update and execute the command it returns. Returns true when
/// the wizard should quit.
fn dispatch(
    state: &mut WizardState,
    msg: Msg,
    client: &ScoringClient,
    tx: &mpsc::UnboundedSender<Msg>,
) -> bool {
    match wizard::update(state, msg) {
        Command::None => false,
        Command::Quit => true,
        Command::Submit(request) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let msg = match client.submit(&request).await {
                    Ok(feedback) => Msg::SubmitSucceeded(feedback),
                    Err(err) => Msg::SubmitFailed(format!("{err:#}")),
                };
                let _ = tx.send(msg);
            });
            false
        }
    }
}

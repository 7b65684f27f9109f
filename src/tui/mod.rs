//! Terminal UI.

mod input;
mod ui;

pub use input::{KeyAction, key_action, move_cursor};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tictac_rules::Position;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::controller::GameController;
use crate::scheduler::ControllerEvent;

/// Keyboard poll interval; also bounds how late a computer move is drawn.
const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Runs the TUI until the user quits, restoring the terminal afterwards.
pub async fn run_tui(
    controller: GameController,
    events: mpsc::UnboundedReceiver<ControllerEvent>,
) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, controller, events).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

#[instrument(skip_all)]
async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut controller: GameController,
    mut events: mpsc::UnboundedReceiver<ControllerEvent>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut cursor = Position::Center;
    let mut notice: Option<String> = None;

    loop {
        while let Ok(event) = events.try_recv() {
            controller.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &controller, cursor, notice.as_deref()))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = key_action(key.code)
        {
            debug!(?action, "Key action");
            notice = None;
            match action {
                KeyAction::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                KeyAction::Cursor(code) => cursor = move_cursor(cursor, code),
                KeyAction::PlayCursor => notice = play(&mut controller, cursor),
                KeyAction::PlayAt(pos) => {
                    cursor = pos;
                    notice = play(&mut controller, pos);
                }
                KeyAction::NewGame => controller.new_game(),
                KeyAction::Hint => {
                    if let Some(pos) = controller.request_hint() {
                        notice = Some(format!("Hint: {}", pos));
                    }
                }
                KeyAction::ResetScores => controller.reset_scores(),
                KeyAction::ToggleTheme => controller.toggle_theme(),
                KeyAction::ToggleEmojis => controller.toggle_emojis(),
                KeyAction::ToggleMode => controller.toggle_mode(),
            }
        }

        tokio::task::yield_now().await;
    }
}

/// Plays a human move, returning a message when it is refused.
fn play(controller: &mut GameController, pos: Position) -> Option<String> {
    controller.human_move(pos).err().map(|e| e.to_string())
}

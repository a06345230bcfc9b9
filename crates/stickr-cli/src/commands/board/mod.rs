//! Interactive terminal board.
//!
//! Opens one folder, draws its stickers as a grid, and routes key presses
//! first through the navigation controller and then through the board's
//! own bindings. Every change goes through the repositories and is
//! followed by a refetch.

mod input;
mod render;
mod terminal;

use std::time::{Duration, Instant};

use clap::Args;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tracing::debug;

use stickr_board::{ActiveElement, BoardSession, Clipboard, Key, Osc52Clipboard};
use stickr_core::error::AppError;
use stickr_core::types::FolderId;

use self::input::BoardAction;
use self::terminal::TerminalSession;
use crate::output;

/// Arguments for the board command
#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Folder id; a new folder is created when omitted
    pub folder: Option<String>,
}

/// What the keyboard is currently editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Board,
    Rename(String),
    ConfirmDeleteFolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Execute the board command
pub async fn execute(args: &BoardArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let services = super::connect_services(&config).await?;

    let folder_id = match &args.folder {
        Some(id) => FolderId::parse(id)?,
        None => FolderId::generate(),
    };

    let mut session = BoardSession::open(
        services.folders,
        services.stickers,
        &config.board,
        &folder_id,
        Osc52Clipboard::stdout(),
    )
    .await?;

    debug!(folder_id = %session.folder().id, "Board opened");
    let result = run(&mut session).await;
    debug!(closed = session.is_closed(), "Board exited");
    services.stores.close().await;
    result?;

    if session.is_closed() {
        output::print_success("Folder deleted!");
    } else {
        println!("{}", session.share_url());
    }
    Ok(())
}

async fn run<C: Clipboard>(session: &mut BoardSession<C>) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(250));
    let mut mode = Mode::Board;

    while !session.is_closed() {
        session.toasts_mut().prune(Instant::now());
        let size = crossterm::terminal::size()?;
        render::draw(&mut terminal, session, &mode, size)?;

        tokio::select! {
            _ = tick.tick() => {}
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if handle_key(session, &mut mode, &key).await == Flow::Quit {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}

async fn handle_key<C: Clipboard>(
    session: &mut BoardSession<C>,
    mode: &mut Mode,
    key: &crossterm::event::KeyEvent,
) -> Flow {
    let event = input::to_board_event(key);

    match mode {
        Mode::Rename(buffer) => match event.key {
            Key::Escape => *mode = Mode::Board,
            Key::Enter => {
                let name = std::mem::take(buffer);
                *mode = Mode::Board;
                session.rename(&name).await;
            }
            _ => {
                input::edit_text(buffer, &event, false);
            }
        },
        Mode::ConfirmDeleteFolder => {
            let confirmed = matches!(event.key, Key::Char('y' | 'Y'));
            *mode = Mode::Board;
            if confirmed {
                session.delete_folder().await;
            }
        }
        Mode::Board if session.focus().is_composing() => match event.key {
            Key::Escape => {
                session.handle_key(event, ActiveElement::TextArea);
            }
            Key::Enter if !event.modifiers.alt => session.submit_draft().await,
            _ => {
                input::edit_text(session.draft_mut(), &event, true);
            }
        },
        Mode::Board => {
            if session.handle_key(event, ActiveElement::None) {
                return Flow::Continue;
            }
            let Some(action) = input::board_action(&event) else {
                return Flow::Continue;
            };
            match action {
                BoardAction::Quit => return Flow::Quit,
                BoardAction::FocusFirst => session.focus_first(),
                BoardAction::CopyFocused => {
                    if let Some(id) = session.focus().focused() {
                        session.click(id);
                    }
                }
                BoardAction::DeleteFocused => session.delete_focused().await,
                BoardAction::CycleColor => session.cycle_focused_color().await,
                BoardAction::StartRename => *mode = Mode::Rename(session.folder().name.clone()),
                BoardAction::ToggleDarkMode => session.toggle_dark_mode().await,
                BoardAction::Share => session.share_link(),
                BoardAction::ConfirmDeleteFolder => *mode = Mode::ConfirmDeleteFolder,
                BoardAction::Refresh => session.refresh().await,
                BoardAction::DismissToasts => session.toasts_mut().clear(),
            }
        }
    }

    Flow::Continue
}

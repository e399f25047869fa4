//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: locate the terminal, mount the root, loop until quit
//! - `run_loop`: drain messages, draw, poll terminal events
//!
//! A reload drops the mounted root and mounts a fresh one from the settings
//! on disk, reusing the same terminal and message channel.

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use ratatui::DefaultTerminal;
use shutter_app::config::load_settings;
use shutter_app::crash::install_panic_hook;
use shutter_app::message::Message;
use shutter_app::process::process_message;
use shutter_app::{signals, AppRoot, SettingsStore};
use shutter_core::prelude::*;
use shutter_core::Theme;
use tokio::sync::mpsc;

use super::{event, render, startup, terminal::TerminalGuard};

/// Options resolved from the command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_path: PathBuf,
    /// Applies to the first mount only; reloads read the settings file
    pub theme_override: Option<Theme>,
}

/// Run the TUI application
pub async fn run(options: RunOptions) -> Result<()> {
    startup::MountPoint::locate()?;

    let mut guard = TerminalGuard::init()?;

    // Replaces the restoring hook ratatui::try_init set; from here on
    // TerminalGuard's drop is what restores the terminal
    install_panic_hook();

    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let mut settings = startup::initial_settings(&options.config_path, options.theme_override);
    loop {
        let mut root = AppRoot::mount(SettingsStore::new(settings), msg_tx.clone());
        run_loop(
            guard.terminal(),
            &mut root,
            &mut msg_rx,
            &msg_tx,
            &options.config_path,
        )?;

        if !root.state.wants_reload() {
            break;
        }
        drop(root);

        if discard_pending(&mut msg_rx) {
            info!("Quit requested during reload");
            break;
        }
        info!("Reloading application root");
        settings = load_settings(&options.config_path);
    }

    info!("Shutter Tester exiting");
    Ok(())
}

/// Main event loop for one mounted root
fn run_loop(
    terminal: &mut DefaultTerminal,
    root: &mut AppRoot,
    msg_rx: &mut mpsc::UnboundedReceiver<Message>,
    msg_tx: &mpsc::UnboundedSender<Message>,
    config_path: &Path,
) -> Result<()> {
    while !root.state.should_quit() && !root.state.wants_reload() {
        // Process external messages (signals, listeners, background tasks)
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(root, msg, msg_tx, config_path);
        }
        if root.state.should_quit() || root.state.wants_reload() {
            break;
        }

        draw(terminal, root)?;

        if let Some(message) = event::poll()? {
            dispatch(root, message, msg_tx, config_path);
        }
    }
    Ok(())
}

/// Run one message through the update loop.
///
/// A panic in a handler is reported by the panic hook as a global error, so
/// it reaches the crash overlay through the channel.
fn dispatch(
    root: &mut AppRoot,
    message: Message,
    msg_tx: &mpsc::UnboundedSender<Message>,
    config_path: &Path,
) {
    let state = &mut root.state;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        process_message(state, message, msg_tx, config_path)
    }));
    if outcome.is_err() {
        warn!("Message handler panicked; state may be partially updated");
    }
}

fn draw(terminal: &mut DefaultTerminal, root: &mut AppRoot) -> Result<()> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        terminal.draw(|frame| render::view(frame, root)).map(|_| ())
    }));
    match outcome {
        Ok(result) => Ok(result?),
        Err(_) => Err(Error::terminal("rendering failed outside the error boundary")),
    }
}

/// Drop messages addressed to the unmounted root; true if one was `Quit`
fn discard_pending(msg_rx: &mut mpsc::UnboundedReceiver<Message>) -> bool {
    let mut quit = false;
    while let Ok(msg) = msg_rx.try_recv() {
        match msg {
            Message::Quit => quit = true,
            other => debug!("Discarding {:?} across reload", other),
        }
    }
    quit
}

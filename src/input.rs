use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context, Error, Result};
use crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers};

/// Messages from the input listener to the driver loop.
#[derive(Debug)]
pub enum Event {
    /// Ctrl-C typed at the terminal, or SIGINT/SIGTERM/SIGHUP from outside.
    Interrupt,
    /// Reading the terminal failed; the listener has stopped.
    InputFailed(Error),
}

pub fn is_interrupt(ev: &event::Event) -> bool {
    matches!(
        ev,
        event::Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL)
    )
}

/// Asks the driver to stop. Returns false once the driver is gone.
pub fn interrupt(tx: &Sender<Event>) -> bool {
    tx.send(Event::Interrupt).is_ok()
}

/// Routes process termination signals into the driver's event channel. Raw
/// mode stops the terminal from raising SIGINT itself, so this covers signals
/// sent by other processes.
pub fn on_signal(tx: Sender<Event>) -> Result<()> {
    ctrlc::set_handler(move || {
        tracing::info!("termination signal received");
        interrupt(&tx);
    })
    .context("failed to install signal handler")
}

/// Spawns the key listener. It blocks on terminal input forever, forwarding
/// Ctrl-C and dropping every other key.
pub fn listen(tx: Sender<Event>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) if is_interrupt(&ev) => {
                tracing::info!("interrupt received");
                if !interrupt(&tx) {
                    return;
                }
            }
            Ok(ev) => tracing::trace!(?ev, "ignoring input"),
            Err(e) => {
                let _ = tx.send(Event::InputFailed(anyhow!(e)));
                return;
            }
        }
    })
}

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use rolodex_core::PersonRecord;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Events that the TUI can handle.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press event.
    Key(KeyEvent),
    /// A mouse click, scroll or move.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick.
    Tick,
    /// The mount-time fetch finished. Failures arrive as an empty pool.
    PeopleLoaded(Vec<PersonRecord>),
}

/// Polls terminal events and drains results posted by background tasks.
pub struct EventHandler {
    tick_rate: Duration,
    tx: UnboundedSender<AppEvent>,
    rx: UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tick_rate, tx, rx }
    }

    /// Sender for background tasks.
    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    /// Next background result if one is queued, else block until a terminal
    /// event or the tick timeout.
    pub fn next(&mut self) -> Result<AppEvent> {
        if let Ok(ev) = self.rx.try_recv() {
            return Ok(ev);
        }
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Windows reports releases too
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(AppEvent::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(AppEvent::Mouse(mouse)),
                CrosstermEvent::Resize(w, h) => Ok(AppEvent::Resize(w, h)),
                _ => Ok(AppEvent::Tick),
            }
        } else {
            Ok(AppEvent::Tick)
        }
    }
}

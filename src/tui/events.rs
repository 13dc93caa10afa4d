//! Input events and key bindings

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Dashboard events
#[derive(Debug, Clone)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Poll timed out without input
    Tick,
}

/// What a key press asks the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Copy the token contract address
    CopyAddress,
    /// Add the token to the connected wallet
    AddToWallet,
    /// Back control
    Back,
    /// Cycle to the next loaded reserve
    NextReserve,
    Quit,
}

impl Action {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(Action::Quit),
            (KeyCode::Char('c'), _) => Some(Action::CopyAddress),
            (KeyCode::Char('a'), _) => Some(Action::AddToWallet),
            (KeyCode::Char('b'), _) | (KeyCode::Backspace, _) => Some(Action::Back),
            (KeyCode::Tab, _) => Some(Action::NextReserve),
            _ => None,
        }
    }
}

/// Polls crossterm with a fixed tick
pub struct EventLoop {
    tick_rate: Duration,
}

impl EventLoop {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for input
    pub fn poll_event(&self) -> Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) => return Ok(TuiEvent::Key(key)),
                Event::Resize(w, h) => return Ok(TuiEvent::Resize(w, h)),
                _ => {}
            }
        }

        Ok(TuiEvent::Tick)
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

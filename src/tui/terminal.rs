//! Dashboard terminal: owns the draw call and tty restoration

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use tracing::debug;

/// Ratatui terminal for the dashboard.
///
/// A resize to a new size clears the screen before the next frame so stale
/// cells from the old layout are not left behind.
pub struct TerminalManager<B: Backend> {
    terminal: Terminal<B>,
    size: (u16, u16),
    needs_clear: bool,
    /// Raw mode and the alternate screen were entered and must be left on drop
    owns_tty: bool,
}

impl TerminalManager<CrosstermBackend<Stdout>> {
    /// Enter raw mode and the alternate screen on stdout
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let mut manager = Self::with_backend(CrosstermBackend::new(io::stdout()))?;
        manager.owns_tty = true;
        Ok(manager)
    }
}

impl<B: Backend> TerminalManager<B> {
    /// Wrap `backend` without touching tty modes
    pub fn with_backend(backend: B) -> Result<Self> {
        let terminal = Terminal::new(backend)?;
        let area = terminal.size()?;
        Ok(Self {
            terminal,
            size: (area.width, area.height),
            needs_clear: false,
            owns_tty: false,
        })
    }

    /// Record a resize event
    pub fn resized(&mut self, width: u16, height: u16) {
        if (width, height) != self.size {
            debug!("Terminal resized to {}x{}", width, height);
            self.size = (width, height);
            self.needs_clear = true;
        }
    }

    pub fn needs_clear(&self) -> bool {
        self.needs_clear
    }

    /// Draw one dashboard frame
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        if self.needs_clear {
            self.terminal.clear()?;
            self.needs_clear = false;
        }
        self.terminal.draw(render)?;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.terminal.backend_mut()
    }
}

impl<B: Backend> Drop for TerminalManager<B> {
    fn drop(&mut self) {
        if self.owns_tty {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, layout::Rect, widgets::Paragraph};

    fn row(terminal: &TerminalManager<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_draw_renders_frame() {
        let mut terminal = TerminalManager::with_backend(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|f| f.render_widget(Paragraph::new("DAI reserve"), f.area()))
            .unwrap();

        assert!(row(&terminal, 0).starts_with("DAI reserve"));
    }

    #[test]
    fn test_resize_to_same_size_keeps_screen() {
        let mut terminal = TerminalManager::with_backend(TestBackend::new(20, 3)).unwrap();
        terminal.resized(20, 3);
        assert!(!terminal.needs_clear());
    }

    #[test]
    fn test_resize_clears_before_next_frame() {
        let mut terminal = TerminalManager::with_backend(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|f| f.render_widget(Paragraph::new("stale layout"), f.area()))
            .unwrap();

        terminal.backend_mut().resize(30, 4);
        terminal.resized(30, 4);
        assert!(terminal.needs_clear());

        terminal
            .draw(|f| f.render_widget(Paragraph::new("CRV"), Rect::new(0, 1, 30, 1)))
            .unwrap();

        assert!(!terminal.needs_clear());
        assert!(row(&terminal, 0).trim().is_empty());
        assert!(row(&terminal, 1).starts_with("CRV"));
    }
}

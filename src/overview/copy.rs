//! Copy-address acknowledgement
//!
//! Two states, Idle and Copied. Copied carries a single deadline; activating
//! again replaces it, so at most one expiry is ever pending.

use crate::bridge::Clipboard;
use crate::error::Result;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default acknowledgement lifetime
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied { until: Instant },
}

/// Transient "Copied" indicator for the contract-address control
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    state: CopyState,
    feedback: Duration,
}

impl CopyIndicator {
    pub fn new(feedback: Duration) -> Self {
        Self {
            state: CopyState::Idle,
            feedback,
        }
    }

    /// Write `text` to the clipboard and show the acknowledgement.
    ///
    /// A failed write returns the error and leaves the indicator Idle, dropping
    /// any acknowledgement of an earlier copy.
    pub fn activate(
        &mut self,
        clipboard: &mut dyn Clipboard,
        text: &str,
        now: Instant,
    ) -> Result<()> {
        if let Err(e) = clipboard.write_text(text) {
            warn!("Clipboard write failed: {}", e);
            self.state = CopyState::Idle;
            return Err(e);
        }

        if matches!(self.state, CopyState::Copied { .. }) {
            debug!("Copy re-activated, restarting acknowledgement window");
        }
        info!("Copied {} to clipboard", text);
        self.state = CopyState::Copied {
            until: now + self.feedback,
        };
        Ok(())
    }

    /// Expire the acknowledgement once its deadline passes; true when the state changed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            CopyState::Copied { until } if now >= until => {
                self.state = CopyState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending acknowledgement
    pub fn cancel(&mut self) {
        self.state = CopyState::Idle;
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn is_copied(&self) -> bool {
        matches!(self.state, CopyState::Copied { .. })
    }

    /// Tooltip for the copy control
    pub fn tooltip(&self) -> &'static str {
        if self.is_copied() {
            "Copied"
        } else {
            "Copy token contract address"
        }
    }

    /// Glyph for the copy control
    pub fn icon(&self) -> &'static str {
        if self.is_copied() {
            "✓"
        } else {
            "⧉"
        }
    }
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::MockClipboard;
    use crate::error::ReserveError;
    use mockall::predicate::eq;

    #[test]
    fn test_activation_copies_and_acknowledges() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .with(eq("0xabc"))
            .times(1)
            .returning(|_| Ok(()));

        let mut indicator = CopyIndicator::default();
        let t0 = Instant::now();
        indicator.activate(&mut clipboard, "0xabc", t0).unwrap();

        assert!(indicator.is_copied());
        assert_eq!(indicator.tooltip(), "Copied");
    }

    #[test]
    fn test_reverts_no_sooner_than_feedback() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().returning(|_| Ok(()));

        let mut indicator = CopyIndicator::default();
        let t0 = Instant::now();
        indicator.activate(&mut clipboard, "0xabc", t0).unwrap();

        assert!(!indicator.tick(t0 + Duration::from_millis(999)));
        assert!(indicator.is_copied());

        assert!(indicator.tick(t0 + Duration::from_millis(1000)));
        assert_eq!(indicator.state(), CopyState::Idle);
        assert_eq!(indicator.tooltip(), "Copy token contract address");
    }

    #[test]
    fn test_reactivation_restarts_window() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().times(2).returning(|_| Ok(()));

        let mut indicator = CopyIndicator::default();
        let t0 = Instant::now();
        indicator.activate(&mut clipboard, "0xabc", t0).unwrap();
        indicator
            .activate(&mut clipboard, "0xabc", t0 + Duration::from_millis(600))
            .unwrap();

        // First window would have ended here
        assert!(!indicator.tick(t0 + Duration::from_millis(1000)));
        assert!(indicator.tick(t0 + Duration::from_millis(1600)));
    }

    #[test]
    fn test_clipboard_failure_stays_idle() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(ReserveError::Clipboard("denied".to_string())));

        let mut indicator = CopyIndicator::default();
        let result = indicator.activate(&mut clipboard, "0xabc", Instant::now());

        assert!(matches!(result, Err(ReserveError::Clipboard(_))));
        assert!(!indicator.is_copied());
    }

    #[test]
    fn test_failure_after_copy_resets_to_idle() {
        let mut seq = mockall::Sequence::new();
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        clipboard
            .expect_write_text()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ReserveError::Clipboard("denied".to_string())));

        let t0 = Instant::now();
        let mut indicator = CopyIndicator::default();
        indicator.activate(&mut clipboard, "0xabc", t0).unwrap();
        assert!(indicator.is_copied());

        let result = indicator.activate(&mut clipboard, "0xabc", t0 + Duration::from_millis(200));
        assert!(result.is_err());
        assert_eq!(indicator.state(), CopyState::Idle);
    }

    #[test]
    fn test_cancel() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().returning(|_| Ok(()));

        let mut indicator = CopyIndicator::new(Duration::from_secs(5));
        indicator.activate(&mut clipboard, "0x1", Instant::now()).unwrap();
        indicator.cancel();
        assert!(!indicator.is_copied());
    }
}

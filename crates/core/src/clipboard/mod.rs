//! Clipboard module - copy sink contract and the transient "copied" state.

use std::time::{Duration, Instant};

use crate::errors::ClipboardError;

/// How long the "copied" acknowledgment stays visible.
pub const COPY_ACK_WINDOW: Duration = Duration::from_secs(2);

/// Destination for copied text, usually the system clipboard.
pub trait ClipboardSink: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Tracks when something was last copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyAcknowledgement {
    copied_at: Option<Instant>,
}

impl CopyAcknowledgement {
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// True while `now` is within [`COPY_ACK_WINDOW`] of the last copy.
    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .map(|at| now.saturating_duration_since(at) < COPY_ACK_WINDOW)
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.copied_at = None;
    }
}

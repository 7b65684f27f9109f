//! Deferred, cancelable computer turns.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

/// Messages delivered back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The computer's delay has elapsed for game `generation`.
    ComputerMoveDue {
        /// Game generation the move was scheduled for.
        generation: u64,
    },
}

#[derive(Debug)]
struct PendingMove {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Schedules at most one computer move at a time on the tokio runtime.
///
/// Must be used from within a runtime context.
#[derive(Debug)]
pub struct TurnScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<ControllerEvent>,
    pending: Option<PendingMove>,
}

impl TurnScheduler {
    /// Creates a scheduler delivering events on `tx` after `delay`.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<ControllerEvent>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Returns true while a move is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedules a move for `generation`, replacing any pending one.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, generation: u64) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx
                .send(ControllerEvent::ComputerMoveDue { generation })
                .is_err()
            {
                warn!(generation, "Controller gone, dropping computer move");
            }
        });
        debug!(generation, "Computer move scheduled");
        self.pending = Some(PendingMove { generation, handle });
    }

    /// Aborts the pending move, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            debug!(generation = pending.generation, "Pending computer move cancelled");
        }
    }

    /// Marks the move for `generation` as delivered.
    ///
    /// Returns false if no move for that generation was pending.
    pub fn complete(&mut self, generation: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.generation == generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

impl Drop for TurnScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

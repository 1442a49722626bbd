//! Delayed, cancellable tasks grouped by user turn.
//!
//! Every user turn gets a [`TurnHandle`] holding a child token of the
//! scheduler's current generation, which in turn is a child of the root
//! token. Each turn token has one more child for the turn's follow-ups:
//!
//! ```text
//! root ── generation ─┬─ turn 1 ── follow-ups
//!                     └─ turn 2 ── follow-ups
//! ```
//!
//! - `cancel_all` cancels the generation (every in-flight turn) and starts a
//!   fresh one; used when the conversation is cleared.
//! - `shutdown` cancels the root; nothing scheduled afterwards will run.
//! - `begin_turn(true)` cancels only the follow-ups of the previous turn.
//!   Its primary reply is still delivered.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

pub struct TurnScheduler {
    root: CancellationToken,
    generation: Mutex<CancellationToken>,
    latest_followups: Mutex<Option<CancellationToken>>,
    tracker: TaskTracker,
    next_turn_id: AtomicU64,
}

impl TurnScheduler {
    pub fn new() -> Self {
        let root = CancellationToken::new();
        let generation = root.child_token();
        Self {
            root,
            generation: Mutex::new(generation),
            latest_followups: Mutex::new(None),
            tracker: TaskTracker::new(),
            next_turn_id: AtomicU64::new(1),
        }
    }

    /// Opens a new turn.
    ///
    /// With `supersede`, the follow-ups of the previous turn are cancelled
    /// first.
    pub fn begin_turn(&self, supersede: bool) -> TurnHandle {
        let token = self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .child_token();
        let followups = token.child_token();

        let previous = self
            .latest_followups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(followups.clone());
        if supersede {
            if let Some(previous) = previous {
                previous.cancel();
            }
        }

        let id = self.next_turn_id.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(turn_id = id, supersede, "Turn opened");
        TurnHandle {
            id,
            token,
            followups,
            tracker: self.tracker.clone(),
        }
    }

    /// Cancels every in-flight turn. Turns opened afterwards run normally.
    pub fn cancel_all(&self) {
        let mut generation = self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        generation.cancel();
        *generation = self.root.child_token();
        tracing::debug!(in_flight = self.tracker.len(), "Cancelled all turns");
    }

    /// Cancels everything for good.
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }

    /// Number of spawned tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Waits until every spawned task has finished or been cancelled,
    /// including tasks spawned while waiting.
    pub async fn wait_idle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TurnScheduler {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

/// Spawns tasks on behalf of one turn.
#[derive(Clone, Debug)]
pub struct TurnHandle {
    id: u64,
    token: CancellationToken,
    followups: CancellationToken,
    tracker: TaskTracker,
}

impl TurnHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the turn's follow-ups were superseded or the turn itself
    /// was cancelled.
    pub fn followups_cancelled(&self) -> bool {
        self.followups.is_cancelled()
    }

    /// Spawns `task`, dropping it at its next await point once the turn is
    /// cancelled. Resolves to `None` in that case.
    pub fn spawn<F>(&self, task: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.spawn_with(self.token.clone(), task)
    }

    /// Spawns a follow-up of this turn after `delay`. Besides everything that
    /// cancels the turn, a superseding turn cancels it as well.
    pub fn spawn_followup_after<F>(&self, delay: Duration, task: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.spawn_with(self.followups.clone(), async move {
            tokio::time::sleep(delay).await;
            task.await
        })
    }

    fn spawn_with<F>(&self, token: CancellationToken, task: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let turn_id = self.id;
        self.tracker.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(turn_id, "Turn task cancelled");
                    None
                }
                output = task => Some(output),
            }
        })
    }

    /// Spawns a tracked task that ignores cancellation. For fire-and-forget
    /// side effects that must not be cut short by a cleared conversation.
    pub fn spawn_detached<F>(&self, task: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.tracker.spawn(task)
    }

    /// Like [`TurnHandle::spawn`], after sleeping for `delay`.
    pub fn spawn_after<F>(&self, delay: Duration, task: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            task.await
        })
    }
}

//! Cancellable timers feeding messages back into the update loop
//!
//! Each timer runs as a tokio task owned by a [`TimerGuard`]. Dropping the
//! guard aborts the task, so replacing or cancelling a timer can never leave
//! a stray task behind.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use agentdesk_core::prelude::*;

use crate::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// One-second call duration ticker
    CallClock,
    IdScan,
    FaceMatch,
    ToastDismiss,
    SignIn,
}

/// Group of timers cancelled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerScope {
    /// Timers owned by the in-call workstation
    Workstation,
    All,
}

impl TimerKind {
    pub fn in_scope(&self, scope: TimerScope) -> bool {
        match scope {
            TimerScope::All => true,
            TimerScope::Workstation => matches!(
                self,
                TimerKind::CallClock | TimerKind::IdScan | TimerKind::FaceMatch
            ),
        }
    }
}

/// Aborts its task on drop.
#[derive(Debug)]
pub struct TimerGuard {
    handle: JoinHandle<()>,
}

impl TimerGuard {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Registry of running timers, at most one per kind.
#[derive(Debug, Default)]
pub struct Timers {
    active: HashMap<TimerKind, TimerGuard>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `message` once after `after`. Replaces any timer of the same kind.
    pub fn schedule(
        &mut self,
        kind: TimerKind,
        after: Duration,
        message: Message,
        tx: mpsc::Sender<Message>,
    ) {
        trace!("Scheduling {:?} in {:?}", kind, after);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(message).await.is_err() {
                debug!("Timer {:?} fired after the loop closed", kind);
            }
        });
        self.insert(kind, handle);
    }

    /// Send `message` every `period`, first after one full period.
    pub fn repeat(
        &mut self,
        kind: TimerKind,
        period: Duration,
        message: Message,
        tx: mpsc::Sender<Message>,
    ) {
        trace!("Starting {:?} every {:?}", kind, period);
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(message.clone()).await.is_err() {
                    break;
                }
            }
        });
        self.insert(kind, handle);
    }

    fn insert(&mut self, kind: TimerKind, handle: JoinHandle<()>) {
        // The replaced guard, if any, aborts its task as it drops here.
        self.active.insert(kind, TimerGuard { handle });
    }

    pub fn cancel(&mut self, scope: TimerScope) {
        let before = self.active.len();
        self.active.retain(|kind, _| !kind.in_scope(scope));
        let cancelled = before - self.active.len();
        if cancelled > 0 {
            debug!("Cancelled {} timer(s) in {:?} scope", cancelled, scope);
        }
    }

    /// Whether a timer of `kind` is scheduled and has not fired yet.
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.active
            .get(&kind)
            .map(|g| !g.is_finished())
            .unwrap_or(false)
    }
}

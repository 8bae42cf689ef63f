//! Action handlers: UpdateAction dispatch onto the timer registry

use std::time::Duration;

use tokio::sync::mpsc;

use agentdesk_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::timers::{TimerKind, Timers};

/// Period of the in-call duration counter
pub const CALL_CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Execute an action by arming or cancelling timers
pub fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>, timers: &mut Timers) {
    match action {
        UpdateAction::ScheduleTimer {
            kind,
            after,
            message,
        } => {
            timers.schedule(kind, after, message, msg_tx.clone());
        }

        UpdateAction::StartCallClock { mount } => {
            debug!("Starting call clock for {:?}", mount);
            timers.repeat(
                TimerKind::CallClock,
                CALL_CLOCK_PERIOD,
                Message::CallClockTick { mount },
                msg_tx.clone(),
            );
        }

        UpdateAction::CancelTimers(scope) => timers.cancel(scope),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::TimerScope;
    use crate::workstation::MountId;

    #[tokio::test(start_paused = true)]
    async fn test_call_clock_ticks_every_second() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = Timers::new();
        let mount = MountId(3);

        handle_action(UpdateAction::StartCallClock { mount }, &tx, &mut timers);
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(rx.try_recv().ok(), Some(Message::CallClockTick { mount }));
        assert_eq!(rx.try_recv().ok(), Some(Message::CallClockTick { mount }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_clock() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = Timers::new();

        handle_action(
            UpdateAction::StartCallClock { mount: MountId(1) },
            &tx,
            &mut timers,
        );
        handle_action(
            UpdateAction::CancelTimers(TimerScope::Workstation),
            &tx,
            &mut timers,
        );
        tokio::time::sleep(Duration::from_secs(3)).await;

        assert!(rx.try_recv().is_err());
        assert!(!timers.is_pending(TimerKind::CallClock));
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_delivers_once() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = Timers::new();

        handle_action(
            UpdateAction::ScheduleTimer {
                kind: TimerKind::SignIn,
                after: Duration::from_millis(500),
                message: Message::SignInCompleted { session: 0 },
            },
            &tx,
            &mut timers,
        );
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(
            rx.try_recv().ok(),
            Some(Message::SignInCompleted { session: 0 })
        );
    }
}

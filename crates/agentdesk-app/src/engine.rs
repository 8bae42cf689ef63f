//! Engine - owns the model, the message channel and the running timers
//!
//! The TUI runner drives it: input events and timer messages are fed through
//! [`Engine::process_message`], and the state is read back for rendering.

use std::sync::Arc;

use tokio::sync::mpsc;

use agentdesk_core::prelude::*;
use agentdesk_core::FixtureSet;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::timers::{TimerScope, Timers};

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Timers and the signal handler hold clones.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half, drained by the frontend loop.
    pub msg_rx: mpsc::Receiver<Message>,

    timers: Timers,
}

impl Engine {
    /// Build the engine and spawn the signal handler.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(settings: Settings, fixtures: FixtureSet) -> Self {
        let state = AppState::new(settings, Arc::new(fixtures));
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        info!(
            "Engine ready for agent {} ({})",
            state.settings.agent.name, state.settings.agent.id
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            timers: Timers::new(),
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &mut self.timers);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Abort every timer before the runtime goes away.
    pub fn shutdown(&mut self) {
        self.timers.cancel(TimerScope::All);
        info!("Engine shut down");
    }
}

//! agentdesk-app - Application state and orchestration for the agent workstation
//!
//! This crate implements the TEA (The Elm Architecture) pattern: the
//! navigation and call-lifecycle [`Controller`], the model around it, the
//! update function, cancellable timers, configuration loading and the
//! [`Engine`] that ties them to a message channel.

pub mod actions;
pub mod agent;
pub mod call_setup;
pub mod config;
pub mod controller;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod timers;
pub mod toast;
pub mod views;
pub mod workstation;

// Re-export primary types
pub use call_setup::{CallSetup, CallSetupError, FormField, StartCallForm};
pub use config::Settings;
pub use controller::{Controller, ControllerError, ControllerResult, Operation, Visibility};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Focus, TextTarget};
pub use toast::{Toast, ToastLevel};
pub use workstation::{WorkstationState, WorkstationTab};

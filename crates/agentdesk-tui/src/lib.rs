//! agentdesk-tui - Terminal UI for the agent workstation
//!
//! This crate provides the ratatui-based interface. It creates an Engine
//! from agentdesk-app and adds terminal rendering, event polling and the
//! widgets for every screen and overlay.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;

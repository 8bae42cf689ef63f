//! Shared helpers for handlers

use std::fmt::Display;

use agentdesk_core::prelude::*;

use crate::message::Message;
use crate::toast::ToastLevel;

use super::UpdateResult;

/// Log a refused operation and surface it as a warning toast.
/// State has already been left untouched by the refusing operation.
pub(crate) fn reject(err: impl Display) -> UpdateResult {
    warn!("Rejected: {}", err);
    UpdateResult::message(toast(ToastLevel::Warning, err.to_string()))
}

pub(crate) fn toast(level: ToastLevel, text: impl Into<String>) -> Message {
    Message::ShowToast {
        level,
        text: text.into(),
    }
}

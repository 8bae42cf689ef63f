//! Outbound call setup: the start-call form and its validated result

use std::sync::LazyLock;

use agentdesk_core::CallKind;
use regex::Regex;
use thiserror::Error;

/// 11-character mobile number. The middle four digits may be masked with
/// `*`, the way numbers are shown to agents.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1\d{2}[\d*]{4}\d{4}$").expect("Invalid phone regex"));

/// Reasons a call setup is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallSetupError {
    #[error("Phone number is required")]
    EmptyPhone,

    #[error("'{phone}' is not a valid 11-digit mobile number")]
    InvalidPhone { phone: String },

    #[error("Outbound line '{number}' is not configured")]
    UnknownOutboundNumber { number: String },

    #[error("No outbound lines are configured")]
    NoOutboundNumbers,
}

/// A validated request to place a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSetup {
    phone: String,
    outbound_number: String,
    call_kind: CallKind,
}

impl CallSetup {
    /// Validate a setup against the configured outbound lines.
    pub fn new(
        phone: &str,
        outbound_number: &str,
        call_kind: CallKind,
        lines: &[String],
    ) -> Result<Self, CallSetupError> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(CallSetupError::EmptyPhone);
        }
        if !PHONE_PATTERN.is_match(phone) {
            return Err(CallSetupError::InvalidPhone {
                phone: phone.to_string(),
            });
        }
        if lines.is_empty() {
            return Err(CallSetupError::NoOutboundNumbers);
        }
        if !lines.iter().any(|l| l == outbound_number) {
            return Err(CallSetupError::UnknownOutboundNumber {
                number: outbound_number.to_string(),
            });
        }

        Ok(Self {
            phone: phone.to_string(),
            outbound_number: outbound_number.to_string(),
            call_kind,
        })
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn outbound_number(&self) -> &str {
        &self.outbound_number
    }

    pub fn call_kind(&self) -> CallKind {
        self.call_kind
    }
}

// ─────────────────────────────────────────────────────────────────
// Start-call form
// ─────────────────────────────────────────────────────────────────

/// Field of the start-call form that has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Phone,
    Outbound,
    Kind,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Phone => FormField::Outbound,
            FormField::Outbound => FormField::Kind,
            FormField::Kind => FormField::Phone,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Phone => FormField::Kind,
            FormField::Outbound => FormField::Phone,
            FormField::Kind => FormField::Outbound,
        }
    }
}

/// Editable contents of the start-call dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCallForm {
    pub phone: String,
    pub outbound_index: usize,
    pub kind: CallKind,
    pub focus: FormField,
}

/// Longest phone input accepted by the form.
const MAX_PHONE_LEN: usize = 11;

impl StartCallForm {
    pub fn new(phone: impl Into<String>, kind: CallKind) -> Self {
        Self {
            phone: phone.into(),
            outbound_index: 0,
            kind,
            focus: FormField::Phone,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if (c.is_ascii_digit() || c == '*') && self.phone.chars().count() < MAX_PHONE_LEN {
            self.phone.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.phone.pop();
    }

    pub fn cycle_outbound(&mut self, line_count: usize, forward: bool) {
        if line_count == 0 {
            return;
        }
        self.outbound_index = if forward {
            (self.outbound_index + 1) % line_count
        } else {
            (self.outbound_index + line_count - 1) % line_count
        };
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    /// Line currently selected, if the index is in range.
    pub fn outbound<'a>(&self, lines: &'a [String]) -> Option<&'a str> {
        lines.get(self.outbound_index).map(String::as_str)
    }

    pub fn to_setup(&self, lines: &[String]) -> Result<CallSetup, CallSetupError> {
        let outbound = self.outbound(lines).unwrap_or_default();
        CallSetup::new(&self.phone, outbound, self.kind, lines)
    }
}

//! Message types for the application (TEA pattern)

use agentdesk_core::{CallId, Popover, ViewState};

use crate::input_key::InputKey;
use crate::toast::ToastLevel;
use crate::workstation::{FraudQuestion, MountId, WorkstationTab};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Left mouse button pressed; `in_header` is whether it landed inside
    /// the header bar
    PointerDown { in_header: bool },

    /// Poll timeout, drives animations
    Tick,

    /// Leave the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Call Lifecycle
    // ─────────────────────────────────────────────────────────
    RequestStartCall,
    /// Validate the start-call form and dial
    ConfirmStartCall,
    CancelStartCall,
    ConnectAudio,
    UpgradeToVideo,
    EndCall,

    // ─────────────────────────────────────────────────────────
    // Start-Call Form
    // ─────────────────────────────────────────────────────────
    StartCallNextField,
    StartCallPrevField,
    /// Left/Right on the focused choice field
    StartCallCycle { forward: bool },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    NavigateTo(ViewState),
    OpenDetails(CallId),
    OpenBacktrace,
    BackToDashboard,
    TogglePopover(Popover),
    RequestLogout,
    ConfirmLogout,
    CancelLogout,

    // ─────────────────────────────────────────────────────────
    // Agent Status
    // ─────────────────────────────────────────────────────────
    SignIn,
    /// Simulated back end accepted the sign-in. `session` guards against
    /// a logout in between.
    SignInCompleted { session: u64 },
    SignOut,
    SetAvailable,
    SetBusy,

    // ─────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────
    ShowToast { level: ToastLevel, text: String },
    ToastExpired { id: u64 },

    // ─────────────────────────────────────────────────────────
    // Workstation
    // ─────────────────────────────────────────────────────────
    CallClockTick { mount: MountId },
    ToggleMute,
    ToggleCamera,
    SelectWorkstationTab(WorkstationTab),
    NextWorkstationTab,
    PrevWorkstationTab,
    StartIdScan,
    IdScanCompleted { mount: MountId },
    StartFaceMatch,
    FaceMatchCompleted { mount: MountId },
    ToggleFraudCheck(FraudQuestion),
    AppendQuickTag(usize),
    BeginNotesEdit,
    SendVideoLink,

    // ─────────────────────────────────────────────────────────
    // Text Entry (routed to the focused field)
    // ─────────────────────────────────────────────────────────
    TextInput(char),
    TextBackspace,
    /// Leave text entry, keeping what was typed
    EndTextEntry,

    // ─────────────────────────────────────────────────────────
    // Content Views
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    /// Open details for the row under the cursor
    OpenSelected,
    BeginHistoryFilter,
    ClearHistoryFilter,
    NextDetailTab,
    PrevDetailTab,
    TogglePlayback,
    NextReportPeriod,
    PrevReportPeriod,
    BeginBacktraceSearch,
}

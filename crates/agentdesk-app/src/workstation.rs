//! In-call workstation state
//!
//! Created when a call connects and dropped when it ends. Every timer the
//! workstation starts is tagged with its [`MountId`]; messages from an
//! earlier mount are ignored.

use agentdesk_core::CallStatus;
use thiserror::Error;

/// Verification questions read to the customer during a review call.
pub const FRAUD_QUESTIONS: [&str; 2] = [
    "Confirm the applied car model is the Dezhu AX?",
    "Confirm repayment is in equal installments?",
];

/// One-key tags appended to the call notes.
pub const QUICK_TAGS: [&str; 6] = [
    "High intent",
    "Needs callback",
    "Documents incomplete",
    "Objection handled",
    "Complaint risk",
    "Signing scheduled",
];

/// Similarity reported by the simulated face match.
pub const FACE_MATCH_SIMILARITY: f32 = 98.5;

/// Identifies one mounting of the workstation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkstationTab {
    #[default]
    AiTools,
    Transcript,
    Notes,
    Location,
}

impl WorkstationTab {
    pub const ALL: [WorkstationTab; 4] = [
        WorkstationTab::AiTools,
        WorkstationTab::Transcript,
        WorkstationTab::Notes,
        WorkstationTab::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkstationTab::AiTools => "AI Tools",
            WorkstationTab::Transcript => "Transcript",
            WorkstationTab::Notes => "Notes",
            WorkstationTab::Location => "Location",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Progress of a simulated verification step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepState {
    #[default]
    Pending,
    Running,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudQuestion {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkstationError {
    #[error("Camera can only be toggled during a video call")]
    CameraRequiresVideo,

    #[error("Scan the ID card before face matching")]
    IdScanRequired,

    #[error("Video link is only sent during an audio call")]
    VideoLinkRequiresAudio,

    #[error("No quick tag #{index}")]
    UnknownTag { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkstationState {
    mount: MountId,
    pub tab: WorkstationTab,
    pub muted: bool,
    pub camera_off: bool,
    elapsed_secs: u64,
    pub notes: String,
    pub editing_notes: bool,
    id_scan: StepState,
    face_match: StepState,
    fraud_q1: bool,
    fraud_q2: bool,
}

impl WorkstationState {
    pub fn new(mount: MountId) -> Self {
        Self {
            mount,
            tab: WorkstationTab::default(),
            muted: false,
            camera_off: false,
            elapsed_secs: 0,
            notes: String::new(),
            editing_notes: false,
            id_scan: StepState::Pending,
            face_match: StepState::Pending,
            fraud_q1: false,
            fraud_q2: false,
        }
    }

    pub fn mount(&self) -> MountId {
        self.mount
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn tick(&mut self) {
        self.elapsed_secs += 1;
    }

    pub fn id_scan(&self) -> StepState {
        self.id_scan
    }

    pub fn face_match(&self) -> StepState {
        self.face_match
    }

    pub fn fraud_answer(&self, question: FraudQuestion) -> bool {
        match question {
            FraudQuestion::First => self.fraud_q1,
            FraudQuestion::Second => self.fraud_q2,
        }
    }

    pub fn id_scanned(&self) -> bool {
        self.id_scan == StepState::Done
    }

    pub fn face_matched(&self) -> bool {
        self.face_match == StepState::Done
    }

    /// All four checks passed.
    pub fn is_verified(&self) -> bool {
        self.id_scanned() && self.face_matched() && self.fraud_q1 && self.fraud_q2
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_camera(&mut self, status: CallStatus) -> Result<(), WorkstationError> {
        if status != CallStatus::VideoConnected {
            return Err(WorkstationError::CameraRequiresVideo);
        }
        self.camera_off = !self.camera_off;
        Ok(())
    }

    /// Returns `true` if a new scan was started.
    pub fn start_id_scan(&mut self) -> bool {
        if self.id_scan != StepState::Pending {
            return false;
        }
        self.id_scan = StepState::Running;
        true
    }

    pub fn complete_id_scan(&mut self) {
        if self.id_scan == StepState::Running {
            self.id_scan = StepState::Done;
        }
    }

    /// Returns `Ok(true)` if a new match was started.
    pub fn start_face_match(&mut self) -> Result<bool, WorkstationError> {
        if !self.id_scanned() {
            return Err(WorkstationError::IdScanRequired);
        }
        if self.face_match != StepState::Pending {
            return Ok(false);
        }
        self.face_match = StepState::Running;
        Ok(true)
    }

    pub fn complete_face_match(&mut self) {
        if self.face_match == StepState::Running {
            self.face_match = StepState::Done;
        }
    }

    pub fn toggle_fraud(&mut self, question: FraudQuestion) {
        match question {
            FraudQuestion::First => self.fraud_q1 = !self.fraud_q1,
            FraudQuestion::Second => self.fraud_q2 = !self.fraud_q2,
        }
    }

    pub fn append_tag(&mut self, index: usize) -> Result<(), WorkstationError> {
        let tag = QUICK_TAGS
            .get(index)
            .ok_or(WorkstationError::UnknownTag { index })?;
        if !self.notes.is_empty() {
            self.notes.push_str(", ");
        }
        self.notes.push_str(tag);
        Ok(())
    }

    pub fn push_note_char(&mut self, c: char) {
        self.notes.push(c);
    }

    pub fn pop_note_char(&mut self) {
        self.notes.pop();
    }
}

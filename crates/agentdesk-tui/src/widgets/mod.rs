//! Custom widget components

mod backtrace;
mod confirm_dialog;
mod dashboard;
mod details;
mod dialing;
mod header;
mod history;
pub mod modal_overlay;
mod report;
mod sidebar;
mod start_call;
mod toast;
mod workstation;

pub use backtrace::Backtrace;
pub use confirm_dialog::LogoutConfirm;
pub use dashboard::Dashboard;
pub use details::{CallDetails, NoCallSelected};
pub use dialing::DialingOverlay;
pub use header::{AlertsPopover, MainHeader, SettingsPopover};
pub use history::HistoryTable;
pub use report::QualityReportView;
pub use sidebar::Sidebar;
pub use start_call::StartCallDialog;
pub use toast::ToastView;
pub use workstation::Workstation;

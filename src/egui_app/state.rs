//! Shared state types for the egui UI.

use crate::egui_app::ui::style;
use crate::predict::api::PredictResponse;
use crate::predict::form::ApplicantForm;
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub status: StatusBarState,
    /// Raw text of the applicant form inputs.
    pub form: ApplicantForm,
    /// Lifecycle of the current evaluation request.
    pub submission: SubmissionState,
    /// Connectivity of the backend service.
    pub backend: BackendState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            form: ApplicantForm::default(),
            submission: SubmissionState::default(),
            backend: BackendState::default(),
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Default status shown before the first submission.
    pub fn idle() -> Self {
        Self {
            text: "Completa el formulario y envíalo para evaluar".into(),
            badge_label: style::status_badge_label(style::StatusTone::Idle).into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}

/// Lifecycle of a risk evaluation request.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionState {
    /// Nothing has been submitted yet.
    Idle,
    /// A request is on a worker thread awaiting the backend.
    Pending,
    /// The backend returned a verdict.
    Succeeded(PredictResponse),
    /// The request failed; the message is rendered under the submit button.
    Failed(String),
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl SubmissionState {
    /// True while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Result of the most recent backend probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    /// No probe has run yet.
    Unknown,
    /// A probe is in flight.
    Checking,
    /// The last probe returned a healthy payload.
    Connected,
    /// The last probe answered but did not report a healthy status.
    Degraded,
    /// The last probe failed to produce a response.
    Unreachable,
}

impl Default for BackendStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Backend connectivity surfaced in the footer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackendState {
    /// Current probe status.
    pub status: BackendStatus,
    /// Last probe error, shown on hover.
    pub last_error: Option<String>,
}

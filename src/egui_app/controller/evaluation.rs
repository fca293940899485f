use super::EguiController;
use super::jobs::{EvaluationJob, EvaluationResult};
use crate::egui_app::state::SubmissionState;
use crate::egui_app::ui::style::StatusTone;

impl EguiController {
    /// Submit the current form unless an evaluation is already in flight.
    ///
    /// Clears any previous verdict or error before the request leaves, so the
    /// results panel goes back to its placeholder while the backend works.
    pub fn submit_evaluation(&mut self) {
        if self.jobs.evaluation_in_progress() {
            return;
        }
        let request = self.ui.form.to_request();
        tracing::info!("Submitting evaluation to {}/predict", self.api_url);
        self.ui.submission = SubmissionState::Pending;
        self.set_status("Evaluando solicitud…", StatusTone::Busy);
        self.jobs.begin_evaluation(EvaluationJob {
            api_url: self.api_url.clone(),
            request,
        });
    }

    pub(in crate::egui_app::controller) fn handle_evaluation_finished(
        &mut self,
        message: EvaluationResult,
    ) {
        if !self.jobs.evaluation_in_progress() {
            // Stale completion; nothing is waiting on it.
            return;
        }
        self.jobs.clear_evaluation();
        match message.result {
            Ok(response) => {
                self.ui.submission = SubmissionState::Succeeded(response);
                self.set_status("Evaluación completada", StatusTone::Info);
            }
            Err(err) => {
                let text = err.to_string();
                tracing::warn!("Evaluation failed: {text}");
                self.ui.submission = SubmissionState::Failed(text.clone());
                self.set_status(format!("Error al evaluar: {text}"), StatusTone::Error);
            }
        }
    }
}

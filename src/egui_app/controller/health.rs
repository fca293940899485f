use super::EguiController;
use super::jobs::{HealthCheckJob, HealthCheckResult};
use crate::egui_app::state::BackendStatus;
use crate::predict::api::HealthError;

impl EguiController {
    pub(super) fn maybe_check_backend_on_startup(&mut self) {
        if self.ui.backend.status != BackendStatus::Unknown {
            return;
        }
        self.begin_health_check();
    }

    /// Probe the backend again on demand.
    pub fn check_backend_now(&mut self) {
        self.begin_health_check();
    }

    fn begin_health_check(&mut self) {
        if self.jobs.health_check_in_progress() {
            return;
        }
        self.ui.backend.status = BackendStatus::Checking;
        self.ui.backend.last_error = None;
        self.jobs.begin_health_check(HealthCheckJob {
            api_url: self.api_url.clone(),
        });
    }

    pub(in crate::egui_app::controller) fn handle_health_checked(
        &mut self,
        message: HealthCheckResult,
    ) {
        self.jobs.clear_health_check();
        match message.result {
            Ok(()) => {
                self.ui.backend.status = BackendStatus::Connected;
                self.ui.backend.last_error = None;
            }
            Err(err) => {
                let text = err.to_string();
                tracing::warn!("Backend health check failed: {text}");
                // An answer with a bad payload means the service is up but not ready.
                self.ui.backend.status = match err {
                    HealthError::InvalidResponse(_) => BackendStatus::Degraded,
                    HealthError::Status { .. } | HealthError::Transport(_) => {
                        BackendStatus::Unreachable
                    }
                };
                self.ui.backend.last_error = Some(text);
            }
        }
    }
}

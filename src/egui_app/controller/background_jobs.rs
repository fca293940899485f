use super::EguiController;
use super::jobs::JobMessage;

impl EguiController {
    /// Drain every finished worker message queued since the last frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::EvaluationFinished(message) => {
                    self.handle_evaluation_finished(message);
                }
                JobMessage::HealthChecked(message) => {
                    self.handle_health_checked(message);
                }
            }
        }
    }
}

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::predict::api::{self, HealthError, PredictError, PredictRequest, PredictResponse};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    EvaluationFinished(EvaluationResult),
    HealthChecked(HealthCheckResult),
}

#[derive(Debug)]
pub(crate) struct EvaluationJob {
    pub(crate) api_url: String,
    pub(crate) request: PredictRequest,
}

#[derive(Debug)]
pub(crate) struct EvaluationResult {
    pub(crate) result: Result<PredictResponse, PredictError>,
}

#[derive(Debug)]
pub(crate) struct HealthCheckJob {
    pub(crate) api_url: String,
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(crate) result: Result<(), HealthError>,
}

/// Worker-thread bookkeeping for the controller.
///
/// Each job kind runs at most once at a time; results come back through a
/// single channel drained once per frame.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pub(super) evaluation_in_progress: bool,
    pub(super) health_check_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            evaluation_in_progress: false,
            health_check_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(super) fn message_sender(&self) -> Sender<JobMessage> {
        self.message_tx.clone()
    }

    pub(super) fn evaluation_in_progress(&self) -> bool {
        self.evaluation_in_progress
    }

    pub(super) fn health_check_in_progress(&self) -> bool {
        self.health_check_in_progress
    }

    pub(super) fn begin_evaluation(&mut self, job: EvaluationJob) {
        if self.evaluation_in_progress {
            return;
        }
        self.evaluation_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::submit(&job.api_url, &job.request);
            let _ = tx.send(JobMessage::EvaluationFinished(EvaluationResult { result }));
        });
    }

    pub(super) fn clear_evaluation(&mut self) {
        self.evaluation_in_progress = false;
    }

    pub(super) fn begin_health_check(&mut self, job: HealthCheckJob) {
        if self.health_check_in_progress {
            return;
        }
        self.health_check_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::check_health(&job.api_url);
            let _ = tx.send(JobMessage::HealthChecked(HealthCheckResult { result }));
        });
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }
}

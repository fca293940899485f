//! Helpers to convert domain data into egui-facing view structs.

use crate::egui_app::state::{BackendState, BackendStatus, SubmissionState};
use crate::egui_app::ui::style::StatusTone;
use crate::translate;

/// Display-ready verdict fields for the results panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultCard {
    pub score_text: String,
    pub risk_label: String,
    pub decision_label: String,
    pub explanation: String,
}

/// Build the results card; present only after a successful evaluation.
pub fn result_card(submission: &SubmissionState) -> Option<ResultCard> {
    let SubmissionState::Succeeded(response) = submission else {
        return None;
    };
    Some(ResultCard {
        score_text: format!("{}", response.risk_score),
        risk_label: translate::risk_level_display(&response.risk_level),
        decision_label: translate::decision_display(&response.decision),
        explanation: translate::translate_explanation(&response.explanation),
    })
}

/// Footer badge text for the backend probe state.
pub fn backend_badge_text(state: &BackendState) -> &'static str {
    match state.status {
        BackendStatus::Unknown => "Backend: desconocido",
        BackendStatus::Checking => "Comprobando backend…",
        BackendStatus::Connected => "Backend conectado",
        BackendStatus::Degraded => "Backend con problemas",
        BackendStatus::Unreachable => "Sin conexión al backend",
    }
}

/// Tone used to color the backend badge.
pub fn backend_badge_tone(state: &BackendState) -> StatusTone {
    match state.status {
        BackendStatus::Unknown => StatusTone::Idle,
        BackendStatus::Checking => StatusTone::Busy,
        BackendStatus::Connected => StatusTone::Info,
        BackendStatus::Degraded => StatusTone::Warning,
        BackendStatus::Unreachable => StatusTone::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::api::PredictResponse;

    fn verdict(score: f64, level: &str, decision: &str, explanation: &str) -> SubmissionState {
        SubmissionState::Succeeded(PredictResponse {
            risk_score: score,
            risk_level: level.to_string(),
            decision: decision.to_string(),
            explanation: explanation.to_string(),
        })
    }

    #[test]
    fn integral_score_renders_without_decimals() {
        let card = result_card(&verdict(75.0, "LOW", "Approve", "")).unwrap();
        assert_eq!(card.score_text, "75");
    }

    #[test]
    fn fractional_score_keeps_decimals() {
        let card = result_card(&verdict(62.5, "MEDIUM", "Approve with conditions", "")).unwrap();
        assert_eq!(card.score_text, "62.5");
    }

    #[test]
    fn card_translates_verdict_fields() {
        let card = verdict(
            40.0,
            "HIGH",
            "Review / Reject",
            "financed_amount=9000000, ratio=1.80, employment_years=1, age=19",
        );
        let card = result_card(&card).unwrap();
        assert_eq!(card.risk_label, "ALTO");
        assert_eq!(card.decision_label, "Review / Reject");
        assert_eq!(
            card.explanation,
            "monto_financiado=9000000, ratio=1.80, antiguedad_laboral=1, edad=19"
        );
    }

    #[test]
    fn approved_verdict_scenario_renders_in_spanish() {
        let card = result_card(&verdict(42.0, "LOW", "Approve", "age is acceptable")).unwrap();
        assert_eq!(card.score_text, "42");
        assert_eq!(card.risk_label, "BAJO");
        assert_eq!(card.decision_label, "Aprobar");
        assert_eq!(card.explanation, "edad is acceptable");
    }

    #[test]
    fn only_success_produces_a_card() {
        assert!(result_card(&SubmissionState::Idle).is_none());
        assert!(result_card(&SubmissionState::Pending).is_none());
        assert!(result_card(&SubmissionState::Failed("HTTP 500: boom".into())).is_none());
    }

    #[test]
    fn backend_badge_follows_probe_state() {
        let mut state = BackendState::default();
        assert_eq!(backend_badge_text(&state), "Backend: desconocido");
        state.status = BackendStatus::Connected;
        assert_eq!(backend_badge_text(&state), "Backend conectado");
        assert!(matches!(backend_badge_tone(&state), StatusTone::Info));
        state.status = BackendStatus::Degraded;
        assert_eq!(backend_badge_text(&state), "Backend con problemas");
        assert!(matches!(backend_badge_tone(&state), StatusTone::Warning));
        state.status = BackendStatus::Unreachable;
        assert!(matches!(backend_badge_tone(&state), StatusTone::Error));
    }
}

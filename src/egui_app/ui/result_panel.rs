use eframe::egui::{RichText, Ui};

use super::style;
use super::EguiApp;
use crate::egui_app::state::SubmissionState;
use crate::egui_app::view_model;

impl EguiApp {
    pub(super) fn render_result_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Resultados");
        ui.add_space(8.0);
        if let Some(card) = view_model::result_card(&self.controller.ui.submission) {
            result_row(ui, "Puntaje de Riesgo:", &card.score_text);
            result_row(ui, "Nivel de Riesgo:", &card.risk_label);
            result_row(ui, "Decisión:", &card.decision_label);
            ui.add_space(4.0);
            ui.label(RichText::new("Explicación:").strong());
            ui.add_space(4.0);
            ui.label(RichText::new(&card.explanation).color(palette.text_muted));
        } else if !matches!(self.controller.ui.submission, SubmissionState::Failed(_)) {
            // Failures surface under the submit button instead.
            ui.label(
                RichText::new("Envíe una evaluación para ver la decisión.")
                    .color(palette.text_muted),
            );
        }
    }
}

fn result_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong());
        ui.label(value);
    });
    ui.add_space(4.0);
}

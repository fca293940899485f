use eframe::egui::{self, RichText, Ui};

use super::style;
use super::EguiApp;
use crate::egui_app::state::SubmissionState;
use crate::predict::form::FormField;

impl EguiApp {
    pub(super) fn render_form_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let pending = self.controller.ui.submission.is_pending();
        ui.heading("Datos de Entrada");
        ui.add_space(8.0);
        for field in FormField::ALL {
            ui.label(RichText::new(field.label()).color(palette.text_muted));
            ui.add_enabled(
                !pending,
                egui::TextEdit::singleline(self.controller.ui.form.value_mut(field))
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
        }
        ui.add_space(4.0);
        let label = if pending { "Evaluando..." } else { "Evaluar riesgo" };
        let submit = ui.add_enabled(
            !pending,
            egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 32.0)),
        );
        if submit.clicked() {
            self.controller.submit_evaluation();
        }
        if let SubmissionState::Failed(message) = &self.controller.ui.submission {
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("Error: {message}"))
                    .color(style::status_badge_color(style::StatusTone::Error)),
            );
        }
    }
}

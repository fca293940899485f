//! egui renderer for the application UI.
use std::time::Duration;

use eframe::egui::{self, RichText, Vec2};

use crate::egui_app::controller::EguiController;
use crate::egui_app::state::BackendStatus;
use crate::egui_app::view_model;

mod form_panel;
mod result_panel;
pub mod style;

/// Smallest window that keeps both panels readable.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(760.0, 540.0);

const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Renders the egui UI on top of the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app and load persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = EguiController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("No se pudo cargar la configuración: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn prepare_frame(&mut self, ctx: &egui::Context) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let api_url = self.controller.api_url().to_string();
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Demo de Decisión de Riesgo");
                    ui.label(
                        RichText::new(format!("Envía solicitudes a POST {api_url}/predict"))
                            .color(palette.text_muted),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let open = ui
                        .button("Abrir configuración")
                        .on_hover_text("Abre la carpeta que contiene config.toml");
                    if open.clicked() {
                        self.controller.open_config_folder();
                    }
                });
            });
            ui.add_space(8.0);
        });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let status = self.controller.ui.status.clone();
        let backend = self.controller.ui.backend.clone();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                ui.painter().circle_filled(
                    ui.cursor().min + egui::vec2(7.0, 10.0),
                    6.0,
                    status.badge_color,
                );
                ui.add_space(18.0);
                ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                ui.separator();
                ui.label(RichText::new(&status.text).color(palette.text_muted));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(APP_VERSION).color(palette.text_muted));
                    ui.separator();
                    let checking = backend.status == BackendStatus::Checking;
                    let retry = ui.add_enabled(!checking, egui::Button::new("Reintentar"));
                    if retry.clicked() {
                        self.controller.check_backend_now();
                    }
                    let badge_color =
                        style::status_badge_color(view_model::backend_badge_tone(&backend));
                    let badge = ui.label(
                        RichText::new(view_model::backend_badge_text(&backend)).color(badge_color),
                    );
                    if let Some(reason) = backend.last_error.as_deref() {
                        badge.on_hover_text(reason);
                    }
                });
            });
        });
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(4.0);
                    ui.columns(2, |columns| {
                        self.render_form_panel(&mut columns[0]);
                        self.render_result_panel(&mut columns[1]);
                    });
                    ui.add_space(12.0);
                    ui.separator();
                    self.render_debug_payload(ui);
                });
        });
    }

    fn render_debug_payload(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Payload enviado (debug)")
            .default_open(false)
            .show(ui, |ui| {
                let request = self.controller.ui.form.to_request();
                let pretty =
                    serde_json::to_string_pretty(&request).unwrap_or_else(|err| err.to_string());
                ui.monospace(pretty);
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.prepare_frame(ctx);
        self.render_header(ctx);
        self.render_status_bar(ctx);
        self.render_central(ctx);
        if self.controller.has_background_work() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

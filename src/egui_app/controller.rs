//! Bridges form state, configuration, and background requests to the UI.

use crate::config;
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::{self, StatusTone};

mod background_jobs;
mod evaluation;
mod health;
mod jobs;


use jobs::ControllerJobs;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    api_url: String,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            api_url: config::DEFAULT_API_URL.to_string(),
            jobs: ControllerJobs::new(),
        }
    }

    /// Load persisted config, resolve the backend URL, and probe the backend.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let settings = config::load_or_default()?;
        self.api_url = config::resolve_api_url(&settings);
        if let Err(err) = config::ensure_seed_file() {
            tracing::warn!("Could not write initial config file: {err}");
        }
        tracing::info!("Using backend at {}", self.api_url);
        self.maybe_check_backend_on_startup();
        Ok(())
    }

    /// Base URL of the backend the controller talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// True while any worker thread still owes the UI a message.
    pub fn has_background_work(&self) -> bool {
        self.jobs.evaluation_in_progress() || self.jobs.health_check_in_progress()
    }

    /// Reveal the folder holding `config.toml` in the OS file manager.
    pub(crate) fn open_config_folder(&mut self) {
        match crate::app_dirs::app_root_dir() {
            Ok(path) => {
                if let Err(err) = open::that(&path) {
                    self.set_status(
                        format!(
                            "No se pudo abrir la carpeta de configuración {}: {err}",
                            path.display()
                        ),
                        StatusTone::Error,
                    );
                }
            }
            Err(err) => self.set_status(
                format!("No se pudo resolver la carpeta de configuración: {err}"),
                StatusTone::Error,
            ),
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = style::status_badge_label(tone).to_string();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }
}

impl Default for EguiController {
    fn default() -> Self {
        Self::new()
    }
}

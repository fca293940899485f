use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Redirects the config home and backend URL for one test, restoring both on drop.
pub struct RiesgoEnvGuard {
    previous_config_home: Option<String>,
    previous_api_url: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl RiesgoEnvGuard {
    pub fn set(config_home: PathBuf, api_url: &str) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous_config_home = std::env::var("RIESGO_CONFIG_HOME").ok();
        let previous_api_url = std::env::var("RIESGO_API_URL").ok();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var("RIESGO_CONFIG_HOME", config_home);
            std::env::set_var("RIESGO_API_URL", api_url);
        }
        Self {
            previous_config_home,
            previous_api_url,
            _lock: lock,
        }
    }
}

impl Drop for RiesgoEnvGuard {
    fn drop(&mut self) {
        restore("RIESGO_CONFIG_HOME", self.previous_config_home.take());
        restore("RIESGO_API_URL", self.previous_api_url.take());
    }
}

fn restore(name: &str, previous: Option<String>) {
    if let Some(value) = previous {
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(name, value);
        }
    } else {
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::remove_var(name);
        }
    }
}

//! Library exports for reuse in tests.
/// Platform config and log directories.
pub mod app_dirs;
/// Persisted settings and backend URL resolution.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent and bounded response reads.
pub mod http_client;
/// Log file setup and pruning.
pub mod logging;
/// Client for the backend risk decision service.
pub mod predict;
/// Spanish labels for backend vocabulary.
pub mod translate;

//! Chat popup host wiring: focus tracking, popup queue and replay driver
//! around the decision engine.

pub mod app;
pub mod notification;
pub mod replay;
pub mod tracker;

use std::sync::Arc;

use popup_settings::SettingsManager;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load .env and build the settings manager with environment overrides applied.
pub fn init_foundation() -> Arc<SettingsManager> {
    load_dotenv();

    let sm = SettingsManager::new();
    let applied = sm.load_env_overrides();
    tracing::info!(applied, "Popup settings loaded");

    Arc::new(sm)
}

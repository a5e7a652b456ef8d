use std::sync::Arc;

use popup_engine::{NotificationEngine, NotificationRenderer};
use popup_settings::SettingsManager;

use crate::tracker::FocusTracker;

/// Application shared state: settings, focus tracker and the decision engine.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    settings: Arc<SettingsManager>,
    tracker: Arc<FocusTracker>,
    engine: NotificationEngine,
}

impl SharedState {
    pub fn new(settings: Arc<SettingsManager>, renderer: Arc<dyn NotificationRenderer>) -> Self {
        let tracker = Arc::new(FocusTracker::new());
        let engine = NotificationEngine::new(settings.clone(), tracker.clone(), renderer);

        Self {
            inner: Arc::new(SharedStateInner {
                settings,
                tracker,
                engine,
            }),
        }
    }

    pub fn settings(&self) -> &SettingsManager {
        &self.inner.settings
    }

    pub fn tracker(&self) -> &FocusTracker {
        &self.inner.tracker
    }

    pub fn engine(&self) -> &NotificationEngine {
        &self.inner.engine
    }
}

//! Collaborator contracts injected into [`NotificationEngine`](crate::NotificationEngine).

use crate::TrackerError;
use crate::color::Color;
use crate::types::{Jid, Message, Room, StyleBundle, WindowState};

/// Read-only access to popup settings.
///
/// Reads never fail; implementations fall back to `default` (or their own
/// default table) for unset or unparsable values.
pub trait ConfigurationStore: Send + Sync {
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Integer setting, used for durations in milliseconds.
    fn get_int(&self, key: &str) -> i32;

    fn get_color(&self, key: &str, default: Color) -> Color;

    /// Ordered, case-sensitive keyword list.
    fn keywords(&self) -> Vec<String>;
}

/// Host-side view of the chat window.
pub trait ActiveRoomTracker: Send + Sync {
    /// Room currently active in the chat container.
    fn active_room(&self) -> Result<Room, TrackerError>;

    fn is_container_focused(&self) -> bool;

    fn window_state(&self) -> WindowState;

    /// Full address of the local session, `None` while disconnected.
    fn session_address(&self) -> Option<Jid>;
}

/// Popup display layer. Calls are fire-and-forget.
pub trait NotificationRenderer: Send + Sync {
    fn message_received(&self, room: &Room, message: &Message, style: StyleBundle);

    fn message_sent(&self, room: &Room, message: &Message);
}

/// Wall clock in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

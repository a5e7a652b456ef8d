//! Popup decision engine for a multi-room chat client.
//!
//! Decides whether an incoming chat message should raise a popup and
//! which style bundle it gets. Configuration, focus tracking and rendering
//! are injected through the traits in [`provider`].

pub mod activity;
pub mod bundles;
pub mod color;
pub mod engine;
pub mod keys;
pub mod keywords;
pub mod provider;
pub mod types;

pub use activity::{BURST_WINDOW_MS, RoomActivity, RoomActivityTable};
pub use color::{Color, ColorParseError};
pub use engine::{Decision, NotificationEngine, Route, SuppressReason};
pub use provider::{
    ActiveRoomTracker, Clock, ConfigurationStore, NotificationRenderer, SystemClock,
};
pub use types::{Jid, Message, MessageKind, Room, RoomKind, StyleBundle, WindowState};

/// Failure reported by an [`ActiveRoomTracker`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("active room unavailable: no chat container")]
    ActiveRoomUnavailable,
}

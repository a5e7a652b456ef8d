//! Popup decision engine.
//!
//! For every received message the engine either suppresses it (the user is
//! looking at the conversation, or the message is their own echo) or routes
//! it to a style bundle and hands it to the renderer. Sent messages are
//! always forwarded.

use std::sync::Arc;

use serde::Serialize;

use crate::activity::RoomActivityTable;
use crate::bundles;
use crate::keys;
use crate::keywords;
use crate::provider::{
    ActiveRoomTracker, Clock, ConfigurationStore, NotificationRenderer, SystemClock,
};
use crate::types::{Message, MessageKind, Room, RoomKind, StyleBundle, WindowState};

/// Which styling path a shown popup took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Keyword,
    Single,
    Group,
}

/// Why a received message produced no popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressReason {
    /// The conversation is active and showing.
    ActiveConversation,
    /// Sent by the local user, possibly from another client.
    OwnMessage,
    /// Popups are disabled for this room kind.
    Disabled,
}

/// Outcome of [`NotificationEngine::on_message_received`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    Shown { route: Route, style: StyleBundle },
    Suppressed { reason: SuppressReason },
    /// No active room yet; nothing evaluated.
    Skipped,
}

impl Decision {
    pub fn is_shown(&self) -> bool {
        matches!(self, Decision::Shown { .. })
    }
}

pub struct NotificationEngine {
    config: Arc<dyn ConfigurationStore>,
    tracker: Arc<dyn ActiveRoomTracker>,
    renderer: Arc<dyn NotificationRenderer>,
    clock: Arc<dyn Clock>,
    activity: RoomActivityTable,
}

impl NotificationEngine {
    pub fn new(
        config: Arc<dyn ConfigurationStore>,
        tracker: Arc<dyn ActiveRoomTracker>,
        renderer: Arc<dyn NotificationRenderer>,
    ) -> Self {
        Self {
            config,
            tracker,
            renderer,
            clock: Arc::new(SystemClock),
            activity: RoomActivityTable::new(),
        }
    }

    /// Replace the system clock (used by tests and replays).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn activity(&self) -> &RoomActivityTable {
        &self.activity
    }

    /// Decide whether `message` in `room` raises a popup, and render it if so.
    pub fn on_message_received(&self, room: &Room, message: &Message) -> Decision {
        let active = match self.tracker.active_room() {
            Ok(active) => active,
            Err(e) => {
                tracing::debug!(room = %room.jid, error = %e, "Skipping popup");
                return Decision::Skipped;
            }
        };

        // Short-circuit order matters: the burst check mutates the activity
        // table and only runs once the room is known to be in front.
        if !self.tracker.is_container_focused()
            && self.tracker.window_state() == WindowState::Normal
            && active.jid == room.jid
            && room.showing
            && (self.is_old_group_chat(room, message) || is_message_from_room(room, message))
        {
            tracing::debug!(room = %room.jid, "Suppressing popup: chat is active and showing");
            return Decision::Suppressed {
                reason: SuppressReason::ActiveConversation,
            };
        }

        if self.is_own_message(room, &active, message) {
            tracing::debug!(room = %room.jid, "Suppressing popup: sender is the local user");
            return Decision::Suppressed {
                reason: SuppressReason::OwnMessage,
            };
        }

        self.route(room, message)
    }

    /// Forward an outgoing message to the renderer.
    pub fn on_message_sent(&self, room: &Room, message: &Message) {
        self.renderer.message_sent(room, message);
    }

    fn route(&self, room: &Room, message: &Message) -> Decision {
        let config = self.config.as_ref();
        let configured = config.keywords();

        let (route, style) = if let Some(keyword) = keywords::first_match(&message.body, &configured)
        {
            tracing::debug!(room = %room.jid, keyword, "Keyword matched");
            let style = if config.get_bool(keys::KEYWORD_DIFFERENT, true) {
                bundles::keyword(config)
            } else {
                bundles::single(config)
            };
            (Route::Keyword, style)
        } else {
            match room.kind {
                RoomKind::Single if !config.get_bool(keys::SINGLE_DISABLED, false) => {
                    (Route::Single, bundles::single(config))
                }
                RoomKind::Group if !config.get_bool(keys::GROUP_DISABLED, false) => {
                    let style = if config.get_bool(keys::GROUP_DIFFERENT, false) {
                        bundles::group(config)
                    } else {
                        bundles::group_plain(config)
                    };
                    (Route::Group, style)
                }
                kind => {
                    tracing::debug!(room = %room.jid, ?kind, "Popups disabled for room kind");
                    return Decision::Suppressed {
                        reason: SuppressReason::Disabled,
                    };
                }
            }
        };

        self.renderer.message_received(room, message, style);
        tracing::debug!(room = %room.jid, ?route, duration_ms = style.duration_ms, "Popup shown");
        Decision::Shown { route, style }
    }

    fn is_old_group_chat(&self, room: &Room, message: &Message) -> bool {
        if message.kind != MessageKind::GroupChat {
            return false;
        }
        self.activity.observe(&room.jid, self.clock.now_millis())
    }

    fn is_own_message(&self, room: &Room, active: &Room, message: &Message) -> bool {
        let own_nickname = room.kind == RoomKind::Group
            && active
                .nickname
                .as_deref()
                .is_some_and(|nick| message.from.resource_or_empty() == nick);

        own_nickname
            || self
                .tracker
                .session_address()
                .is_some_and(|session| session == message.from)
    }
}

fn is_message_from_room(room: &Room, message: &Message) -> bool {
    message.from == room.jid
}

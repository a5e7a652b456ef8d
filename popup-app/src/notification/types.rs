//! Popup event definitions handed to the display layer.

use popup_engine::{Message, Room, StyleBundle};
use serde::{Deserialize, Serialize};

/// One renderer call, serialized as `{"type": "popup_received", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PopupEvent {
    #[serde(rename = "popup_received")]
    Received {
        room: Room,
        message: Message,
        style: StyleBundle,
    },
    #[serde(rename = "popup_sent")]
    Sent { room: Room, message: Message },
}

//! Chat room, message and style type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Address of a room or sender, `local@domain/resource`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jid(String);

impl Jid {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Address without the resource part.
    pub fn bare(&self) -> &str {
        match self.0.split_once('/') {
            Some((bare, _)) => bare,
            None => &self.0,
        }
    }

    /// Resource part (the nickname for group-chat senders).
    pub fn resource(&self) -> Option<&str> {
        self.0.split_once('/').map(|(_, resource)| resource)
    }

    pub fn resource_or_empty(&self) -> &str {
        self.resource().unwrap_or_default()
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Jid {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Jid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Kind of conversation a room hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Single,
    Group,
}

/// Message type tag as delivered by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Normal,
    GroupChat,
}

/// Chat window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// A conversation as seen by the engine. Owned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub jid: Jid,
    pub kind: RoomKind,
    #[serde(default)]
    pub showing: bool,
    /// Local user's nickname in a group room.
    #[serde(default)]
    pub nickname: Option<String>,
}

impl Room {
    pub fn single(jid: impl Into<Jid>) -> Self {
        Self {
            jid: jid.into(),
            kind: RoomKind::Single,
            showing: false,
            nickname: None,
        }
    }

    pub fn group(jid: impl Into<Jid>, nickname: impl Into<String>) -> Self {
        Self {
            jid: jid.into(),
            kind: RoomKind::Group,
            showing: false,
            nickname: Some(nickname.into()),
        }
    }

    pub fn showing(mut self, showing: bool) -> Self {
        self.showing = showing;
        self
    }

    /// Message kind the transport uses for this room.
    pub fn chat_type(&self) -> MessageKind {
        match self.kind {
            RoomKind::Single => MessageKind::Normal,
            RoomKind::Group => MessageKind::GroupChat,
        }
    }
}

/// An incoming or outgoing chat message. Owned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: Jid,
    pub body: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(from: impl Into<Jid>, body: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            from: from.into(),
            body: body.into(),
            kind,
        }
    }

    pub fn chat(from: impl Into<Jid>, body: impl Into<String>) -> Self {
        Self::new(from, body, MessageKind::Normal)
    }

    pub fn groupchat(from: impl Into<Jid>, body: impl Into<String>) -> Self {
        Self::new(from, body, MessageKind::GroupChat)
    }
}

/// Colors and display time of a single popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBundle {
    pub background: Color,
    pub header: Color,
    pub text: Color,
    pub duration_ms: u32,
}

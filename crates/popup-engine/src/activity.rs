//! Per-room group-chat burst tracking.
//!
//! Joining a group room replays a burst of history messages. The first
//! message of a room and any message arriving within [`BURST_WINDOW_MS`]
//! of it count as "old"; once a second message lands inside the window
//! the room is suppressed for the lifetime of the table.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::types::Jid;

/// Window after the first group message in which a follow-up marks the burst.
pub const BURST_WINDOW_MS: i64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomActivity {
    /// First group message seen at this epoch-millisecond timestamp.
    FirstSeen(i64),
    /// Burst detected; never expires.
    Suppressed,
}

/// Concurrent room → activity map. Entries are never removed.
#[derive(Debug, Default)]
pub struct RoomActivityTable {
    rooms: DashMap<Jid, RoomActivity>,
}

impl RoomActivityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a group message for `room` at `now_ms`; returns `true` when it
    /// belongs to the join burst.
    ///
    /// The check and update run under the entry's shard lock, so concurrent
    /// calls for the same room are serialized.
    ///
    /// A `FirstSeen` entry older than the window is left as is: later rapid
    /// pairs do not restart the window.
    pub fn observe(&self, room: &Jid, now_ms: i64) -> bool {
        match self.rooms.entry(room.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(RoomActivity::FirstSeen(now_ms));
                tracing::debug!(room = %room, "First group message seen");
                true
            }
            Entry::Occupied(mut slot) => match *slot.get() {
                RoomActivity::Suppressed => true,
                RoomActivity::FirstSeen(start) if now_ms - start < BURST_WINDOW_MS => {
                    slot.insert(RoomActivity::Suppressed);
                    tracing::debug!(room = %room, "Group burst detected, room suppressed");
                    true
                }
                RoomActivity::FirstSeen(_) => false,
            },
        }
    }

    pub fn get(&self, room: &Jid) -> Option<RoomActivity> {
        self.rooms.get(room).map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

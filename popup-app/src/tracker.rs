//! Host-side focus state backing [`ActiveRoomTracker`].
//!
//! The chat UI pushes its state in through the setters; the engine reads
//! it on every received message.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use popup_engine::{ActiveRoomTracker, Jid, Room, TrackerError, WindowState};

#[derive(Debug, Clone, Default)]
struct FocusState {
    active_room: Option<Room>,
    container_focused: bool,
    window_state: WindowState,
    session: Option<Jid>,
}

#[derive(Debug, Default)]
pub struct FocusTracker {
    state: RwLock<FocusState>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while no chat container exists.
    pub fn set_active_room(&self, room: Option<Room>) {
        self.write().active_room = room;
    }

    pub fn set_container_focused(&self, focused: bool) {
        self.write().container_focused = focused;
    }

    pub fn set_window_state(&self, window_state: WindowState) {
        self.write().window_state = window_state;
    }

    pub fn set_session(&self, session: Option<Jid>) {
        self.write().session = session;
    }

    fn read(&self) -> RwLockReadGuard<'_, FocusState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FocusState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ActiveRoomTracker for FocusTracker {
    fn active_room(&self) -> Result<Room, TrackerError> {
        self.read()
            .active_room
            .clone()
            .ok_or(TrackerError::ActiveRoomUnavailable)
    }

    fn is_container_focused(&self) -> bool {
        self.read().container_focused
    }

    fn window_state(&self) -> WindowState {
        self.read().window_state
    }

    fn session_address(&self) -> Option<Jid> {
        self.read().session.clone()
    }
}

//! Popup delivery to the display layer.
//!
//! Engine decisions become [`types::PopupEvent`]s, queued and published as
//! JSON by [`queue`].

pub mod queue;
pub mod types;

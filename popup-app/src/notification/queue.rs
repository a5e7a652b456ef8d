//! Popup queue and worker.
//!
//! The engine calls [`QueueRenderer`] synchronously; events are pushed with
//! `try_send` and a worker task publishes them as JSON to subscribers.

use popup_engine::{Message, NotificationRenderer, Room, StyleBundle};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use super::types::PopupEvent;

const QUEUE_CAPACITY: usize = 100;

/// [`NotificationRenderer`] that queues events for the worker.
#[derive(Debug, Clone)]
pub struct QueueRenderer {
    tx: mpsc::Sender<PopupEvent>,
}

impl QueueRenderer {
    fn enqueue(&self, event: PopupEvent) {
        if let Err(e) = self.tx.try_send(event) {
            tracing::warn!("Popup queue full or closed: {e}");
        }
    }
}

impl NotificationRenderer for QueueRenderer {
    fn message_received(&self, room: &Room, message: &Message, style: StyleBundle) {
        self.enqueue(PopupEvent::Received {
            room: room.clone(),
            message: message.clone(),
            style,
        });
    }

    fn message_sent(&self, room: &Room, message: &Message) {
        self.enqueue(PopupEvent::Sent {
            room: room.clone(),
            message: message.clone(),
        });
    }
}

/// Start the popup queue worker. Must be called inside a Tokio runtime.
///
/// The worker stops once every [`QueueRenderer`] clone is dropped.
pub fn start_worker(out: broadcast::Sender<String>) -> (QueueRenderer, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel::<PopupEvent>(QUEUE_CAPACITY);
    let handle = tokio::spawn(worker_loop(out, rx));
    tracing::info!("Popup queue worker started");
    (QueueRenderer { tx }, handle)
}

async fn worker_loop(out: broadcast::Sender<String>, mut rx: mpsc::Receiver<PopupEvent>) {
    while let Some(event) = rx.recv().await {
        match serde_json::to_string(&event) {
            Ok(payload) => {
                // No subscribers is not an error.
                let _ = out.send(payload);
            }
            Err(e) => tracing::error!("Failed to serialize popup event: {e}"),
        }
    }

    tracing::info!("Popup queue worker stopped");
}

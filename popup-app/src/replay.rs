//! JSON-lines event scripts for driving the engine outside a chat client.
//!
//! One step per line, tagged by `op`:
//!
//! ```text
//! {"op":"session","jid":"me@example.org/desktop"}
//! {"op":"focus","active_room":{"jid":"lobby@conference.example.org","kind":"group","showing":true,"nickname":"me"}}
//! {"op":"setting","key":"POPUP_KEYWORDS","value":"deploy"}
//! {"op":"received","room":{...},"message":{"from":"...","body":"...","kind":"groupchat"}}
//! {"op":"sent","room":{...},"message":{...}}
//! {"op":"wait","ms":2000}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::time::Duration;

use popup_engine::{Decision, Jid, Message, Room, WindowState};
use serde::Deserialize;

use crate::app::SharedState;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayStep {
    Session {
        jid: Option<Jid>,
    },
    Focus {
        #[serde(default)]
        active_room: Option<Room>,
        #[serde(default)]
        container_focused: bool,
        #[serde(default)]
        window: WindowState,
    },
    Setting {
        key: String,
        value: String,
    },
    Received {
        room: Room,
        message: Message,
    },
    Sent {
        room: Room,
        message: Message,
    },
    Wait {
        ms: u64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("line {line}: invalid step: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: {message}")]
    Setting { line: usize, message: String },
}

/// Parse one script line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: usize, text: &str) -> Result<Option<ReplayStep>, ReplayError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|source| ReplayError::Parse { line, source })
}

/// Apply a step to the shared state. Returns the engine decision for `received` steps.
pub async fn apply(
    state: &SharedState,
    line: usize,
    step: ReplayStep,
) -> Result<Option<Decision>, ReplayError> {
    match step {
        ReplayStep::Session { jid } => {
            tracing::debug!(line, session = ?jid, "Session changed");
            state.tracker().set_session(jid);
        }
        ReplayStep::Focus {
            active_room,
            container_focused,
            window,
        } => {
            let tracker = state.tracker();
            tracker.set_active_room(active_room);
            tracker.set_container_focused(container_focused);
            tracker.set_window_state(window);
        }
        ReplayStep::Setting { key, value } => {
            state
                .settings()
                .set_setting(&key, &value)
                .map_err(|e| ReplayError::Setting {
                    line,
                    message: e.to_string(),
                })?;
        }
        ReplayStep::Received { room, message } => {
            return Ok(Some(state.engine().on_message_received(&room, &message)));
        }
        ReplayStep::Sent { room, message } => {
            state.engine().on_message_sent(&room, &message);
        }
        ReplayStep::Wait { ms } => {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use popup_engine::{NotificationRenderer, Route, StyleBundle, SuppressReason};
    use popup_settings::SettingsManager;

    use super::*;

    #[derive(Default)]
    struct Bodies(Mutex<Vec<String>>);

    impl NotificationRenderer for Bodies {
        fn message_received(&self, _room: &Room, message: &Message, _style: StyleBundle) {
            self.0.lock().unwrap().push(message.body.clone());
        }

        fn message_sent(&self, _room: &Room, message: &Message) {
            self.0.lock().unwrap().push(format!("sent:{}", message.body));
        }
    }

    fn state() -> (SharedState, Arc<Bodies>) {
        let bodies = Arc::new(Bodies::default());
        let state = SharedState::new(Arc::new(SettingsManager::new()), bodies.clone());
        (state, bodies)
    }

    const SCRIPT: &str = r#"
# joined the lobby, history replay follows
{"op":"session","jid":"me@example.org/desktop"}
{"op":"focus","active_room":{"jid":"lobby@conference.example.org","kind":"group","showing":true,"nickname":"me"}}
{"op":"setting","key":"POPUP_KEYWORDS","value":"deploy"}
{"op":"received","room":{"jid":"lobby@conference.example.org","kind":"group","showing":true,"nickname":"me"},"message":{"from":"lobby@conference.example.org/bob","body":"old news","kind":"groupchat"}}
{"op":"received","room":{"jid":"ops@conference.example.org","kind":"group","nickname":"me"},"message":{"from":"ops@conference.example.org/ci","body":"deploy done","kind":"groupchat"}}
{"op":"received","room":{"jid":"ops@conference.example.org","kind":"group","nickname":"me"},"message":{"from":"ops@conference.example.org/me","body":"thanks","kind":"groupchat"}}
{"op":"sent","room":{"jid":"bob@example.org","kind":"single"},"message":{"from":"me@example.org/desktop","body":"hey","kind":"normal"}}
"#;

    #[test]
    fn parses_steps_and_skips_comments() {
        let steps: Vec<_> = SCRIPT
            .lines()
            .enumerate()
            .filter_map(|(i, l)| parse_line(i + 1, l).unwrap())
            .collect();
        assert_eq!(steps.len(), 7);
        assert_eq!(
            steps[0],
            ReplayStep::Session {
                jid: Some(Jid::new("me@example.org/desktop"))
            }
        );
        match &steps[1] {
            ReplayStep::Focus {
                container_focused,
                window,
                ..
            } => {
                assert!(!container_focused);
                assert_eq!(*window, WindowState::Normal);
            }
            other => panic!("unexpected step: {other:?}"),
        }
    }

    #[test]
    fn parse_error_reports_line() {
        let err = parse_line(7, r#"{"op":"teleport"}"#).unwrap_err();
        assert!(err.to_string().starts_with("line 7:"));
    }

    #[tokio::test]
    async fn replays_script_against_engine() {
        let (state, bodies) = state();
        let mut decisions = Vec::new();

        for (i, text) in SCRIPT.lines().enumerate() {
            if let Some(step) = parse_line(i + 1, text).unwrap() {
                if let Some(decision) = apply(&state, i + 1, step).await.unwrap() {
                    decisions.push(decision);
                }
            }
        }

        assert_eq!(decisions.len(), 3);
        assert_eq!(
            decisions[0],
            Decision::Suppressed {
                reason: SuppressReason::ActiveConversation
            }
        );
        assert!(matches!(
            decisions[1],
            Decision::Shown {
                route: Route::Keyword,
                ..
            }
        ));
        assert_eq!(
            decisions[2],
            Decision::Suppressed {
                reason: SuppressReason::OwnMessage
            }
        );
        assert_eq!(*bodies.0.lock().unwrap(), vec!["deploy done", "sent:hey"]);
    }

    #[tokio::test]
    async fn invalid_setting_is_an_error() {
        let (state, _) = state();
        let step = ReplayStep::Setting {
            key: "POPUP_DURATION".into(),
            value: "forever".into(),
        };
        let err = apply(&state, 3, step).await.unwrap_err();
        assert!(matches!(err, ReplayError::Setting { line: 3, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_sleeps_for_requested_time() {
        let (state, _) = state();
        let start = tokio::time::Instant::now();
        apply(&state, 1, ReplayStep::Wait { ms: 2000 }).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }
}

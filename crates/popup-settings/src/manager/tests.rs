use std::sync::{Arc, Mutex};

use popup_engine::{
    ActiveRoomTracker, Decision, Jid, Message, NotificationEngine, NotificationRenderer, Room,
    Route, StyleBundle, TrackerError, WindowState,
};

use super::*;

#[test]
fn unset_keys_fall_back_to_defaults() {
    let sm = SettingsManager::new();
    assert_eq!(sm.get_setting(keys::DURATION).unwrap(), "3000");
    assert_eq!(sm.get_setting(keys::GROUP_TEXT_COLOR).unwrap(), "");
    assert!(sm.get_setting("NOT_A_SETTING").is_err());
}

#[test]
fn set_setting_validates() {
    let sm = SettingsManager::new();
    sm.set_setting(keys::GROUP_DURATION, "4500").unwrap();
    assert_eq!(sm.get_setting(keys::GROUP_DURATION).unwrap(), "4500");

    let err = sm.set_setting(keys::GROUP_DURATION, "0").unwrap_err();
    assert!(err.to_string().contains(keys::GROUP_DURATION));
    assert_eq!(sm.get_setting(keys::GROUP_DURATION).unwrap(), "4500");

    assert!(sm.set_setting("NOT_A_SETTING", "x").is_err());
}

#[test]
fn get_all_settings_reports_defaults_and_overrides() {
    let sm = SettingsManager::new();
    sm.set_setting(keys::KEYWORDS, "deploy").unwrap();

    let all = sm.get_all_settings().unwrap();
    assert_eq!(all.len(), DEFAULT_SETTINGS.len());

    let kw = &all[keys::KEYWORDS];
    assert_eq!(kw.value, "deploy");
    assert!(kw.has_value);
    assert!(!kw.is_default);

    let bg = &all[keys::GROUP_BACKGROUND_COLOR];
    assert!(!bg.has_value);
    assert!(bg.is_default);
}

#[test]
fn overrides_skip_unknown_and_invalid_values() {
    let sm = SettingsManager::new();
    let applied = sm.load_overrides([
        (keys::GROUP_DISABLED.to_string(), "true".to_string()),
        (keys::DURATION.to_string(), "soon".to_string()),
        (keys::TEXT_COLOR.to_string(), String::new()),
        ("PATH".to_string(), "/usr/bin".to_string()),
    ]);

    assert_eq!(applied, 1);
    assert!(sm.get_bool(keys::GROUP_DISABLED, false));
    assert_eq!(sm.get_int(keys::DURATION), 3000);
}

#[test]
fn configuration_reads() {
    let sm = SettingsManager::new();
    assert!(!sm.get_bool(keys::SINGLE_DISABLED, true));
    assert!(sm.get_bool(keys::KEYWORD_DIFFERENT, false));
    assert_eq!(sm.get_int(keys::KEYWORD_DURATION), 3000);
    assert_eq!(
        sm.get_color(keys::KEYWORD_TEXT_COLOR, Color::rgb(1, 2, 3)),
        Color::rgb(1, 2, 3)
    );
    assert_eq!(sm.get_color(keys::BACKGROUND_COLOR, Color::WHITE), Color::BLACK);

    sm.set_setting(keys::KEYWORD_TEXT_COLOR, "0,128,255").unwrap();
    assert_eq!(
        sm.get_color(keys::KEYWORD_TEXT_COLOR, Color::WHITE),
        Color::rgb(0, 128, 255)
    );
}

#[test]
fn keywords_are_trimmed_and_ordered() {
    let sm = SettingsManager::new();
    assert!(sm.keywords().is_empty());

    sm.set_setting(keys::KEYWORDS, " deploy, ,Alice ,build").unwrap();
    assert_eq!(sm.keywords(), vec!["deploy", "Alice", "build"]);
}

struct UnfocusedElsewhere;

impl ActiveRoomTracker for UnfocusedElsewhere {
    fn active_room(&self) -> Result<Room, TrackerError> {
        Ok(Room::single("someone@example.org"))
    }

    fn is_container_focused(&self) -> bool {
        false
    }

    fn window_state(&self) -> WindowState {
        WindowState::Normal
    }

    fn session_address(&self) -> Option<Jid> {
        Some(Jid::new("me@example.org/desktop"))
    }
}

#[derive(Default)]
struct Styles(Mutex<Vec<StyleBundle>>);

impl NotificationRenderer for Styles {
    fn message_received(&self, _room: &Room, _message: &Message, style: StyleBundle) {
        self.0.lock().unwrap().push(style);
    }

    fn message_sent(&self, _room: &Room, _message: &Message) {}
}

#[test]
fn engine_reads_group_duration_with_base_colors() {
    let sm = Arc::new(SettingsManager::new());
    sm.set_setting(keys::BACKGROUND_COLOR, "#202020").unwrap();
    sm.set_setting(keys::GROUP_BACKGROUND_COLOR, "#FF0000").unwrap();
    sm.set_setting(keys::DURATION, "2000").unwrap();
    sm.set_setting(keys::GROUP_DURATION, "8000").unwrap();

    let styles = Arc::new(Styles::default());
    let engine = NotificationEngine::new(sm.clone(), Arc::new(UnfocusedElsewhere), styles.clone());

    let room = Room::group("lobby@conference.example.org", "me").showing(true);
    let decision = engine.on_message_received(
        &room,
        &Message::groupchat("lobby@conference.example.org/bob", "hi"),
    );

    let expected = StyleBundle {
        background: Color::rgb(0x20, 0x20, 0x20),
        header: Color::WHITE,
        text: Color::WHITE,
        duration_ms: 8000,
    };
    assert_eq!(
        decision,
        Decision::Shown {
            route: Route::Group,
            style: expected
        }
    );
    assert_eq!(*styles.0.lock().unwrap(), vec![expected]);

    sm.set_setting(keys::GROUP_DIFFERENT, "true").unwrap();
    let decision = engine.on_message_received(
        &room,
        &Message::groupchat("lobby@conference.example.org/bob", "again"),
    );
    assert_eq!(
        decision,
        Decision::Shown {
            route: Route::Group,
            style: StyleBundle {
                background: Color::rgb(255, 0, 0),
                ..expected
            }
        }
    );
}

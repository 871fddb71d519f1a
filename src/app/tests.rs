//! Tests for the exam timer app.

use super::*;
use crate::countdown::{Stage, TimerConfiguration};
use crate::timer::TimeoutMsg;
use bubbletea_rs::{KeyMsg, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn type_digits(app: &mut Model, digits: &str) {
    for c in digits.chars() {
        app.update(key(KeyCode::Char(c)));
    }
}

/// Delivers the tick the countdown is currently waiting for.
fn tick(app: &mut Model) {
    let msg = app.timer.pending_tick().expect("countdown is not ticking");
    app.update(Box::new(msg));
}

fn plain_view(app: &Model) -> String {
    strip_ansi_escapes::strip_str(app.view())
}

/// Types hours, tabs, types minutes, presses Enter.
fn configure(app: &mut Model, hours: &str, minutes: &str) {
    type_digits(app, hours);
    app.update(key(KeyCode::Tab));
    type_digits(app, minutes);
    app.update(key(KeyCode::Enter));
}

#[test]
fn test_starts_in_setup() {
    let app = new();
    assert_eq!(app.stage(), Stage::Setup);
    assert!(!app.timer().running());
    let view = plain_view(&app);
    assert!(view.contains("Set Exam Time"));
    assert!(view.contains("Start Exam"));
}

#[test]
fn test_one_minute_exam() {
    let mut app = new();
    configure(&mut app, "0", "1");

    assert_eq!(app.stage(), Stage::Running);
    assert_eq!(app.timer().total_seconds(), 60);
    assert_eq!(app.timer().remaining_seconds(), 60);
    assert!(!app.timer().running());

    app.update(key(KeyCode::Char(' ')));
    assert!(app.timer().running());

    for _ in 0..60 {
        tick(&mut app);
    }
    app.update(Box::new(TimeoutMsg { id: app.timer().id() }));

    assert_eq!(app.timer().remaining_seconds(), 0);
    assert!(!app.timer().running());
    assert_eq!(app.timer().progress(), 1.0);
    assert!(plain_view(&app).contains("00:00:00"));
    assert!(!app.key_map().toggle.enabled());
}

#[test]
fn test_ninety_minute_exam() {
    let mut app = new();
    configure(&mut app, "1", "30");

    assert_eq!(app.timer().total_seconds(), 5400);
    assert_eq!(app.timer().progress(), 0.0);
    let view = plain_view(&app);
    assert!(view.contains("01:30:00"));
    assert!(view.contains("Start"));
    assert!(view.contains("Reset"));
}

#[test]
fn test_zero_duration_is_accepted() {
    let mut app = new();
    app.update(key(KeyCode::Enter));
    assert_eq!(app.stage(), Stage::Running);
    assert_eq!(app.timer().total_seconds(), 0);
    assert_eq!(app.timer().progress(), 0.0);

    // Nothing to start
    assert!(app.update(key(KeyCode::Char(' '))).is_none());
    assert!(!app.timer().running());
}

#[test]
fn test_toggle_pauses_and_resumes() {
    let mut app = new();
    configure(&mut app, "0", "5");

    assert!(app.update(key(KeyCode::Char(' '))).is_some());
    assert_eq!(app.key_map().toggle.help().desc, "pause");
    assert!(plain_view(&app).contains("Pause"));
    tick(&mut app);

    assert!(app.update(key(KeyCode::Char(' '))).is_none());
    assert!(!app.timer().running());
    assert_eq!(app.key_map().toggle.help().desc, "start");
    assert_eq!(app.timer().remaining_seconds(), 299);

    app.update(key(KeyCode::Char('s')));
    assert!(app.timer().running());
}

#[test]
fn test_reset_keeps_inputs() {
    let mut app = new();
    configure(&mut app, "2", "15");
    app.update(key(KeyCode::Char(' ')));
    tick(&mut app);

    app.update(key(KeyCode::Char('r')));
    assert_eq!(app.stage(), Stage::Setup);
    assert!(!app.timer().running());
    assert_eq!(app.timer().remaining_seconds(), 0);
    assert!(app.timer().handle().is_none());
    assert_eq!(app.setup().configuration(), TimerConfiguration::new(2, 15));

    // Confirming again starts from the full duration
    app.update(key(KeyCode::Enter));
    assert_eq!(app.timer().remaining_seconds(), 2 * 3600 + 15 * 60);
}

#[test]
fn test_setup_keys_ignored_while_running() {
    let mut app = new();
    configure(&mut app, "0", "1");
    type_digits(&mut app, "9");
    app.update(key(KeyCode::Enter));
    assert_eq!(app.timer().total_seconds(), 60);
    assert_eq!(app.setup().configuration(), TimerConfiguration::new(0, 1));
}

#[test]
fn test_running_keys_ignored_in_setup() {
    let mut app = new();
    app.update(key(KeyCode::Char('r')));
    app.update(key(KeyCode::Char(' ')));
    assert_eq!(app.stage(), Stage::Setup);
    assert!(!app.timer().running());
}

#[test]
fn test_quit_from_both_stages() {
    let mut app = new();
    assert!(app.update(key(KeyCode::Char('q'))).is_some());

    configure(&mut app, "0", "1");
    assert!(app.update(key(KeyCode::Esc)).is_some());

    let ctrl_c = Box::new(KeyMsg {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
    }) as Msg;
    assert!(app.update(ctrl_c).is_some());
}

#[test]
fn test_stale_tick_after_reset_does_nothing() {
    let mut app = new();
    configure(&mut app, "0", "1");
    app.update(key(KeyCode::Char(' ')));
    let stale = app.timer.pending_tick().unwrap();

    app.update(key(KeyCode::Char('r')));
    app.update(key(KeyCode::Enter));
    assert!(app.update(Box::new(stale)).is_none());
    assert_eq!(app.timer().remaining_seconds(), 60);
}

#[test]
fn test_help_follows_stage() {
    let mut app = new();
    assert!(app.key_map().confirm.enabled());
    assert!(!app.key_map().reset.enabled());

    app.update(key(KeyCode::Enter));
    assert!(!app.key_map().confirm.enabled());
    assert!(app.key_map().reset.enabled());
    assert!(plain_view(&app).contains("r reset"));
}

#[test]
fn test_window_size_centres_view() {
    let mut app = new();
    let narrow = plain_view(&app);
    app.update(Box::new(WindowSizeMsg {
        width: 200,
        height: 50,
    }));
    let wide = plain_view(&app);
    let first_narrow = narrow.lines().next().unwrap_or_default();
    let first_wide = wide.lines().next().unwrap_or_default();
    assert!(first_wide.starts_with("    "));
    assert_eq!(first_wide.trim_start(), first_narrow.trim_start());
}

#[test]
fn test_custom_config() {
    let config = crate::config::new(&[crate::config::with_ring_radius(4)]);
    let mut app = new_with_config(config);
    app.update(key(KeyCode::Enter));
    // Ring of radius 4 is 9 rows tall
    let view = plain_view(&app);
    assert!(view.lines().count() >= 9);
    assert_eq!(app.ring.radius(), 4);
}

//! View-mode transitions, shortcut gating, and copy/focus intents.

use super::*;
use ryopaste_core::history::HistoryEntry;
use ryopaste_core::keymap::Key;

fn ctrl(key: Key) -> Chord {
    Chord::ctrl(key)
}

#[test]
fn reference_chord_flips_between_reference_and_code() {
    let mut harness = test_app();
    let app = &mut harness.app;

    app.press_chord(ctrl(Key::Slash));
    assert_eq!(app.view, ViewMode::Shortcut);
    app.press_chord(ctrl(Key::Slash));
    assert_eq!(app.view, ViewMode::Code);
}

#[test]
fn history_chord_loads_a_snapshot_of_the_ledger() {
    let mut harness = test_app();
    let app = &mut harness.app;
    let ledger = vec![HistoryEntry {
        id: "p1".to_string(),
        title: "alpha".to_string(),
    }];
    app.history.save(&ledger).expect("seed ledger");

    app.press_chord(ctrl(Key::H));
    assert_eq!(app.view, ViewMode::History);
    assert_eq!(app.history_rows, ledger);

    // The panel shows a snapshot; later ledger writes do not leak in.
    app.history
        .save(&[HistoryEntry {
            id: "p2".to_string(),
            title: "beta".to_string(),
        }])
        .expect("rewrite ledger");
    assert_eq!(app.history_rows, ledger);

    app.press_chord(ctrl(Key::H));
    assert_eq!(app.view, ViewMode::Code);
}

#[test]
fn toggling_between_panels_never_stacks_modes() {
    let mut harness = test_app();
    let app = &mut harness.app;

    app.press_chord(ctrl(Key::Slash));
    app.press_chord(ctrl(Key::H));
    assert_eq!(app.view, ViewMode::History);
    app.press_chord(ctrl(Key::Slash));
    assert_eq!(app.view, ViewMode::Shortcut);
}

#[test]
fn shortcut_toggle_parity_restores_behavior() {
    let mut harness = test_app();
    let app = &mut harness.app;
    assert!(app.shortcuts_enabled);

    app.press_chord(ctrl(Key::K));
    assert!(!app.shortcuts_enabled);
    app.press_chord(ctrl(Key::K));
    assert!(app.shortcuts_enabled);
}

#[test]
fn disabled_shortcuts_change_no_state_except_the_toggle() {
    let mut harness = test_app();
    let app = &mut harness.app;
    app.press_chord(ctrl(Key::K));
    assert!(!app.shortcuts_enabled);

    for key in [
        Key::Slash,
        Key::H,
        Key::A,
        Key::L,
        Key::E,
        Key::T,
        Key::G,
        Key::S,
    ] {
        app.press_chord(ctrl(key));
    }
    assert_eq!(app.view, ViewMode::Code);
    assert!(app.clipboard_outgoing.is_none());
    assert!(app.focus_request.is_none());
    assert!(!app.language_picker_open);
    assert!(!app.save_in_flight);

    app.press_chord(ctrl(Key::K));
    app.press_chord(ctrl(Key::Slash));
    assert_eq!(app.view, ViewMode::Shortcut);
}

#[test]
fn copy_chords_capture_draft_code_and_editor_link() {
    let mut harness = test_app();
    let app = &mut harness.app;
    app.draft.code = "fn main() {}".to_string();

    app.press_chord(ctrl(Key::A));
    let request = app.clipboard_outgoing.take().expect("copy intent");
    assert_eq!(request.text, "fn main() {}");
    assert_eq!(request.kind, CopyKind::Code);

    app.press_chord(ctrl(Key::L));
    let request = app.clipboard_outgoing.take().expect("copy intent");
    assert_eq!(request.text, "https://paste.example/");
    assert_eq!(request.kind, CopyKind::Link);
}

#[test]
fn viewer_copy_link_chord_points_at_the_open_paste() {
    let mut harness = test_app();
    harness.store.seed(seeded("p9", "body", "nine"));
    let app = &mut harness.app;
    app.open_paste("p9".to_string());
    pump(app);

    app.press_chord(ctrl(Key::S));
    let request = app.clipboard_outgoing.take().expect("copy intent");
    assert_eq!(request.text, "https://paste.example/p9");
    assert_eq!(request.kind, CopyKind::Link);

    app.press_chord(ctrl(Key::A));
    let request = app.clipboard_outgoing.take().expect("copy intent");
    assert_eq!(request.text, "body");
}

#[test]
fn focus_and_language_chords_set_editor_intents() {
    let mut harness = test_app();
    let app = &mut harness.app;

    app.press_chord(ctrl(Key::E));
    assert_eq!(app.focus_request, Some(FocusTarget::Code));
    app.press_chord(ctrl(Key::T));
    assert_eq!(app.focus_request, Some(FocusTarget::Title));
    app.press_chord(ctrl(Key::G));
    assert!(app.language_picker_open);
}

#[test]
fn viewer_new_paste_chord_resets_the_editor() {
    let mut harness = test_app();
    harness.store.seed(seeded("p1", "body", "one"));
    let app = &mut harness.app;
    app.open_paste("p1".to_string());
    pump(app);
    assert!(app.document.is_some());

    app.press_chord(ctrl(Key::I));
    assert_eq!(app.route, Route::Editor);
    assert_eq!(app.view, ViewMode::Code);
    assert!(app.document.is_none());
    assert_eq!(app.draft.name, "Untitled");
    assert!(app.draft.code.is_empty());
}

#[test]
fn editor_only_chords_do_nothing_in_the_viewer() {
    let mut harness = test_app();
    harness.store.seed(seeded("p1", "body", "one"));
    let app = &mut harness.app;
    app.open_paste("p1".to_string());
    pump(app);

    for key in [Key::E, Key::T, Key::G, Key::L] {
        app.press_chord(ctrl(key));
    }
    assert!(app.focus_request.is_none());
    assert!(!app.language_picker_open);
    assert!(app.clipboard_outgoing.is_none());
}

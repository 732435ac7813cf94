//! Declarative keyboard chord tables for both views.
//!
//! One listener per frame consults these tables instead of a chain of ad-hoc
//! conditionals, so every chord can be exercised in both the enabled and the
//! disabled state. The enable toggle itself is honored unconditionally.

use std::fmt;

/// Which page the chord table applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Editor,
    Viewer,
}

/// UI action produced by a recognized chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flip the shortcut enable gate. Always dispatched.
    ToggleShortcuts,
    /// Flip between the shortcut reference and the code view.
    ToggleReference,
    /// Flip between the history list and the code view.
    ToggleHistory,
    /// Copy the current code to the system clipboard.
    CopyCode,
    /// Copy the current page link to the system clipboard.
    CopyLink,
    /// Focus the code input (editor only).
    FocusCode,
    /// Focus the title input (editor only).
    FocusTitle,
    /// Open the language selector (editor only).
    OpenLanguagePicker,
    /// Persist the draft and navigate to its viewer (editor only).
    Save,
    /// Navigate to a blank editor (viewer only).
    NewPaste,
}

/// Key half of a chord. Only keys that appear in a binding table exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    A,
    E,
    G,
    H,
    I,
    K,
    L,
    S,
    T,
    Slash,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Key::A => "a",
            Key::E => "e",
            Key::G => "g",
            Key::H => "h",
            Key::I => "i",
            Key::K => "k",
            Key::L => "l",
            Key::S => "s",
            Key::T => "t",
            Key::Slash => "/",
        };
        f.write_str(label)
    }
}

/// A modifier-plus-key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub ctrl: bool,
    pub key: Key,
}

impl Chord {
    pub const fn ctrl(key: Key) -> Self {
        Self { ctrl: true, key }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl + {}", self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// One row of a view's chord table.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub chord: Chord,
    pub action: Action,
    pub label: &'static str,
}

const fn bind(key: Key, action: Action, label: &'static str) -> Binding {
    Binding {
        chord: Chord::ctrl(key),
        action,
        label,
    }
}

const EDITOR_BINDINGS: &[Binding] = &[
    bind(Key::Slash, Action::ToggleReference, "Toggle shortcut list"),
    bind(Key::K, Action::ToggleShortcuts, "Toggle usage of shortcuts"),
    bind(Key::H, Action::ToggleHistory, "Show history"),
    bind(Key::A, Action::CopyCode, "Copy code"),
    bind(Key::L, Action::CopyLink, "Copy link"),
    bind(Key::E, Action::FocusCode, "Focus the code area"),
    bind(Key::T, Action::FocusTitle, "Focus the title field"),
    bind(Key::G, Action::OpenLanguagePicker, "Choose language"),
    bind(Key::S, Action::Save, "Save paste"),
];

const VIEWER_BINDINGS: &[Binding] = &[
    bind(Key::Slash, Action::ToggleReference, "Toggle shortcut list"),
    bind(Key::K, Action::ToggleShortcuts, "Toggle usage of shortcuts"),
    bind(Key::H, Action::ToggleHistory, "Show history"),
    bind(Key::A, Action::CopyCode, "Copy code"),
    bind(Key::S, Action::CopyLink, "Copy link"),
    bind(Key::I, Action::NewPaste, "New paste"),
];

/// The chord table of one view.
pub fn bindings(view: View) -> &'static [Binding] {
    match view {
        View::Editor => EDITOR_BINDINGS,
        View::Viewer => VIEWER_BINDINGS,
    }
}

/// Translate a chord into an action, honoring the enable gate.
///
/// Returns `None` for unbound chords and for every bound chord other than
/// the enable toggle while shortcuts are disabled.
pub fn resolve(view: View, chord: Chord, enabled: bool) -> Option<Action> {
    let binding = bindings(view).iter().find(|binding| binding.chord == chord)?;
    if !enabled && binding.action != Action::ToggleShortcuts {
        return None;
    }
    Some(binding.action)
}

/// Render the shortcut reference text for a view from its chord table.
pub fn reference(view: View) -> String {
    let mut text = String::from("== Shortcuts ==\n");
    for binding in bindings(view) {
        text.push_str(&format!("{} :: {}\n", binding.chord, binding.label));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWS: [View; 2] = [View::Editor, View::Viewer];

    #[test]
    fn every_binding_resolves_while_enabled() {
        for view in VIEWS {
            for binding in bindings(view) {
                assert_eq!(
                    resolve(view, binding.chord, true),
                    Some(binding.action),
                    "{:?} {} must resolve when enabled",
                    view,
                    binding.chord
                );
            }
        }
    }

    #[test]
    fn only_the_toggle_resolves_while_disabled() {
        for view in VIEWS {
            for binding in bindings(view) {
                let resolved = resolve(view, binding.chord, false);
                if binding.action == Action::ToggleShortcuts {
                    assert_eq!(resolved, Some(Action::ToggleShortcuts));
                } else {
                    assert_eq!(
                        resolved, None,
                        "{:?} {} must be a no-op when disabled",
                        view, binding.chord
                    );
                }
            }
        }
    }

    #[test]
    fn unbound_chords_resolve_to_nothing() {
        assert_eq!(
            resolve(View::Viewer, Chord::ctrl(Key::E), true),
            None,
            "focus chords are editor-only"
        );
        assert_eq!(
            resolve(
                View::Editor,
                Chord {
                    ctrl: false,
                    key: Key::S
                },
                true
            ),
            None,
            "bare keys are not chords"
        );
    }

    #[test]
    fn chords_are_unique_within_each_view() {
        for view in VIEWS {
            let table = bindings(view);
            for (index, binding) in table.iter().enumerate() {
                assert!(
                    !table[index + 1..]
                        .iter()
                        .any(|other| other.chord == binding.chord),
                    "{:?} binds {} twice",
                    view,
                    binding.chord
                );
            }
        }
    }

    #[test]
    fn reference_lists_every_binding() {
        for view in VIEWS {
            let text = reference(view);
            assert!(text.starts_with("== Shortcuts =="));
            for binding in bindings(view) {
                assert!(text.contains(binding.label), "missing {}", binding.label);
                assert!(text.contains(&binding.chord.to_string()));
            }
        }
    }
}

//! egui application shell: routes, view modes, and state transitions.
//!
//! The two pages are states of one app, so there is no global listener to
//! leak across navigations; one input pass per frame consults the active
//! view's chord table.

mod style;
#[cfg(test)]
mod tests;
mod ui;

use crate::backend::{spawn_backend, BackendHandle, StoreCmd, StoreEvent};
use crate::clipboard;
use eframe::egui;
use ryopaste_core::document::PasteDocument;
use ryopaste_core::history::{FileHistory, HistoryEntry, HistoryStore};
use ryopaste_core::keymap::{self, Action, Chord, View};
use ryopaste_core::models::language::{catalog, LanguageOption};
use ryopaste_core::store::RemoteTable;
use ryopaste_core::Config;
use std::time::{Duration, Instant};
use style::*;
use tracing::debug;

pub(crate) const APP_TITLE: &str = "Ryo Paste";
#[doc = "Default initial window size."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [980.0, 680.0];
#[doc = "Minimum enforced window size to keep the action bar usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 420.0];

const NOTICE_TTL: Duration = Duration::from_secs(5);
const CODE_INPUT_ID: &str = "editor_code_input";
const TITLE_INPUT_ID: &str = "editor_title_input";

/// Which page is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Editor,
    Viewer { id: String },
}

/// Central panel content; the three modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewMode {
    Code,
    Shortcut,
    History,
}

/// In-memory editor state, persisted as-is on save (no validation).
pub(crate) struct EditorDraft {
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) selected: usize,
}

impl Default for EditorDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: "Untitled".to_string(),
            selected: 0,
        }
    }
}

impl EditorDraft {
    pub(crate) fn selected_language(&self) -> &'static LanguageOption {
        &catalog()[self.selected]
    }
}

/// Which copy action produced a clipboard intent, for the success notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CopyKind {
    Code,
    Link,
}

impl CopyKind {
    fn success_message(self) -> &'static str {
        match self {
            CopyKind::Code => "Copied code to clipboard",
            CopyKind::Link => "Copied link to clipboard",
        }
    }
}

/// Pending clipboard write, drained once per frame.
pub(crate) struct CopyRequest {
    pub(crate) text: String,
    pub(crate) kind: CopyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FocusTarget {
    Code,
    Title,
}

/// One transient feedback line shown in the action bar, alert-style: a new
/// notice replaces whatever was showing.
struct Notice {
    text: String,
    expires_at: Instant,
}

/// Application shell owning all UI state.
///
/// Talks to the background worker via channels so the `update` loop never
/// blocks on network I/O.
pub(crate) struct RyoPasteApp {
    backend: BackendHandle,
    history: FileHistory,
    public_url: String,
    route: Route,
    view: ViewMode,
    shortcuts_enabled: bool,
    draft: EditorDraft,
    document: Option<PasteDocument>,
    history_rows: Vec<HistoryEntry>,
    notice: Option<Notice>,
    clipboard_outgoing: Option<CopyRequest>,
    focus_request: Option<FocusTarget>,
    language_picker_open: bool,
    save_in_flight: bool,
    pending_window_title: Option<String>,
    style_applied: bool,
}

impl RyoPasteApp {
    /// Build the app against the real remote store and ledger file.
    pub(crate) fn new(config: Config, initial_paste: Option<String>) -> Self {
        let store = RemoteTable::new(&config);
        let worker_history = FileHistory::new(config.history_path.clone());
        let backend = spawn_backend(Box::new(store), Box::new(worker_history));
        let mut app = Self::with_parts(
            backend,
            FileHistory::new(config.history_path),
            config.public_url,
        );
        if let Some(id) = initial_paste {
            app.open_paste(id);
        }
        app
    }

    /// Build the app around pre-wired collaborators (tests use fakes here).
    pub(crate) fn with_parts(
        backend: BackendHandle,
        history: FileHistory,
        public_url: String,
    ) -> Self {
        Self {
            backend,
            history,
            public_url: public_url.trim_end_matches('/').to_string(),
            route: Route::Editor,
            view: ViewMode::Code,
            shortcuts_enabled: true,
            draft: EditorDraft::default(),
            document: None,
            history_rows: Vec::new(),
            notice: None,
            clipboard_outgoing: None,
            focus_request: None,
            language_picker_open: false,
            save_in_flight: false,
            pending_window_title: None,
            style_applied: false,
        }
    }

    fn current_view(&self) -> View {
        match self.route {
            Route::Editor => View::Editor,
            Route::Viewer { .. } => View::Viewer,
        }
    }

    /// Navigate to the viewer for `id` and start its resolution.
    pub(crate) fn open_paste(&mut self, id: String) {
        self.route = Route::Viewer { id: id.clone() };
        self.view = ViewMode::Code;
        self.document = None;
        self.pending_window_title = Some(APP_TITLE.to_string());
        let _ = self.backend.cmd_tx.send(StoreCmd::ResolvePaste { id });
    }

    /// Navigate to a blank editor.
    pub(crate) fn open_editor(&mut self) {
        self.route = Route::Editor;
        self.view = ViewMode::Code;
        self.document = None;
        self.draft = EditorDraft::default();
        self.pending_window_title = Some(APP_TITLE.to_string());
    }

    /// The link for the current page, built from the public base URL.
    fn page_link(&self) -> String {
        match &self.route {
            Route::Editor => format!("{}/", self.public_url),
            Route::Viewer { id } => format!("{}/{}", self.public_url, id),
        }
    }

    fn current_code(&self) -> &str {
        match &self.route {
            Route::Editor => &self.draft.code,
            Route::Viewer { .. } => self
                .document
                .as_ref()
                .map(|document| document.code.as_str())
                .unwrap_or(""),
        }
    }

    /// Resolve a chord against the active view's table and run its action.
    pub(crate) fn press_chord(&mut self, chord: Chord) {
        if let Some(action) = keymap::resolve(self.current_view(), chord, self.shortcuts_enabled) {
            self.handle_action(action);
        }
    }

    /// Apply one UI action as a state transition.
    pub(crate) fn handle_action(&mut self, action: Action) {
        match action {
            Action::ToggleShortcuts => {
                self.shortcuts_enabled = !self.shortcuts_enabled;
                debug!("shortcuts enabled: {}", self.shortcuts_enabled);
            }
            Action::ToggleReference => self.toggle_view(ViewMode::Shortcut),
            Action::ToggleHistory => self.toggle_view(ViewMode::History),
            Action::CopyCode => {
                self.clipboard_outgoing = Some(CopyRequest {
                    text: self.current_code().to_string(),
                    kind: CopyKind::Code,
                });
            }
            Action::CopyLink => {
                self.clipboard_outgoing = Some(CopyRequest {
                    text: self.page_link(),
                    kind: CopyKind::Link,
                });
            }
            Action::FocusCode => self.focus_request = Some(FocusTarget::Code),
            Action::FocusTitle => self.focus_request = Some(FocusTarget::Title),
            Action::OpenLanguagePicker => self.language_picker_open = true,
            Action::Save => self.save_draft(),
            Action::NewPaste => self.open_editor(),
        }
    }

    /// Flip between `target` and the code view; entering the history mode
    /// loads a snapshot of the ledger (not live-updating).
    fn toggle_view(&mut self, target: ViewMode) {
        if self.view == target {
            self.view = ViewMode::Code;
            return;
        }
        if target == ViewMode::History {
            self.history_rows = self.history.load();
        }
        self.view = target;
    }

    /// Send the draft to the worker for persistence.
    ///
    /// Empty or default values are persisted as-is; there is no validation.
    pub(crate) fn save_draft(&mut self) {
        if self.save_in_flight || !matches!(self.route, Route::Editor) {
            return;
        }
        self.save_in_flight = true;
        let lang = self.draft.selected_language().canonical_code().to_string();
        let _ = self.backend.cmd_tx.send(StoreCmd::SavePaste {
            code: self.draft.code.clone(),
            lang,
            name: self.draft.name.clone(),
        });
    }

    /// Apply one worker event to the UI state.
    pub(crate) fn apply_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::DocumentReady { id, document } => {
                let current = matches!(&self.route, Route::Viewer { id: wanted } if *wanted == id);
                if !current {
                    // Response for a page the user already navigated away from.
                    return;
                }
                self.pending_window_title = Some(format!("{} | {}", APP_TITLE, document.title));
                self.document = Some(document);
            }
            StoreEvent::PasteSaved { id } => {
                self.save_in_flight = false;
                self.notify("Paste saved");
                self.open_paste(id);
            }
            StoreEvent::SaveFailed { message } => {
                self.save_in_flight = false;
                self.notify(format!("Save failed: {}", message));
            }
        }
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    /// The notice to show this frame, if it has not expired yet.
    pub(crate) fn active_notice(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|notice| notice.expires_at > Instant::now())
            .map(|notice| notice.text.as_str())
    }

    fn retire_notice(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.expires_at <= Instant::now())
        {
            self.notice = None;
        }
    }

    fn dispatch_shortcuts(&mut self, ctx: &egui::Context) {
        let view = self.current_view();
        let enabled = self.shortcuts_enabled;
        let mut pressed: Vec<Chord> = Vec::new();
        ctx.input_mut(|input| {
            for binding in keymap::bindings(view) {
                // Only chords that will act get consumed; disabled ones fall
                // through to the default widget behavior, and consuming stops
                // the default edit action (select-all on Ctrl+A, for one)
                // from firing alongside the chord.
                if keymap::resolve(view, binding.chord, enabled).is_none() {
                    continue;
                }
                if input.consume_key(egui::Modifiers::COMMAND, egui_key(binding.chord.key)) {
                    pressed.push(binding.chord);
                }
            }
        });
        for chord in pressed {
            self.press_chord(chord);
        }
    }

    /// Perform any pending clipboard write and report the outcome.
    fn flush_clipboard(&mut self) {
        let Some(request) = self.clipboard_outgoing.take() else {
            return;
        };
        match clipboard::copy_to_clipboard(&request.text) {
            Ok(()) => self.notify(request.kind.success_message()),
            Err(err) => {
                // The environment refused the copy; the user must be told,
                // not left assuming the text is on the clipboard.
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title("Clipboard")
                    .set_description(format!("Could not copy to the clipboard: {}", err))
                    .show();
            }
        }
    }
}

fn egui_key(key: keymap::Key) -> egui::Key {
    match key {
        keymap::Key::A => egui::Key::A,
        keymap::Key::E => egui::Key::E,
        keymap::Key::G => egui::Key::G,
        keymap::Key::H => egui::Key::H,
        keymap::Key::I => egui::Key::I,
        keymap::Key::K => egui::Key::K,
        keymap::Key::L => egui::Key::L,
        keymap::Key::S => egui::Key::S,
        keymap::Key::T => egui::Key::T,
        keymap::Key::Slash => egui::Key::Slash,
    }
}

impl eframe::App for RyoPasteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);

        let events: Vec<StoreEvent> = self.backend.evt_rx.try_iter().collect();
        for event in events {
            self.apply_event(event);
        }
        if let Some(title) = self.pending_window_title.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }

        self.dispatch_shortcuts(ctx);
        self.retire_notice();

        if matches!(self.route, Route::Editor) {
            self.render_editor(ctx);
        } else {
            self.render_viewer(ctx);
        }
        self.flush_clipboard();

        // Worker events arrive without input; keep polling while one is due.
        let waiting_on_worker = self.save_in_flight
            || (matches!(self.route, Route::Viewer { .. }) && self.document.is_none());
        if waiting_on_worker || self.notice.is_some() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }
    }
}

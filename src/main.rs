//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the EventDeck library and the Zellij plugin
//! system.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← presenter, detail surface
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   StoreWorker    │   │  ← JSON event store
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Loading
//!
//! `i` and changes to the store file on disk start a load. The list shows its
//! busy indicator from the key press or filesystem event until the worker
//! replies, then reloads. A store change makes the worker re-read the file
//! before the reload.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In the list:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Enter`: Open event
//! - `e`: Edit event
//! - `d`: Delete event
//! - `r`: Reload
//! - `i`: Import from `import_path`
//! - `/`: Search
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters: Type
//! - `Enter`: Open event
//! - `Esc`: Exit search
//!
//! In the detail surface:
//! - `e`: Switch to edit mode
//! - `Esc`/`q`: Back to the list

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use eventdeck::app::notifier::LoadNotifier;
use eventdeck::app::Event;
use eventdeck::infrastructure::strip_host_prefix;
use eventdeck::worker::{StoreWorker, WorkerMessage, WorkerResponse};
use eventdeck::{handle_event, Action, Config, NavigationMode, SearchMode};

register_plugin!(State);
register_worker!(StoreWorker, eventdeck_worker, EVENTDECK_WORKER);

/// Plugin state wrapper.
struct State {
    /// Core presenter from the library layer.
    app: eventdeck::EventListPresenter,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Store file, already expanded for the sandbox.
    store_path: PathBuf,

    /// Event shown on the detail surface, if open.
    detail: Option<(eventdeck::Event, NavigationMode)>,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: eventdeck::initialize(&config, LoadNotifier::new()),
            worker_name: "eventdeck".to_string(),
            store_path: config.resolved_store_path(),
            detail: None,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and the presenter, requests
    /// permissions and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        eventdeck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = eventdeck::initialize(&config, LoadNotifier::new());
        self.store_path = config.resolved_store_path();

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
            EventType::Visible,
            EventType::FileSystemCreate,
            EventType::FileSystemUpdate,
            EventType::FileSystemDelete,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates Zellij events to library events, runs them through
    /// `handle_event` and executes the resulting actions.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                if self.detail.is_some() {
                    return self.handle_detail_key(key);
                }
                match self.map_key_event(key) {
                    Some(event) => self.dispatch(&event),
                    None => false,
                }
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(response) => self.dispatch(&Event::WorkerResponse(response)),
                    None => false,
                }
            }
            zellij_tile::prelude::Event::Visible(visible) => {
                let event = if visible { Event::Shown } else { Event::Hidden };
                self.dispatch(&event)
            }
            zellij_tile::prelude::Event::FileSystemCreate(paths)
            | zellij_tile::prelude::Event::FileSystemUpdate(paths)
            | zellij_tile::prelude::Event::FileSystemDelete(paths) => {
                let touches_store = paths.iter().any(|(path, _)| self.is_store_file(path));
                if !touches_store {
                    return false;
                }
                tracing::debug!(store_path = ?self.store_path, "store file changed on disk");
                let path = self.store_path.to_string_lossy().into_owned();
                self.dispatch(&Event::StoreChanged { path })
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions)
            }
            _ => false,
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        if let Some((event, mode)) = &self.detail {
            eventdeck::ui::render_detail(event, *mode, &self.app.theme, rows, cols);
        } else {
            eventdeck::ui::render(&self.app, rows, cols);
        }
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::Visible(visible) => format!("Visible({visible})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::FileSystemCreate(..) => "FileSystemCreate".to_string(),
            zellij_tile::prelude::Event::FileSystemUpdate(..) => "FileSystemUpdate".to_string(),
            zellij_tile::prelude::Event::FileSystemDelete(..) => "FileSystemDelete".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Runs a library event and executes its actions. Returns whether to render.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(action);
                }
                render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Filesystem events report paths relative to the host mount.
    fn is_store_file(&self, path: &Path) -> bool {
        let host_relative = strip_host_prefix(&self.store_path.to_string_lossy());
        path == self.store_path || path == Path::new(&host_relative) || self.store_path.ends_with(path)
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let searching = self.app.search_mode() == SearchMode::Active;

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Esc if searching => Event::ExitSearch,
            BareKey::Esc => Event::CloseFocus,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if searching => Event::Char(c),
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('e') => Event::EditSelected,
            BareKey::Char('d') => Event::DeleteSelected,
            BareKey::Char('r') => Event::Reload,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('i') => Event::Import,
            _ => return None,
        })
    }

    fn handle_detail_key(&mut self, key: &KeyWithModifier) -> bool {
        match key.bare_key {
            BareKey::Esc | BareKey::Char('q') => {
                tracing::debug!("closing detail surface");
                self.detail = None;
                true
            }
            BareKey::Char('e') => match &mut self.detail {
                Some((_, mode)) if *mode == NavigationMode::View => {
                    *mode = NavigationMode::Edit;
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - opening store");
                let store_path = self.store_path.to_string_lossy().into_owned();
                self.post_worker_message(&WorkerMessage::open_store(store_path));
                self.dispatch(&Event::Shown)
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - event store unavailable");
                false
            }
        }
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<WorkerResponse> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(operation = %message.operation(), payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling. Returns whether to render.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::CloseFocus => {
                hide_self();
                false
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
                false
            }
            Action::ReloadRows | Action::RemoveRow { .. } => true,
            Action::Navigate { event, mode } => {
                tracing::debug!(event_id = %event.event_id, mode = ?mode, "opening detail surface");
                self.detail = Some((event, mode));
                true
            }
        }
    }
}

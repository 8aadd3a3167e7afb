//! Drives the presenter against a real worker and JSON store.

use chrono::{Duration, Utc};
use eventdeck::app::notifier::{LoadNotifier, LoadSignal};
use eventdeck::app::{handle_event, Action, Event, EventListPresenter};
use eventdeck::storage::{EventRecord, EventStore, JsonEventStore};
use eventdeck::worker::StoreWorker;
use eventdeck::{DateRange, NavigationMode, SearchMode, Theme};
use tempfile::TempDir;

struct Harness {
    _dir: TempDir,
    store_path: std::path::PathBuf,
    presenter: EventListPresenter,
    notifier: LoadNotifier,
    worker: StoreWorker,
    navigations: Vec<(eventdeck::Event, NavigationMode)>,
}

fn event(id: &str, title: &str, city: &str, days_ahead: i64) -> eventdeck::Event {
    eventdeck::Event::new(id, title, "Hall", city, "Norway", Utc::now() + Duration::days(days_ahead))
}

impl Harness {
    fn new(seed: &[eventdeck::Event]) -> Self {
        Self::build(seed, None)
    }

    /// Like `new`, with `incoming` waiting in the configured import file.
    fn with_import(seed: &[eventdeck::Event], incoming: &[eventdeck::Event]) -> Self {
        Self::build(seed, Some(incoming))
    }

    fn build(seed: &[eventdeck::Event], incoming: Option<&[eventdeck::Event]>) -> Self {
        let dir = TempDir::new().unwrap();
        let store_path = dir.path().join("events.json");
        let import_path = dir.path().join("seed.json");
        std::fs::write(&import_path, serde_json::to_string(seed).unwrap()).unwrap();

        let mut worker = StoreWorker::with_store(Box::new(JsonEventStore::new(store_path.clone()).unwrap()));
        let imported = worker.handle_message(eventdeck::worker::WorkerMessage::import_events(
            import_path.to_string_lossy().into_owned(),
        ));
        assert!(matches!(imported, eventdeck::worker::WorkerResponse::EventsImported { .. }));

        let notifier = LoadNotifier::new();
        let incoming_path = incoming.map(|events| {
            let path = dir.path().join("incoming.json");
            std::fs::write(&path, serde_json::to_string(events).unwrap()).unwrap();
            path.to_string_lossy().into_owned()
        });
        let presenter = EventListPresenter::new(
            DateRange::upcoming(Utc::now(), 30),
            notifier.clone(),
            Theme::default(),
        )
        .with_import_path(incoming_path);

        Self {
            _dir: dir,
            store_path,
            presenter,
            notifier,
            worker,
            navigations: vec![],
        }
    }

    /// Sends an event and runs every worker round trip it causes.
    fn send(&mut self, event: Event) {
        let (_, actions) = handle_event(&mut self.presenter, &event).unwrap();
        self.run(actions);
    }

    /// Executes actions, feeding worker replies back until none are left.
    fn run(&mut self, actions: Vec<Action>) {
        let mut pending = actions;
        while !pending.is_empty() {
            let mut replies = vec![];
            for action in pending {
                match action {
                    Action::PostToWorker(message) => {
                        replies.push(Event::WorkerResponse(self.worker.handle_message(message)));
                    }
                    Action::Navigate { event, mode } => self.navigations.push((event, mode)),
                    Action::CloseFocus | Action::ReloadRows | Action::RemoveRow { .. } => {}
                }
            }
            pending = vec![];
            for reply in replies {
                let (_, actions) = handle_event(&mut self.presenter, &reply).unwrap();
                pending.extend(actions);
            }
        }
    }

    fn busy(&self) -> bool {
        self.presenter.compute_viewmodel(24, 100).header.busy
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Event::Char(c));
        }
    }

    fn titles(&self) -> Vec<String> {
        (0..self.presenter.row_count())
            .map(|i| self.presenter.row_at(i).unwrap().title.clone())
            .collect()
    }
}

fn concerts() -> Vec<eventdeck::Event> {
    vec![
        event("jazz", "Jazz Night", "Oslo", 3),
        event("rock", "Rock Fest", "Bergen", 1),
        event("blues", "Blues Evening", "Oslo", 5),
        event("later", "Far Future Gala", "Oslo", 90),
    ]
}

#[test]
fn shown_list_is_ordered_and_limited_to_range() {
    let mut harness = Harness::new(&concerts());
    harness.send(Event::Shown);

    assert_eq!(harness.titles(), vec!["Rock Fest", "Jazz Night", "Blues Evening"]);
    assert_eq!(harness.presenter.title(), "Upcoming events (3)");
    assert!(harness.presenter.is_subscribed());
}

#[test]
fn search_narrows_rows_and_exit_restores_them() {
    let mut harness = Harness::new(&concerts());
    harness.send(Event::Shown);

    harness.send(Event::SearchMode);
    harness.type_text("jazz");
    assert_eq!(harness.titles(), vec!["Jazz Night"]);

    harness.send(Event::Backspace);
    harness.send(Event::Backspace);
    harness.send(Event::Backspace);
    harness.send(Event::Backspace);
    harness.type_text("oslo");
    assert_eq!(harness.titles(), vec!["Jazz Night", "Blues Evening"]);

    harness.send(Event::ExitSearch);
    assert_eq!(harness.presenter.search_mode(), SearchMode::Inactive);
    assert_eq!(harness.titles().len(), 3);
}

#[test]
fn delete_while_filtered_persists_to_store() {
    let mut harness = Harness::new(&concerts());
    harness.send(Event::Shown);

    harness.send(Event::SearchMode);
    harness.type_text("blues");
    harness.send(Event::DeleteSelected);

    assert!(harness.titles().is_empty());
    assert_eq!(harness.presenter.title(), "Upcoming events (2)");

    let stored = std::fs::read_to_string(&harness.store_path).unwrap();
    assert!(!stored.contains("Blues Evening"));

    harness.send(Event::ExitSearch);
    harness.send(Event::Reload);
    assert_eq!(harness.titles(), vec!["Rock Fest", "Jazz Night"]);
}

#[test]
fn selecting_a_row_navigates_with_the_stored_copy() {
    let mut harness = Harness::new(&concerts());
    harness.send(Event::Shown);

    harness.send(Event::SearchMode);
    harness.type_text("rock");
    harness.send(Event::EditSelected);

    assert_eq!(harness.presenter.search_mode(), SearchMode::Inactive);
    assert_eq!(harness.navigations.len(), 1);
    let (event, mode) = &harness.navigations[0];
    assert_eq!(event.event_id, "rock");
    assert_eq!(*mode, NavigationMode::Edit);
}

#[test]
fn load_signals_toggle_busy_and_pick_up_new_events() {
    let mut harness = Harness::new(&concerts());
    harness.send(Event::Shown);

    harness.notifier.publish(LoadSignal::Started);
    harness.send(Event::LoadSignalsPending);
    assert!(harness.presenter.compute_viewmodel(24, 100).header.busy);

    let extra = harness.store_path.with_file_name("extra.json");
    std::fs::write(&extra, serde_json::to_string(&[event("opera", "Opera Gala", "Oslo", 2)]).unwrap()).unwrap();
    let imported = harness.worker.handle_message(eventdeck::worker::WorkerMessage::import_events(
        extra.to_string_lossy().into_owned(),
    ));
    harness.send(Event::WorkerResponse(imported));

    harness.notifier.publish(LoadSignal::Finished);
    harness.send(Event::LoadSignalsPending);

    assert!(!harness.presenter.compute_viewmodel(24, 100).header.busy);
    assert_eq!(
        harness.titles(),
        vec!["Rock Fest", "Opera Gala", "Jazz Night", "Blues Evening"]
    );
}

#[test]
fn hidden_list_ignores_load_signals() {
    let mut harness = Harness::new(&concerts());
    harness.send(Event::Shown);
    harness.send(Event::Hidden);

    harness.notifier.publish(LoadSignal::Started);
    harness.send(Event::LoadSignalsPending);

    assert!(!harness.presenter.is_subscribed());
    assert!(!harness.presenter.compute_viewmodel(24, 100).header.busy);
}

#[test]
fn import_key_shows_loading_then_lists_imported_events() {
    let mut harness = Harness::with_import(&concerts(), &[event("opera", "Opera Gala", "Oslo", 2)]);
    harness.send(Event::Shown);

    let (render, actions) = handle_event(&mut harness.presenter, &Event::Import).unwrap();
    assert!(render);
    assert!(harness.busy());

    harness.run(actions);

    assert!(!harness.busy());
    assert!(!harness.presenter.is_importing());
    assert_eq!(
        harness.titles(),
        vec!["Rock Fest", "Opera Gala", "Jazz Night", "Blues Evening"]
    );
}

#[test]
fn outside_store_edits_show_up_after_a_store_change() {
    let mut harness = Harness::new(&concerts());
    harness.send(Event::Shown);

    let mut outside = JsonEventStore::new(harness.store_path.clone()).unwrap();
    let added = event("market", "Night Market", "Oslo", 4);
    outside.upsert_batch(&[EventRecord::from_event(&added)]).unwrap();
    drop(outside);

    let path = harness.store_path.to_string_lossy().into_owned();
    let (render, actions) = handle_event(&mut harness.presenter, &Event::StoreChanged { path }).unwrap();
    assert!(render);
    assert!(harness.busy());

    harness.run(actions);

    assert!(!harness.busy());
    assert_eq!(
        harness.titles(),
        vec!["Rock Fest", "Jazz Night", "Night Market", "Blues Evening"]
    );
}

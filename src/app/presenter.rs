//! The event list presenter and view model computation.
//!
//! [`EventListPresenter`] owns the list/search/refresh state of the plugin:
//!
//! - **Authoritative list**: the events last fetched for the configured date
//!   range. Replaced wholesale on every fetch; only delete edits it in place.
//! - **Filtered list**: derived from the authoritative list by the search term.
//!   Recomputed on every term change and discarded when search closes.
//! - **Effective list**: the filtered list while a search with a non-empty term
//!   is open, the authoritative list otherwise. Row count, row access, deletion
//!   and selection all address the effective list.
//! - **Display state**: idle/loading, toggled by load notifications.
//!
//! Store access is always deferred. Operations return [`Action`]s carrying
//! [`WorkerMessage`]s, and the replies come back through the `apply_*` methods.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use eventdeck::app::notifier::LoadNotifier;
//! use eventdeck::app::EventListPresenter;
//! use eventdeck::{DateRange, Event, Theme};
//!
//! let mut presenter = EventListPresenter::new(
//!     DateRange::upcoming(Utc::now(), 30),
//!     LoadNotifier::new(),
//!     Theme::default(),
//! );
//! let _fetch = presenter.on_become_visible();
//! presenter.apply_fetched(vec![
//!     Event::new("1", "Jazz Night", "Blue Note", "NYC", "USA", Utc::now()),
//! ]);
//! assert_eq!(presenter.title(), "Upcoming events (1)");
//! ```

use super::actions::Action;
use super::filter::{filter_events, match_ranges};
use super::modes::{DisplayState, NavigationMode, SearchMode};
use super::notifier::{LoadNotifier, LoadSignal, Subscription};
use crate::domain::{DateRange, Event, EventDeckError, Result};
use crate::ui::helpers::placeholder_image;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
use crate::worker::{StoreOperation, WorkerMessage};

/// Rows taken by header, borders, column headers and footer.
const CHROME_ROWS: usize = 6;

/// Extra rows taken by the search box.
const SEARCH_BAR_ROWS: usize = 3;

/// Extra row taken by the error line.
const ERROR_ROWS: usize = 1;

/// Owns the event lists, search state and loading state of the plugin.
#[derive(Debug)]
pub struct EventListPresenter {
    /// Events from the most recent successful fetch, soonest first.
    events: Vec<Event>,

    /// Events matching `search_term`. Only meaningful while a search is open.
    filtered_events: Vec<Event>,

    /// Current search text.
    search_term: String,

    search_mode: SearchMode,

    display_state: DisplayState,

    /// Header title, kept in step with the authoritative count.
    title: String,

    /// Date window requested on every fetch.
    range: DateRange,

    /// Cursor within the effective list.
    selected_index: usize,

    /// Last store failure, shown until the next successful fetch.
    store_error: Option<String>,

    /// Source of load signals.
    notifier: LoadNotifier,

    /// Present while the list is visible.
    subscription: Option<Subscription>,

    /// JSON file imported on request. Import is disabled when unset.
    import_path: Option<String>,

    /// Whether an import is waiting for its reply.
    import_in_flight: bool,

    /// Color scheme used when computing view models.
    pub theme: Theme,
}

impl EventListPresenter {
    /// Creates a presenter with empty lists, idle display and search closed.
    #[must_use]
    pub fn new(range: DateRange, notifier: LoadNotifier, theme: Theme) -> Self {
        let mut presenter = Self {
            events: vec![],
            filtered_events: vec![],
            search_term: String::new(),
            search_mode: SearchMode::Inactive,
            display_state: DisplayState::Idle,
            title: String::new(),
            range,
            selected_index: 0,
            store_error: None,
            notifier,
            subscription: None,
            import_path: None,
            import_in_flight: false,
            theme,
        };
        presenter.update_title();
        presenter
    }

    /// Sets the file posted by [`begin_import`](Self::begin_import).
    #[must_use]
    pub fn with_import_path(mut self, import_path: Option<String>) -> Self {
        self.import_path = import_path;
        self
    }

    /// The list became visible: subscribe to load signals and fetch the range.
    ///
    /// The range is moved forward to start now, so a long session keeps
    /// showing upcoming events.
    pub fn on_become_visible(&mut self) -> Vec<Action> {
        if self.subscription.is_none() {
            self.subscription = Some(self.notifier.subscribe());
        }
        self.range = self.range.advanced_to(chrono::Utc::now());

        tracing::debug!(start = %self.range.start, end = %self.range.end, "list visible, fetching range");
        vec![self.reload()]
    }

    /// The list was hidden: stop listening for load signals.
    pub fn on_hidden(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("list hidden, load subscription dropped");
        }
    }

    /// Whether the presenter currently listens for load signals.
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Builds the store request that refreshes the authoritative list.
    #[must_use]
    pub fn reload(&self) -> Action {
        Action::PostToWorker(WorkerMessage::fetch_events_in_range(self.range))
    }

    /// Replaces the authoritative list with a fetch result.
    pub fn apply_fetched(&mut self, events: Vec<Event>) -> Vec<Action> {
        let _span = tracing::debug_span!("apply_fetched",
            previous = self.events.len(),
            fetched = events.len()
        ).entered();

        self.events = events;
        if self.is_filtering() {
            self.filtered_events = filter_events(&self.events, &self.search_term);
        }
        self.store_error = None;
        self.clamp_selection();
        self.update_title();

        vec![Action::ReloadRows]
    }

    /// Recomputes the filtered list for a new search term.
    ///
    /// Typing into the search bar implies an open search session, so this also
    /// activates search mode.
    pub fn on_search_text_changed(&mut self, term: &str) -> Vec<Action> {
        self.search_mode = SearchMode::Active;
        term.clone_into(&mut self.search_term);

        if term.is_empty() {
            self.filtered_events.clear();
        } else {
            self.filtered_events = filter_events(&self.events, term);
        }
        self.clamp_selection();

        tracing::trace!(term = %term, matches = self.filtered_events.len(), "search term updated");
        vec![Action::ReloadRows]
    }

    /// Opens an empty search session.
    pub fn begin_search(&mut self) -> Vec<Action> {
        self.on_search_text_changed("")
    }

    /// Closes the search session and discards the filtered list.
    pub fn end_search(&mut self) -> Vec<Action> {
        self.search_mode = SearchMode::Inactive;
        self.search_term.clear();
        self.filtered_events.clear();
        self.clamp_selection();
        vec![Action::ReloadRows]
    }

    /// Number of rows in the effective list.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.effective_events().len()
    }

    /// The event shown at `index` in the effective list.
    ///
    /// # Errors
    ///
    /// Returns [`EventDeckError::InvalidIndex`] if `index >= row_count()`.
    pub fn row_at(&self, index: usize) -> Result<&Event> {
        let rows = self.effective_events();
        rows.get(index).ok_or(EventDeckError::InvalidIndex {
            index,
            len: rows.len(),
        })
    }

    /// Deletes the event shown at `index` in the effective list.
    ///
    /// The event is removed locally from both lists right away; the store delete
    /// is posted without waiting for confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`EventDeckError::InvalidIndex`] if `index >= row_count()`.
    pub fn delete_row(&mut self, index: usize) -> Result<Vec<Action>> {
        let event_id = self.row_at(index)?.event_id.clone();

        tracing::debug!(event_id = %event_id, index, filtering = self.is_filtering(), "deleting row");

        self.events.retain(|event| event.event_id != event_id);
        self.filtered_events.retain(|event| event.event_id != event_id);
        self.clamp_selection();
        self.update_title();

        Ok(vec![
            Action::RemoveRow { index },
            Action::PostToWorker(WorkerMessage::delete_event(event_id)),
        ])
    }

    /// Selects the event at `index` for the detail surface.
    ///
    /// Closes an open search session and asks the store for the event again by
    /// id; navigation happens when that reply arrives.
    ///
    /// # Errors
    ///
    /// Returns [`EventDeckError::InvalidIndex`] if `index >= row_count()`.
    pub fn select_row(&mut self, index: usize, mode: NavigationMode) -> Result<Vec<Action>> {
        let event_id = self.row_at(index)?.event_id.clone();

        let mut actions = vec![];
        if self.search_mode == SearchMode::Active {
            actions.extend(self.end_search());
        }

        tracing::debug!(event_id = %event_id, mode = ?mode, "row selected");
        actions.push(Action::PostToWorker(WorkerMessage::fetch_event_by_id(event_id, mode)));
        Ok(actions)
    }

    /// The store returned the event requested by [`select_row`](Self::select_row).
    #[must_use]
    pub fn apply_fetched_event(&self, event: Event, mode: NavigationMode) -> Vec<Action> {
        vec![Action::Navigate { event, mode }]
    }

    /// The event requested for navigation no longer exists in the store.
    pub fn apply_missing_event(&mut self, event_id: &str) -> Vec<Action> {
        self.store_error = Some(format!("event {event_id} no longer exists"));
        vec![self.reload()]
    }

    /// A store operation failed.
    ///
    /// The lists are left as they are. A failed delete schedules a reload so the
    /// list converges back to what the store holds.
    pub fn apply_store_failure(&mut self, operation: StoreOperation, message: &str) -> Vec<Action> {
        tracing::warn!(operation = %operation, error = %message, "store operation failed");

        self.store_error = Some(format!("{operation} failed: {message}"));
        match operation {
            StoreOperation::Delete => vec![self.reload()],
            StoreOperation::Open
            | StoreOperation::FetchRange
            | StoreOperation::FetchById
            | StoreOperation::Import => vec![],
        }
    }

    /// Starts importing the configured file into the store.
    ///
    /// Publishes `Started` and posts the import. Returns no actions when no
    /// import file is configured or an import is already running.
    pub fn begin_import(&mut self) -> Vec<Action> {
        let Some(import_path) = self.import_path.clone() else {
            tracing::info!("import requested but no import_path is configured");
            return vec![];
        };
        if self.import_in_flight {
            tracing::debug!(import_path = %import_path, "import already running");
            return vec![];
        }

        tracing::debug!(import_path = %import_path, "starting import");
        self.import_in_flight = true;
        self.notifier.publish(LoadSignal::Started);
        vec![Action::PostToWorker(WorkerMessage::import_events(import_path))]
    }

    /// The import reply arrived, successful or not.
    pub fn finish_import(&mut self) {
        self.import_in_flight = false;
        self.notifier.publish(LoadSignal::Finished);
    }

    /// Whether an import is waiting for its reply.
    #[must_use]
    pub const fn is_importing(&self) -> bool {
        self.import_in_flight
    }

    /// The store file changed on disk.
    ///
    /// Publishes `Started` and asks the worker to re-read the file. The load
    /// finishes when the store has been reopened.
    pub fn on_store_changed(&mut self, store_path: &str) -> Vec<Action> {
        tracing::debug!(store_path = %store_path, "store changed on disk, reopening");
        self.notifier.publish(LoadSignal::Started);
        vec![Action::PostToWorker(WorkerMessage::open_store(store_path.to_string()))]
    }

    /// The worker opened or reopened the store.
    pub fn finish_store_open(&self) {
        self.notifier.publish(LoadSignal::Finished);
    }

    /// A load started somewhere on the store side.
    pub fn on_load_start(&mut self) {
        self.display_state = DisplayState::Loading;
    }

    /// A load finished somewhere on the store side.
    pub fn on_load_finish(&mut self) {
        self.display_state = DisplayState::Idle;
    }

    /// Applies every load signal queued since the last call.
    ///
    /// A `Finished` signal also means the store data may have changed, so one
    /// reload is requested no matter how many `Finished` signals were queued.
    pub fn pump_load_signals(&mut self) -> Vec<Action> {
        let signals = self
            .subscription
            .as_ref()
            .map(Subscription::drain)
            .unwrap_or_default();

        let mut needs_reload = false;
        for signal in &signals {
            match signal {
                LoadSignal::Started => self.on_load_start(),
                LoadSignal::Finished => {
                    self.on_load_finish();
                    needs_reload = true;
                }
            }
        }

        tracing::debug!(signals = signals.len(), needs_reload, "load signals applied");

        if needs_reload {
            vec![self.reload()]
        } else {
            vec![]
        }
    }

    /// Moves the cursor down one row, wrapping to the top.
    pub fn cursor_down(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the cursor up one row, wrapping to the bottom.
    pub fn cursor_up(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            count - 1
        } else {
            self.selected_index - 1
        };
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn display_state(&self) -> DisplayState {
        self.display_state
    }

    #[must_use]
    pub fn store_error(&self) -> Option<&str> {
        self.store_error.as_deref()
    }

    #[must_use]
    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    /// The authoritative list.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The filtered list; empty unless a search with a non-empty term is open.
    #[must_use]
    pub fn filtered_events(&self) -> &[Event] {
        &self.filtered_events
    }

    fn is_filtering(&self) -> bool {
        self.search_mode == SearchMode::Active && !self.search_term.is_empty()
    }

    fn effective_events(&self) -> &[Event] {
        if self.is_filtering() {
            &self.filtered_events
        } else {
            &self.events
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.row_count().saturating_sub(1));
    }

    fn update_title(&mut self) {
        self.title = format!("Upcoming events ({})", self.events.len());
    }

    /// Computes the view model for a terminal of `rows` x `cols`.
    ///
    /// Shows a window of the effective list centered on the cursor, with search
    /// matches in titles marked for highlighting.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let rows_in_view = self.calculate_available_rows(rows);
        let effective = self.effective_events();

        let mut visible_start = self.selected_index.saturating_sub(rows_in_view / 2);
        let visible_end = (visible_start + rows_in_view).min(effective.len());
        if visible_end - visible_start < rows_in_view && effective.len() >= rows_in_view {
            visible_start = visible_end.saturating_sub(rows_in_view);
        }

        let display_items = effective[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, event)| self.compute_display_item(event, visible_start + offset, cols))
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: HeaderInfo {
                title: format!(" {} ", self.title),
                busy: self.display_state == DisplayState::Loading,
            },
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: (self.search_mode == SearchMode::Active).then(|| SearchBarInfo {
                query: self.search_term.clone(),
            }),
            error: self.store_error.clone(),
        }
    }

    fn compute_display_item(&self, event: &Event, absolute_idx: usize, cols: usize) -> DisplayItem {
        const TITLE_COLUMN_WIDTH: usize = 32;
        const FIXED_COLUMNS: usize = 16 + TITLE_COLUMN_WIDTH;

        let title = if event.title.chars().count() > TITLE_COLUMN_WIDTH - 2 {
            let kept: String = event.title.chars().take(TITLE_COLUMN_WIDTH - 5).collect();
            format!("{kept}...")
        } else {
            event.title.clone()
        };

        let highlight_ranges = if self.is_filtering() {
            match_ranges(&title, &self.search_term)
        } else {
            vec![]
        };

        let max_location = cols.saturating_sub(FIXED_COLUMNS);
        let location = event.location();
        let location = if location.chars().count() > max_location {
            let kept: String = location.chars().take(max_location.saturating_sub(3)).collect();
            format!("{kept}...")
        } else {
            location
        };

        DisplayItem {
            image: placeholder_image(absolute_idx),
            date: event.date_label(),
            title,
            location,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.search_mode {
            SearchMode::Active => "ESC: exit search  Ctrl+n/p: navigate  Enter: open  Type to filter",
            SearchMode::Inactive => {
                "j/k: navigate  /: search  Enter: open  e: edit  d: delete  r: reload  i: import  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.row_count() > 0 {
            return None;
        }

        Some(if self.is_filtering() {
            EmptyState {
                message: format!("No events match \"{}\"", self.search_term),
                subtitle: "Matches title, venue or city".to_string(),
            }
        } else {
            EmptyState {
                message: "No upcoming events".to_string(),
                subtitle: "Import events or press r to reload".to_string(),
            }
        })
    }

    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let mut chrome = CHROME_ROWS;
        if self.search_mode == SearchMode::Active {
            chrome += SEARCH_BAR_ROWS;
        }
        if self.store_error.is_some() {
            chrome += ERROR_ROWS;
        }
        total_rows.saturating_sub(chrome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: &str, title: &str, venue: &str, city: &str) -> Event {
        let date = Utc.with_ymd_and_hms(2026, 11, 2, 20, 0, 0).unwrap();
        Event::new(id, title, venue, city, "USA", date)
    }

    fn scenario() -> Vec<Event> {
        vec![
            event("jazz", "Jazz Night", "Blue Note", "NYC"),
            event("rock", "Rock Fest", "Arena", "LA"),
        ]
    }

    fn presenter_with(events: Vec<Event>) -> EventListPresenter {
        let range = DateRange::upcoming(Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap(), 30);
        let mut presenter = EventListPresenter::new(range, LoadNotifier::new(), Theme::default());
        presenter.apply_fetched(events);
        presenter
    }

    fn titles(presenter: &EventListPresenter) -> Vec<String> {
        (0..presenter.row_count())
            .map(|i| presenter.row_at(i).unwrap().title.clone())
            .collect()
    }

    fn posted(actions: &[Action]) -> Vec<&WorkerMessage> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::PostToWorker(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn new_presenter_is_empty_and_idle() {
        let presenter = presenter_with(vec![]);
        assert_eq!(presenter.row_count(), 0);
        assert_eq!(presenter.title(), "Upcoming events (0)");
        assert_eq!(presenter.display_state(), DisplayState::Idle);
        assert_eq!(presenter.search_mode(), SearchMode::Inactive);
    }

    #[test]
    fn search_scenario_blue_fest_then_empty() {
        let mut presenter = presenter_with(scenario());

        presenter.on_search_text_changed("blue");
        assert_eq!(titles(&presenter), ["Jazz Night"]);

        presenter.on_search_text_changed("fest");
        assert_eq!(titles(&presenter), ["Rock Fest"]);

        presenter.on_search_text_changed("");
        assert_eq!(titles(&presenter), ["Jazz Night", "Rock Fest"]);
        assert!(presenter.filtered_events().is_empty());
    }

    #[test]
    fn same_term_twice_gives_same_filtered_list() {
        let mut presenter = presenter_with(scenario());
        presenter.on_search_text_changed("a");
        let once = presenter.filtered_events().to_vec();
        presenter.on_search_text_changed("a");
        assert_eq!(presenter.filtered_events(), once.as_slice());
    }

    #[test]
    fn end_search_restores_authoritative_list() {
        let mut presenter = presenter_with(scenario());
        presenter.on_search_text_changed("rock");
        presenter.end_search();

        assert_eq!(presenter.search_mode(), SearchMode::Inactive);
        assert_eq!(presenter.search_term(), "");
        assert_eq!(presenter.row_count(), 2);
    }

    #[test]
    fn row_at_past_the_end_is_invalid_index() {
        let mut presenter = presenter_with(scenario());
        presenter.on_search_text_changed("jazz");

        let err = presenter.row_at(1).unwrap_err();
        assert!(matches!(err, EventDeckError::InvalidIndex { index: 1, len: 1 }));
    }

    #[test]
    fn fetch_is_a_full_replace() {
        let mut presenter = presenter_with(scenario());
        presenter.apply_fetched(vec![event("new", "Opera Gala", "Met", "NYC")]);

        assert_eq!(titles(&presenter), ["Opera Gala"]);
        assert_eq!(presenter.title(), "Upcoming events (1)");
    }

    #[test]
    fn fetch_while_filtering_refilters_new_data() {
        let mut presenter = presenter_with(scenario());
        presenter.on_search_text_changed("nyc");
        presenter.apply_fetched(vec![
            event("a", "Opera Gala", "Met", "NYC"),
            event("b", "Derby", "Track", "Louisville"),
        ]);

        assert_eq!(titles(&presenter), ["Opera Gala"]);
    }

    #[test]
    fn delete_without_search_removes_that_event() {
        let mut presenter = presenter_with(scenario());

        let actions = presenter.delete_row(0).unwrap();

        assert_eq!(presenter.row_count(), 1);
        assert_eq!(presenter.row_at(0).unwrap().event_id, "rock");
        assert_eq!(presenter.title(), "Upcoming events (1)");
        assert_eq!(actions[0], Action::RemoveRow { index: 0 });
        assert!(matches!(
            posted(&actions)[..],
            [WorkerMessage::DeleteEvent { event_id, .. }] if event_id == "jazz"
        ));
    }

    #[test]
    fn delete_while_filtering_removes_the_visible_row() {
        let mut presenter = presenter_with(scenario());
        presenter.on_search_text_changed("fest");

        let actions = presenter.delete_row(0).unwrap();

        assert_eq!(presenter.row_count(), 0);
        assert_eq!(presenter.events().len(), 1);
        assert_eq!(presenter.events()[0].event_id, "jazz");
        assert!(matches!(
            posted(&actions)[..],
            [WorkerMessage::DeleteEvent { event_id, .. }] if event_id == "rock"
        ));
    }

    #[test]
    fn delete_out_of_range_changes_nothing() {
        let mut presenter = presenter_with(scenario());
        assert!(presenter.delete_row(5).is_err());
        assert_eq!(presenter.row_count(), 2);
    }

    #[test]
    fn select_closes_search_and_refetches_by_id() {
        let mut presenter = presenter_with(scenario());
        presenter.on_search_text_changed("arena");

        let actions = presenter.select_row(0, NavigationMode::Edit).unwrap();

        assert_eq!(presenter.search_mode(), SearchMode::Inactive);
        assert!(matches!(
            posted(&actions)[..],
            [WorkerMessage::FetchEventById { event_id, mode: NavigationMode::Edit, .. }] if event_id == "rock"
        ));
    }

    #[test]
    fn fetched_event_navigates() {
        let presenter = presenter_with(scenario());
        let stored = event("rock", "Rock Fest", "Arena", "LA");

        let actions = presenter.apply_fetched_event(stored.clone(), NavigationMode::View);

        assert_eq!(actions, vec![Action::Navigate { event: stored, mode: NavigationMode::View }]);
    }

    #[test]
    fn load_signals_toggle_display_state_and_reload_on_finish() {
        let notifier = LoadNotifier::new();
        let mut presenter = EventListPresenter::new(
            DateRange::upcoming(Utc::now(), 30),
            notifier.clone(),
            Theme::default(),
        );
        presenter.on_become_visible();

        notifier.publish(LoadSignal::Started);
        assert!(presenter.pump_load_signals().is_empty());
        assert_eq!(presenter.display_state(), DisplayState::Loading);

        notifier.publish(LoadSignal::Finished);
        notifier.publish(LoadSignal::Finished);
        let actions = presenter.pump_load_signals();
        assert_eq!(presenter.display_state(), DisplayState::Idle);
        assert!(matches!(posted(&actions)[..], [WorkerMessage::FetchEventsInRange { .. }]));
    }

    #[test]
    fn import_shows_loading_until_its_reply() {
        let notifier = LoadNotifier::new();
        let mut presenter = EventListPresenter::new(
            DateRange::upcoming(Utc::now(), 30),
            notifier.clone(),
            Theme::default(),
        )
        .with_import_path(Some("/host/incoming.json".to_string()));
        presenter.on_become_visible();

        let actions = presenter.begin_import();
        assert!(matches!(
            posted(&actions)[..],
            [WorkerMessage::ImportEvents { path, .. }] if path == "/host/incoming.json"
        ));
        assert!(presenter.pump_load_signals().is_empty());
        assert_eq!(presenter.display_state(), DisplayState::Loading);

        assert!(presenter.begin_import().is_empty());
        assert!(presenter.is_importing());

        presenter.finish_import();
        let actions = presenter.pump_load_signals();
        assert!(!presenter.is_importing());
        assert_eq!(presenter.display_state(), DisplayState::Idle);
        assert!(matches!(posted(&actions)[..], [WorkerMessage::FetchEventsInRange { .. }]));
    }

    #[test]
    fn import_without_a_file_does_nothing() {
        let mut presenter = presenter_with(scenario());
        assert!(presenter.begin_import().is_empty());
        assert!(!presenter.is_importing());
    }

    #[test]
    fn store_change_reopens_then_reloads() {
        let notifier = LoadNotifier::new();
        let mut presenter = EventListPresenter::new(
            DateRange::upcoming(Utc::now(), 30),
            notifier.clone(),
            Theme::default(),
        );
        presenter.on_become_visible();

        let actions = presenter.on_store_changed("/host/events.json");
        assert!(matches!(
            posted(&actions)[..],
            [WorkerMessage::OpenStore { path, .. }] if path == "/host/events.json"
        ));
        presenter.pump_load_signals();
        assert_eq!(presenter.display_state(), DisplayState::Loading);

        presenter.finish_store_open();
        let actions = presenter.pump_load_signals();
        assert_eq!(presenter.display_state(), DisplayState::Idle);
        assert!(matches!(posted(&actions)[..], [WorkerMessage::FetchEventsInRange { .. }]));
    }

    #[test]
    fn becoming_visible_moves_a_stale_range_forward() {
        let loaded = Utc::now() - chrono::Duration::days(5);
        let mut presenter = EventListPresenter::new(
            DateRange::upcoming(loaded, 30),
            LoadNotifier::new(),
            Theme::default(),
        );

        let actions = presenter.on_become_visible();

        let range = presenter.range();
        assert!(range.start > loaded + chrono::Duration::days(4));
        assert_eq!(range.end - range.start, chrono::Duration::days(30));
        assert!(matches!(
            posted(&actions)[..],
            [WorkerMessage::FetchEventsInRange { range: fetched, .. }] if fetched == range
        ));
    }

    #[test]
    fn hidden_presenter_ignores_load_signals() {
        let notifier = LoadNotifier::new();
        let mut presenter = EventListPresenter::new(
            DateRange::upcoming(Utc::now(), 30),
            notifier.clone(),
            Theme::default(),
        );
        presenter.on_become_visible();
        presenter.on_become_visible();
        assert_eq!(notifier.subscriber_count(), 1);

        presenter.on_hidden();
        assert_eq!(notifier.subscriber_count(), 0);

        notifier.publish(LoadSignal::Started);
        presenter.pump_load_signals();
        assert_eq!(presenter.display_state(), DisplayState::Idle);
    }

    #[test]
    fn failed_delete_reports_and_reloads() {
        let mut presenter = presenter_with(scenario());

        let actions = presenter.apply_store_failure(StoreOperation::Delete, "disk full");

        assert_eq!(presenter.store_error(), Some("delete event failed: disk full"));
        assert!(matches!(posted(&actions)[..], [WorkerMessage::FetchEventsInRange { .. }]));

        presenter.apply_fetched(scenario());
        assert!(presenter.store_error().is_none());
    }

    #[test]
    fn cursor_wraps_and_clamps_after_filtering() {
        let mut presenter = presenter_with(scenario());
        presenter.cursor_up();
        assert_eq!(presenter.selected_index(), 1);
        presenter.cursor_down();
        assert_eq!(presenter.selected_index(), 0);

        presenter.cursor_down();
        presenter.on_search_text_changed("jazz");
        assert_eq!(presenter.selected_index(), 0);
    }

    #[test]
    fn viewmodel_reflects_search_and_busy_state() {
        let mut presenter = presenter_with(scenario());
        presenter.on_search_text_changed("blue");
        presenter.on_load_start();

        let vm = presenter.compute_viewmodel(24, 100);

        assert!(vm.header.busy);
        assert_eq!(vm.header.title, " Upcoming events (2) ");
        assert_eq!(vm.search_bar.as_ref().map(|s| s.query.as_str()), Some("blue"));
        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.display_items[0].location, "Blue Note - NYC - USA");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_has_empty_state_for_no_matches() {
        let mut presenter = presenter_with(scenario());
        presenter.on_search_text_changed("zzz");

        let vm = presenter.compute_viewmodel(24, 100);

        assert!(vm.display_items.is_empty());
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No events match \"zzz\"".to_string()));
    }
}

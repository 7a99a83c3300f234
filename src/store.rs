use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::catalog::{CatalogData, EntityCatalog};
use crate::models::{Event, Exhibitor, News};
use crate::saved::SavedEvents;

/// Callback invoked with the post-mutation snapshot.
pub type Subscriber = Arc<dyn Fn(&Snapshot) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Clone, Debug, Default)]
struct StoreState {
    catalog: EntityCatalog,
    saved: SavedEvents,
}

/// A consistent, detached read of the whole store.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    catalog: EntityCatalog,
    saved: SavedEvents,
}

impl Snapshot {
    pub fn events(&self) -> &[Event] {
        self.catalog.events()
    }

    pub fn exhibitors(&self) -> &[Exhibitor] {
        self.catalog.exhibitors()
    }

    pub fn news(&self) -> &[News] {
        self.catalog.news()
    }

    pub fn saved_event_ids(&self) -> &HashSet<String> {
        self.saved.all()
    }

    pub fn saved(&self) -> &SavedEvents {
        &self.saved
    }

    pub fn catalog(&self) -> &EntityCatalog {
        &self.catalog
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.catalog.event(id)
    }

    pub fn exhibitor(&self, id: &str) -> Option<&Exhibitor> {
        self.catalog.exhibitor(id)
    }

    pub fn news_item(&self, id: &str) -> Option<&News> {
        self.catalog.news_item(id)
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.contains(id)
    }
}

impl From<&StoreState> for Snapshot {
    fn from(state: &StoreState) -> Self {
        Self {
            catalog: state.catalog.clone(),
            saved: state.saved.clone(),
        }
    }
}

/// The single mutation/query boundary over the catalog and the saved set.
///
/// One mutex covers both pieces of state, so a snapshot always reflects a
/// state that existed at some instant. Subscribers run after the lock is
/// released, synchronously and in registration order, before the mutator
/// returns.
pub struct DomainStore {
    state: Mutex<StoreState>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&*self.lock_state())
    }

    pub fn set_events(&self, events: Vec<Event>) {
        let count = events.len();
        self.mutate(|state| state.catalog.set_events(events));
        debug!(count, "events replaced");
    }

    pub fn set_exhibitors(&self, exhibitors: Vec<Exhibitor>) {
        let count = exhibitors.len();
        self.mutate(|state| state.catalog.set_exhibitors(exhibitors));
        debug!(count, "exhibitors replaced");
    }

    pub fn set_news(&self, news: Vec<News>) {
        let count = news.len();
        self.mutate(|state| state.catalog.set_news(news));
        debug!(count, "news replaced");
    }

    pub fn load_catalog(&self, data: CatalogData) {
        let CatalogData {
            events,
            exhibitors,
            news,
        } = data;
        let counts = (events.len(), exhibitors.len(), news.len());
        self.mutate(|state| state.catalog.load(events, exhibitors, news));
        debug!(
            events = counts.0,
            exhibitors = counts.1,
            news = counts.2,
            "catalog replaced"
        );
    }

    pub fn add_saved_event(&self, id: &str) {
        self.mutate(|state| state.saved.add(id));
        debug!(event_id = id, "event saved");
    }

    pub fn remove_saved_event(&self, id: &str) {
        self.mutate(|state| state.saved.remove(id));
        debug!(event_id = id, "event unsaved");
    }

    /// Returns whether the event is saved afterwards.
    pub fn toggle_saved_event(&self, id: &str) -> bool {
        let saved = self.mutate(|state| state.saved.toggle(id));
        debug!(event_id = id, saved, "event save toggled");
        saved
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.lock_state().saved.contains(id)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.lock_subscribers().push((id, Arc::new(callback)));
        id
    }

    /// Returns false when the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.lock_subscribers();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    fn mutate<F, R>(&self, transform: F) -> R
    where
        F: FnOnce(&mut StoreState) -> R,
    {
        let (result, snapshot) = {
            let mut guard = self.lock_state();
            let result = transform(&mut guard);
            (result, Snapshot::from(&*guard))
        };
        self.notify(&snapshot);
        result
    }

    fn notify(&self, snapshot: &Snapshot) {
        let subscribers: Vec<Subscriber> = self
            .lock_subscribers()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(snapshot);
        }
    }

    // Every mutation is a single assignment, so a poisoned guard still holds
    // consistent state.
    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Subscriber)>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{Event, Exhibitor, News};

/// Anything the catalog can index by identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Event {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Exhibitor {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for News {
    fn key(&self) -> &str {
        &self.id
    }
}

/// An ordered, immutable collection with an id index.
///
/// Cloning is cheap: items and index are shared. Ids are not required to be
/// unique; lookups resolve to the first item carrying the id.
#[derive(Debug)]
pub struct Collection<T> {
    items: Arc<[T]>,
    index: Arc<HashMap<String, usize>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            index: Arc::clone(&self.index),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            index: Arc::new(HashMap::new()),
        }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            index.entry(item.key().to_string()).or_insert(position);
        }
        Self {
            items: Arc::from(items),
            index: Arc::new(index),
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }
}

impl<T> Collection<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The three collections a catalog source delivers in one go.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CatalogData {
    pub events: Vec<Event>,
    pub exhibitors: Vec<Exhibitor>,
    pub news: Vec<News>,
}

#[derive(Clone, Debug, Default)]
pub struct EntityCatalog {
    events: Collection<Event>,
    exhibitors: Collection<Exhibitor>,
    news: Collection<News>,
}

impl EntityCatalog {
    /// Replaces every collection; nothing from the previous load survives.
    pub fn load(&mut self, events: Vec<Event>, exhibitors: Vec<Exhibitor>, news: Vec<News>) {
        self.events = Collection::new(events);
        self.exhibitors = Collection::new(exhibitors);
        self.news = Collection::new(news);
    }

    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = Collection::new(events);
    }

    pub fn set_exhibitors(&mut self, exhibitors: Vec<Exhibitor>) {
        self.exhibitors = Collection::new(exhibitors);
    }

    pub fn set_news(&mut self, news: Vec<News>) {
        self.news = Collection::new(news);
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn exhibitor(&self, id: &str) -> Option<&Exhibitor> {
        self.exhibitors.get(id)
    }

    pub fn news_item(&self, id: &str) -> Option<&News> {
        self.news.get(id)
    }

    pub fn events(&self) -> &[Event] {
        self.events.as_slice()
    }

    pub fn exhibitors(&self) -> &[Exhibitor] {
        self.exhibitors.as_slice()
    }

    pub fn news(&self) -> &[News] {
        self.news.as_slice()
    }
}

impl From<CatalogData> for EntityCatalog {
    fn from(data: CatalogData) -> Self {
        let mut catalog = EntityCatalog::default();
        catalog.load(data.events, data.exhibitors, data.news);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn lookups_miss_without_failing() {
        let catalog = EntityCatalog::from(seed::agroexpo_2025());
        assert_eq!(catalog.event("1").map(|e| e.id.as_str()), Some("1"));
        assert!(catalog.event("404").is_none());
        assert!(catalog.exhibitor("").is_none());
        assert!(catalog.news_item("99").is_none());
    }

    #[test]
    fn load_discards_previous_contents() {
        let mut catalog = EntityCatalog::from(seed::agroexpo_2025());
        let first_news = catalog.news()[0].clone();

        catalog.load(Vec::new(), Vec::new(), vec![first_news.clone()]);

        assert!(catalog.events().is_empty());
        assert!(catalog.exhibitors().is_empty());
        assert_eq!(catalog.news(), &[first_news]);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_loaded() {
        let data = seed::agroexpo_2025();
        let mut first = data.events[0].clone();
        first.title = "first".to_string();
        let mut second = data.events[1].clone();
        second.id = first.id.clone();
        second.title = "second".to_string();

        let mut catalog = EntityCatalog::default();
        catalog.set_events(vec![first, second]);

        assert_eq!(catalog.events().len(), 2);
        assert_eq!(catalog.event(&data.events[0].id).map(|e| e.title.as_str()), Some("first"));
    }

    #[test]
    fn collection_clones_share_items() {
        let collection: Collection<News> = seed::agroexpo_2025().news.into_iter().collect();
        let copy = collection.clone();
        assert!(std::ptr::eq(collection.as_slice(), copy.as_slice()));
    }
}

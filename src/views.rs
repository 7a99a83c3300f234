//! Pure query views over store snapshots.
//!
//! Every view borrows from its input and keeps catalog order. Selection state
//! (search text, selected day, category, sector) belongs to the caller and is
//! passed in on each call.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::{Event, EventCategory, Exhibitor, News};
use crate::saved::SavedEvents;

/// Filter value that lets every item through.
pub const ALL_SENTINEL: &str = "all";

/// The home screen lists at most this many upcoming events.
pub const UPCOMING_LIMIT: usize = 3;

pub const LATEST_NEWS_LIMIT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn allows(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == ALL_SENTINEL {
            Ok(Filter::All)
        } else {
            s.trim().parse().map(Filter::Only)
        }
    }
}

pub type CategoryFilter = Filter<EventCategory>;
pub type SectorFilter = Filter<String>;

fn contains_folded(haystack: &str, folded_query: &str) -> bool {
    folded_query.is_empty() || haystack.to_lowercase().contains(folded_query)
}

pub fn search_exhibitors<'a>(exhibitors: &'a [Exhibitor], query: &str) -> Vec<&'a Exhibitor> {
    exhibitor_directory(exhibitors, query, &Filter::All)
}

pub fn filter_by_sector<'a>(
    exhibitors: &'a [Exhibitor],
    sector: &SectorFilter,
) -> Vec<&'a Exhibitor> {
    exhibitor_directory(exhibitors, "", sector)
}

/// Name search and sector filter combined with AND.
pub fn exhibitor_directory<'a>(
    exhibitors: &'a [Exhibitor],
    query: &str,
    sector: &SectorFilter,
) -> Vec<&'a Exhibitor> {
    let folded = query.to_lowercase();
    exhibitors
        .iter()
        .filter(|exhibitor| contains_folded(&exhibitor.name, &folded))
        .filter(|exhibitor| sector.allows(&exhibitor.sector))
        .collect()
}

/// Distinct sectors in first-seen order, for building the sector menu.
pub fn sectors(exhibitors: &[Exhibitor]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for exhibitor in exhibitors {
        if !seen.contains(&exhibitor.sector.as_str()) {
            seen.push(&exhibitor.sector);
        }
    }
    seen
}

/// Matches the query against the title or the body.
pub fn search_news<'a>(news: &'a [News], query: &str) -> Vec<&'a News> {
    let folded = query.to_lowercase();
    news.iter()
        .filter(|item| {
            contains_folded(&item.title, &folded) || contains_folded(&item.content, &folded)
        })
        .collect()
}

pub fn latest_news(news: &[News]) -> Vec<&News> {
    news.iter().take(LATEST_NEWS_LIMIT).collect()
}

pub fn filter_by_category<'a>(events: &'a [Event], category: &CategoryFilter) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| category.allows(&event.category))
        .collect()
}

/// Events on exactly `date` that also pass the category filter.
pub fn schedule_for_day<'a>(
    events: &'a [Event],
    date: NaiveDate,
    category: &CategoryFilter,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.date == date && category.allows(&event.category))
        .collect()
}

/// Events dated today or tomorrow, capped at [`UPCOMING_LIMIT`].
pub fn upcoming_events(events: &[Event], today: NaiveDate) -> Vec<&Event> {
    let tomorrow = today.succ_opt();
    events
        .iter()
        .filter(|event| event.date == today || Some(event.date) == tomorrow)
        .take(UPCOMING_LIMIT)
        .collect()
}

/// Catalog events the user saved. Saved ids without a matching event are
/// skipped.
pub fn saved_events<'a>(events: &'a [Event], saved: &SavedEvents) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| saved.contains(&event.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    fn event_ids<'a>(events: &[&'a Event]) -> Vec<&'a str> {
        events.iter().map(|event| event.id.as_str()).collect()
    }

    fn exhibitor_ids<'a>(exhibitors: &[&'a Exhibitor]) -> Vec<&'a str> {
        exhibitors.iter().map(|exhibitor| exhibitor.id.as_str()).collect()
    }

    fn news_ids<'a>(news: &[&'a News]) -> Vec<&'a str> {
        news.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn filter_parses_the_all_sentinel() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(Filter::All));
        assert_eq!(
            "leilao".parse::<CategoryFilter>(),
            Ok(Filter::Only(EventCategory::Auction))
        );
        assert!("festa".parse::<CategoryFilter>().is_err());
        assert_eq!(
            "Insumos".parse::<SectorFilter>(),
            Ok(Filter::Only("Insumos".to_string()))
        );
    }

    #[test]
    fn all_filters_keep_input_order() {
        let data = seed::agroexpo_2025();
        let events = filter_by_category(&data.events, &Filter::All);
        assert_eq!(
            event_ids(&events),
            data.events.iter().map(|e| e.id.as_str()).collect::<Vec<_>>()
        );
        let exhibitors = filter_by_sector(&data.exhibitors, &Filter::All);
        assert_eq!(exhibitors.len(), data.exhibitors.len());
    }

    #[test]
    fn exhibitor_search_ignores_case() {
        let data = seed::agroexpo_2025();
        let found = search_exhibitors(&data.exhibitors, "SEMENTES");
        assert_eq!(exhibitor_ids(&found), vec!["2"]);
    }

    #[test]
    fn search_and_sector_compose() {
        let data = seed::agroexpo_2025();
        let sector = Filter::Only("Pecuária".to_string());
        assert_eq!(
            exhibitor_ids(&exhibitor_directory(&data.exhibitors, "", &sector)),
            vec!["3"]
        );
        assert!(exhibitor_directory(&data.exhibitors, "tratores", &sector).is_empty());
    }

    #[test]
    fn news_search_reads_content_too() {
        let data = seed::agroexpo_2025();
        let found = search_news(&data.news, "irrigação de grandes");
        assert_eq!(news_ids(&found), vec!["4"]);
        assert_eq!(search_news(&data.news, "").len(), data.news.len());
    }

    #[test]
    fn upcoming_window_is_two_days() {
        let data = seed::agroexpo_2025();
        let found = upcoming_events(&data.events, date(22));
        assert_eq!(event_ids(&found), vec!["1", "4"]);
    }

    #[test]
    fn latest_news_takes_the_first_three() {
        let data = seed::agroexpo_2025();
        assert_eq!(news_ids(&latest_news(&data.news)), vec!["1", "2", "3"]);
    }

    #[test]
    fn sectors_are_distinct_in_catalog_order() {
        let data = seed::agroexpo_2025();
        assert_eq!(
            sectors(&data.exhibitors),
            vec!["Maquinário", "Insumos", "Pecuária", "Alimentos"]
        );
    }
}

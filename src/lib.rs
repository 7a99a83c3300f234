pub mod calendar;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod map;
pub mod models;
pub mod saved;
pub mod seed;
pub mod settings;
pub mod share;
pub mod sources;
pub mod store;
mod utils;
pub mod views;

use std::sync::Arc;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use config::ConfigStore;
use models::{Event, News};
use settings::Settings;
use store::{DomainStore, Snapshot};

pub use catalog::{CatalogData, EntityCatalog};
pub use models::{Contact, EventCategory, Exhibitor, GeoPoint};
pub use saved::SavedEvents;
pub use views::{CategoryFilter, Filter, SectorFilter};

/// What the home tab shows: today's and tomorrow's events plus the latest news.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomeOverview {
    pub today: NaiveDate,
    pub upcoming: Vec<Event>,
    pub latest_news: Vec<News>,
    pub saved_count: usize,
}

impl HomeOverview {
    pub fn from_snapshot(snapshot: &Snapshot, today: NaiveDate) -> Self {
        Self {
            today,
            upcoming: views::upcoming_events(snapshot.events(), today)
                .into_iter()
                .cloned()
                .collect(),
            latest_news: views::latest_news(snapshot.news())
                .into_iter()
                .cloned()
                .collect(),
            saved_count: views::saved_events(snapshot.events(), snapshot.saved()).len(),
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![format!("AgroExpo - {}", self.today.format("%d/%m/%Y"))];

        lines.push("Próximos eventos:".to_string());
        if self.upcoming.is_empty() {
            lines.push("  nenhum evento hoje ou amanhã".to_string());
        }
        for event in &self.upcoming {
            lines.push(format!(
                "  {date} {time} {title} - {location}",
                date = event.date.format("%d/%m"),
                time = event.time.format("%H:%M"),
                title = event.title,
                location = event.location,
            ));
        }

        lines.push("Últimas notícias:".to_string());
        for item in &self.latest_news {
            lines.push(format!("  {}", item.title));
        }

        lines.push(format!("Eventos salvos: {}", self.saved_count));
        lines.join("\n")
    }
}

/// The wired-up core a presentation layer talks to.
pub struct App {
    pub store: Arc<DomainStore>,
    pub config: ConfigStore,
    pub settings: Settings,
}

impl App {
    /// Loads preferences and fills a fresh store from the configured source.
    pub fn bootstrap(settings: Settings) -> anyhow::Result<Self> {
        let config = ConfigStore::load_in(&settings.data_dir);
        let store = Arc::new(DomainStore::new());
        let source = sources::select(settings.catalog_path.clone());
        sources::load_into(&store, source.as_ref())
            .with_context(|| format!("failed to load catalog from {} source", source.name()))?;
        Ok(Self {
            store,
            config,
            settings,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.settings
            .today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn home(&self) -> HomeOverview {
        HomeOverview::from_snapshot(&self.store.snapshot(), self.today())
    }

    /// Marks onboarding done. A failed write only costs showing it again next
    /// launch, so it is logged rather than returned.
    pub fn finish_onboarding(&self) {
        if let Err(err) = self.config.complete_onboarding() {
            warn!(error = %err, "failed to persist onboarding flag");
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    logging::init(settings.log_format)?;

    let app = App::bootstrap(settings)?;
    if app.config.needs_onboarding() {
        info!("first launch, showing onboarding");
        println!("Bem-vindo à AgroExpo 2025!");
        app.finish_onboarding();
    }

    println!("{}", app.home().render());
    Ok(())
}

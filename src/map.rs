use serde::Serialize;

use crate::models::Exhibitor;
use crate::views::{Filter, ALL_SENTINEL};

/// Visible map area: a center plus the span in degrees on each axis.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Centered on the fairground.
pub const DEFAULT_REGION: MapRegion = MapRegion {
    latitude: -22.9142,
    longitude: -47.0558,
    latitude_delta: 0.01,
    longitude_delta: 0.01,
};

impl Default for MapRegion {
    fn default() -> Self {
        DEFAULT_REGION
    }
}

impl MapRegion {
    /// Same span, centered on one exhibitor's booth.
    pub fn focused_on(exhibitor: &Exhibitor) -> Self {
        Self {
            latitude: exhibitor.location.latitude,
            longitude: exhibitor.location.longitude,
            ..DEFAULT_REGION
        }
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (latitude - self.latitude).abs() <= self.latitude_delta / 2.0
            && (longitude - self.longitude).abs() <= self.longitude_delta / 2.0
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapPin {
    pub exhibitor_id: String,
    pub name: String,
    pub sector: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Exhibitor> for MapPin {
    fn from(exhibitor: &Exhibitor) -> Self {
        Self {
            exhibitor_id: exhibitor.id.clone(),
            name: exhibitor.name.clone(),
            sector: exhibitor.sector.clone(),
            latitude: exhibitor.location.latitude,
            longitude: exhibitor.location.longitude,
        }
    }
}

/// Map filter chips, keyed by sector slug.
pub const MAP_SECTORS: [(&str, &str); 5] = [
    ("maquinario", "Máquinas"),
    ("insumos", "Insumos"),
    ("pecuaria", "Pecuária"),
    ("alimentos", "Alimentos"),
    ("servicos", "Serviços"),
];

pub type MapFilter = Filter<String>;

pub fn parse_map_filter(raw: &str) -> MapFilter {
    let slug = sector_slug(raw);
    if slug.is_empty() || slug == ALL_SENTINEL {
        Filter::All
    } else {
        Filter::Only(slug)
    }
}

/// Lowercases and strips Portuguese diacritics: `Maquinário` -> `maquinario`.
pub fn sector_slug(sector: &str) -> String {
    sector
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| match ch {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Pins for every exhibitor whose sector slug passes `filter`.
pub fn map_pins(exhibitors: &[Exhibitor], filter: &MapFilter) -> Vec<MapPin> {
    exhibitors
        .iter()
        .filter(|exhibitor| filter.allows(&sector_slug(&exhibitor.sector)))
        .map(MapPin::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn slugs_fold_accents() {
        assert_eq!(sector_slug("Maquinário"), "maquinario");
        assert_eq!(sector_slug(" Pecuária "), "pecuaria");
        assert_eq!(sector_slug("Serviços"), "servicos");
    }

    #[test]
    fn pins_follow_sector_slug() {
        let data = seed::agroexpo_2025();
        let pins = map_pins(&data.exhibitors, &parse_map_filter("maquinario"));
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].exhibitor_id, "1");

        assert_eq!(
            map_pins(&data.exhibitors, &parse_map_filter("all")).len(),
            data.exhibitors.len()
        );
        assert!(map_pins(&data.exhibitors, &parse_map_filter("servicos")).is_empty());
    }

    #[test]
    fn focus_keeps_default_span() {
        let data = seed::agroexpo_2025();
        let region = MapRegion::focused_on(&data.exhibitors[2]);
        assert_eq!(region.latitude, -22.9155);
        assert_eq!(region.latitude_delta, DEFAULT_REGION.latitude_delta);
        assert!(region.contains(-22.9155, -47.0582));
        assert!(!region.contains(-22.9, -47.2));
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub location: String,
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventCategory {
    #[serde(rename = "show")]
    Show,
    #[serde(rename = "leilao")]
    Auction,
    #[serde(rename = "cavalgada")]
    TrailRide,
    #[serde(rename = "palestra")]
    Talk,
    #[serde(rename = "rodeio")]
    Rodeo,
}

impl EventCategory {
    /// Menu order used by the schedule screen.
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Show,
        EventCategory::Auction,
        EventCategory::TrailRide,
        EventCategory::Talk,
        EventCategory::Rodeo,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EventCategory::Show => "show",
            EventCategory::Auction => "leilao",
            EventCategory::TrailRide => "cavalgada",
            EventCategory::Talk => "palestra",
            EventCategory::Rodeo => "rodeio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Show => "Shows",
            EventCategory::Auction => "Leilões",
            EventCategory::TrailRide => "Cavalgadas",
            EventCategory::Talk => "Palestras",
            EventCategory::Rodeo => "Rodeios",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for EventCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EventCategory::ALL
            .into_iter()
            .find(|category| category.id() == trimmed)
            .ok_or_else(|| ParseCategoryError(trimmed.to_string()))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Exhibitor {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub description: String,
    pub logo: String,
    #[serde(default)]
    pub catalog: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
    pub location: GeoPoint,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Contact {
    pub fn whatsapp_url(&self) -> Option<String> {
        non_blank(&self.whatsapp).map(|number| format!("https://wa.me/{number}"))
    }

    pub fn phone_url(&self) -> Option<String> {
        non_blank(&self.phone).map(|number| format!("tel:{number}"))
    }

    /// Bare hosts such as `www.example.com.br` get an `https://` scheme.
    pub fn website_url(&self) -> Option<String> {
        non_blank(&self.website).map(|site| {
            if site.starts_with("http") {
                site.to_string()
            } else {
                format!("https://{site}")
            }
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct News {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Event times travel as `HH:MM`, the way the schedule displays them.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_round_trip_through_from_str() {
        for category in EventCategory::ALL {
            assert_eq!(category.id().parse::<EventCategory>(), Ok(category));
        }
        assert_eq!(
            "festa".parse::<EventCategory>(),
            Err(ParseCategoryError("festa".to_string()))
        );
    }

    #[test]
    fn event_uses_app_wire_format() {
        let raw = r#"{
            "id": "1",
            "title": "Leilão de Gado Nelore",
            "description": "Leilão anual",
            "date": "2025-05-23",
            "time": "14:00",
            "location": "Pavilhão Central",
            "category": "leilao"
        }"#;
        let event: Event = serde_json::from_str(raw).expect("parse event");
        assert_eq!(event.category, EventCategory::Auction);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 5, 23).unwrap());
        assert!(event.image.is_none());

        let json = serde_json::to_value(&event).expect("serialize event");
        assert_eq!(json["time"], "14:00");
        assert_eq!(json["date"], "2025-05-23");
        assert_eq!(json["category"], "leilao");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn contact_links_follow_each_channel() {
        let contact = Contact {
            whatsapp: Some("+5511999999999".to_string()),
            phone: Some("+551134567890".to_string()),
            website: Some("www.tratoresbrasil.com.br".to_string()),
        };
        assert_eq!(
            contact.whatsapp_url().as_deref(),
            Some("https://wa.me/+5511999999999")
        );
        assert_eq!(contact.phone_url().as_deref(), Some("tel:+551134567890"));
        assert_eq!(
            contact.website_url().as_deref(),
            Some("https://www.tratoresbrasil.com.br")
        );

        let secure = Contact {
            website: Some("http://example.com".to_string()),
            phone: Some("   ".to_string()),
            ..Contact::default()
        };
        assert_eq!(secure.website_url().as_deref(), Some("http://example.com"));
        assert_eq!(secure.phone_url(), None);
        assert_eq!(secure.whatsapp_url(), None);
    }
}

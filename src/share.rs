use serde::Serialize;

use crate::models::{Event, Exhibitor};

const FAIR_NAME: &str = "AgroExpo 2025";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShareMessage {
    pub title: String,
    pub message: String,
}

pub fn share_event(event: &Event) -> ShareMessage {
    ShareMessage {
        title: event.title.clone(),
        message: format!(
            "Confira esse evento na {fair}: {title} em {date} às {time}, {location}",
            fair = FAIR_NAME,
            title = event.title,
            date = event.date.format("%Y-%m-%d"),
            time = event.time.format("%H:%M"),
            location = event.location,
        ),
    }
}

pub fn share_exhibitor(exhibitor: &Exhibitor) -> ShareMessage {
    ShareMessage {
        title: exhibitor.name.clone(),
        message: format!(
            "Confira esse expositor na {fair}: {name}, {description}",
            fair = FAIR_NAME,
            name = exhibitor.name,
            description = exhibitor.description,
        ),
    }
}

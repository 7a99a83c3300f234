use chrono::{NaiveDate, NaiveTime};

use crate::calendar::FairWindow;
use crate::catalog::CatalogData;
use crate::models::{Contact, Event, EventCategory, Exhibitor, GeoPoint, News};

const YEAR: i32 = 2025;
const MONTH: u32 = 5;

fn may(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(YEAR, MONTH, day).expect("valid seed date")
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid seed time")
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/photo-{photo}?q=80&w={width}&auto=format&fit=crop")
}

/// Calendar bounds for the 2025 edition.
pub fn fair_window() -> FairWindow {
    FairWindow::new(may(21), may(25))
}

/// The built-in catalog shipped with the app.
pub fn agroexpo_2025() -> CatalogData {
    CatalogData {
        events: events(),
        exhibitors: exhibitors(),
        news: news(),
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_event(
    id: &str,
    title: &str,
    description: &str,
    day: u32,
    time: NaiveTime,
    location: &str,
    category: EventCategory,
    photo: &str,
    width: u32,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: may(day),
        time,
        location: location.to_string(),
        category,
        image: Some(unsplash(photo, width)),
    }
}

fn events() -> Vec<Event> {
    vec![
        sample_event(
            "1",
            "Leilão de Gado Nelore",
            "Leilão anual com exemplares premiados da raça Nelore",
            23,
            at(14, 0),
            "Pavilhão Central",
            EventCategory::Auction,
            "1516467716199-8b782a7fa3f6",
            1470,
        ),
        sample_event(
            "2",
            "Show Bruno & Marrone",
            "Show da dupla sertaneja com os maiores sucessos",
            24,
            at(21, 0),
            "Palco Principal",
            EventCategory::Show,
            "1540039155733-5bb30b53aa14",
            1474,
        ),
        sample_event(
            "3",
            "Cavalgada Solidária",
            "Percurso de 10km com arrecadação para hospital local",
            25,
            at(8, 0),
            "Ponto de Partida - Entrada Norte",
            EventCategory::TrailRide,
            "1575908539614-ff89490f4a78",
            1470,
        ),
        sample_event(
            "4",
            "Palestra: Agricultura de Precisão",
            "Dr. João Silva apresenta as mais novas tecnologias para o campo",
            22,
            at(16, 0),
            "Auditório Sul",
            EventCategory::Talk,
            "1605000797499-95a51c5269ae",
            1471,
        ),
        sample_event(
            "5",
            "Rodeio Profissional",
            "Competição com os melhores peões do país",
            25,
            at(19, 0),
            "Arena de Rodeio",
            EventCategory::Rodeo,
            "1581376436131-e2013344fd5f",
            1470,
        ),
    ]
}

struct ExhibitorSeed<'a> {
    id: &'a str,
    name: &'a str,
    sector: &'a str,
    description: &'a str,
    photos: [(&'a str, u32); 2],
    whatsapp: &'a str,
    phone: &'a str,
    website: &'a str,
    location: (f64, f64),
}

impl From<ExhibitorSeed<'_>> for Exhibitor {
    fn from(seed: ExhibitorSeed<'_>) -> Self {
        let catalog: Vec<String> = seed
            .photos
            .iter()
            .map(|(photo, width)| unsplash(photo, *width))
            .collect();
        Exhibitor {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            sector: seed.sector.to_string(),
            description: seed.description.to_string(),
            logo: catalog[0].clone(),
            catalog,
            contact: Contact {
                whatsapp: Some(seed.whatsapp.to_string()),
                phone: Some(seed.phone.to_string()),
                website: Some(seed.website.to_string()),
            },
            location: GeoPoint {
                latitude: seed.location.0,
                longitude: seed.location.1,
            },
        }
    }
}

fn exhibitors() -> Vec<Exhibitor> {
    [
        ExhibitorSeed {
            id: "1",
            name: "Tratores Brasil",
            sector: "Maquinário",
            description: "Maior concessionária de tratores do Brasil, oferecendo os mais modernos equipamentos para o campo.",
            photos: [
                ("1569986728389-6ccf11186899", 1374),
                ("1625994278797-fa7edd6519ac", 1470),
            ],
            whatsapp: "+5511999999999",
            phone: "+551134567890",
            website: "www.tratoresbrasil.com.br",
            location: (-22.9091, -47.0572),
        },
        ExhibitorSeed {
            id: "2",
            name: "Sementes Ouro",
            sector: "Insumos",
            description: "Desenvolvimento e comercialização de sementes de alta qualidade para diversos tipos de cultivo.",
            photos: [
                ("1620857493579-8ce59bffc3cb", 1470),
                ("1559881230-3a63de1e74e1", 1470),
            ],
            whatsapp: "+5511988888888",
            phone: "+551145678901",
            website: "www.sementesouro.com.br",
            location: (-22.9122, -47.0611),
        },
        ExhibitorSeed {
            id: "3",
            name: "Rancho Boi Forte",
            sector: "Pecuária",
            description: "Referência na criação de gado Nelore de elite, com genética superior e manejo sustentável.",
            photos: [
                ("1545157000-85f257f7b046", 1469),
                ("1544904452-7ee0cb07e237", 1470),
            ],
            whatsapp: "+5511977777777",
            phone: "+551156789012",
            website: "www.boiforte.com.br",
            location: (-22.9155, -47.0582),
        },
        ExhibitorSeed {
            id: "4",
            name: "Laticínios Vale Verde",
            sector: "Alimentos",
            description: "Produção artesanal de queijos, manteiga e outros derivados do leite, seguindo tradições familiares.",
            photos: [
                ("1628088062856-d2abb4038d05", 1470),
                ("1566751959960-aaa53a1136eb", 1470),
            ],
            whatsapp: "+5511966666666",
            phone: "+551167890123",
            website: "www.laticiniosvaleverde.com.br",
            location: (-22.9195, -47.0543),
        },
    ]
    .into_iter()
    .map(Exhibitor::from)
    .collect()
}

fn sample_news(id: &str, title: &str, content: &str, day: u32, photo: &str, width: u32) -> News {
    News {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        date: may(day),
        image: Some(unsplash(photo, width)),
    }
}

fn news() -> Vec<News> {
    vec![
        sample_news(
            "1",
            "Abertura oficial da AgroExpo 2025",
            "A cerimônia de abertura contou com presença de autoridades locais e atraiu mais de 5 mil pessoas.",
            21,
            "1534187886935-1e1fddcb352e",
            1470,
        ),
        sample_news(
            "2",
            "Recordes de vendas no primeiro dia",
            "Expositores relatam vendas 30% superiores em comparação com a edição anterior do evento.",
            21,
            "1465126693214-3e2e58dc8942",
            1469,
        ),
        sample_news(
            "3",
            "Previsão de chuva para amanhã",
            "Organizadores prepararam áreas cobertas para garantir conforto aos visitantes mesmo em caso de chuva.",
            21,
            "1513172128805-db680e8a4e91",
            1470,
        ),
        sample_news(
            "4",
            "Nova tecnologia de irrigação apresentada",
            "Sistema revolucionário promete economia de 40% de água na irrigação de grandes áreas.",
            22,
            "1625301840055-d6e3dce3c35c",
            1470,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_matches_the_published_program() {
        let data = agroexpo_2025();
        assert_eq!(data.events.len(), 5);
        assert_eq!(data.exhibitors.len(), 4);
        assert_eq!(data.news.len(), 4);
        assert!(data
            .events
            .iter()
            .all(|event| fair_window().contains(event.date)));
    }

    #[test]
    fn exhibitor_logo_is_first_catalog_image() {
        for exhibitor in exhibitors() {
            assert_eq!(exhibitor.catalog.len(), 2);
            assert_eq!(exhibitor.logo, exhibitor.catalog[0]);
        }
    }
}

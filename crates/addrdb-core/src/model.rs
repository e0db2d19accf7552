// crates/addrdb-core/src/model.rs

//! Address entities: region → city/postcode → street → building.
//!
//! Child collections are loaded lazily by the repository. Each one is a
//! [`OnceCell`]: empty means "never populated", a set cell (possibly an empty
//! vector) means "fully populated for this parent".

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier of a city, unique per region.
pub type CityId = i64;

/// Sentinel for "no city". Lookups with it never touch the index.
pub const NO_CITY_ID: CityId = -1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Settlement classification. Cities and towns are kept in the repository
/// cache; smaller places are only ever searched through the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityKind {
    City,
    Town,
    Village,
    Hamlet,
    Suburb,
}

impl CityKind {
    pub fn is_town(self) -> bool {
        matches!(self, CityKind::City | CityKind::Town)
    }
}

/// Picks the transliterated name when asked for and present.
fn pick_name<'a>(name: &'a str, en_name: &'a str, transliterated: bool) -> &'a str {
    if transliterated && !en_name.is_empty() {
        en_name
    } else {
        name
    }
}

#[derive(Debug)]
pub struct City {
    id: CityId,
    name: String,
    en_name: String,
    kind: CityKind,
    location: Option<LatLon>,
    streets: OnceCell<Vec<Arc<Street>>>,
}

impl City {
    pub fn new(id: CityId, name: impl Into<String>, kind: CityKind) -> Self {
        Self {
            id,
            name: name.into(),
            en_name: String::new(),
            kind,
            location: None,
            streets: OnceCell::new(),
        }
    }

    pub fn with_en_name(mut self, en_name: impl Into<String>) -> Self {
        self.en_name = en_name.into();
        self
    }

    pub fn with_location(mut self, location: LatLon) -> Self {
        self.location = Some(location);
        self
    }

    pub fn id(&self) -> CityId {
        self.id
    }

    pub fn kind(&self) -> CityKind {
        self.kind
    }

    pub fn location(&self) -> Option<LatLon> {
        self.location
    }

    /// Local name, or the transliterated one if `transliterated` and known.
    pub fn name(&self, transliterated: bool) -> &str {
        pick_name(&self.name, &self.en_name, transliterated)
    }

    pub fn en_name(&self) -> &str {
        &self.en_name
    }

    /// Streets, if they have been loaded.
    pub fn streets(&self) -> Option<&[Arc<Street>]> {
        self.streets.get().map(Vec::as_slice)
    }

    pub(crate) fn streets_cell(&self) -> &OnceCell<Vec<Arc<Street>>> {
        &self.streets
    }
}

#[derive(Debug)]
pub struct PostCode {
    code: String,
    location: Option<LatLon>,
    streets: OnceCell<Vec<Arc<Street>>>,
}

impl PostCode {
    /// `code` is canonicalised to upper case.
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_uppercase(),
            location: None,
            streets: OnceCell::new(),
        }
    }

    pub fn with_location(mut self, location: LatLon) -> Self {
        self.location = Some(location);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn location(&self) -> Option<LatLon> {
        self.location
    }

    pub fn streets(&self) -> Option<&[Arc<Street>]> {
        self.streets.get().map(Vec::as_slice)
    }

    pub(crate) fn streets_cell(&self) -> &OnceCell<Vec<Arc<Street>>> {
        &self.streets
    }
}

#[derive(Debug)]
pub struct Street {
    id: i64,
    name: String,
    en_name: String,
    location: Option<LatLon>,
    city_id: Option<CityId>,
    buildings: OnceCell<Vec<Arc<Building>>>,
}

impl Street {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            en_name: String::new(),
            location: None,
            city_id: None,
            buildings: OnceCell::new(),
        }
    }

    pub fn with_en_name(mut self, en_name: impl Into<String>) -> Self {
        self.en_name = en_name.into();
        self
    }

    pub fn with_location(mut self, location: LatLon) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_city(mut self, city_id: CityId) -> Self {
        self.city_id = Some(city_id);
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self, transliterated: bool) -> &str {
        pick_name(&self.name, &self.en_name, transliterated)
    }

    pub fn location(&self) -> Option<LatLon> {
        self.location
    }

    /// The city this street belongs to, also for streets reached via a postcode.
    pub fn city_id(&self) -> Option<CityId> {
        self.city_id
    }

    /// Buildings in house-number order, if they have been loaded.
    pub fn buildings(&self) -> Option<&[Arc<Building>]> {
        self.buildings.get().map(Vec::as_slice)
    }

    pub(crate) fn buildings_cell(&self) -> &OnceCell<Vec<Arc<Building>>> {
        &self.buildings
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    name: String,
    en_name: String,
    location: Option<LatLon>,
    postcode: Option<String>,
}

impl Building {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            en_name: String::new(),
            location: None,
            postcode: None,
        }
    }

    pub fn with_en_name(mut self, en_name: impl Into<String>) -> Self {
        self.en_name = en_name.into();
        self
    }

    pub fn with_location(mut self, location: LatLon) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    /// House number or name.
    pub fn name(&self, transliterated: bool) -> &str {
        pick_name(&self.name, &self.en_name, transliterated)
    }

    pub fn location(&self) -> Option<LatLon> {
        self.location
    }

    pub fn postcode(&self) -> Option<&str> {
        self.postcode.as_deref()
    }
}

/// A hit of a city search: either a settlement or a postcode.
#[derive(Debug, Clone)]
pub enum Place {
    City(Arc<City>),
    Postcode(Arc<PostCode>),
}

impl Place {
    pub fn name(&self, transliterated: bool) -> &str {
        match self {
            Place::City(c) => c.name(transliterated),
            Place::Postcode(p) => p.code(),
        }
    }

    pub fn location(&self) -> Option<LatLon> {
        match self {
            Place::City(c) => c.location(),
            Place::Postcode(p) => p.location(),
        }
    }

    pub fn as_city(&self) -> Option<&Arc<City>> {
        match self {
            Place::City(c) => Some(c),
            Place::Postcode(_) => None,
        }
    }

    pub fn as_postcode(&self) -> Option<&Arc<PostCode>> {
        match self {
            Place::Postcode(p) => Some(p),
            Place::City(_) => None,
        }
    }
}

/// The two kinds of entity that own streets.
#[derive(Debug, Clone, Copy)]
pub enum StreetParent<'a> {
    City(&'a City),
    Postcode(&'a PostCode),
}

impl<'a> StreetParent<'a> {
    pub(crate) fn streets_cell(&self) -> &'a OnceCell<Vec<Arc<Street>>> {
        match *self {
            StreetParent::City(c) => c.streets_cell(),
            StreetParent::Postcode(p) => p.streets_cell(),
        }
    }

    pub fn streets(&self) -> Option<&'a [Arc<Street>]> {
        self.streets_cell().get().map(Vec::as_slice)
    }
}

impl fmt::Display for StreetParent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreetParent::City(c) => write!(f, "city {} ({})", c.name(false), c.id()),
            StreetParent::Postcode(p) => write!(f, "postcode {}", p.code()),
        }
    }
}

impl<'a> From<&'a City> for StreetParent<'a> {
    fn from(city: &'a City) -> Self {
        StreetParent::City(city)
    }
}

impl<'a> From<&'a PostCode> for StreetParent<'a> {
    fn from(postcode: &'a PostCode) -> Self {
        StreetParent::Postcode(postcode)
    }
}

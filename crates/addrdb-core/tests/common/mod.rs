#![allow(dead_code)]

use addrdb_core::consumer::ResultConsumer;
use addrdb_core::loader::FileIndex;
use addrdb_core::raw::{
    BuildingRaw, CityRaw, DatasetRaw, JunctionRaw, PostcodeRaw, RegionRaw, StreetRaw, StreetRef,
};
use addrdb_core::text::NameMatcher;
use addrdb_core::{
    AddrError, AddressIndex, Building, City, CityId, CityKind, LatLon, Place, PostCode, Result,
    Street, StreetParent,
};
use std::cell::Cell;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub const REGION: &str = "Berlin";

fn junction(id: i64) -> JunctionRaw {
    JunctionRaw {
        id,
        location: LatLon::new(52.5 + id as f64 / 1000.0, 13.4),
    }
}

fn building(name: &str) -> BuildingRaw {
    BuildingRaw {
        name: name.to_string(),
        en_name: String::new(),
        location: None,
        postcode: None,
    }
}

fn street(id: i64, name: &str, buildings: &[&str], junctions: &[i64]) -> StreetRaw {
    StreetRaw {
        id,
        name: name.to_string(),
        en_name: String::new(),
        location: None,
        buildings: buildings.iter().map(|b| building(b)).collect(),
        junctions: junctions.iter().copied().map(junction).collect(),
    }
}

fn city(id: CityId, name: &str, en_name: &str, kind: CityKind, streets: Vec<StreetRaw>) -> CityRaw {
    CityRaw {
        id,
        name: name.to_string(),
        en_name: en_name.to_string(),
        kind,
        location: None,
        streets,
    }
}

/// Location of junction `id` in [`dataset`].
pub fn junction_location(id: i64) -> LatLon {
    junction(id).location
}

/// Berlin region: two cities, two towns, two villages; streets only in Berlin.
pub fn dataset() -> DatasetRaw {
    DatasetRaw {
        regions: vec![RegionRaw {
            name: REGION.to_string(),
            center: LatLon::new(52.52, 13.405),
            cities: vec![
                city(
                    1,
                    "Berlin",
                    "Berlin",
                    CityKind::City,
                    vec![
                        street(100, "Avenue Road", &["3"], &[1]),
                        street(101, "Fifth Avenue", &["12a", "2", "10", "1", "12"], &[1, 2]),
                        street(102, "Avenida Central", &[], &[2]),
                        street(103, "Elysees", &["7"], &[]),
                        street(104, "Park Lane", &["1"], &[9]),
                    ],
                ),
                city(2, "Bernau bei Berlin", "", CityKind::Town, vec![]),
                city(3, "München", "Munich", CityKind::City, vec![]),
                city(4, "Potsdam", "", CityKind::Town, vec![]),
                city(5, "Berkenbrück", "", CityKind::Village, vec![]),
                city(6, "Neu Bernsdorf", "", CityKind::Hamlet, vec![]),
            ],
            postcodes: vec![
                PostcodeRaw {
                    code: "SW1A 1AA".to_string(),
                    location: None,
                    streets: vec![StreetRef {
                        city_id: 1,
                        street_id: 104,
                    }],
                },
                PostcodeRaw {
                    code: "10117".to_string(),
                    location: None,
                    streets: vec![],
                },
            ],
        }],
    }
}

#[derive(Debug, Default)]
pub struct Calls {
    pub cities: AtomicUsize,
    pub villages: AtomicUsize,
    pub postcodes_matching: AtomicUsize,
    pub postcode_by_name: AtomicUsize,
    pub streets: AtomicUsize,
    pub buildings: AtomicUsize,
    pub intersections: AtomicUsize,
}

impl Calls {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// Per-method failure switches, on top of [`CountingIndex::failing`].
#[derive(Debug, Default)]
pub struct Failures {
    pub cities: AtomicBool,
    pub villages: AtomicBool,
    pub postcodes_matching: AtomicBool,
    pub postcode_by_name: AtomicBool,
    pub streets: AtomicBool,
    pub buildings: AtomicBool,
    pub intersections: AtomicBool,
}

/// Wraps a [`FileIndex`], counts every call and can be told to fail, either
/// everywhere (`failing`) or per method (`fails`).
pub struct CountingIndex {
    inner: FileIndex,
    pub calls: Arc<Calls>,
    pub failing: Arc<AtomicBool>,
    pub fails: Arc<Failures>,
}

impl CountingIndex {
    pub fn new() -> Self {
        Self {
            inner: FileIndex::from_dataset(dataset()).unwrap(),
            calls: Arc::default(),
            failing: Arc::default(),
            fails: Arc::default(),
        }
    }

    fn hit(&self, counter: &AtomicUsize, fail: &AtomicBool) -> Result<()> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) || fail.load(Ordering::SeqCst) {
            Err(AddrError::Io(io::Error::new(io::ErrorKind::Other, "disk on fire")))
        } else {
            Ok(())
        }
    }
}

impl AddressIndex for CountingIndex {
    fn load_cities(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
    ) -> Result<Vec<Arc<City>>> {
        self.hit(&self.calls.cities, &self.fails.cities)?;
        self.inner.load_cities(region, consumer)
    }

    fn load_villages(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
        matcher: &NameMatcher,
        use_transliterated_names: bool,
    ) -> Result<Vec<Arc<City>>> {
        self.hit(&self.calls.villages, &self.fails.villages)?;
        self.inner
            .load_villages(region, consumer, matcher, use_transliterated_names)
    }

    fn load_postcodes_matching(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
        matcher: &NameMatcher,
    ) -> Result<Vec<Arc<PostCode>>> {
        self.hit(&self.calls.postcodes_matching, &self.fails.postcodes_matching)?;
        self.inner.load_postcodes_matching(region, consumer, matcher)
    }

    fn load_postcode_by_name(&self, region: &str, name: &str) -> Result<Option<Arc<PostCode>>> {
        self.hit(&self.calls.postcode_by_name, &self.fails.postcode_by_name)?;
        self.inner.load_postcode_by_name(region, name)
    }

    fn load_streets(
        &self,
        parent: StreetParent<'_>,
        consumer: Option<&dyn ResultConsumer<Arc<Street>>>,
    ) -> Result<Vec<Arc<Street>>> {
        self.hit(&self.calls.streets, &self.fails.streets)?;
        self.inner.load_streets(parent, consumer)
    }

    fn load_buildings(
        &self,
        street: &Street,
        consumer: Option<&dyn ResultConsumer<Arc<Building>>>,
    ) -> Result<Vec<Arc<Building>>> {
        self.hit(&self.calls.buildings, &self.fails.buildings)?;
        self.inner.load_buildings(street, consumer)
    }

    fn find_intersected_streets(&self, city: &City, street: &Street) -> Result<Vec<Arc<Street>>> {
        self.hit(&self.calls.intersections, &self.fails.intersections)?;
        self.inner.find_intersected_streets(city, street)
    }

    fn find_street_intersection(
        &self,
        city: &City,
        a: &Street,
        b: &Street,
    ) -> Result<Option<LatLon>> {
        self.hit(&self.calls.intersections, &self.fails.intersections)?;
        self.inner.find_street_intersection(city, a, b)
    }

    fn region_center(&self, region: &str) -> Result<LatLon> {
        self.inner.region_center(region)
    }
}

/// Accepts everything and reports cancellation once `limit` items were
/// published.
pub struct CancelAfter {
    limit: usize,
    published: Cell<usize>,
}

impl CancelAfter {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            published: Cell::new(0),
        }
    }

    pub fn published(&self) -> usize {
        self.published.get()
    }
}

impl<T: ?Sized> ResultConsumer<T> for CancelAfter {
    fn publish(&self, _item: &T) -> bool {
        self.published.set(self.published.get() + 1);
        true
    }

    fn is_cancelled(&self) -> bool {
        self.published.get() >= self.limit
    }
}

/// Records published names.
#[derive(Default)]
pub struct Recorder {
    pub names: std::cell::RefCell<Vec<String>>,
}

impl ResultConsumer<Place> for Recorder {
    fn publish(&self, item: &Place) -> bool {
        self.names.borrow_mut().push(item.name(false).to_string());
        true
    }

    fn is_cancelled(&self) -> bool {
        false
    }
}

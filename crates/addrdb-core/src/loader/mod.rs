// crates/addrdb-core/src/loader/mod.rs

//! # Dataset-backed index
//!
//! [`FileIndex`] implements [`AddressIndex`] over a dataset file. The file is
//! decoded once when opened (bincode or JSON, optionally gzip-compressed);
//! entities are then materialised per request, so a repository on top of it
//! sees the same on-demand behaviour as with a paged binary index.

use crate::consumer::ResultConsumer;
use crate::error::{AddrError, Result};
use crate::index::AddressIndex;
use crate::model::{
    Building, City, CityId, CityKind, LatLon, Place, PostCode, Street, StreetParent,
};
use crate::raw::{CityRaw, DatasetRaw, JunctionRaw, PostcodeRaw, RegionRaw, StreetRaw};
use crate::text::NameMatcher;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

mod common_io;

pub use common_io::{create_stream, open_stream, DatasetFormat, DatasetWriter};

/// Position of a record inside the dataset: (region, item).
type Slot = (usize, usize);

#[derive(Debug)]
pub struct FileIndex {
    dataset: DatasetRaw,
    cities: HashMap<CityId, Slot>,
    postcodes: HashMap<String, Slot>,
}

impl FileIndex {
    /// Opens `.bin`, `.json`, `.bin.gz` or `.json.gz` datasets.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DatasetFormat::from_path(path)?;
        let mut reader = open_stream(path)?;
        let dataset = decode(reader.as_mut(), format)?;
        tracing::info!(
            path = %path.display(),
            regions = dataset.regions.len(),
            "Opened address dataset"
        );
        Self::from_dataset(dataset)
    }

    /// Builds an index over an in-memory dataset. City ids and postcodes
    /// must be unique across all regions.
    pub fn from_dataset(dataset: DatasetRaw) -> Result<Self> {
        let mut cities = HashMap::new();
        let mut postcodes = HashMap::new();
        for (r, region) in dataset.regions.iter().enumerate() {
            for (i, city) in region.cities.iter().enumerate() {
                if let Entry::Vacant(slot) = cities.entry(city.id) {
                    slot.insert((r, i));
                } else {
                    return Err(AddrError::InvalidDataset(format!(
                        "duplicate city id {}",
                        city.id
                    )));
                }
            }
            for (i, postcode) in region.postcodes.iter().enumerate() {
                if let Entry::Vacant(slot) = postcodes.entry(postcode.code.to_uppercase()) {
                    slot.insert((r, i));
                } else {
                    return Err(AddrError::InvalidDataset(format!(
                        "duplicate postcode {}",
                        postcode.code
                    )));
                }
            }
        }
        Ok(Self {
            dataset,
            cities,
            postcodes,
        })
    }

    /// Writes the dataset in the format implied by `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = DatasetFormat::from_path(path)?;
        let mut writer = create_stream(path)?;
        match format {
            DatasetFormat::Binary => bincode::serialize_into(&mut writer, &self.dataset)?,
            #[cfg(feature = "json")]
            DatasetFormat::Json => serde_json::to_writer(&mut writer, &self.dataset)?,
        }
        writer.finish()
    }

    pub fn dataset(&self) -> &DatasetRaw {
        &self.dataset
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.dataset.regions.iter().map(|r| r.name.as_str())
    }

    fn region(&self, name: &str) -> Result<&RegionRaw> {
        self.dataset
            .regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| AddrError::UnknownRegion(name.to_string()))
    }

    fn city_raw(&self, id: CityId) -> Result<&CityRaw> {
        let &(r, i) = self
            .cities
            .get(&id)
            .ok_or_else(|| AddrError::NotFound(format!("city {id}")))?;
        Ok(&self.dataset.regions[r].cities[i])
    }

    fn postcode_raw(&self, code: &str) -> Result<&PostcodeRaw> {
        let &(r, i) = self
            .postcodes
            .get(&code.to_uppercase())
            .ok_or_else(|| AddrError::NotFound(format!("postcode {code}")))?;
        Ok(&self.dataset.regions[r].postcodes[i])
    }

    fn street_raw(&self, city_id: CityId, street_id: i64) -> Result<&StreetRaw> {
        self.city_raw(city_id)?
            .streets
            .iter()
            .find(|s| s.id == street_id)
            .ok_or_else(|| AddrError::NotFound(format!("street {street_id} in city {city_id}")))
    }

    fn owned_street_raw(&self, street: &Street) -> Result<&StreetRaw> {
        let city_id = street
            .city_id()
            .ok_or_else(|| AddrError::NotFound(format!("city of street {}", street.id())))?;
        self.street_raw(city_id, street.id())
    }
}

fn decode(reader: &mut dyn Read, format: DatasetFormat) -> Result<DatasetRaw> {
    match format {
        DatasetFormat::Binary => Ok(bincode::deserialize_from(reader)?),
        #[cfg(feature = "json")]
        DatasetFormat::Json => Ok(serde_json::from_reader(reader)?),
    }
}

fn city_from_raw(raw: &CityRaw) -> City {
    let mut city = City::new(raw.id, raw.name.clone(), raw.kind).with_en_name(raw.en_name.clone());
    if let Some(location) = raw.location {
        city = city.with_location(location);
    }
    city
}

fn street_from_raw(city_id: CityId, raw: &StreetRaw) -> Street {
    let mut street = Street::new(raw.id, raw.name.clone())
        .with_en_name(raw.en_name.clone())
        .with_city(city_id);
    if let Some(location) = raw.location {
        street = street.with_location(location);
    }
    street
}

fn postcode_from_raw(raw: &PostcodeRaw) -> PostCode {
    let mut postcode = PostCode::new(&raw.code);
    if let Some(location) = raw.location {
        postcode = postcode.with_location(location);
    }
    postcode
}

fn name_of<'a>(raw: &'a CityRaw, transliterated: bool) -> &'a str {
    if transliterated && !raw.en_name.is_empty() {
        &raw.en_name
    } else {
        &raw.name
    }
}

/// Publishes each item until the consumer gives up.
fn stream<T>(items: &[T], consumer: Option<&dyn ResultConsumer<T>>) {
    if let Some(consumer) = consumer {
        for item in items {
            if consumer.is_cancelled() {
                break;
            }
            consumer.publish(item);
        }
    }
}

fn stream_places(places: impl Iterator<Item = Place>, consumer: Option<&dyn ResultConsumer<Place>>) {
    if let Some(consumer) = consumer {
        for place in places {
            if consumer.is_cancelled() {
                break;
            }
            consumer.publish(&place);
        }
    }
}

fn shared_junction<'a>(a: &'a StreetRaw, b: &StreetRaw) -> Option<&'a JunctionRaw> {
    let ids: HashSet<i64> = b.junctions.iter().map(|j| j.id).collect();
    a.junctions.iter().find(|j| ids.contains(&j.id))
}

impl AddressIndex for FileIndex {
    fn load_cities(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
    ) -> Result<Vec<Arc<City>>> {
        let region = self.region(region)?;
        let by_kind = |kind: CityKind| {
            region
                .cities
                .iter()
                .filter(move |c| c.kind == kind)
                .map(|c| Arc::new(city_from_raw(c)))
        };
        let cities: Vec<Arc<City>> = by_kind(CityKind::City)
            .chain(by_kind(CityKind::Town))
            .collect();
        stream_places(cities.iter().cloned().map(Place::City), consumer);
        Ok(cities)
    }

    fn load_villages(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
        matcher: &NameMatcher,
        use_transliterated_names: bool,
    ) -> Result<Vec<Arc<City>>> {
        let villages: Vec<Arc<City>> = self
            .region(region)?
            .cities
            .iter()
            .filter(|c| !c.kind.is_town())
            .filter(|c| matcher.matches(name_of(c, use_transliterated_names)))
            .map(|c| Arc::new(city_from_raw(c)))
            .collect();
        stream_places(villages.iter().cloned().map(Place::City), consumer);
        Ok(villages)
    }

    fn load_postcodes_matching(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
        matcher: &NameMatcher,
    ) -> Result<Vec<Arc<PostCode>>> {
        let codes: Vec<Arc<PostCode>> = self
            .region(region)?
            .postcodes
            .iter()
            .filter(|p| matcher.matches(&p.code))
            .map(|p| Arc::new(postcode_from_raw(p)))
            .collect();
        stream_places(codes.iter().cloned().map(Place::Postcode), consumer);
        Ok(codes)
    }

    fn load_postcode_by_name(&self, region: &str, name: &str) -> Result<Option<Arc<PostCode>>> {
        let region = self.region(region)?;
        Ok(region
            .postcodes
            .iter()
            .find(|p| p.code.eq_ignore_ascii_case(name.trim()))
            .map(|p| Arc::new(postcode_from_raw(p))))
    }

    fn load_streets(
        &self,
        parent: StreetParent<'_>,
        consumer: Option<&dyn ResultConsumer<Arc<Street>>>,
    ) -> Result<Vec<Arc<Street>>> {
        let streets: Vec<Arc<Street>> = match parent {
            StreetParent::City(city) => self
                .city_raw(city.id())?
                .streets
                .iter()
                .map(|s| Arc::new(street_from_raw(city.id(), s)))
                .collect(),
            StreetParent::Postcode(postcode) => {
                let raw = self.postcode_raw(postcode.code())?;
                let mut streets = Vec::with_capacity(raw.streets.len());
                for r in &raw.streets {
                    let street = self.street_raw(r.city_id, r.street_id)?;
                    streets.push(Arc::new(street_from_raw(r.city_id, street)));
                }
                streets
            }
        };
        stream(&streets, consumer);
        Ok(streets)
    }

    fn load_buildings(
        &self,
        street: &Street,
        consumer: Option<&dyn ResultConsumer<Arc<Building>>>,
    ) -> Result<Vec<Arc<Building>>> {
        let buildings: Vec<Arc<Building>> = self
            .owned_street_raw(street)?
            .buildings
            .iter()
            .map(|b| {
                let mut building = Building::new(b.name.clone()).with_en_name(b.en_name.clone());
                if let Some(location) = b.location {
                    building = building.with_location(location);
                }
                if let Some(code) = &b.postcode {
                    building = building.with_postcode(code.clone());
                }
                Arc::new(building)
            })
            .collect();
        stream(&buildings, consumer);
        Ok(buildings)
    }

    fn find_intersected_streets(&self, city: &City, street: &Street) -> Result<Vec<Arc<Street>>> {
        let city_raw = self.city_raw(city.id())?;
        let target = city_raw
            .streets
            .iter()
            .find(|s| s.id == street.id())
            .ok_or_else(|| AddrError::NotFound(format!("street {} in city {}", street.id(), city.id())))?;
        let crossing: HashSet<i64> = city_raw
            .streets
            .iter()
            .filter(|s| s.id != target.id && shared_junction(s, target).is_some())
            .map(|s| s.id)
            .collect();

        // Hand out the cached entities when the city's streets are loaded.
        Ok(match city.streets() {
            Some(loaded) => loaded
                .iter()
                .filter(|s| crossing.contains(&s.id()))
                .cloned()
                .collect(),
            None => city_raw
                .streets
                .iter()
                .filter(|s| crossing.contains(&s.id))
                .map(|s| Arc::new(street_from_raw(city.id(), s)))
                .collect(),
        })
    }

    fn find_street_intersection(
        &self,
        city: &City,
        a: &Street,
        b: &Street,
    ) -> Result<Option<LatLon>> {
        let a = self.street_raw(city.id(), a.id())?;
        let b = self.street_raw(city.id(), b.id())?;
        Ok(shared_junction(a, b).map(|j| j.location))
    }

    fn region_center(&self, region: &str) -> Result<LatLon> {
        Ok(self.region(region)?.center)
    }
}

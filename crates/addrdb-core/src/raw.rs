// crates/addrdb-core/src/raw.rs

//! On-disk records of the dataset read by [`FileIndex`](crate::loader::FileIndex).
//!
//! The same structures are used for the bincode and the JSON flavour, so
//! optional fields are written out even when empty.

use crate::model::{CityId, CityKind, LatLon};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetRaw {
    pub regions: Vec<RegionRaw>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionRaw {
    pub name: String,
    pub center: LatLon,
    /// Cities, towns and villages of the region. Ids must be unique within
    /// the whole dataset.
    #[serde(default)]
    pub cities: Vec<CityRaw>,
    #[serde(default)]
    pub postcodes: Vec<PostcodeRaw>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRaw {
    pub id: CityId,
    pub name: String,
    #[serde(default)]
    pub en_name: String,
    pub kind: CityKind,
    #[serde(default)]
    pub location: Option<LatLon>,
    #[serde(default)]
    pub streets: Vec<StreetRaw>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetRaw {
    /// Unique within its city.
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub en_name: String,
    #[serde(default)]
    pub location: Option<LatLon>,
    #[serde(default)]
    pub buildings: Vec<BuildingRaw>,
    /// Nodes shared with crossing streets.
    #[serde(default)]
    pub junctions: Vec<JunctionRaw>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingRaw {
    pub name: String,
    #[serde(default)]
    pub en_name: String,
    #[serde(default)]
    pub location: Option<LatLon>,
    #[serde(default)]
    pub postcode: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JunctionRaw {
    pub id: i64,
    pub location: LatLon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostcodeRaw {
    pub code: String,
    #[serde(default)]
    pub location: Option<LatLon>,
    #[serde(default)]
    pub streets: Vec<StreetRef>,
}

/// Points at a street stored under a city.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StreetRef {
    pub city_id: CityId,
    pub street_id: i64,
}

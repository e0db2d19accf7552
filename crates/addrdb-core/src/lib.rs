// crates/addrdb-core/src/lib.rs

//! # addrdb-core
//!
//! Incremental address cache and fuzzy search in front of a read-only,
//! region-scoped geographic index.
//!
//! A [`RegionRepository`] sits on top of any [`AddressIndex`] and answers
//! "cities matching X", "streets of C matching any of these fragments" and
//! "house N on street S", loading only what a query needs and keeping it
//! for later queries. Long searches stop cooperatively when their
//! [`ResultConsumer`](consumer::ResultConsumer) reports cancellation.
//!
//! ```rust
//! use addrdb_core::consumer::Unfiltered;
//! use addrdb_core::loader::FileIndex;
//! use addrdb_core::raw::{CityRaw, DatasetRaw, RegionRaw};
//! use addrdb_core::{AddressSearch, CityKind, LatLon, RegionRepository};
//!
//! let dataset = DatasetRaw {
//!     regions: vec![RegionRaw {
//!         name: "Berlin".into(),
//!         center: LatLon::new(52.52, 13.40),
//!         cities: vec![CityRaw {
//!             id: 1,
//!             name: "Berlin".into(),
//!             en_name: String::new(),
//!             kind: CityKind::City,
//!             location: None,
//!             streets: vec![],
//!         }],
//!         postcodes: vec![],
//!     }],
//! };
//! let mut repo = RegionRepository::new(FileIndex::from_dataset(dataset).unwrap(), "Berlin");
//! repo.search_cities("", &Unfiltered, None); // populates the cache
//! let hits = repo.search_cities("ber", &Unfiltered, None);
//! assert_eq!(hits.len(), 1);
//! ```

pub mod cache;
pub mod config;
pub mod consumer;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
mod preload;
pub mod raw;
pub mod repository;
mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::config::RepositoryConfig;
pub use crate::error::{AddrError, Result};
pub use crate::index::AddressIndex;
pub use crate::model::{
    Building, City, CityId, CityKind, LatLon, Place, PostCode, Street, StreetParent, NO_CITY_ID,
};
pub use crate::repository::RegionRepository;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::AddressSearch;

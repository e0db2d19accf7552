// crates/addrdb-core/src/preload.rs

//! Populating cached entities from the index, at most once per entity.
//!
//! Index failures are logged and leave the entity unpopulated, so the next
//! call tries again; the caller just sees nothing new.

use crate::consumer::ResultConsumer;
use crate::error::AddrError;
use crate::index::AddressIndex;
use crate::model::{Building, Place, Street, StreetParent};
use crate::repository::RegionRepository;
use crate::text::house_number_cmp;
use std::sync::Arc;

impl<I: AddressIndex> RegionRepository<I> {
    /// Loads the full city set of the region if the cache is empty.
    pub(crate) fn ensure_cities_loaded(&mut self, consumer: Option<&dyn ResultConsumer<Place>>) {
        if !self.cache.cities.is_empty() {
            return;
        }
        match self.index.load_cities(&self.region, consumer) {
            Ok(cities) => {
                tracing::debug!(region = %self.region, count = cities.len(), "Loaded cities");
                for city in cities {
                    self.cache.cities.insert(city);
                }
            }
            Err(e) => {
                tracing::error!(region = %self.region, error = %e, "Disk operation failed");
            }
        }
    }

    pub(crate) fn ensure_streets_loaded<'a>(
        &self,
        parent: StreetParent<'a>,
        consumer: Option<&dyn ResultConsumer<Arc<Street>>>,
    ) -> &'a [Arc<Street>] {
        let loaded = parent.streets_cell().get_or_try_init(|| {
            let streets = self.index.load_streets(parent, consumer)?;
            tracing::debug!(%parent, count = streets.len(), "Loaded streets");
            Ok::<_, AddrError>(streets)
        });
        match loaded {
            Ok(streets) => streets.as_slice(),
            Err(e) => {
                tracing::error!(region = %self.region, %parent, error = %e, "Disk operation failed");
                &[]
            }
        }
    }

    pub(crate) fn ensure_buildings_loaded<'a>(
        &self,
        street: &'a Street,
        consumer: Option<&dyn ResultConsumer<Arc<Building>>>,
    ) -> &'a [Arc<Building>] {
        let loaded = street.buildings_cell().get_or_try_init(|| {
            let mut buildings = self.index.load_buildings(street, consumer)?;
            buildings.sort_by(|a, b| house_number_cmp(&self.collator, a.name(false), b.name(false)));
            tracing::debug!(street = street.name(false), count = buildings.len(), "Loaded buildings");
            Ok::<_, AddrError>(buildings)
        });
        match loaded {
            Ok(buildings) => buildings.as_slice(),
            Err(e) => {
                tracing::error!(
                    region = %self.region,
                    street = street.name(false),
                    error = %e,
                    "Disk operation failed"
                );
                &[]
            }
        }
    }
}

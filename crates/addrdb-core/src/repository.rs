// crates/addrdb-core/src/repository.rs
use crate::cache::EntityCache;
use crate::config::RepositoryConfig;
use crate::index::AddressIndex;
use crate::model::{City, LatLon};
use crate::text::Collator;
use std::fmt;
use std::sync::Arc;

/// Address cache and search engine for one region of an index.
///
/// Nothing is read from the index up front. Cities are loaded in one go on
/// first use, streets and buildings per parent the first time they are
/// needed, and everything stays cached until [`clear_cache`](Self::clear_cache).
///
/// Searching takes `&mut self`, so at most one search runs per repository at
/// a time. To stop a search early, cancel the consumer it was handed (see
/// [`crate::consumer::CancellationToken`]) from another thread.
pub struct RegionRepository<I: AddressIndex> {
    pub(crate) index: I,
    pub(crate) region: String,
    pub(crate) collator: Collator,
    pub(crate) config: RepositoryConfig,
    pub(crate) cache: EntityCache,
}

impl<I: AddressIndex> RegionRepository<I> {
    pub fn new(index: I, region: impl Into<String>) -> Self {
        Self::with_config(index, region, RepositoryConfig::default())
    }

    pub fn with_config(index: I, region: impl Into<String>, config: RepositoryConfig) -> Self {
        let collator = Collator::primary();
        Self {
            index,
            region: region.into(),
            collator,
            config,
            cache: EntityCache::new(collator),
        }
    }

    /// Region this repository is bound to.
    pub fn name(&self) -> &str {
        &self.region
    }

    /// The underlying index reader.
    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn collator(&self) -> &Collator {
        &self.collator
    }

    pub fn use_transliterated_names(&self) -> bool {
        self.config.use_transliterated_names
    }

    pub fn set_use_transliterated_names(&mut self, value: bool) {
        self.config.use_transliterated_names = value;
    }

    /// Seeds the city cache without asking the index. An existing entry with
    /// the same id is replaced.
    pub fn add_city_to_cache(&mut self, city: Arc<City>) {
        self.cache.cities.insert(city);
    }

    pub fn are_cities_cached(&self) -> bool {
        !self.cache.cities.is_empty()
    }

    /// Forgets cached cities and postcodes. Streets and buildings hang off
    /// those entities and go with them.
    pub fn clear_cache(&mut self) {
        tracing::debug!(region = %self.region, "Clearing address cache");
        self.cache.clear();
    }

    pub fn region_center(&self) -> Option<LatLon> {
        match self.index.region_center(&self.region) {
            Ok(center) => Some(center),
            Err(e) => {
                tracing::error!(region = %self.region, error = %e, "Disk operation failed");
                None
            }
        }
    }

    /// Releases the index. The repository cannot be used afterwards.
    pub fn close(self) {
        tracing::debug!(region = %self.region, "Closing repository");
    }
}

impl<I: AddressIndex> fmt::Display for RegionRepository<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} repository", self.region)
    }
}

impl<I: AddressIndex> fmt::Debug for RegionRepository<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionRepository")
            .field("region", &self.region)
            .field("config", &self.config)
            .field("cached_cities", &self.cache.cities.len())
            .field("cached_postcodes", &self.cache.postcodes.len())
            .finish()
    }
}

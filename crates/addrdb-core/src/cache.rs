// crates/addrdb-core/src/cache.rs

//! Per-repository entity cache.
//!
//! Holds the region's cities in index order (cities and towns first, which
//! the city search relies on) and the postcodes that were asked for so far.

use crate::model::{City, CityId, PostCode};
use crate::text::Collator;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Insertion-ordered id → city map.
#[derive(Debug, Default)]
pub struct CityCache {
    cities: IndexMap<CityId, Arc<City>>,
}

impl CityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `city`. A city whose id is already present replaces the old
    /// entry in place, keeping its position.
    pub fn insert(&mut self, city: Arc<City>) {
        self.cities.insert(city.id(), city);
    }

    pub fn get(&self, id: CityId) -> Option<&Arc<City>> {
        self.cities.get(&id)
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, CityId, Arc<City>> {
        self.cities.values()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn clear(&mut self) {
        self.cities.clear();
    }
}

/// Postcodes requested so far, including negative results.
///
/// Keys are collation keys of the trimmed, uppercased code, so `"sw1a 1aa"`
/// and `" SW1A 1AA"` share an entry.
#[derive(Debug)]
pub struct PostcodeCache {
    collator: Collator,
    entries: BTreeMap<String, Option<Arc<PostCode>>>,
}

impl PostcodeCache {
    pub fn new(collator: Collator) -> Self {
        Self {
            collator,
            entries: BTreeMap::new(),
        }
    }

    fn key(&self, code: &str) -> String {
        self.collator.key(&code.trim().to_uppercase())
    }

    /// `None` on a miss, `Some(None)` for a cached "not in the index".
    pub fn get(&self, code: &str) -> Option<Option<Arc<PostCode>>> {
        self.entries.get(&self.key(code)).cloned()
    }

    pub fn insert(&mut self, code: &str, postcode: Option<Arc<PostCode>>) {
        let key = self.key(code);
        self.entries.insert(key, postcode);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Both caches of a repository.
#[derive(Debug)]
pub struct EntityCache {
    pub cities: CityCache,
    pub postcodes: PostcodeCache,
}

impl EntityCache {
    pub fn new(collator: Collator) -> Self {
        Self {
            cities: CityCache::new(),
            postcodes: PostcodeCache::new(collator),
        }
    }

    /// Drops everything; the next preload goes back to the index.
    pub fn clear(&mut self) {
        self.cities.clear();
        self.postcodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CityKind;

    #[test]
    fn city_cache_keeps_insertion_order() {
        let mut cache = CityCache::new();
        for (id, name) in [(3, "Berlin"), (1, "Potsdam"), (2, "Bernau")] {
            cache.insert(Arc::new(City::new(id, name, CityKind::City)));
        }
        let ids: Vec<_> = cache.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn reinserting_an_id_replaces_in_place() {
        let mut cache = CityCache::new();
        cache.insert(Arc::new(City::new(1, "Old", CityKind::Town)));
        cache.insert(Arc::new(City::new(2, "Other", CityKind::Town)));
        cache.insert(Arc::new(City::new(1, "New", CityKind::City)));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(1).unwrap().name(false), "New");
        assert_eq!(cache.iter().next().unwrap().id(), 1);
    }

    #[test]
    fn postcode_keys_ignore_case_and_cache_misses() {
        let mut cache = PostcodeCache::new(Collator::primary());
        cache.insert("sw1a 1aa", Some(Arc::new(PostCode::new("SW1A 1AA"))));
        cache.insert("XX1", None);
        assert!(matches!(cache.get("SW1A 1AA"), Some(Some(_))));
        assert!(matches!(cache.get("xx1"), Some(None)));
        assert!(cache.get("N1").is_none());
    }

    #[test]
    fn postcode_keys_ignore_surrounding_whitespace() {
        let mut cache = PostcodeCache::new(Collator::primary());
        cache.insert("10117 ", Some(Arc::new(PostCode::new("10117"))));
        assert!(matches!(cache.get("10117"), Some(Some(_))));
        assert!(matches!(cache.get(" 10117"), Some(Some(_))));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_both_maps() {
        let mut cache = EntityCache::new(Collator::primary());
        cache.cities.insert(Arc::new(City::new(1, "Berlin", CityKind::City)));
        cache.postcodes.insert("10115", None);
        cache.clear();
        assert!(cache.cities.is_empty());
        assert!(cache.postcodes.is_empty());
    }
}

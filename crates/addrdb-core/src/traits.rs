// crates/addrdb-core/src/traits.rs
use crate::consumer::ResultConsumer;
use crate::model::{Building, City, CityId, LatLon, Place, PostCode, Street, StreetParent};
use std::sync::Arc;

/// Search and lookup operations of an address repository.
///
/// All operations degrade instead of failing: index errors are logged and
/// show up as fewer (or no) results.
pub trait AddressSearch {
    /// Cities (and postcodes, and villages) matching `query`.
    ///
    /// The first call on an empty cache loads every city of the region,
    /// streams them through `consumer` and returns all of them, whatever the
    /// query. Later calls search the cache:
    ///
    /// 1. a query of two or more chars containing a digit is also looked up
    ///    as a postcode (substring match),
    /// 2. cached cities match when any word of their name starts with the
    ///    query; only those `consumer` accepts are kept,
    /// 3. a query of three or more chars additionally searches villages in
    ///    the index.
    ///
    /// Results come in that order. `reference_location` is accepted for
    /// callers that track one; it does not influence the result.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use addrdb_core::consumer::Unfiltered;
    /// use addrdb_core::loader::FileIndex;
    /// use addrdb_core::{AddressSearch, RegionRepository};
    ///
    /// let index = FileIndex::open("data/berlin.bin").unwrap();
    /// let mut repo = RegionRepository::new(index, "Berlin");
    ///
    /// // First call populates the cache and returns every city.
    /// let all = repo.search_cities("Ber", &Unfiltered, None);
    /// // Now the prefix applies.
    /// let hits = repo.search_cities("Ber", &Unfiltered, None);
    /// assert!(hits.len() <= all.len());
    /// ```
    fn search_cities(
        &mut self,
        query: &str,
        consumer: &dyn ResultConsumer<Place>,
        reference_location: Option<LatLon>,
    ) -> Vec<Place>;

    /// Streets of `parent` matching any of `fragments`.
    ///
    /// Without fragments all streets are returned. Otherwise two passes run:
    /// names starting with a fragment first, then names with a later word
    /// starting with it. A street matching several fragments is reported once
    /// per fragment.
    fn search_streets(
        &self,
        parent: StreetParent<'_>,
        consumer: &dyn ResultConsumer<Arc<Street>>,
        fragments: &[&str],
    ) -> Vec<Arc<Street>>;

    /// Buildings of `street` whose house number starts with `query`, or all
    /// of them for an empty query.
    fn search_buildings(
        &self,
        street: &Street,
        query: &str,
        consumer: &dyn ResultConsumer<Arc<Building>>,
    ) -> Vec<Arc<Building>>;

    fn building_by_name(&self, street: &Street, name: &str) -> Option<Arc<Building>>;

    fn street_by_name(&self, parent: StreetParent<'_>, name: &str) -> Option<Arc<Street>>;

    /// [`NO_CITY_ID`](crate::model::NO_CITY_ID) returns `None` without
    /// loading anything.
    fn city_by_id(&mut self, id: CityId) -> Option<Arc<City>>;

    /// Postcode by exact code. Each code is asked from the index at most once
    /// until the cache is cleared, negative answers included.
    fn postcode(&mut self, name: &str) -> Option<Arc<PostCode>>;

    fn find_intersected_streets(&self, city: &City, street: &Street) -> Vec<Arc<Street>>;

    /// Crossing point of two streets of the same city.
    fn find_street_intersection(&mut self, a: &Street, b: &Street) -> Option<LatLon>;
}

// crates/addrdb-core/src/index.rs
use crate::consumer::ResultConsumer;
use crate::error::Result;
use crate::model::{Building, City, LatLon, Place, PostCode, Street, StreetParent};
use crate::text::NameMatcher;
use std::sync::Arc;

/// Read access to a disk-backed address index.
///
/// This is the only source of truth for which entities exist. Calls may
/// block on I/O. When a consumer is passed, implementations publish every
/// loaded item to it and may stop publishing once it reports cancellation,
/// but always return the complete collection: the repository installs it as
/// a whole so a half-loaded parent is never observable.
pub trait AddressIndex {
    /// Cities and towns of `region`. Cities precede towns in the result.
    fn load_cities(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
    ) -> Result<Vec<Arc<City>>>;

    /// Villages and other small places whose (local or transliterated) name
    /// satisfies `matcher`.
    fn load_villages(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
        matcher: &NameMatcher,
        use_transliterated_names: bool,
    ) -> Result<Vec<Arc<City>>>;

    fn load_postcodes_matching(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
        matcher: &NameMatcher,
    ) -> Result<Vec<Arc<PostCode>>>;

    fn load_postcode_by_name(&self, region: &str, name: &str) -> Result<Option<Arc<PostCode>>>;

    fn load_streets(
        &self,
        parent: StreetParent<'_>,
        consumer: Option<&dyn ResultConsumer<Arc<Street>>>,
    ) -> Result<Vec<Arc<Street>>>;

    /// Buildings of `street` in storage order.
    fn load_buildings(
        &self,
        street: &Street,
        consumer: Option<&dyn ResultConsumer<Arc<Building>>>,
    ) -> Result<Vec<Arc<Building>>>;

    /// Streets of `city` crossing `street`.
    fn find_intersected_streets(&self, city: &City, street: &Street) -> Result<Vec<Arc<Street>>>;

    fn find_street_intersection(
        &self,
        city: &City,
        a: &Street,
        b: &Street,
    ) -> Result<Option<LatLon>>;

    fn region_center(&self, region: &str) -> Result<LatLon>;
}

impl<I: AddressIndex + ?Sized> AddressIndex for Box<I> {
    fn load_cities(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
    ) -> Result<Vec<Arc<City>>> {
        (**self).load_cities(region, consumer)
    }

    fn load_villages(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
        matcher: &NameMatcher,
        use_transliterated_names: bool,
    ) -> Result<Vec<Arc<City>>> {
        (**self).load_villages(region, consumer, matcher, use_transliterated_names)
    }

    fn load_postcodes_matching(
        &self,
        region: &str,
        consumer: Option<&dyn ResultConsumer<Place>>,
        matcher: &NameMatcher,
    ) -> Result<Vec<Arc<PostCode>>> {
        (**self).load_postcodes_matching(region, consumer, matcher)
    }

    fn load_postcode_by_name(&self, region: &str, name: &str) -> Result<Option<Arc<PostCode>>> {
        (**self).load_postcode_by_name(region, name)
    }

    fn load_streets(
        &self,
        parent: StreetParent<'_>,
        consumer: Option<&dyn ResultConsumer<Arc<Street>>>,
    ) -> Result<Vec<Arc<Street>>> {
        (**self).load_streets(parent, consumer)
    }

    fn load_buildings(
        &self,
        street: &Street,
        consumer: Option<&dyn ResultConsumer<Arc<Building>>>,
    ) -> Result<Vec<Arc<Building>>> {
        (**self).load_buildings(street, consumer)
    }

    fn find_intersected_streets(&self, city: &City, street: &Street) -> Result<Vec<Arc<Street>>> {
        (**self).find_intersected_streets(city, street)
    }

    fn find_street_intersection(
        &self,
        city: &City,
        a: &Street,
        b: &Street,
    ) -> Result<Option<LatLon>> {
        (**self).find_street_intersection(city, a, b)
    }

    fn region_center(&self, region: &str) -> Result<LatLon> {
        (**self).region_center(region)
    }
}

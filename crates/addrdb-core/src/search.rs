// crates/addrdb-core/src/search.rs
use crate::consumer::ResultConsumer;
use crate::index::AddressIndex;
use crate::model::{
    Building, City, CityId, LatLon, Place, PostCode, Street, StreetParent, NO_CITY_ID,
};
use crate::repository::RegionRepository;
use crate::text::{contains_digit, FoldedName, MatchMode, NameMatcher};
use crate::traits::AddressSearch;
use std::sync::Arc;

// No `Contains` pass: it costs about ten times as much as both of these.
const STREET_PASSES: [MatchMode; 2] = [
    MatchMode::StartsWith,
    MatchMode::StartsFromSpaceNotBeginning,
];

impl<I: AddressIndex> AddressSearch for RegionRepository<I> {
    fn search_cities(
        &mut self,
        query: &str,
        consumer: &dyn ResultConsumer<Place>,
        _reference_location: Option<LatLon>,
    ) -> Vec<Place> {
        if self.cache.cities.is_empty() {
            self.ensure_cities_loaded(Some(consumer));
            return self.cached_places();
        }
        self.ensure_cities_loaded(None);
        if query.is_empty() {
            return self.cached_places();
        }

        let mut out = Vec::new();
        let query_len = query.chars().count();

        if query_len >= self.config.min_postcode_query_len && contains_digit(query) {
            let matcher = NameMatcher::new(self.collator, &query.to_uppercase(), MatchMode::Contains);
            match self
                .index
                .load_postcodes_matching(&self.region, Some(consumer), &matcher)
            {
                Ok(codes) => {
                    for code in codes {
                        out.push(Place::Postcode(code));
                        if consumer.is_cancelled() {
                            return out;
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(region = %self.region, error = %e, "Disk operation failed");
                }
            }
        }

        // Cities and towns sit first in the cache, so they lead the result.
        let query = query.to_lowercase();
        let transliterated = self.config.use_transliterated_names;
        let matcher = NameMatcher::new(self.collator, &query, MatchMode::StartsFromSpace);
        for city in self.cache.cities.iter() {
            if matcher.matches(city.name(transliterated)) {
                let place = Place::City(Arc::clone(city));
                if consumer.publish(&place) {
                    out.push(place);
                }
            }
            if consumer.is_cancelled() {
                return out;
            }
        }

        if query_len >= self.config.min_village_query_len {
            let before = out.len();
            match self
                .index
                .load_villages(&self.region, Some(consumer), &matcher, transliterated)
            {
                Ok(villages) => {
                    for village in villages {
                        out.push(Place::City(village));
                        if consumer.is_cancelled() {
                            break;
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(region = %self.region, error = %e, "Disk operation failed");
                }
            }
            tracing::debug!(region = %self.region, count = out.len() - before, "Loaded villages");
        }
        out
    }

    fn search_streets(
        &self,
        parent: StreetParent<'_>,
        consumer: &dyn ResultConsumer<Arc<Street>>,
        fragments: &[&str],
    ) -> Vec<Arc<Street>> {
        if fragments.is_empty() {
            return self.ensure_streets_loaded(parent, Some(consumer)).to_vec();
        }
        let streets = self.ensure_streets_loaded(parent, None);
        let transliterated = self.config.use_transliterated_names;

        let folded: Vec<FoldedName<'_>> = streets
            .iter()
            .map(|street| FoldedName::new(&self.collator, street.name(transliterated)))
            .collect();

        let mut out = Vec::new();
        for mode in STREET_PASSES {
            let matchers: Vec<NameMatcher> = fragments
                .iter()
                .map(|fragment| NameMatcher::new(self.collator, fragment, mode))
                .collect();
            for (street, name) in streets.iter().zip(&folded) {
                if consumer.is_cancelled() {
                    return out;
                }
                for matcher in &matchers {
                    if matcher.matches_folded(name) {
                        consumer.publish(street);
                        out.push(Arc::clone(street));
                    }
                }
            }
        }
        out
    }

    fn search_buildings(
        &self,
        street: &Street,
        query: &str,
        consumer: &dyn ResultConsumer<Arc<Building>>,
    ) -> Vec<Arc<Building>> {
        if query.is_empty() {
            return self.ensure_buildings_loaded(street, Some(consumer)).to_vec();
        }
        let buildings = self.ensure_buildings_loaded(street, None);
        let transliterated = self.config.use_transliterated_names;
        let matcher = NameMatcher::new(self.collator, &query.to_lowercase(), MatchMode::StartsWith);

        let mut out = Vec::new();
        for building in buildings {
            if consumer.is_cancelled() {
                return out;
            }
            if matcher.matches(building.name(transliterated)) {
                consumer.publish(building);
                out.push(Arc::clone(building));
            }
        }
        out
    }

    fn building_by_name(&self, street: &Street, name: &str) -> Option<Arc<Building>> {
        let transliterated = self.config.use_transliterated_names;
        self.ensure_buildings_loaded(street, None)
            .iter()
            .find(|b| self.collator.equals(b.name(transliterated), name))
            .cloned()
    }

    fn street_by_name(&self, parent: StreetParent<'_>, name: &str) -> Option<Arc<Street>> {
        let name = name.to_lowercase();
        let transliterated = self.config.use_transliterated_names;
        self.ensure_streets_loaded(parent, None)
            .iter()
            .find(|s| self.collator.equals(s.name(transliterated), &name))
            .cloned()
    }

    fn city_by_id(&mut self, id: CityId) -> Option<Arc<City>> {
        if id == NO_CITY_ID {
            return None;
        }
        self.ensure_cities_loaded(None);
        self.cache.cities.get(id).cloned()
    }

    fn postcode(&mut self, name: &str) -> Option<Arc<PostCode>> {
        if let Some(cached) = self.cache.postcodes.get(name) {
            tracing::trace!(postcode = name, "Postcode cache hit");
            return cached;
        }
        match self.index.load_postcode_by_name(&self.region, name) {
            Ok(found) => {
                self.cache.postcodes.insert(name, found.clone());
                found
            }
            Err(e) => {
                tracing::error!(region = %self.region, postcode = name, error = %e, "Disk operation failed");
                None
            }
        }
    }

    fn find_intersected_streets(&self, city: &City, street: &Street) -> Vec<Arc<Street>> {
        self.ensure_streets_loaded(StreetParent::City(city), None);
        match self.index.find_intersected_streets(city, street) {
            Ok(streets) => streets,
            Err(e) => {
                tracing::error!(region = %self.region, error = %e, "Disk operation failed");
                Vec::new()
            }
        }
    }

    fn find_street_intersection(&mut self, a: &Street, b: &Street) -> Option<LatLon> {
        let city = self.city_by_id(a.city_id()?)?;
        let city: &City = &city;
        self.ensure_streets_loaded(StreetParent::City(city), None);
        match self.index.find_street_intersection(city, a, b) {
            Ok(point) => point,
            Err(e) => {
                tracing::error!(region = %self.region, error = %e, "Disk operation failed");
                None
            }
        }
    }
}

impl<I: AddressIndex> RegionRepository<I> {
    fn cached_places(&self) -> Vec<Place> {
        self.cache.cities.iter().cloned().map(Place::City).collect()
    }
}

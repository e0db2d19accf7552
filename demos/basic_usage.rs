//! Basic usage example for addrdb-rs
//!
//! This example demonstrates how to:
//! - Build an index over a small in-memory dataset
//! - Search cities, streets and buildings through a repository
//! - Watch the cache at work
//! - Cancel a search through a token

use addrdb_rs::prelude::*;
use std::sync::Arc;

fn street(id: i64, name: &str, numbers: &[&str]) -> StreetRaw {
    StreetRaw {
        id,
        name: name.to_string(),
        en_name: String::new(),
        location: None,
        buildings: numbers
            .iter()
            .map(|n| BuildingRaw {
                name: n.to_string(),
                en_name: String::new(),
                location: None,
                postcode: Some("10117".to_string()),
            })
            .collect(),
        junctions: Vec::new(),
    }
}

fn dataset() -> DatasetRaw {
    DatasetRaw {
        regions: vec![RegionRaw {
            name: "Berlin".to_string(),
            center: LatLon::new(52.52, 13.405),
            cities: vec![
                CityRaw {
                    id: 1,
                    name: "Berlin".to_string(),
                    en_name: String::new(),
                    kind: CityKind::City,
                    location: Some(LatLon::new(52.52, 13.405)),
                    streets: vec![
                        street(1, "Unter den Linden", &["1", "10", "2", "77"]),
                        street(2, "Friedrichstraße", &["43", "100"]),
                        street(3, "Alte Schönhauser Straße", &["5"]),
                    ],
                },
                CityRaw {
                    id: 2,
                    name: "Potsdam".to_string(),
                    en_name: String::new(),
                    kind: CityKind::Town,
                    location: None,
                    streets: Vec::new(),
                },
            ],
            postcodes: Vec::new(),
        }],
    }
}

fn main() -> Result<()> {
    println!("=== addrdb-rs Basic Usage Example ===\n");

    let index = FileIndex::from_dataset(dataset())?;
    let mut repo = RegionRepository::new(index, "Berlin");
    println!("Opened {repo}, cities cached: {}\n", repo.are_cities_cached());

    // Example 1: the first search loads every city
    println!("--- Example 1: City search ---");
    let all = repo.search_cities("ber", &Unfiltered, None);
    println!("First call returned all {} cities", all.len());
    for place in repo.search_cities("ber", &Unfiltered, None) {
        if let Place::City(city) = place {
            println!("- {} (id {})", city.name(false), city.id());
        }
    }
    println!();

    // Example 2: streets, prefix matches before inner-word matches
    println!("--- Example 2: Street search ---");
    let Some(berlin) = repo.city_by_id(1) else {
        return Ok(());
    };
    for street in repo.search_streets(StreetParent::City(&berlin), &Unfiltered, &["str"]) {
        println!("- {}", street.name(false));
    }
    println!();

    // Example 3: buildings come back sorted by house number
    println!("--- Example 3: Buildings ---");
    if let Some(linden) = repo.street_by_name(StreetParent::City(&berlin), "unter den linden") {
        for building in repo.search_buildings(&linden, "", &Unfiltered) {
            println!("- {} {}", linden.name(false), building.name(false));
        }
    }
    println!();

    // Example 4: a cancelled token stops the scan before the first street
    println!("--- Example 4: Cancellation ---");
    let token = CancellationToken::new();
    let consumer = FnConsumer::new(token.clone(), |s: &Arc<Street>| {
        println!("  published {}", s.name(false));
        true
    });
    token.cancel();
    let hits = repo.search_streets(StreetParent::City(&berlin), &consumer, &["u"]);
    println!("Results after cancel: {}", hits.len());

    repo.close();
    Ok(())
}

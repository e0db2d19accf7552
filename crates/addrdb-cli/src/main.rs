//! addrdb-cli: command-line interface for addrdb-core
//!
//! Opens a dataset, binds a repository to one of its regions and runs a
//! single query against it.
//!
//! Usage examples
//! --------------
//!
//! - Search cities (the first query of a session loads the city list)
//!   $ addrdb -i berlin.bin.gz cities ber
//!
//! - Streets of city 1 matching "linden" or "allee"
//!   $ addrdb -i berlin.bin.gz streets 1 linden allee
//!
//! - House numbers starting with 1 on a street
//!   $ addrdb -i berlin.bin.gz buildings 1 "Unter den Linden" 1
//!
//! - Postcode lookup
//!   $ addrdb -i berlin.bin.gz postcode 10117
//!
//! Set `RUST_LOG` or pass `-v` to see what is loaded from the index.
mod args;

use crate::args::{CliArgs, Commands};
use addrdb_core::consumer::Unfiltered;
use addrdb_core::loader::FileIndex;
use addrdb_core::{AddressSearch, Place, RegionRepository, StreetParent};
use anyhow::{anyhow, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let index = FileIndex::open(&args.index)
        .with_context(|| format!("cannot open dataset {}", args.index))?;
    let region = match args.region {
        Some(r) => r,
        None => index
            .region_names()
            .next()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("dataset {} has no regions", args.index))?,
    };

    let mut repo = RegionRepository::new(index, region);
    repo.set_use_transliterated_names(args.transliterate);
    let t = args.transliterate;
    tracing::debug!(region = %repo.name(), dataset = %args.index, "Opened repository");

    match args.command {
        Commands::Cities { query } => {
            // The first search only fills the cache.
            repo.search_cities("", &Unfiltered, None);
            let hits = repo.search_cities(&query, &Unfiltered, None);
            if hits.is_empty() {
                println!("No places found matching: {query}");
            }
            for place in hits {
                match place {
                    Place::City(c) => println!("{} [{:?}, id {}]", c.name(t), c.kind(), c.id()),
                    Place::Postcode(p) => println!("{} [postcode]", p.code()),
                }
            }
        }

        Commands::Streets { city, fragments } => {
            let city = repo
                .city_by_id(city)
                .ok_or_else(|| anyhow!("No city with id {city} in {}", repo.name()))?;
            let fragments: Vec<&str> = fragments.iter().map(String::as_str).collect();
            for street in repo.search_streets(StreetParent::City(&city), &Unfiltered, &fragments) {
                println!("{}", street.name(t));
            }
        }

        Commands::Buildings {
            city,
            street,
            query,
        } => {
            let city = repo
                .city_by_id(city)
                .ok_or_else(|| anyhow!("No city with id {city} in {}", repo.name()))?;
            let street = repo
                .street_by_name(StreetParent::City(&city), &street)
                .ok_or_else(|| anyhow!("No street {street} in {}", city.name(t)))?;
            for building in repo.search_buildings(&street, &query, &Unfiltered) {
                match building.postcode() {
                    Some(code) => println!("{} ({code})", building.name(t)),
                    None => println!("{}", building.name(t)),
                }
            }
        }

        Commands::Postcode { code } => match repo.postcode(&code) {
            Some(postcode) => {
                println!("Postcode: {}", postcode.code());
                if let Some(location) = postcode.location() {
                    println!("Location: {location}");
                }
                for street in
                    repo.search_streets(StreetParent::Postcode(&postcode), &Unfiltered, &[])
                {
                    println!("- {}", street.name(t));
                }
            }
            None => eprintln!("Postcode {code} not found"),
        },

        Commands::Intersections { city, street } => {
            let city = repo
                .city_by_id(city)
                .ok_or_else(|| anyhow!("No city with id {city} in {}", repo.name()))?;
            let street = repo
                .street_by_name(StreetParent::City(&city), &street)
                .ok_or_else(|| anyhow!("No street {street} in {}", city.name(t)))?;
            for other in repo.find_intersected_streets(&city, &street) {
                match repo.find_street_intersection(&street, &other) {
                    Some(point) => println!("{} at {point}", other.name(t)),
                    None => println!("{}", other.name(t)),
                }
            }
        }

        Commands::Center => match repo.region_center() {
            Some(center) => println!("{}: {center}", repo.name()),
            None => eprintln!("No center known for {}", repo.name()),
        },
    }

    repo.close();
    Ok(())
}

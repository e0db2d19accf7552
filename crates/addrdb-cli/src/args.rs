use clap::{Parser, Subcommand};

/// CLI arguments for addrdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "addrdb",
    version,
    about = "CLI for searching addresses in an addrdb dataset"
)]
pub struct CliArgs {
    /// Path to the dataset (.bin, .json, optionally .gz)
    #[arg(short = 'i', long = "index", global = true, default_value = "addresses.bin.gz")]
    pub index: String,

    /// Region to open (defaults to the first region of the dataset)
    #[arg(short = 'r', long = "region", global = true)]
    pub region: Option<String>,

    /// Match and print transliterated names
    #[arg(short = 't', long = "transliterate", global = true)]
    pub transliterate: bool,

    /// Log index activity (repeat for more detail)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search cities, villages and postcodes
    Cities {
        /// Name prefix or postcode fragment; empty lists all cities
        #[arg(default_value = "")]
        query: String,
    },

    /// Search streets of a city
    Streets {
        /// City id
        city: i64,
        /// Name fragments; none lists all streets
        fragments: Vec<String>,
    },

    /// Search buildings of a street
    Buildings {
        /// City id
        city: i64,
        /// Exact street name
        street: String,
        /// House number prefix
        #[arg(default_value = "")]
        query: String,
    },

    /// Look up a postcode and list its streets
    Postcode {
        /// Postcode, case-insensitive
        code: String,
    },

    /// List streets crossing a street
    Intersections {
        /// City id
        city: i64,
        /// Exact street name
        street: String,
    },

    /// Print the estimated region center
    Center,
}

//! addrdb-rs: umbrella crate over `addrdb-core`, used by the demos.

pub use addrdb_core::*;

/// Common types and traits in one import.
pub mod prelude {
    pub use addrdb_core::consumer::{CancellationToken, FnConsumer, ResultConsumer, Unfiltered};
    pub use addrdb_core::loader::FileIndex;
    pub use addrdb_core::raw::{
        BuildingRaw, CityRaw, DatasetRaw, JunctionRaw, PostcodeRaw, RegionRaw, StreetRaw,
        StreetRef,
    };
    pub use addrdb_core::{
        AddrError, AddressIndex, AddressSearch, Building, City, CityKind, LatLon, Place,
        PostCode, RegionRepository, RepositoryConfig, Result, Street, StreetParent,
    };
}

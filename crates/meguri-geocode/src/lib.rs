//! Meguri Geocode - Address resolution over a pluggable lookup port
//!
//! The resolver turns one free-form Japanese address into a ranked,
//! deduplicated list of coordinate candidates by trying progressively
//! generalized query strings against an injected [`ports::GeocodeLookup`].
//! A Nominatim HTTP adapter is provided.

pub mod error;
pub mod nominatim;
pub mod ports;
pub mod resolver;

pub use error::GeocodeError;
pub use nominatim::NominatimLookup;
pub use ports::{GeocodeLookup, LookupError, RawPlace};
pub use resolver::{Resolver, ResolverConfig};

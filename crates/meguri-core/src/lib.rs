//! Meguri Core - Domain models, address normalization, and configuration
//!
//! This crate contains the pure domain logic shared by the geocoding and
//! routing crates: coordinate and itinerary types, the Japanese address
//! candidate expansion, relevance scoring, and layered configuration.

pub mod address;
pub mod config;
pub mod error;
pub mod models;

pub use error::{MeguriError, Result};

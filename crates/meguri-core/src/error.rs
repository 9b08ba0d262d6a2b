//! Error types for Meguri

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeguriError {
    // Coordinate errors
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Input errors
    #[error("Unknown transport mode: {value}. Expected walking, cycling, or driving")]
    UnknownTransportMode { value: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, MeguriError>;

use thiserror::Error;

/// Configuration shape errors. Every peer must load an identical table, so
/// callers treat these as fatal.
#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("weight token {token:?} is not a non-negative integer")]
    InvalidWeight { token: String },
    #[error("not enough entries for '{label}' (expected {expected}, got {got})")]
    NotEnoughEntries {
        label: String,
        expected: usize,
        got: usize,
    },
    #[error("cumulative weight overflowed in bucket at distance {distance}")]
    WeightOverflow { distance: f32 },
    #[error("weight table has no distance buckets")]
    EmptyTable,
    #[error("distance {distance} follows {previous}; buckets must be listed in ascending order")]
    UnorderedDistances { previous: f32, distance: f32 },
    #[error("unknown item '{name}'")]
    UnknownItem { name: String },
    #[error("unknown game mode '{name}'")]
    UnknownMode { name: String },
    #[error("cannot find weight list '{name}'")]
    MissingTable { name: &'static str },
    #[error("malformed weight document: {0}")]
    Document(String),
}

impl From<serde_json::Error> for WeightError {
    fn from(err: serde_json::Error) -> Self {
        WeightError::Document(err.to_string())
    }
}

/// Contract violations detected while granting an item.
#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("no distance bucket covers distance {distance}")]
    NoBucket { distance: f32 },
    #[error("bucket at distance {distance} has zero total weight")]
    EmptyBucket { distance: f32 },
    #[error("no weight table is active")]
    NoActiveTable,
}

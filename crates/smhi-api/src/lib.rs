//! API client library for the SMHI meteorological observations open data
//! service.
//!
//! Builds request URLs from the endpoint catalog, issues one GET per call
//! with caller-controlled cancellation and deadlines, classifies the
//! response status, and decodes JSON payloads into typed records (or copies
//! raw payloads into a sink).

/// Per-call cancellation and deadline.
pub mod context;

/// Response decoding.
pub mod decode;

/// Parameter ids, period tokens, formats and path templates.
pub mod endpoint;

/// Error taxonomy.
pub mod error;

/// Station filtering.
pub mod filter;

/// Request descriptors.
pub mod request;

/// Temperature service.
pub mod temperature;

/// Transport executor.
pub mod transport;

/// Response types.
pub mod types;

mod client;

pub use client::{DEFAULT_BASE_URL, SmhiClient, SmhiClientBuilder};
pub use context::CallContext;
pub use endpoint::{Endpoint, Format, Period, PrecipitationParameter, TemperatureParameter};
pub use error::SmhiError;
pub use temperature::{LocalTemperatureApi, TemperatureApi, TemperatureService};
pub use tokio_util::sync::CancellationToken;
pub use types::{Catalog, SeriesData, SeriesValue, Station};

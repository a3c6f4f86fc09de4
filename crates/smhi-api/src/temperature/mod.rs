//! Temperature service.
//!
//! Series and station catalogs for the air temperature parameters
//! (hourly, daily mean/min/max, monthly mean).

mod api;
mod service;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTemperatureApi, TemperatureApi};
#[allow(clippy::module_name_repetitions)]
pub use service::TemperatureService;

//! `TemperatureApi` trait definition.
#![allow(clippy::future_not_send)]

use tokio::io::AsyncWrite;

use crate::context::CallContext;
use crate::endpoint::{Format, Period, TemperatureParameter};
use crate::error::SmhiError;
use crate::types::{Catalog, SeriesData};

/// Temperature API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TemperatureApi: Send)]
pub trait LocalTemperatureApi {
    /// Fetches a JSON series for one station and period.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-2xx status, or the payload does not decode.
    async fn series(
        &self,
        ctx: &CallContext,
        parameter: TemperatureParameter,
        station: u32,
        period: Period,
    ) -> Result<SeriesData, SmhiError>;

    /// Fetches the catalog of stations reporting `parameter`.
    ///
    /// Inactive stations are dropped unless `include_inactive` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-2xx status, or the payload does not decode.
    async fn stations(
        &self,
        ctx: &CallContext,
        parameter: TemperatureParameter,
        include_inactive: bool,
    ) -> Result<Catalog, SmhiError>;

    /// Copies a series in `format` verbatim into `sink`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-2xx status, or writing to `sink` fails.
    async fn series_raw<W>(
        &self,
        ctx: &CallContext,
        parameter: TemperatureParameter,
        station: u32,
        period: Period,
        format: Format,
        sink: &mut W,
    ) -> Result<u64, SmhiError>
    where
        W: AsyncWrite + Unpin + Send + ?Sized;
}

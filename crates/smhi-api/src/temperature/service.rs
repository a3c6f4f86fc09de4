//! `TemperatureService` - temperature endpoints of the observations API.

use std::sync::Arc;

use tokio::io::AsyncWrite;
use tracing::instrument;

use super::api::TemperatureApi;
use crate::context::CallContext;
use crate::endpoint::{Endpoint, Format, Period, TemperatureParameter};
use crate::error::SmhiError;
use crate::filter::filter_stations;
use crate::transport::Transport;
use crate::types::{Catalog, SeriesData};

/// Temperature service.
///
/// Holds an explicit handle to the shared transport; it has no link back to
/// the client that created it.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TemperatureService {
    transport: Arc<Transport>,
}

impl TemperatureService {
    /// Creates a service on top of `transport`.
    #[must_use]
    pub const fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Shared transport.
    #[must_use]
    pub const fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    /// Hourly instantaneous temperatures (parameter 1).
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::series`].
    pub async fn hourly(
        &self,
        ctx: &CallContext,
        station: u32,
        period: Period,
    ) -> Result<SeriesData, SmhiError> {
        self.series(ctx, TemperatureParameter::Hourly, station, period)
            .await
    }

    /// Daily mean temperatures (parameter 2).
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::series`].
    pub async fn daily_average(
        &self,
        ctx: &CallContext,
        station: u32,
        period: Period,
    ) -> Result<SeriesData, SmhiError> {
        self.series(ctx, TemperatureParameter::DailyAverage, station, period)
            .await
    }

    /// Daily minimum temperatures (parameter 19).
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::series`].
    pub async fn daily_minimum(
        &self,
        ctx: &CallContext,
        station: u32,
        period: Period,
    ) -> Result<SeriesData, SmhiError> {
        self.series(ctx, TemperatureParameter::DailyMinimum, station, period)
            .await
    }

    /// Daily maximum temperatures (parameter 20).
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::series`].
    pub async fn daily_maximum(
        &self,
        ctx: &CallContext,
        station: u32,
        period: Period,
    ) -> Result<SeriesData, SmhiError> {
        self.series(ctx, TemperatureParameter::DailyMaximum, station, period)
            .await
    }

    /// Monthly mean temperatures (parameter 22).
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::series`].
    pub async fn monthly_average(
        &self,
        ctx: &CallContext,
        station: u32,
        period: Period,
    ) -> Result<SeriesData, SmhiError> {
        self.series(ctx, TemperatureParameter::MonthlyAverage, station, period)
            .await
    }

    /// Stations reporting hourly temperatures.
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::stations`].
    pub async fn stations_with_hourly(
        &self,
        ctx: &CallContext,
        include_inactive: bool,
    ) -> Result<Catalog, SmhiError> {
        self.stations(ctx, TemperatureParameter::Hourly, include_inactive)
            .await
    }

    /// Stations reporting daily mean temperatures.
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::stations`].
    pub async fn stations_with_daily_average(
        &self,
        ctx: &CallContext,
        include_inactive: bool,
    ) -> Result<Catalog, SmhiError> {
        self.stations(ctx, TemperatureParameter::DailyAverage, include_inactive)
            .await
    }

    /// Stations reporting daily minimum temperatures.
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::stations`].
    pub async fn stations_with_daily_minimum(
        &self,
        ctx: &CallContext,
        include_inactive: bool,
    ) -> Result<Catalog, SmhiError> {
        self.stations(ctx, TemperatureParameter::DailyMinimum, include_inactive)
            .await
    }

    /// Stations reporting daily maximum temperatures.
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::stations`].
    pub async fn stations_with_daily_maximum(
        &self,
        ctx: &CallContext,
        include_inactive: bool,
    ) -> Result<Catalog, SmhiError> {
        self.stations(ctx, TemperatureParameter::DailyMaximum, include_inactive)
            .await
    }

    /// Stations reporting monthly mean temperatures.
    ///
    /// # Errors
    ///
    /// See [`TemperatureApi::stations`].
    pub async fn stations_with_monthly_average(
        &self,
        ctx: &CallContext,
        include_inactive: bool,
    ) -> Result<Catalog, SmhiError> {
        self.stations(ctx, TemperatureParameter::MonthlyAverage, include_inactive)
            .await
    }
}

impl TemperatureApi for TemperatureService {
    #[instrument(skip_all, fields(parameter = parameter.id(), station = station, period = %period))]
    async fn series(
        &self,
        ctx: &CallContext,
        parameter: TemperatureParameter,
        station: u32,
        period: Period,
    ) -> Result<SeriesData, SmhiError> {
        let endpoint = Endpoint::Series {
            parameter: parameter.id(),
            station,
            period,
            format: Format::Json,
        };
        self.transport.get_json(&endpoint, ctx).await
    }

    #[instrument(skip_all, fields(parameter = parameter.id(), include_inactive = include_inactive))]
    async fn stations(
        &self,
        ctx: &CallContext,
        parameter: TemperatureParameter,
        include_inactive: bool,
    ) -> Result<Catalog, SmhiError> {
        let endpoint = Endpoint::Catalog {
            parameter: parameter.id(),
        };
        let mut catalog: Catalog = self.transport.get_json(&endpoint, ctx).await?;
        catalog.station = filter_stations(std::mem::take(&mut catalog.station), include_inactive);
        Ok(catalog)
    }

    #[instrument(skip_all, fields(parameter = parameter.id(), station = station, period = %period, format = %format))]
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
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let endpoint = Endpoint::Series {
            parameter: parameter.id(),
            station,
            period,
            format,
        };
        self.transport.get_raw(&endpoint, ctx, sink).await
    }
}

//! Endpoint catalog: parameter ids, period tokens, output formats and the
//! relative path templates built from them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Temperature parameters served by the observations API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureParameter {
    /// Instantaneous air temperature, once per hour.
    Hourly,
    /// Daily mean air temperature, once per day at 00.
    DailyAverage,
    /// Daily minimum air temperature, twice per day.
    DailyMinimum,
    /// Daily maximum air temperature, twice per day.
    DailyMaximum,
    /// Monthly mean air temperature.
    MonthlyAverage,
}

impl TemperatureParameter {
    /// All temperature parameters in id order.
    pub const ALL: [Self; 5] = [
        Self::Hourly,
        Self::DailyAverage,
        Self::DailyMinimum,
        Self::DailyMaximum,
        Self::MonthlyAverage,
    ];

    /// Returns the numeric parameter id used in request paths.
    #[must_use]
    pub const fn id(self) -> u16 {
        match self {
            Self::Hourly => 1,
            Self::DailyAverage => 2,
            Self::DailyMinimum => 19,
            Self::DailyMaximum => 20,
            Self::MonthlyAverage => 22,
        }
    }
}

/// Precipitation parameters.
///
/// Catalogued for completeness. No service method fetches them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecipitationParameter {
    /// Daily precipitation amount.
    AmountDaily,
    /// Hourly precipitation amount.
    AmountHourly,
    /// Daily snow depth.
    SnowDepthDaily,
    /// Precipitation total per quarter hour.
    TotalQuarterHourly,
    /// Precipitation intensity per quarter hour.
    IntensityQuarterHourly,
    /// Precipitation amount twice per day.
    AmountTwiceDaily,
    /// Daily precipitation intensity.
    IntensityDaily,
    /// Monthly precipitation amount.
    AmountMonthly,
}

impl PrecipitationParameter {
    /// Returns the numeric parameter id used in request paths.
    #[must_use]
    pub const fn id(self) -> u16 {
        match self {
            Self::AmountDaily => 5,
            Self::AmountHourly => 7,
            Self::SnowDepthDaily => 8,
            Self::TotalQuarterHourly => 14,
            Self::IntensityQuarterHourly => 15,
            Self::AmountTwiceDaily => 17,
            Self::IntensityDaily => 18,
            Self::AmountMonthly => 23,
        }
    }
}

/// Error returned when parsing an unknown period or format token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token: {token}")]
pub struct UnknownToken {
    kind: &'static str,
    token: String,
}

/// Relative time window of a series request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// `latest-hour`
    LatestHour,
    /// `latest-day`
    LatestDay,
    /// `latest-months`
    LatestMonths,
    /// `corrected-archive`
    CorrectedArchive,
}

impl Period {
    /// Returns the token passed to the service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LatestHour => "latest-hour",
            Self::LatestDay => "latest-day",
            Self::LatestMonths => "latest-months",
            Self::CorrectedArchive => "corrected-archive",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest-hour" => Ok(Self::LatestHour),
            "latest-day" => Ok(Self::LatestDay),
            "latest-months" => Ok(Self::LatestMonths),
            "corrected-archive" => Ok(Self::CorrectedArchive),
            other => Err(UnknownToken {
                kind: "period",
                token: String::from(other),
            }),
        }
    }
}

/// Output format of a series request.
///
/// Only `Json` has a structured decoder; `Xml` and `Csv` are fetched raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// `data.json`
    #[default]
    Json,
    /// `data.xml`
    Xml,
    /// `data.csv`
    Csv,
}

impl Format {
    /// Returns the file extension used in the request path.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            other => Err(UnknownToken {
                kind: "format",
                token: String::from(other),
            }),
        }
    }
}

/// A logical request, rendered to a path relative to the API origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Stations reporting a parameter.
    Catalog {
        /// Parameter id.
        parameter: u16,
    },
    /// Values of a parameter at one station over one period.
    Series {
        /// Parameter id.
        parameter: u16,
        /// Station id.
        station: u32,
        /// Period token.
        period: Period,
        /// Output format.
        format: Format,
    },
}

impl Endpoint {
    /// Returns the path relative to the API origin.
    ///
    /// Example: `"api/version/latest/parameter/2/station/97100/period/latest-day/data.json"`
    #[must_use]
    pub fn path(&self) -> String {
        match *self {
            Self::Catalog { parameter } => {
                format!("api/version/latest/parameter/{parameter}.json")
            }
            Self::Series {
                parameter,
                station,
                period,
                format,
            } => format!(
                "api/version/latest/parameter/{parameter}/station/{station}/period/{period}/data.{format}"
            ),
        }
    }
}

//! SMHI observation API response types.
//!
//! Every field defaults when absent and is skipped on serialization when it
//! holds its default value, matching the service's omit-when-empty payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Returns `true` if `value` equals the type's default.
fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Converts an epoch-milliseconds timestamp to UTC.
fn millis_to_utc(millis: u64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(i64::try_from(millis).ok()?)
}

/// Series payload: values of one parameter at one station over one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesData {
    /// Values in service order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<SeriesValue>,
    /// Last update (epoch milliseconds).
    #[serde(skip_serializing_if = "is_default")]
    pub updated: u64,
    /// Parameter description.
    #[serde(skip_serializing_if = "is_default")]
    pub parameter: ParameterData,
    /// Station description.
    #[serde(skip_serializing_if = "is_default")]
    pub station: StationData,
    /// Period description.
    #[serde(skip_serializing_if = "is_default")]
    pub period: PeriodData,
    /// Station positions over time.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub position: Vec<PositionData>,
}

impl SeriesData {
    /// Last update as UTC.
    #[must_use]
    pub fn updated_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.updated)
    }
}

/// A single observation.
///
/// `value` is kept as text because the service may send non-numeric
/// sentinels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesValue {
    /// Interval start (epoch milliseconds).
    #[serde(skip_serializing_if = "is_default")]
    pub from: u64,
    /// Interval end (epoch milliseconds), `from <= to`.
    #[serde(skip_serializing_if = "is_default")]
    pub to: u64,
    /// Reference label, e.g. `"2018-08-03"` or `"2018-07"`.
    #[serde(rename = "ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,
    /// Reported value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Quality flag (`G`, `Y`, ...).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub quality: String,
}

impl SeriesValue {
    /// Parses `value` as a finite number, `None` for sentinels.
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// Interval start as UTC.
    #[must_use]
    pub fn start_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.from)
    }

    /// Interval end as UTC.
    #[must_use]
    pub fn end_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.to)
    }
}

/// Parameter section of a series payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterData {
    /// Parameter key (the id as text).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Parameter name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Sampling description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Unit, e.g. `"degree celsius"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit: String,
}

/// Station section of a series payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationData {
    /// Station key (the id as text).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Station name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Station owner.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub owner: String,
    /// Sensor height in metres.
    #[serde(skip_serializing_if = "is_default")]
    pub height: f64,
}

/// Period section of a series payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodData {
    /// Period token, e.g. `"latest-day"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Period start (epoch milliseconds).
    #[serde(skip_serializing_if = "is_default")]
    pub from: u64,
    /// Period end (epoch milliseconds).
    #[serde(skip_serializing_if = "is_default")]
    pub to: u64,
    /// Human readable description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Sampling interval description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sampling: String,
}

/// Station position valid over an interval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionData {
    /// Valid from (epoch milliseconds).
    #[serde(skip_serializing_if = "is_default")]
    pub from: u64,
    /// Valid to (epoch milliseconds).
    #[serde(skip_serializing_if = "is_default")]
    pub to: u64,
    /// Height above sea level in metres.
    #[serde(skip_serializing_if = "is_default")]
    pub height: f64,
    /// Latitude (WGS84).
    #[serde(skip_serializing_if = "is_default")]
    pub latitude: f64,
    /// Longitude (WGS84).
    #[serde(skip_serializing_if = "is_default")]
    pub longitude: f64,
}

/// Catalog payload: the stations reporting one parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Parameter key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Last update (epoch milliseconds).
    #[serde(skip_serializing_if = "is_default")]
    pub updated: u64,
    /// Catalog title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Sampling description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Value type, e.g. `"INTERVAL"` or `"SAMPLING"`.
    #[serde(rename = "valueType", skip_serializing_if = "String::is_empty")]
    pub value_type: String,
    /// Stations in service order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub station: Vec<Station>,
}

/// A measurement station listed in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Station {
    /// Station name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Station owner.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub owner: String,
    /// Numeric station id.
    #[serde(skip_serializing_if = "is_default")]
    pub id: u32,
    /// Height above sea level in metres.
    #[serde(skip_serializing_if = "is_default")]
    pub height: f64,
    /// Latitude (WGS84).
    #[serde(skip_serializing_if = "is_default")]
    pub latitude: f64,
    /// Longitude (WGS84).
    #[serde(skip_serializing_if = "is_default")]
    pub longitude: f64,
    /// Whether the station still reports.
    #[serde(skip_serializing_if = "is_default")]
    pub active: bool,
    /// Station key (the id as text).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Last update (epoch milliseconds).
    #[serde(skip_serializing_if = "is_default")]
    pub updated: u64,
    /// Station title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Position summary.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
}

impl Station {
    /// Last update as UTC.
    #[must_use]
    pub fn updated_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.updated)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::decode::decode_json;

    #[test]
    fn test_parse_daily_average_fixture() {
        // Arrange
        let json = include_str!("../../../fixtures/smhi/daily_average_latest_day.json");

        // Act
        let data: SeriesData = decode_json(json.as_bytes()).unwrap();

        // Assert
        assert_eq!(data.value.len(), 1);
        let value = &data.value[0];
        assert_eq!(value.from, 1_533_254_401_000);
        assert_eq!(value.to, 1_533_340_800_000);
        assert_eq!(value.reference, "2018-08-03");
        assert_eq!(value.value, "21.8");
        assert_eq!(value.quality, "Y");
        assert_eq!(data.updated, 1_533_470_400_000);
        assert_eq!(data.parameter.key, "2");
        assert_eq!(data.parameter.unit, "degree celsius");
        assert_eq!(data.station.name, "Tullinge A");
        assert_eq!(data.station.height, 2.0);
        assert_eq!(data.period.key, "latest-day");
        assert_eq!(data.period.sampling, "24 timmar");
        assert_eq!(data.position.len(), 1);
        assert_eq!(data.position[0].latitude, 59.1789);
    }

    #[test]
    fn test_parse_monthly_fixture_keeps_service_order() {
        // Arrange
        let json = include_str!("../../../fixtures/smhi/monthly_average_latest_months.json");

        // Act
        let data: SeriesData = decode_json(json.as_bytes()).unwrap();

        // Assert
        let refs: Vec<&str> = data.value.iter().map(|v| v.reference.as_str()).collect();
        assert_eq!(refs, ["2018-03", "2018-04", "2018-05", "2018-06", "2018-07"]);
        assert!(data.value.iter().all(|v| v.from <= v.to));
        assert_eq!(data.value[0].value, "-3.0");
    }

    #[test]
    fn test_parse_catalog_fixture() {
        // Arrange
        let json = include_str!("../../../fixtures/smhi/catalog_daily_average.json");

        // Act
        let catalog: Catalog = decode_json(json.as_bytes()).unwrap();

        // Assert
        assert_eq!(catalog.key, "2");
        assert_eq!(catalog.value_type, "INTERVAL");
        assert_eq!(catalog.station.len(), 2);
        let first = &catalog.station[0];
        assert_eq!(first.name, "Abelvattnet Aut");
        assert_eq!(first.id, 154_860);
        assert_eq!(first.height, 665.0);
        assert!(first.active);
        assert!(!catalog.station[1].active);
        assert_eq!(catalog.station[1].id, 188_800);
    }

    #[test]
    fn test_empty_body_yields_default_shapes() {
        assert_eq!(decode_json::<SeriesData>(b"").unwrap(), SeriesData::default());
        assert_eq!(decode_json::<Catalog>(b"").unwrap(), Catalog::default());
    }

    #[test]
    fn test_absent_and_zero_height_are_indistinguishable() {
        // Arrange
        let omitted = br#"{"name": "Abisko", "active": true}"#;
        let zero = br#"{"name": "Abisko", "height": 0.0, "active": true}"#;

        // Act
        let from_omitted: Station = decode_json(omitted).unwrap();
        let from_zero: Station = decode_json(zero).unwrap();

        // Assert
        assert_eq!(from_omitted.height, 0.0);
        assert_eq!(from_omitted, from_zero);
    }

    #[test]
    fn test_absent_active_flag_reads_as_inactive() {
        // Arrange
        let json = br#"{"name": "Abisko", "id": 188800}"#;

        // Act
        let station: Station = decode_json(json).unwrap();

        // Assert
        assert!(!station.active);
    }

    #[test]
    fn test_serialize_omits_default_fields() {
        // Arrange
        let value = SeriesValue {
            reference: String::from("2018-08-03"),
            value: String::from("21.8"),
            ..SeriesValue::default()
        };

        // Act
        let json = serde_json::to_value(&value).unwrap();

        // Assert
        assert_eq!(
            json,
            serde_json::json!({"ref": "2018-08-03", "value": "21.8"})
        );
    }

    #[test]
    fn test_numeric_value_and_sentinel() {
        // Arrange
        let numeric = SeriesValue {
            value: String::from("-3.0"),
            ..SeriesValue::default()
        };
        let sentinel = SeriesValue {
            value: String::from("NaN?"),
            ..SeriesValue::default()
        };

        // Act & Assert
        assert_eq!(numeric.numeric(), Some(-3.0));
        assert_eq!(sentinel.numeric(), None);
        for text in ["NaN", "inf", "-infinity", "", " "] {
            let value = SeriesValue {
                value: String::from(text),
                ..SeriesValue::default()
            };
            assert_eq!(value.numeric(), None, "{text:?}");
        }
    }

    #[test]
    fn test_timestamps_convert_to_utc() {
        // Arrange
        let value = SeriesValue {
            from: 1_533_254_401_000,
            to: 1_533_340_800_000,
            ..SeriesValue::default()
        };

        // Act & Assert
        assert_eq!(
            value.start_utc().unwrap().to_rfc3339(),
            "2018-08-03T00:00:01+00:00"
        );
        assert_eq!(
            value.end_utc().unwrap().to_rfc3339(),
            "2018-08-04T00:00:00+00:00"
        );
    }
}

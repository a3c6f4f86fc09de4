//! Post-decode station filtering.

use crate::types::Station;

/// Drops inactive stations unless `include_inactive` is set.
///
/// Stable: the remaining stations keep their relative order and are moved,
/// not rebuilt. With `include_inactive` the input is returned untouched.
#[must_use]
pub fn filter_stations(mut stations: Vec<Station>, include_inactive: bool) -> Vec<Station> {
    if include_inactive {
        return stations;
    }
    let total = stations.len();
    stations.retain(|station| station.active);
    tracing::debug!(
        kept = stations.len(),
        dropped = total.saturating_sub(stations.len()),
        "Filtered inactive stations"
    );
    stations
}

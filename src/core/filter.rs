//! Filter selection and table narrowing.

use crate::errors::{AppError, AppResult};
use crate::models::filter::parse_weekday;
use crate::models::{City, FilterMode, FilterSpec, Month, Trip, TripTable};
use chrono::Weekday;

/// Build a validated [`FilterSpec`] from raw user strings.
///
/// Month and day are only looked at when the mode uses them.
pub fn select_filters(
    city: &str,
    mode: &str,
    month: Option<&str>,
    day: Option<&str>,
) -> AppResult<FilterSpec> {
    let city = City::from_input(city).ok_or_else(|| AppError::InvalidCity(city.to_string()))?;
    let mode =
        FilterMode::from_input(mode).ok_or_else(|| AppError::InvalidFilterMode(mode.to_string()))?;

    let month = if mode.filters_month() {
        let raw = month.ok_or(AppError::MissingFilterValue {
            mode: mode.as_str().to_string(),
            what: "month",
        })?;
        Some(Month::from_input(raw).ok_or_else(|| AppError::InvalidMonth(raw.to_string()))?)
    } else {
        None
    };

    let day = if mode.filters_day() {
        let raw = day.ok_or(AppError::MissingFilterValue {
            mode: mode.as_str().to_string(),
            what: "day",
        })?;
        Some(parse_weekday(raw).ok_or_else(|| AppError::InvalidDay(raw.to_string()))?)
    } else {
        None
    };

    Ok(FilterSpec {
        city,
        mode,
        month,
        day,
    })
}

fn matches(trip: &Trip, month: Option<Month>, day: Option<Weekday>) -> bool {
    month.is_none_or(|m| trip.month == m.number()) && day.is_none_or(|d| trip.weekday == d)
}

/// Keep only the trips in `month` and/or on `day`; `None` means no constraint.
pub fn filter_trips(table: &TripTable, month: Option<Month>, day: Option<Weekday>) -> TripTable {
    let trips = table
        .iter()
        .filter(|t| matches(t, month, day))
        .cloned()
        .collect();
    TripTable::new(table.city, trips)
}

/// Narrow `table` using only the values its filter mode asks for.
pub fn apply(table: &TripTable, spec: &FilterSpec) -> TripTable {
    let month = spec.month.filter(|_| spec.mode.filters_month());
    let day = spec.day.filter(|_| spec.mode.filters_day());
    filter_trips(table, month, day)
}

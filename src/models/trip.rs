use crate::models::city::City;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

/// One row as it appears in the city CSV files.
///
/// Extra columns (the unnamed index, `End Time`) are ignored. Gender and
/// birth year are missing from the Washington file.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: String,
    #[serde(rename = "User Type", default)]
    pub user_type: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(
        rename = "Birth Year",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub birth_year: Option<f64>,
}

/// A parsed trip with its derived calendar columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Seconds
    pub duration: f64,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub month: u32,
    pub weekday: Weekday,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        duration: f64,
        user_type: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            start_station: start_station.into(),
            end_station: end_station.into(),
            duration,
            user_type: user_type.into(),
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
        }
    }

    pub fn with_demographics(mut self, gender: Option<&str>, birth_year: Option<i32>) -> Self {
        self.gender = gender.map(str::to_string);
        self.birth_year = birth_year;
        self
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// All trips loaded for one city, in file order.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: City, trips: Vec<Trip>) -> Self {
        Self { city, trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}

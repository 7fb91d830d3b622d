//! Loading of the per-city trip CSV files.

use crate::errors::{AppError, AppResult};
use crate::models::{City, Trip, TripRecord, TripTable};
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::path::{Path, PathBuf};

/// Columns every city file must have.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

/// Columns only present for cities with demographics.
pub const DEMOGRAPHIC_COLUMNS: [&str; 2] = ["Gender", "Birth Year"];

/// Parse `YYYY-MM-DD HH:MM:SS`, with or without fractional seconds.
pub fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

fn resolve_path(city: City, data_dir: &Path) -> AppResult<PathBuf> {
    let path = city.data_path(data_dir);
    if !path.is_file() {
        return Err(AppError::MissingDataFile(path));
    }
    Ok(path)
}

/// Headers are trimmed so the column check and the row mapping agree.
fn open_reader(path: &Path) -> AppResult<csv::Reader<std::fs::File>> {
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)?)
}

fn check_columns(path: &Path, headers: &StringRecord, city: City) -> AppResult<()> {
    let mut required: Vec<&str> = REQUIRED_COLUMNS.to_vec();
    if city.has_demographics() {
        required.extend(DEMOGRAPHIC_COLUMNS);
    }

    for col in required {
        if !headers.iter().any(|h| h == col) {
            return Err(AppError::MissingColumn {
                path: path.to_path_buf(),
                column: col.to_string(),
            });
        }
    }
    Ok(())
}

fn record_to_trip(rec: TripRecord, line: u64, city: City) -> AppResult<Trip> {
    let start = parse_start_time(&rec.start_time).ok_or_else(|| AppError::InvalidTimestamp {
        line,
        value: rec.start_time.clone(),
    })?;

    let duration: f64 = rec
        .trip_duration
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidDuration {
            line,
            value: rec.trip_duration.clone(),
        })?;

    let trip = Trip::new(
        start,
        rec.start_station,
        rec.end_station,
        duration,
        rec.user_type,
    );

    if !city.has_demographics() {
        return Ok(trip);
    }

    let gender = rec
        .gender
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty());
    let birth_year = rec
        .birth_year
        .filter(|y| y.is_finite())
        .map(|y| y.round() as i32);

    Ok(trip.with_demographics(gender, birth_year))
}

/// Load every trip for `city` from `data_dir`.
///
/// Missing files, missing columns and unparseable start times or durations
/// are errors; the caller treats them as fatal.
pub fn load_city(city: City, data_dir: &Path) -> AppResult<TripTable> {
    let path = resolve_path(city, data_dir)?;
    let mut rdr = open_reader(&path)?;
    let headers = rdr.headers()?.clone();
    check_columns(&path, &headers, city)?;

    let mut trips = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let parsed: TripRecord = record.deserialize(Some(&headers))?;
        trips.push(record_to_trip(parsed, line, city)?);
    }

    Ok(TripTable::new(city, trips))
}

/// Unparsed file contents, used by the raw data pager.
#[derive(Debug, Clone, Default)]
pub struct RawData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawData {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read the city's file as plain text records, all columns included.
pub fn load_raw(city: City, data_dir: &Path) -> AppResult<RawData> {
    let path = resolve_path(city, data_dir)?;
    let mut rdr = open_reader(&path)?;
    let headers = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawData { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};
    use std::env;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir = env::temp_dir();
        dir.push(format!("bikeshare_loader_{name}"));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,,
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Customer,Female,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";

    #[test]
    fn parses_timestamps_with_and_without_fraction() {
        let a = parse_start_time("2017-06-23 15:09:32").expect("plain");
        assert_eq!((a.month(), a.hour()), (6, 15));
        let b = parse_start_time("2017-01-01 00:07:57.100").expect("fraction");
        assert_eq!(b.day(), 1);
        assert!(parse_start_time("23/06/2017").is_none());
    }

    #[test]
    fn loads_chicago_with_derived_columns() {
        let dir = temp_dir("chicago");
        fs::write(dir.join("chicago.csv"), CHICAGO).expect("write csv");

        let table = load_city(City::Chicago, &dir).expect("load");
        assert_eq!(table.len(), 3);

        let first = &table.trips[0];
        assert_eq!(first.month, 6);
        assert_eq!(first.weekday, Weekday::Fri);
        assert_eq!(first.duration, 321.0);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));

        assert_eq!(table.trips[1].gender, None);
        assert_eq!(table.trips[1].birth_year, None);
        assert_eq!(table.trips[2].gender.as_deref(), Some("Female"));
    }

    #[test]
    fn loads_washington_without_demographic_columns() {
        let dir = temp_dir("washington");
        fs::write(dir.join("washington.csv"), WASHINGTON).expect("write csv");

        let table = load_city(City::Washington, &dir).expect("load");
        assert_eq!(table.len(), 1);
        assert!((table.trips[0].duration - 489.066).abs() < 1e-9);
        assert_eq!(table.trips[0].gender, None);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = temp_dir("missing");
        let err = load_city(City::NewYorkCity, &dir).unwrap_err();
        assert!(matches!(err, AppError::MissingDataFile(_)));
    }

    #[test]
    fn missing_demographic_column_is_an_error_for_chicago() {
        let dir = temp_dir("no_gender");
        fs::write(dir.join("chicago.csv"), WASHINGTON).expect("write csv");
        let err = load_city(City::Chicago, &dir).unwrap_err();
        assert!(matches!(err, AppError::MissingColumn { ref column, .. } if column == "Gender"));
    }

    #[test]
    fn bad_timestamp_reports_line() {
        let dir = temp_dir("bad_ts");
        let data = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                    yesterday,10,A,B,Subscriber\n";
        fs::write(dir.join("washington.csv"), data).expect("write csv");
        let err = load_city(City::Washington, &dir).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimestamp { line: 2, .. }));
    }

    #[test]
    fn bad_duration_reports_line() {
        let dir = temp_dir("bad_duration");
        let data = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                    2017-03-06 08:10:00,600,A,B,Subscriber\n\
                    2017-03-06 09:10:00,abc,A,B,Subscriber\n";
        fs::write(dir.join("washington.csv"), data).expect("write csv");
        let err = load_city(City::Washington, &dir).unwrap_err();
        assert!(matches!(err, AppError::InvalidDuration { line: 3, ref value } if value == "abc"));
    }

    #[test]
    fn padded_headers_still_map_demographics() {
        let dir = temp_dir("padded_headers");
        let data = "Start Time, Trip Duration,Start Station,End Station,User Type, Gender, Birth Year\n\
                    2017-03-06 08:10:00,600,A,B,Subscriber,Male,1985.0\n";
        fs::write(dir.join("chicago.csv"), data).expect("write csv");

        let table = load_city(City::Chicago, &dir).expect("load");
        assert_eq!(table.trips[0].gender.as_deref(), Some("Male"));
        assert_eq!(table.trips[0].birth_year, Some(1985));
        assert_eq!(table.trips[0].duration, 600.0);

        let raw = load_raw(City::Chicago, &dir).expect("raw");
        assert_eq!(raw.headers[5], "Gender");
    }

    #[test]
    fn raw_load_keeps_all_columns() {
        let dir = temp_dir("raw");
        fs::write(dir.join("washington.csv"), WASHINGTON).expect("write csv");
        let raw = load_raw(City::Washington, &dir).expect("raw");
        assert_eq!(raw.headers.len(), 7);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.rows[0][4], "14th & Belmont St NW");
    }
}

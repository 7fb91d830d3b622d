use crate::core::stats::mode;
use crate::models::TripTable;
use crate::utils::formatting::{highlight, plural};

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start_station: (String, usize),
    pub end_station: (String, usize),
    /// (start, end) pair
    pub trip: ((String, String), usize),
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        let start_station = mode(table.iter().map(|t| t.start_station.as_str()))?;
        let end_station = mode(table.iter().map(|t| t.end_station.as_str()))?;
        let trip = mode(
            table
                .iter()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        )?;

        Some(Self {
            start_station: (start_station.0.to_string(), start_station.1),
            end_station: (end_station.0.to_string(), end_station.1),
            trip: ((trip.0.0.to_string(), trip.0.1.to_string()), trip.1),
        })
    }

    pub fn print(&self) {
        println!(
            "The most common start station was {}.",
            highlight(&self.start_station.0)
        );
        println!(
            "The most common end station was {}.",
            highlight(&self.end_station.0)
        );

        let ((from, to), count) = &self.trip;
        println!(
            "\nThe most common trip was:\n\n{} -> {} ({}).",
            highlight(from),
            highlight(to),
            plural(*count, "trip")
        );
    }
}

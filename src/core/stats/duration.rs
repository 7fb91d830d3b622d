use crate::models::TripTable;
use crate::utils::formatting::highlight;

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Total and mean trip duration over the filtered rows, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub count: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let count = table.len();
        let total_seconds: f64 = table.iter().map(|t| t.duration).sum();

        Some(Self {
            count,
            total_seconds,
            mean_seconds: total_seconds / count as f64,
        })
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds / SECONDS_PER_HOUR
    }

    pub fn mean_minutes(&self) -> f64 {
        self.mean_seconds / SECONDS_PER_MINUTE
    }

    pub fn print(&self) {
        println!("This is the total travel time:");
        println!("{} hours", highlight(format!("{:.2}", self.total_hours())));
        println!("\n\nThis is the average travel time:");
        println!(
            "{} minutes",
            highlight(format!("{:.2}", self.mean_minutes()))
        );
    }
}

use crate::core::stats::mode;
use crate::models::filter::{month_name, weekday_name};
use crate::models::{FilterMode, TripTable};
use crate::utils::formatting::{highlight, hour_label};
use chrono::Weekday;

/// Most frequent times of travel, each with its trip count.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub popular_hour: (u32, usize),
    pub popular_day: (Weekday, usize),
    pub popular_month: (u32, usize),
}

impl TimeStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        Some(Self {
            popular_hour: mode(table.iter().map(|t| t.hour()))?,
            popular_day: mode(table.iter().map(|t| t.weekday))?,
            popular_month: mode(table.iter().map(|t| t.month))?,
        })
    }

    /// The weekday (month) line is only useful when the user did not pick one.
    pub fn print(&self, filter: FilterMode) {
        println!(
            "The most popular hour is {}.",
            highlight(hour_label(self.popular_hour.0))
        );

        if !filter.filters_day() {
            println!(
                "The most popular day is {}.",
                highlight(weekday_name(self.popular_day.0))
            );
        }

        if !filter.filters_month() {
            println!(
                "The most popular month is {}.",
                highlight(month_name(self.popular_month.0))
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::filter_trips;
    use crate::models::{City, Month, Trip};
    use chrono::NaiveDate;

    fn trip(date: &str, hour: u32) -> Trip {
        let start = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .expect("date")
            .and_hms_opt(hour, 30, 0)
            .expect("time");
        Trip::new(start, "A", "B", 60.0, "Customer")
    }

    #[test]
    fn empty_table_has_no_time_stats() {
        let table = TripTable::new(City::Chicago, vec![]);
        assert_eq!(TimeStats::compute(&table), None);
    }

    #[test]
    fn march_mondays_popular_hour() {
        // March 2017: Mondays 6, 13, 20; Wednesdays 1, 8, 15
        let table = TripTable::new(
            City::Chicago,
            vec![
                trip("2017-03-01", 17), // Wed
                trip("2017-03-06", 8),
                trip("2017-03-08", 17), // Wed
                trip("2017-03-13", 9),
                trip("2017-03-15", 17), // Wed
                trip("2017-03-20", 9),
                trip("2017-03-20", 8),
            ],
        );

        let mondays = filter_trips(&table, Some(Month::March), Some(Weekday::Mon));
        assert_eq!(mondays.len(), 4);
        assert!(mondays.iter().all(|t| t.weekday == Weekday::Mon));

        let stats = TimeStats::compute(&mondays).expect("stats");
        // 8 and 9 both appear twice; 8 is seen first
        assert_eq!(stats.popular_hour, (8, 2));
        assert_eq!(stats.popular_day, (Weekday::Mon, 4));
        assert_eq!(stats.popular_month, (3, 4));

        let all = TimeStats::compute(&table).expect("stats");
        assert_eq!(all.popular_hour, (17, 3));
    }
}

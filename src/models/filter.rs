use crate::models::city::City;
use chrono::Weekday;
use std::fmt;

/// Months covered by the published data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar month number, 1 = January
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }

    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full English month name for any calendar month (1..=12).
pub fn month_name(n: u32) -> &'static str {
    match n {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Accepts full weekday names in any case ("monday", "MONDAY").
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    let s = s.trim();
    WEEKDAYS
        .iter()
        .copied()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(s))
}

/// Which constraints the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Both,
    Month,
    Day,
    All,
}

impl FilterMode {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "both" => Some(FilterMode::Both),
            "month" => Some(FilterMode::Month),
            "day" => Some(FilterMode::Day),
            "all" | "none" => Some(FilterMode::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Both => "both",
            FilterMode::Month => "month",
            FilterMode::Day => "day",
            FilterMode::All => "all",
        }
    }

    pub fn filters_month(&self) -> bool {
        matches!(self, FilterMode::Both | FilterMode::Month)
    }

    pub fn filters_day(&self) -> bool {
        matches!(self, FilterMode::Both | FilterMode::Day)
    }
}

/// Validated selection produced by the filter selector.
///
/// `month` is set exactly when the mode filters by month, `day` exactly
/// when it filters by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub city: City,
    pub mode: FilterMode,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSpec {
    /// One-line description of the selection, shown before the reports.
    pub fn describe(&self) -> String {
        let city = self.city.display_name();
        match (self.month, self.day) {
            (Some(m), Some(d)) => format!(
                "Below is {city}'s bikeshare data for {}s in {m}.",
                weekday_name(d)
            ),
            (Some(m), None) => {
                format!("Below is {city}'s bikeshare data for the month of {m}.")
            }
            (None, Some(d)) => format!(
                "Below is {city}'s bikeshare data for all {}s in the months from January to June.",
                weekday_name(d)
            ),
            (None, None) => format!(
                "Below is {city}'s bikeshare data for all months from January to June."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_round_trip_to_numbers() {
        assert_eq!(Month::from_input("march"), Some(Month::March));
        assert_eq!(Month::from_input(" JUNE "), Some(Month::June));
        assert_eq!(Month::from_input("july"), None);
        assert_eq!(Month::March.number(), 3);
        assert_eq!(Month::January.number(), 1);
    }

    #[test]
    fn weekday_parsing_is_case_insensitive() {
        assert_eq!(parse_weekday("monday"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("SUNDAY"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("mon"), None);
        assert_eq!(weekday_name(Weekday::Wed), "Wednesday");
    }

    #[test]
    fn filter_mode_predicates() {
        assert!(FilterMode::Both.filters_month() && FilterMode::Both.filters_day());
        assert!(FilterMode::Month.filters_month() && !FilterMode::Month.filters_day());
        assert!(!FilterMode::Day.filters_month() && FilterMode::Day.filters_day());
        assert!(!FilterMode::All.filters_month() && !FilterMode::All.filters_day());
        assert_eq!(FilterMode::from_input("none"), Some(FilterMode::All));
        assert_eq!(FilterMode::from_input("week"), None);
    }

    #[test]
    fn describe_mentions_selection() {
        let spec = FilterSpec {
            city: City::Chicago,
            mode: FilterMode::Both,
            month: Some(Month::March),
            day: Some(Weekday::Mon),
        };
        assert_eq!(
            spec.describe(),
            "Below is Chicago's bikeshare data for Mondays in March."
        );
    }
}

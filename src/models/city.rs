use std::fmt;
use std::path::{Path, PathBuf};

/// Cities with published trip data. The file mapping is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the city's trip data inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Washington does not publish gender and birth year.
    pub fn has_demographics(&self) -> bool {
        matches!(self, City::Chicago | City::NewYorkCity)
    }

    /// Parse user input (case-insensitive, spaces/dashes/underscores allowed)
    pub fn from_input(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match norm.as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" | "new york" | "nyc" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

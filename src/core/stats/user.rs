use crate::core::stats::{mode, value_counts};
use crate::models::TripTable;
use crate::ui::messages::warning;
use crate::utils::Table;
use crate::utils::formatting::highlight;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// Gender and birth year breakdown, only for cities that publish them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: Vec<(String, usize)>,
    pub birth_years: Option<BirthYears>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub demographics: Option<Demographics>,
}

fn birth_years(table: &TripTable) -> Option<BirthYears> {
    let years: Vec<i32> = table.iter().filter_map(|t| t.birth_year).collect();
    Some(BirthYears {
        earliest: *years.iter().min()?,
        latest: *years.iter().max()?,
        most_common: mode(years.iter().copied())?.0,
    })
}

impl UserStats {
    /// Demographic columns are never read for cities without them.
    pub fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let user_types = value_counts(
            table
                .iter()
                .map(|t| t.user_type.trim())
                .filter(|u| !u.is_empty())
                .map(str::to_string),
        );

        let demographics = table.city.has_demographics().then(|| Demographics {
            genders: value_counts(table.iter().filter_map(|t| t.gender.clone())),
            birth_years: birth_years(table),
        });

        Some(Self {
            user_types,
            demographics,
        })
    }

    pub fn print(&self) {
        println!("This is the breakdown of user types.");
        print_counts("User Type", &self.user_types);

        let Some(demo) = &self.demographics else {
            return;
        };

        println!("\n\nThis is the breakdown of users by gender.");
        print_counts("Gender", &demo.genders);

        match &demo.birth_years {
            Some(by) => {
                println!("\nThe earliest birth year is {}.", highlight(by.earliest));
                println!("The most recent birth year is {}.", highlight(by.latest));
                println!(
                    "The most common birth year is {}.",
                    highlight(by.most_common)
                );
            }
            None => warning("No birth year data for the selected filters."),
        }
    }
}

fn print_counts(label: &str, counts: &[(String, usize)]) {
    if counts.is_empty() {
        warning(format!("No {} data for the selected filters.", label.to_lowercase()));
        return;
    }

    let mut table = Table::new(&[label, "Count"]);
    for (value, count) in counts {
        table.add_row(vec![value.clone(), count.to_string()]);
    }
    print!("{}", table.render());
}

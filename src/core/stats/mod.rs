//! Descriptive statistics over a filtered trip table.
//!
//! Every reporter has a pure `compute` step returning a summary (or `None`
//! for an empty table) and a `print` step writing it to stdout.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use crate::config::Config;
use crate::models::{FilterMode, TripTable};
use crate::ui::messages::{section, warning};
use crate::utils::formatting::dimmed;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::UserStats;

/// Count occurrences, most frequent first.
/// Equal counts keep the order in which values first appeared.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for v in values {
        match index.get(&v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }

    // stable sort: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value and its count; ties go to the first one seen.
pub fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next()
}

/// Run one report section: title, body, optional timing, separator.
fn run_section<F>(title: &str, cfg: &Config, body: F)
where
    F: FnOnce() -> bool,
{
    section(title);
    let started = Instant::now();

    if !body() {
        warning("No data for the selected filters.");
    }

    if cfg.show_timing {
        let took = format!(
            "This took {:.6} seconds.",
            started.elapsed().as_secs_f64()
        );
        println!("\n{}", dimmed(&took));
    }
    println!("{}", cfg.separator());
}

/// Print the four report sections for `table`.
pub fn report_all(table: &TripTable, mode: FilterMode, cfg: &Config) {
    run_section("Calculating The Most Frequent Times of Travel", cfg, || {
        TimeStats::compute(table).map(|s| s.print(mode)).is_some()
    });

    run_section("Calculating The Most Popular Stations and Trip", cfg, || {
        StationStats::compute(table).map(|s| s.print()).is_some()
    });

    run_section("Calculating Trip Duration", cfg, || {
        DurationStats::compute(table).map(|s| s.print()).is_some()
    });

    run_section("Calculating User Stats", cfg, || {
        UserStats::compute(table).map(|s| s.print()).is_some()
    });
}

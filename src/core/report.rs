use crate::config::Config;
use crate::core::{filter, loader, stats};
use crate::errors::AppResult;
use crate::models::FilterSpec;
use crate::ui::messages::info;

/// Load, filter and report on one selection.
/// Returns the number of trips that matched.
pub fn run_report(spec: &FilterSpec, cfg: &Config) -> AppResult<usize> {
    let table = loader::load_city(spec.city, &cfg.data_path())?;
    let filtered = filter::apply(&table, spec);

    println!("\n{}", spec.describe());
    info(format!(
        "{} of {} trips match the selected filters.",
        filtered.len(),
        table.len()
    ));
    println!("{}", cfg.separator());

    stats::report_all(&filtered, spec.mode, cfg);
    Ok(filtered.len())
}

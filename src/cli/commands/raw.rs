use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::loader::load_raw;
use crate::core::raw::RawPager;
use crate::errors::{AppError, AppResult};
use crate::models::City;
use crate::ui::messages::info;

/// Handle the `raw` command: one page of unfiltered rows
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Raw { city, rows } = cmd {
        let city = City::from_input(city).ok_or_else(|| AppError::InvalidCity(city.clone()))?;
        let raw = load_raw(city, &cfg.data_path())?;
        if raw.is_empty() {
            info(format!("{} has no rows.", city.file_name()));
            return Ok(());
        }

        let mut pager = RawPager::new(raw, rows.unwrap_or(cfg.raw_page_size));
        if let Some(page) = pager.next_page() {
            print!("{page}");
            info(format!(
                "Showing {} of {} rows from {}.",
                pager.offset(),
                pager.total(),
                city.file_name()
            ));
        }
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::select_filters;
use crate::core::report::run_report;
use crate::errors::AppResult;

/// Handle the `report` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        city,
        filter,
        month,
        day,
    } = cmd
    {
        let spec = select_filters(city, filter, month.as_deref(), day.as_deref())?;
        run_report(&spec, cfg)?;
    }
    Ok(())
}

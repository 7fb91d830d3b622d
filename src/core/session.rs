//! Interactive explore loop: ask, report, offer raw rows, restart.

use crate::config::Config;
use crate::core::loader;
use crate::core::raw::RawPager;
use crate::core::report::run_report;
use crate::errors::AppResult;
use crate::models::filter::parse_weekday;
use crate::models::{City, FilterMode, FilterSpec, Month};
use crate::ui::messages::{header, info};
use crate::ui::prompt::Prompter;
use std::io::{BufRead, Write};

const CITY_QUESTION: &str =
    "Would you like to explore data for Chicago, New York City, or Washington?";
const MODE_QUESTION: &str = "Would you like to filter by month, day, both, or all (no filter)?";
const MONTH_QUESTION: &str = "We have data for the months of January, February, March, April, May, and June. Which month would you like?";
const DAY_QUESTION: &str = "Which day of the week would you like to explore? (e.g. 'Monday')";

pub struct Session<'a, R, W> {
    prompter: Prompter<R, W>,
    cfg: &'a Config,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(prompter: Prompter<R, W>, cfg: &'a Config) -> Self {
        Self { prompter, cfg }
    }

    /// Ask for city, filter mode and the values the mode needs.
    pub fn select_filters(&mut self) -> AppResult<FilterSpec> {
        let city = self.prompter.ask_until(
            CITY_QUESTION,
            "Please type Chicago, New York City or Washington.",
            City::from_input,
        )?;
        let mode = self.prompter.ask_until(
            MODE_QUESTION,
            "Please type month, day, both or all.",
            FilterMode::from_input,
        )?;

        let month = if mode.filters_month() {
            Some(self.prompter.ask_until(
                MONTH_QUESTION,
                "Please select one of January, February, March, April, May, June.",
                Month::from_input,
            )?)
        } else {
            None
        };

        let day = if mode.filters_day() {
            Some(self.prompter.ask_until(
                DAY_QUESTION,
                "Please type a full weekday name, e.g. Monday.",
                parse_weekday,
            )?)
        } else {
            None
        };

        Ok(FilterSpec {
            city,
            mode,
            month,
            day,
        })
    }

    /// Page through the city's unfiltered rows while the user asks for more.
    pub fn offer_raw_data(&mut self, city: City) -> AppResult<()> {
        if !self
            .prompter
            .confirm("Do you want to see raw data? Enter yes or no.")?
        {
            return Ok(());
        }

        let raw = loader::load_raw(city, &self.cfg.data_path())?;
        let mut pager = RawPager::new(raw, self.cfg.raw_page_size);

        loop {
            let Some(page) = pager.next_page() else {
                info("Actually, that's all the data we have.");
                return Ok(());
            };
            write!(self.prompter.writer(), "\n{page}")?;

            if !pager.has_more() {
                info("Actually, that's all the data we have.");
                return Ok(());
            }

            let more = format!(
                "Do you want to see {} more rows? Enter yes or no.",
                self.cfg.raw_page_size
            );
            if !self.prompter.confirm(&more)? {
                return Ok(());
            }
        }
    }

    /// One full cycle. Returns whether the user wants another one.
    pub fn run_once(&mut self) -> AppResult<bool> {
        header("Hello! Let's explore some US bikeshare data!");

        let spec = self.select_filters()?;
        self.prompter.writer().flush()?;
        run_report(&spec, self.cfg)?;
        self.offer_raw_data(spec.city)?;

        self.prompter
            .confirm("Would you like to restart? Enter yes or no.")
    }

    pub fn run(&mut self) -> AppResult<()> {
        while self.run_once()? {}
        Ok(())
    }
}

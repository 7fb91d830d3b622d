use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::prompt::Prompter;

/// Handle the `explore` command (also the default with no subcommand)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = Session::new(Prompter::stdio(), cfg);
    session.run()?;
    success("Thanks for exploring bikeshare data. Bye!");
    Ok(())
}

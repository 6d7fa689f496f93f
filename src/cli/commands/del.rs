use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Del { id, yes } = cmd else {
        return Ok(());
    };

    let prompt = format!(
        "ELD log #{} and its duty status changes will be removed permanently.",
        id
    );
    if !*yes && !confirm(&prompt, "Delete it?") {
        info("Operation cancelled.");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;
    DeleteLogic::apply(&mut pool, *id)?;

    success(format!("ELD log #{} has been deleted.", id));
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear = cmd {
        let mut ctx = AppContext::bootstrap(cfg);
        ctx.registry.clear_all();
        success("Cleared all bookings; every slot is available again.");
    }
    Ok(())
}

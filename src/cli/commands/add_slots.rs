use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AddSlots { count } = cmd {
        let mut ctx = AppContext::bootstrap(cfg);
        let added = ctx.registry.add_slots(*count)?;

        match added.as_slice() {
            [only] => success(format!("Added 1 slot (id {only})")),
            [first, .., last] => {
                success(format!("Added {} slots (ids {first}-{last})", added.len()))
            }
            [] => {}
        }
    }
    Ok(())
}

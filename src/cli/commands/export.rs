use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::export;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut ctx = AppContext::bootstrap(cfg);
        let bookings = ctx.registry.list_bookings();

        export::write_bookings(format, file, &bookings, *force)?;

        success(format!(
            "Exported {} bookings to {} ({})",
            bookings.len(),
            file,
            format.as_str()
        ));
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        slot,
        user,
        vehicle,
    } = cmd
    {
        let mut ctx = AppContext::bootstrap(cfg);

        // The caller identity lives in the session for the rest of the
        // process; the allocation itself reads from there.
        ctx.session.login(user, vehicle);
        let who = ctx
            .session
            .current()
            .cloned()
            .ok_or_else(|| AppError::Other("no active session".to_string()))?;

        let booked = ctx
            .registry
            .allocate(*slot, &who.user, &who.vehicle, time::now())?;

        success(format!(
            "Booked slot {} for {} ({}) at {}",
            booked.id,
            who.user,
            who.vehicle,
            booked
                .occupancy
                .as_ref()
                .map(|o| time::display_datetime(&o.since))
                .unwrap_or_default(),
        ));
    }
    Ok(())
}

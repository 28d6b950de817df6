use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Free {
        slot,
        user,
        vehicle,
    } = cmd
    {
        let mut ctx = AppContext::bootstrap(cfg);

        let slot_id = match (slot, user, vehicle) {
            (Some(id), _, _) => *id,
            (None, Some(user), Some(vehicle)) => {
                ctx.session.login(user, vehicle);
                match ctx.registry.find_active_booking(user, vehicle) {
                    Some(active) => active.id,
                    None => {
                        info(format!("No active booking for {user} ({vehicle})."));
                        return Ok(());
                    }
                }
            }
            _ => {
                return Err(AppError::InvalidInput(
                    "specify a slot id, or --user and --vehicle".to_string(),
                ));
            }
        };

        let booking = ctx
            .registry
            .release(slot_id, time::now(), ctx.rate_per_hour)?;

        success(format!(
            "Freed slot {}. Booking recorded, cost {}",
            slot_id,
            ctx.format_amount(booking.cost)
        ));
    }
    Ok(())
}

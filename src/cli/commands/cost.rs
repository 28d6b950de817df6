use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cost {
        slot,
        user,
        vehicle,
    } = cmd
    {
        let mut ctx = AppContext::bootstrap(cfg);

        let slot_id = match (slot, user, vehicle) {
            (Some(id), _, _) => *id,
            (None, Some(user), Some(vehicle)) => {
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

        let now = time::now();
        let amount = ctx.registry.cost_preview(slot_id, now, ctx.rate_per_hour)?;

        let since = ctx
            .registry
            .slot_by_id(slot_id)
            .and_then(|s| s.occupancy.map(|o| time::display_datetime(&o.since)))
            .unwrap_or_default();

        println!(
            "Slot {}: cost so far {} (since {})",
            slot_id,
            ctx.format_amount(amount),
            since
        );
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use crate::utils::time::display_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records = cmd {
        let mut ctx = AppContext::bootstrap(cfg);
        let bookings = ctx.registry.list_bookings();

        if bookings.is_empty() {
            println!("No bookings recorded.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("SLOT", 6),
            Column::new("USER", 16),
            Column::new("VEHICLE", 12),
            Column::new("IN", 17),
            Column::new("OUT", 17),
            Column::new("COST", 10),
        ]);

        for b in &bookings {
            table.add_row(vec![
                b.slot_id.to_string(),
                b.user.clone(),
                b.vehicle.clone(),
                display_datetime(&b.in_time),
                display_datetime(&b.out_time),
                ctx.format_amount(b.cost),
            ]);
        }

        print!("{}", table.render());
        println!("{} bookings", bookings.len());
    }
    Ok(())
}

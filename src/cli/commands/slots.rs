use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use crate::utils::time::display_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slots { available } = cmd {
        let mut ctx = AppContext::bootstrap(cfg);
        let slots = ctx.registry.list_slots();

        let mut table = Table::new(vec![
            Column::new("SLOT", 6),
            Column::new("STATUS", 10),
            Column::new("USER", 16),
            Column::new("VEHICLE", 12),
            Column::new("SINCE", 17),
        ]);

        let mut shown = 0;
        for slot in &slots {
            if *available && !slot.is_available() {
                continue;
            }
            shown += 1;
            match &slot.occupancy {
                Some(occ) => table.add_row(vec![
                    slot.id.to_string(),
                    "occupied".to_string(),
                    occ.user.clone(),
                    occ.vehicle.clone(),
                    display_datetime(&occ.since),
                ]),
                None => table.add_row(vec![
                    slot.id.to_string(),
                    "available".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                ]),
            }
        }

        print!("{}", table.render());
        println!("{} of {} slots shown", shown, slots.len());
    }
    Ok(())
}

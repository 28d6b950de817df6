use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::registry::Registry;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database with both tables
///  - the minimum slot pool
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = Config::load();
    if let Some(custom) = &cli.db {
        cfg.database = custom.clone();
    }

    println!("Initializing parkledger...");
    println!("Config file : {}", Config::config_file().display());
    println!("Database    : {}", &cfg.database);

    // Registry::open ensures the schema and seeds the minimum slot pool.
    let mut registry = Registry::open(&cfg.database, cfg.minimum_slots);
    let slots = registry.list_slots();

    success(format!(
        "Database initialized with {} parking slots",
        slots.len()
    ));
    Ok(())
}

//! Application context: the single object the presentation layer talks to.
//! Owned by the command handlers; nothing in the core is a process-wide
//! global.

use crate::config::Config;
use crate::core::registry::Registry;
use crate::core::session::Session;

pub struct AppContext {
    pub registry: Registry,
    pub session: Session,
    pub rate_per_hour: f64,
    pub currency: String,
}

impl AppContext {
    /// Construct the core once at startup from the loaded configuration.
    pub fn bootstrap(cfg: &Config) -> Self {
        Self {
            registry: Registry::open(&cfg.database, cfg.minimum_slots),
            session: Session::new(),
            rate_per_hour: cfg.rate_per_hour,
            currency: cfg.currency.clone(),
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

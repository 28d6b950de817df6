use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for parkledger
/// CLI application to manage parking slots and bookings with SQLite
#[derive(Parser)]
#[command(
    name = "parkledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple parking CLI: manage slots, track occupancy, and keep a booking ledger using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// List parking slots and their occupancy
    Slots {
        #[arg(long = "available", help = "Show only available slots")]
        available: bool,
    },

    /// Book an available slot
    Book {
        /// Slot id to book
        slot: i64,

        #[arg(long, help = "Name of the person booking the slot")]
        user: String,

        #[arg(long, help = "Vehicle registration")]
        vehicle: String,
    },

    /// Free an occupied slot and record the booking
    Free {
        /// Slot id to free (omit to free by --user/--vehicle)
        slot: Option<i64>,

        #[arg(long, requires = "vehicle", help = "Free the slot held by this user")]
        user: Option<String>,

        #[arg(long, requires = "user", help = "Vehicle registration of the active booking")]
        vehicle: Option<String>,
    },

    /// Show what the current stay would cost as of now
    Cost {
        /// Slot id to preview (omit to look up by --user/--vehicle)
        slot: Option<i64>,

        #[arg(long, requires = "vehicle", help = "Look up the active booking of this user")]
        user: Option<String>,

        #[arg(long, requires = "user", help = "Vehicle registration of the active booking")]
        vehicle: Option<String>,
    },

    /// Add new parking slots to the pool
    AddSlots {
        /// Number of slots to add
        count: i64,
    },

    /// Print the booking ledger, most recent first
    Records,

    /// Delete all bookings and reset every slot to available
    Clear,

    /// Export the booking ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}

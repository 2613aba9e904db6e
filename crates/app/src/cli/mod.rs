use std::error::Error;

use clap::{Parser, Subcommand};
use matnight_app::context::AppContext;

pub(crate) mod config;

mod checkin;
mod db;
mod facility;
mod guest;
mod inventory;
mod template;

use config::{DatabaseConfig, LoggingConfig};

#[derive(Debug, Parser)]
#[command(
    name = "matnight",
    about = "Nightly mat inventory and check-in administration",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(flatten)]
    database: DatabaseConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Facility(facility::FacilityCommand),
    Template(template::TemplateCommand),
    Guest(guest::GuestCommand),
    Inventory(inventory::InventoryCommand),
    Checkin(checkin::CheckinCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let database_url = self.database.database_url;

        match self.command {
            Commands::Db(command) => db::run(command, &database_url).await,
            command => run_with_context(command, &database_url).await,
        }
    }
}

async fn run_with_context(command: Commands, database_url: &str) -> Result<(), String> {
    let context = AppContext::from_database_url(database_url)
        .await
        .map_err(|error| error_chain(&error))?;

    match command {
        Commands::Facility(command) => facility::run(command, context.facilities.as_ref()).await,
        Commands::Template(command) => template::run(command, context.templates.as_ref()).await,
        Commands::Guest(command) => guest::run(command, context.guests.as_ref()).await,
        Commands::Inventory(command) => inventory::run(command, context.checkins.as_ref()).await,
        Commands::Checkin(command) => checkin::run(command, context.checkins.as_ref()).await,
        Commands::Db(command) => db::run(command, database_url).await,
    }
}

/// Render an error followed by each of its sources.
pub(crate) fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}

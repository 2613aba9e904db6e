use clap::{Args, Subcommand};

mod migrate;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations
    Migrate,
}

pub(crate) async fn run(command: DbCommand, database_url: &str) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate => migrate::run(database_url).await,
    }
}

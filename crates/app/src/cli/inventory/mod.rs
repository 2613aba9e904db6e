use clap::{Args, Subcommand};
use matnight_app::domain::checkins::CheckinsService;

mod generate;

#[derive(Debug, Args)]
pub(crate) struct InventoryCommand {
    #[command(subcommand)]
    command: InventorySubcommand,
}

#[derive(Debug, Subcommand)]
enum InventorySubcommand {
    /// Create a night's open mats from a template
    Generate(generate::GenerateInventoryArgs),
}

pub(crate) async fn run(
    command: InventoryCommand,
    service: &dyn CheckinsService,
) -> Result<(), String> {
    match command.command {
        InventorySubcommand::Generate(args) => generate::run(args, service).await,
    }
}

use clap::{Args, Subcommand};
use matnight_app::domain::facilities::FacilitiesService;

mod create;

#[derive(Debug, Args)]
pub(crate) struct FacilityCommand {
    #[command(subcommand)]
    command: FacilitySubcommand,
}

#[derive(Debug, Subcommand)]
enum FacilitySubcommand {
    /// Register a facility
    Create(create::CreateFacilityArgs),
}

pub(crate) async fn run(
    command: FacilityCommand,
    service: &dyn FacilitiesService,
) -> Result<(), String> {
    match command.command {
        FacilitySubcommand::Create(args) => create::run(args, service).await,
    }
}

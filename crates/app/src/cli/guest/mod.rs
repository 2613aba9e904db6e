use clap::{Args, Subcommand};
use matnight_app::domain::guests::GuestsService;

mod create;

#[derive(Debug, Args)]
pub(crate) struct GuestCommand {
    #[command(subcommand)]
    command: GuestSubcommand,
}

#[derive(Debug, Subcommand)]
enum GuestSubcommand {
    /// Register a guest with a facility
    Create(create::CreateGuestArgs),
}

pub(crate) async fn run(command: GuestCommand, service: &dyn GuestsService) -> Result<(), String> {
    match command.command {
        GuestSubcommand::Create(args) => create::run(args, service).await,
    }
}

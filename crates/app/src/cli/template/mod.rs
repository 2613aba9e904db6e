use clap::{Args, Subcommand};
use matnight_app::domain::templates::TemplatesService;

mod create;

#[derive(Debug, Args)]
pub(crate) struct TemplateCommand {
    #[command(subcommand)]
    command: TemplateSubcommand,
}

#[derive(Debug, Subcommand)]
enum TemplateSubcommand {
    /// Store a validated mat layout for a facility
    Create(create::CreateTemplateArgs),
}

pub(crate) async fn run(
    command: TemplateCommand,
    service: &dyn TemplatesService,
) -> Result<(), String> {
    match command.command {
        TemplateSubcommand::Create(args) => create::run(args, service).await,
    }
}

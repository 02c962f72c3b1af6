mod generate;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "clientgen")]
pub(crate) enum CommandEnum {
    /// Build the response-type catalogue for a set of operation documents.
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await
        }
    }
}

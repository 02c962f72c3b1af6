use crate::Cli;
use crate::CommandResult;

/// A `clientgen` subcommand. Each one reports its outcome as a
/// [`CommandResult`] instead of printing, so `main` owns all output.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

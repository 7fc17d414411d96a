mod directives;
mod validate;

use crate::Cli;
use crate::CommandResult;
use directives::DirectivesCmd;
use validate::ValidateCmd;

/// A subcommand. Global flags are handed over through the parsed [`Cli`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-constraints")]
pub(crate) enum CommandEnum {
    /// Print the SDL declarations of the configured constraint directives.
    Directives(DirectivesCmd),

    /// Check a GraphQL request (or batch of requests) against the constraint
    /// directives declared in a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Directives(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

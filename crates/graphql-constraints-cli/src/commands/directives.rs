use crate::Cli;
use crate::CommandResult;
use super::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct DirectivesCmd {}

#[inherent::inherent]
impl RunnableCommand for DirectivesCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let sdl = cli.checks()
            .iter()
            .map(|check| check.directive_definition())
            .collect::<Vec<_>>()
            .join("\n");
        CommandResult::stdout(format_args!("{}", sdl.trim_end()))
    }
}

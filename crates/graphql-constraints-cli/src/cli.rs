use clap::CommandFactory;
use crate::commands;
use graphql_constraints::BoundedIntegerCheck;
use graphql_constraints::CheckOptions;
use graphql_constraints::ConstraintCheck;
use graphql_constraints::MaxArrayLengthCheck;

#[derive(clap::Parser, Debug)]
#[command(name = "graphql-constraints", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        default_value=MaxArrayLengthCheck::CANONICAL_NAME,
        global=true,
        help="Name of the directive that declares a maximum list length.",
        long,
    )]
    pub max_array_length_directive: String,

    #[arg(
        default_value=BoundedIntegerCheck::CANONICAL_NAME,
        global=true,
        help="Name of the directive that declares an inclusive integer range.",
        long,
    )]
    pub bounded_integer_directive: String,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// The constraint checks configured by the directive-name flags.
    pub(crate) fn checks(&self) -> Vec<Box<dyn ConstraintCheck>> {
        vec![
            Box::new(MaxArrayLengthCheck::new(CheckOptions::named(
                self.max_array_length_directive.as_str(),
            ))),
            Box::new(BoundedIntegerCheck::new(CheckOptions::named(
                self.bounded_integer_directive.as_str(),
            ))),
        ]
    }

    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}

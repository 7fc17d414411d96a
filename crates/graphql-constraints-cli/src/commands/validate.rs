use crate::output_utils;
use crate::schema_files;
use crate::Cli;
use crate::CommandResult;
use super::RunnableCommand;
use anyhow::Context;
use graphql_constraints::file_reader;
use graphql_constraints::ArgumentWalker;
use graphql_constraints::ConstraintCheck;
use graphql_constraints::GraphQLRequest;
use graphql_constraints::Schema;
use graphql_constraints::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Also load the SDL declarations of the configured constraint \
             directives, for schemas that do not declare them.",
        long,
    )]
    with_directive_defs: bool,

    #[arg(
        help="Path to a JSON file holding a GraphQL request body, or an array \
             of request bodies to be validated as a batch.",
        name="REQUEST_FILE",
    )]
    request_file: PathBuf,
}
impl ValidateCmd {
    fn load_schema(
        &self,
        checks: &[Box<dyn ConstraintCheck>],
    ) -> anyhow::Result<Schema> {
        let file_paths = schema_files::find_schema_files(
            &self.schema,
            &self.graphql_file_exts,
        )?;
        anyhow::ensure!(
            !file_paths.is_empty(),
            "No GraphQL schema files found under {:#?}",
            self.schema,
        );

        let mut builder = SchemaBuilder::new();
        if self.with_directive_defs {
            for check in checks {
                builder = builder.load_str(
                    Some(PathBuf::from(format!("directive://{}", check.directive_name()))),
                    check.directive_definition().as_str(),
                )?;
            }
        }
        let schema = builder.load_files(file_paths)?.build()?;

        log::debug!(
            "Loaded a schema with {} types and {} directives.",
            schema.all_types().len(),
            schema.all_directives().len(),
        );
        Ok(schema)
    }
}

/// A request file holds either a single request body or a batch of them.
enum RequestFile {
    Batch(Vec<GraphQLRequest>),
    Single(GraphQLRequest),
}
impl RequestFile {
    fn read(file_path: &Path) -> anyhow::Result<Self> {
        let json: serde_json::Value = file_reader::read_json(file_path)?;

        let request_file =
            if json.is_array() {
                serde_json::from_value(json).map(Self::Batch)
            } else {
                serde_json::from_value(json).map(Self::Single)
            };
        request_file.with_context(|| format!(
            "{file_path:#?} does not hold a GraphQL request body",
        ))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let checks = cli.checks();
        let schema = match self.load_schema(&checks) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors loading schema: {err:#}",
                output_utils::RED_X,
            )),
        };

        let request_file = match RequestFile::read(self.request_file.as_path()) {
            Ok(request_file) => request_file,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors reading request file: {err:#}",
                output_utils::RED_X,
            )),
        };

        let walker = ArgumentWalker::new(&schema, checks);
        let (output, all_ok) = match request_file {
            RequestFile::Batch(requests) => {
                log::debug!("Validating a batch of {} requests...", requests.len());
                let outcomes = walker.validate_batch(&requests);
                let all_ok = outcomes.iter().all(|outcome| outcome.is_ok());
                (serde_json::to_string_pretty(&outcomes), all_ok)
            },

            RequestFile::Single(request) => {
                let outcome = walker.validate_request(&request);
                let all_ok = outcome.is_ok();
                (serde_json::to_string_pretty(&outcome), all_ok)
            },
        };

        match output {
            Ok(output) if all_ok => {
                log::info!("{} All requests passed.", output_utils::GREEN_CHECK);
                CommandResult::stdout(format_args!("{output}"))
            },
            Ok(output) => CommandResult::stdout_failure(format_args!("{output}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to serialize the validation outcome: {err}",
                output_utils::RED_X,
            )),
        }
    }
}

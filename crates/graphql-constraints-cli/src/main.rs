mod cli;
mod command_result;
mod commands;
mod output_utils;
mod schema_files;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{} {err:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        }
    }
}

/// Maps a `LOG_LEVEL` environment value onto a tracing level. Unknown values
/// fall back to the default level and are reported once logging is set up.
fn parse_log_level(
    env_val: Option<&str>,
) -> std::result::Result<tracing::Level, String> {
    match env_val.map(str::trim) {
        None =>
            Ok(DEFAULT_LOG_LEVEL),
        Some(level) => match level.to_ascii_lowercase().as_str() {
            "trace" =>
                Ok(tracing::Level::TRACE),
            "debug" | "verbose" =>
                Ok(tracing::Level::DEBUG),
            "info" =>
                Ok(tracing::Level::INFO),
            "warn" | "warning" =>
                Ok(tracing::Level::WARN),
            "error" =>
                Ok(tracing::Level::ERROR),
            _ =>
                Err(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{level}`",
                )),
        },
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match parse_log_level(env_val.as_deref()) {
                Ok(level) => (level, None),
                Err(warning) => (DEFAULT_LOG_LEVEL, Some(warning)),
            }
        };

    // stdout carries only the JSON outcome.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

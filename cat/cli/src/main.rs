use cat_cli::{application, cli, logging};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::init(cli.global.log_format, cli.global.verbose);

    let address = cli.global.client_config().address();
    match application::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%address, "{err:#}");
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use commands::Command;
use miette::IntoDiagnostic;
use tracing_common::{setup_sentry, setup_tracing};

pub use miette::Result;

mod commands;

mod http_server;

pub mod state;
pub(crate) use state::{AppConfig, AppState};

#[derive(Parser)]
#[command(author, version, about)]
struct CliArgs {
    #[clap(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    let _sentry_guard = setup_sentry();

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()
        .into_diagnostic()?
        .block_on(async { _main().await })
}

async fn _main() -> Result<()> {
    setup_tracing("server")?;

    let cli = CliArgs::parse();
    let command = cli.command.unwrap_or_default();

    command.run().await
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::CliArgs;

    #[test]
    fn validate() -> crate::Result<()> {
        crate::commands::validate::validate()
    }

    #[test]
    fn cli_is_well_formed() {
        CliArgs::command().debug_assert();
    }
}

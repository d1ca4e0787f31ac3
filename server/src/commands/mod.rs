use clap::Subcommand;

use crate::Result;

pub(crate) mod prefill;
pub(crate) mod validate;

#[derive(Subcommand, Default)]
pub(crate) enum Command {
    /// Run the web server
    #[default]
    Serve,
    /// Check the contact form configuration
    Validate,
    /// Print the prefilled Google Form link for the given values
    Prefill(prefill::PrefillArgs),
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Validate => validate::validate(),
            Command::Prefill(args) => prefill::print_prefill(args),
        }
    }
}

use clap::Args;
use contact::FormState;
use miette::Result;

use crate::state::prefill_target_from_env;

#[derive(Args, Debug)]
pub(crate) struct PrefillArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long, default_value = "")]
    message: String,
}

impl From<&PrefillArgs> for FormState {
    fn from(args: &PrefillArgs) -> Self {
        FormState {
            name: args.name.clone(),
            email: args.email.clone(),
            phone: args.phone.clone(),
            company: args.company.clone(),
            message: args.message.clone(),
        }
    }
}

pub(crate) fn print_prefill(args: &PrefillArgs) -> Result<()> {
    let target = prefill_target_from_env()?;

    println!("{}", target.prefill_url(&FormState::from(args)));

    Ok(())
}

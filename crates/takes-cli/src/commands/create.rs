use anyhow::Result;
use clap::Args;
use takes_core::TakeSession;

use crate::output::format::format_take_result;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct CreateArgs {
    /// Requested name; made unique if already taken
    pub name: String,

    /// Parent take (defaults to the active take)
    #[arg(long, short)]
    pub parent: Option<String>,

    /// Leave the new take active
    #[arg(long)]
    pub current: bool,
}

pub fn run(args: &CreateArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let take = session.create_take(&args.name, args.parent.as_deref(), args.current)?;
    let message = format!("Created take '{}'", take.name());
    println!("{}", format_take_result(&message, &take, format)?);
    Ok(())
}

use anyhow::{Context, Result};
use clap::Args;
use takes_core::TakeSession;

use crate::output::format::format_take_result;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct RenameArgs {
    /// Current take name
    pub take: String,

    /// New name; made unique if already taken
    pub new_name: String,
}

pub fn run(args: &RenameArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let mut take = session
        .take_from_name(&args.take)
        .with_context(|| format!("Failed to read take '{}'", args.take))?;
    let message = if take.rename(&args.new_name)? {
        format!("Renamed take '{}' to '{}'", args.take, take.name())
    } else {
        format!("Take '{}' unchanged", args.take)
    };
    println!("{}", format_take_result(&message, &take, format)?);
    Ok(())
}

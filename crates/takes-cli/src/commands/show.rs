use anyhow::{Context, Result};
use clap::Args;
use takes_core::TakeSession;

use crate::output::format::format_take_full;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Take name
    pub take: String,
}

pub fn run(args: &ShowArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let take = session
        .take_from_name(&args.take)
        .with_context(|| format!("Failed to read take '{}'", args.take))?;
    println!("{}", format_take_full(&take, format)?);
    Ok(())
}

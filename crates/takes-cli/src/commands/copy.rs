use anyhow::{Context, Result};
use clap::Args;
use takes_core::TakeSession;

use crate::output::format::format_take_result;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct CopyArgs {
    /// Take to copy
    pub take: String,

    /// Name of the copy (defaults to "<take>_copy")
    pub name: Option<String>,

    /// Leave the copy active
    #[arg(long)]
    pub current: bool,
}

pub fn run(args: &CopyArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let take = session
        .take_from_name(&args.take)
        .with_context(|| format!("Failed to read take '{}'", args.take))?;
    let copy = take.copy(args.name.as_deref(), args.current)?;

    let message = format!("Copied take '{}' to '{}'", args.take, copy.name());
    println!("{}", format_take_result(&message, &copy, format)?);
    Ok(())
}

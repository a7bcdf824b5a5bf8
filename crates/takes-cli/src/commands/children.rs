use anyhow::{Context, Result};
use clap::Args;
use takes_core::TakeSession;

use crate::output::format::format_take_names;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ChildrenArgs {
    /// Take name
    pub take: String,
}

pub fn run(args: &ChildrenArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let take = session
        .take_from_name(&args.take)
        .with_context(|| format!("Failed to read take '{}'", args.take))?;
    let children = take.children()?;
    let names: Vec<&str> = children.iter().map(|c| c.name()).collect();
    println!("{}", format_take_names(&names, format)?);
    Ok(())
}

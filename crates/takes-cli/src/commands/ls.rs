use anyhow::{Context, Result};
use clap::Args;
use takes_core::TakeSession;

use crate::output::format::format_take_list;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct LsArgs {
    /// Glob pattern on take names (e.g. "shot*")
    pub pattern: Option<String>,
}

pub fn run(args: &LsArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let takes = session
        .ls(args.pattern.as_deref())
        .context("Failed to list takes")?;
    println!("{}", format_take_list(&takes, format)?);
    Ok(())
}

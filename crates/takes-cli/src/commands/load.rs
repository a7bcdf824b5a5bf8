use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use takes_core::TakeSession;

use crate::output::format::format_take_result;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct LoadArgs {
    /// File written by `takes save`
    pub file: PathBuf,

    /// Parent for the loaded takes (defaults to the active take)
    #[arg(long, short)]
    pub parent: Option<String>,
}

pub fn run(args: &LoadArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let take = session
        .take_from_file(&args.file, args.parent.as_deref())
        .with_context(|| format!("Failed to load takes from {}", args.file.display()))?;
    let message = format!("Loaded take '{}'", take.name());
    println!("{}", format_take_result(&message, &take, format)?);
    Ok(())
}

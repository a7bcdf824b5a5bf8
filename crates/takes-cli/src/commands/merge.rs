use anyhow::{Context, Result};
use clap::Args;
use takes_core::TakeSession;

use crate::output::format::format_take_result;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct MergeArgs {
    /// Take receiving the merge
    pub dest: String,

    /// Take whose inclusions are merged in
    pub src: String,

    /// Let the source win where both takes include the same parameter or flag
    #[arg(long, short)]
    pub force: bool,
}

pub fn run(args: &MergeArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let mut dest = session
        .take_from_name(&args.dest)
        .with_context(|| format!("Failed to read take '{}'", args.dest))?;
    let src = session
        .take_from_name(&args.src)
        .with_context(|| format!("Failed to read take '{}'", args.src))?;
    dest.include_parms_from_take(&src, args.force)?;

    let message = format!("Merged '{}' into '{}'", args.src, args.dest);
    println!("{}", format_take_result(&message, &dest, format)?);
    Ok(())
}

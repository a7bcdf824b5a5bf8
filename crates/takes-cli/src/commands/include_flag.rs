use anyhow::{Context, Result};
use clap::Args;
use takes_core::{Flag, TakeSession};

use crate::output::format::format_take_result;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct IncludeFlagArgs {
    /// Take name
    pub take: String,

    /// Flag: display, render or bypass
    pub flag: Flag,

    /// Node path
    pub node: String,

    /// Exclude the flag instead of including it
    #[arg(long)]
    pub exclude: bool,

    /// Value to give the flag in this take
    #[arg(long, value_name = "BOOL", conflicts_with = "exclude")]
    pub set: Option<bool>,
}

pub fn run(args: &IncludeFlagArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let mut take = session
        .take_from_name(&args.take)
        .with_context(|| format!("Failed to read take '{}'", args.take))?;
    take.include_flag(args.flag, args.node.as_str(), !args.exclude, args.set)?;

    let verb = if args.exclude { "Excluded" } else { "Included" };
    let message = format!("{verb} {} flag of {} in '{}'", args.flag, args.node, take.name());
    println!("{}", format_take_result(&message, &take, format)?);
    Ok(())
}

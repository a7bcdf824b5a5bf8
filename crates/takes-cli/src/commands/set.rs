use anyhow::Result;
use clap::Args;
use serde_json::json;
use takes_core::TakeSession;

use crate::output::OutputFormat;

#[derive(Args)]
pub struct SetArgs {
    /// Take name; the root take name switches back to the root
    pub take: String,
}

pub fn run(args: &SetArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    session.set_active(&args.take)?;
    match format {
        OutputFormat::Json => println!("{}", json!({ "active": args.take })),
        OutputFormat::Text => println!("Active take: {}", args.take),
    }
    Ok(())
}

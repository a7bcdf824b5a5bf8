use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use takes_core::TakeSession;

use crate::output::format::format_take_result;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ParentArgs {
    /// Take name
    pub take: String,

    /// New parent; the root take name moves the take to the top level.
    /// Without it, the current parent is printed.
    pub parent: Option<String>,
}

pub fn run(args: &ParentArgs, session: &TakeSession, format: OutputFormat) -> Result<()> {
    let mut take = session
        .take_from_name(&args.take)
        .with_context(|| format!("Failed to read take '{}'", args.take))?;

    let Some(parent) = &args.parent else {
        let name = take
            .parent()?
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| session.root_take().to_string());
        match format {
            OutputFormat::Json => println!("{}", json!({ "take": take.name(), "parent": name })),
            OutputFormat::Text => println!("{name}"),
        }
        return Ok(());
    };

    take.set_parent(Some(parent.as_str()))?;
    let message = format!("Moved take '{}' under '{parent}'", take.name());
    println!("{}", format_take_result(&message, &take, format)?);
    Ok(())
}

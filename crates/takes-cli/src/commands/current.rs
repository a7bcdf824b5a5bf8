use anyhow::Result;
use serde_json::json;
use takes_core::TakeSession;

use crate::output::format::format_take_full;
use crate::output::OutputFormat;

pub fn run(session: &TakeSession, format: OutputFormat) -> Result<()> {
    let Some(take) = session.current_take()? else {
        let root = session.root_take();
        match format {
            OutputFormat::Json => println!("{}", json!({ "name": root, "root": true })),
            OutputFormat::Text => println!("{root} (root take)"),
        }
        return Ok(());
    };
    println!("{}", format_take_full(&take, format)?);
    Ok(())
}

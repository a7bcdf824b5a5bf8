use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use takes_core::TakeSession;

#[derive(Args)]
pub struct SaveArgs {
    /// Take name
    pub take: String,

    /// Destination file
    pub file: PathBuf,

    /// Include every descendant take
    #[arg(short = 'R', long)]
    pub recursive: bool,
}

pub fn run(args: &SaveArgs, session: &TakeSession) -> Result<()> {
    let take = session
        .take_from_name(&args.take)
        .with_context(|| format!("Failed to read take '{}'", args.take))?;
    take.save_to_file(&args.file, args.recursive)?;
    println!("Saved take '{}' to {}", take.name(), args.file.display());
    Ok(())
}

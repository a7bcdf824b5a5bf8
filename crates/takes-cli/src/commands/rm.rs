use anyhow::{Context, Result};
use clap::Args;
use takes_core::TakeSession;

#[derive(Args)]
pub struct RmArgs {
    /// Take name
    pub take: String,

    /// Also remove every descendant take
    #[arg(short = 'R', long)]
    pub recursive: bool,
}

pub fn run(args: &RmArgs, session: &TakeSession) -> Result<()> {
    let take = session
        .take_from_name(&args.take)
        .with_context(|| format!("Failed to read take '{}'", args.take))?;
    take.remove(args.recursive)?;
    println!("Removed take '{}'", args.take);
    Ok(())
}

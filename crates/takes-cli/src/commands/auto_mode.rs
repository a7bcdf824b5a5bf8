use anyhow::Result;
use clap::{Args, ValueEnum};
use takes_core::TakeSession;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Args)]
pub struct AutoModeArgs {
    pub state: Switch,
}

pub fn run(args: &AutoModeArgs, session: &TakeSession) -> Result<()> {
    let on = matches!(args.state, Switch::On);
    session.set_auto_mode(on)?;
    println!("Auto mode {}", if on { "on" } else { "off" });
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;
mod scene;

#[derive(Parser)]
#[command(
    name = "takes",
    version,
    about = "Create, inspect and edit takes in a saved scene"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Scene file (JSON) holding nodes and takes
    #[arg(long, global = true, env = "TAKES_SCENE", default_value = "scene.json")]
    scene: PathBuf,

    /// Take settings file (JSON)
    #[arg(long, global = true, env = "TAKES_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let scene = scene::Scene::open(&cli.scene, cli.config.as_deref())?;
    let session = scene.session();
    let format = cli.format;

    match &cli.command {
        commands::Commands::Ls(args) => commands::ls::run(args, session, format)?,
        commands::Commands::Show(args) => commands::show::run(args, session, format)?,
        commands::Commands::Current => commands::current::run(session, format)?,
        commands::Commands::Set(args) => commands::set::run(args, session, format)?,
        commands::Commands::Create(args) => commands::create::run(args, session, format)?,
        commands::Commands::Rm(args) => commands::rm::run(args, session)?,
        commands::Commands::Rename(args) => commands::rename::run(args, session, format)?,
        commands::Commands::Parent(args) => commands::parent::run(args, session, format)?,
        commands::Commands::Children(args) => commands::children::run(args, session, format)?,
        commands::Commands::IncludeFlag(args) => {
            commands::include_flag::run(args, session, format)?
        }
        commands::Commands::IncludeParms(args) => {
            commands::include_parms::run(args, session, format)?
        }
        commands::Commands::Merge(args) => commands::merge::run(args, session, format)?,
        commands::Commands::Copy(args) => commands::copy::run(args, session, format)?,
        commands::Commands::Save(args) => commands::save::run(args, session)?,
        commands::Commands::Load(args) => commands::load::run(args, session, format)?,
        commands::Commands::AutoMode(args) => commands::auto_mode::run(args, session)?,
    }

    if cli.command.mutates_scene() {
        scene.save()?;
    }
    Ok(())
}

pub mod auto_mode;
pub mod children;
pub mod copy;
pub mod create;
pub mod current;
pub mod include_flag;
pub mod include_parms;
pub mod load;
pub mod ls;
pub mod merge;
pub mod parent;
pub mod rename;
pub mod rm;
pub mod save;
pub mod set;
pub mod show;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List takes, optionally filtered by a glob pattern
    Ls(ls::LsArgs),
    /// Show a take and everything it includes
    Show(show::ShowArgs),
    /// Show the active take
    Current,
    /// Make a take the active take
    Set(set::SetArgs),
    /// Create a new take
    Create(create::CreateArgs),
    /// Remove a take
    Rm(rm::RmArgs),
    /// Rename a take
    Rename(rename::RenameArgs),
    /// Show or change the parent of a take
    Parent(parent::ParentArgs),
    /// List the direct children of a take
    Children(children::ChildrenArgs),
    /// Include or exclude a node flag
    IncludeFlag(include_flag::IncludeFlagArgs),
    /// Include or exclude parameters of a node
    IncludeParms(include_parms::IncludeParmsArgs),
    /// Merge one take into another
    Merge(merge::MergeArgs),
    /// Copy a take under a new name
    Copy(copy::CopyArgs),
    /// Save a take to a file
    Save(save::SaveArgs),
    /// Load takes from a file
    Load(load::LoadArgs),
    /// Turn auto-include of edited parameters on or off
    AutoMode(auto_mode::AutoModeArgs),
}

impl Commands {
    /// Whether the scene file must be written back after the command.
    pub fn mutates_scene(&self) -> bool {
        match self {
            Commands::Ls(_)
            | Commands::Show(_)
            | Commands::Current
            | Commands::Children(_)
            | Commands::Save(_) => false,
            Commands::Parent(args) => args.parent.is_some(),
            _ => true,
        }
    }
}

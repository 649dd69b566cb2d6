//! CLI argument definitions for fmm.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fmm",
    version,
    about = "A Factorio mod manager",
    long_about = "fmm works out which mods a set of mods needs, looking in the local mods \
                  directory first and on the Factorio mod portal second."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the config file (default: ~/.fmm/config.toml)
    #[arg(long, global = true, env = "FMM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mods directory to operate on
    #[arg(long, global = true)]
    pub mods_dir: Option<PathBuf>,

    /// Factorio installation directory; mods are read from its `mods` folder
    #[arg(long, global = true)]
    pub game_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve mods and their dependencies, and check which are installed
    Resolve {
        /// Mods to resolve: `Name`, `Name@Version`, a factorio-current.log or a mod-list.json
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Only check the given mods, do not resolve dependencies
        #[arg(long)]
        no_deps: bool,
        /// Do not contact the mod portal
        #[arg(long)]
        offline: bool,
        /// Print download URLs for mods found on the mod portal
        #[arg(long)]
        urls: bool,
    },

    /// List the contents of the mods directory
    List,

    /// Enable mods and their dependencies in mod-list.json
    Enable {
        /// Mods to enable: `Name`, `Name@Version`, a factorio-current.log or a mod-list.json
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Only enable the given mods, not their dependencies
        #[arg(long)]
        no_deps: bool,
        /// Do not contact the mod portal
        #[arg(long)]
        offline: bool,
        /// Disable every other mod except base first
        #[arg(long)]
        disable_all: bool,
    },

    /// Disable mods in mod-list.json
    Disable {
        /// Mods to disable; versions are ignored
        #[arg(required_unless_present = "disable_all")]
        inputs: Vec<String>,
        /// Disable every mod except base
        #[arg(long)]
        disable_all: bool,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}

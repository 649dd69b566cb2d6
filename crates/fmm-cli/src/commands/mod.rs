//! Command dispatch and handler modules.

mod disable;
mod enable;
mod list;
mod resolve;

use miette::Result;

use fmm_core::config::Config;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Resolve {
            inputs,
            no_deps,
            offline,
            urls,
        } => resolve::exec(&config, &inputs, no_deps, offline, urls),
        Command::List => list::exec(&config),
        Command::Enable {
            inputs,
            no_deps,
            offline,
            disable_all,
        } => enable::exec(&config, &inputs, no_deps, offline, disable_all),
        Command::Disable {
            inputs,
            disable_all,
        } => disable::exec(&config, &inputs, disable_all),
    }
}

/// Load the config file and apply directory flags on top of it.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(game_dir) = &cli.game_dir {
        config.paths.game_dir = Some(game_dir.clone());
        config.paths.mods_dir = None;
    }
    if let Some(mods_dir) = &cli.mods_dir {
        config.paths.mods_dir = Some(mods_dir.clone());
    }
    tracing::debug!("Using mods directory {}", config.mods_dir().display());
    Ok(config)
}

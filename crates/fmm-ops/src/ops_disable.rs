//! Operation: disable mods in `mod-list.json`.

use fmm_core::config::Config;
use fmm_core::input;
use fmm_core::mod_list::{ModListJson, MOD_LIST_JSON};
use fmm_util::errors::FmmResult;

/// Options for `fmm disable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisableOptions {
    /// Disable every mod except `base` before the named ones.
    pub disable_all: bool,
}

#[derive(Debug, Default)]
pub struct DisableOutcome {
    pub disabled: Vec<String>,
    /// Names with no entry in the list, plus `base`, which stays enabled.
    pub skipped: Vec<String>,
}

/// Disable the mods named by `tokens` and write `mod-list.json` back.
/// Versions in the tokens are ignored. Dependencies are left alone.
pub fn disable<S: AsRef<str>>(
    config: &Config,
    tokens: &[S],
    options: DisableOptions,
) -> FmmResult<DisableOutcome> {
    let targets = input::read_seeds(tokens)?;
    let list_path = config.mods_dir().join(MOD_LIST_JSON);
    let mut list = ModListJson::load(&list_path)?;

    if options.disable_all {
        list.disable_all();
    }

    let mut outcome = DisableOutcome::default();
    for target in targets {
        if list.disable(&target.name) {
            outcome.disabled.push(target.name);
        } else {
            tracing::warn!("{} was not disabled", target.name);
            outcome.skipped.push(target.name);
        }
    }

    list.save(&list_path)?;
    Ok(outcome)
}

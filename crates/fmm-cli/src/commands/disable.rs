//! Handler for `fmm disable`.

use miette::Result;

use fmm_core::config::Config;
use fmm_ops::ops_disable::{self, DisableOptions};
use fmm_util::progress;

pub fn exec(config: &Config, inputs: &[String], disable_all: bool) -> Result<()> {
    let outcome = ops_disable::disable(config, inputs, DisableOptions { disable_all })?;

    if disable_all {
        progress::status("Disabled", "all mods except base");
    }
    for name in &outcome.disabled {
        progress::status("Disabled", name);
    }
    for name in &outcome.skipped {
        progress::status_warn("Skipped", name);
    }
    Ok(())
}

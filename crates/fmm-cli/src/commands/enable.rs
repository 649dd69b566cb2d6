//! Handler for `fmm enable`.

use miette::Result;

use fmm_core::config::Config;
use fmm_ops::ops_enable::{self, EnableOptions};
use fmm_util::progress;

pub fn exec(
    config: &Config,
    inputs: &[String],
    no_deps: bool,
    offline: bool,
    disable_all: bool,
) -> Result<()> {
    let options = EnableOptions {
        no_deps,
        offline,
        disable_all,
    };

    let spinner = (!no_deps && !offline).then(|| progress::spinner("Resolving dependencies..."));
    let outcome = ops_enable::enable(config, inputs, options);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let outcome = outcome?;

    if disable_all {
        progress::status("Disabled", "all mods except base");
    }
    for ident in &outcome.enabled {
        progress::status("Enabled", &ident.to_string());
    }
    for ident in &outcome.missing {
        progress::status_warn("Missing", &ident.to_string());
    }
    let unresolved = outcome.resolution.as_ref().map_or(0, |r| r.report.len());
    if let Some(resolution) = &outcome.resolution {
        for failure in &resolution.report.failures {
            progress::status_warn("Unresolved", &failure.to_string());
        }
    }

    progress::status_info(
        "Finished",
        &format!(
            "{} mods enabled, {} not installed, {unresolved} unresolved",
            outcome.enabled.len(),
            outcome.missing.len()
        ),
    );
    Ok(())
}

//! Handler for `fmm resolve`.

use miette::Result;

use fmm_core::config::Config;
use fmm_ops::ops_resolve::{self, ModPresence, ResolveOptions, ResolveOutcome};
use fmm_portal::client::with_credentials;
use fmm_resolver::resolver::{Resolution, ResolvedSource};
use fmm_util::progress;

pub fn exec(
    config: &Config,
    inputs: &[String],
    no_deps: bool,
    offline: bool,
    urls: bool,
) -> Result<()> {
    let options = ResolveOptions { no_deps, offline };

    let spinner = (!no_deps && !offline).then(|| progress::spinner("Resolving dependencies..."));
    let outcome = ops_resolve::resolve(config, inputs, options);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let outcome = outcome?;

    for presence in &outcome.presence {
        print_presence(presence);
    }

    if let Some(resolution) = &outcome.resolution {
        for failure in &resolution.report.failures {
            progress::status_warn("Unresolved", &failure.to_string());
        }
        if urls {
            print_urls(resolution, config);
        }
    }

    progress::status_info("Finished", &summary(&outcome));
    Ok(())
}

fn print_presence(presence: &ModPresence) {
    let state = if presence.present {
        "installed"
    } else {
        "missing"
    };
    println!("{:<48} {state}", presence.ident);
}

fn print_urls(resolution: &Resolution, config: &Config) {
    for resolved in &resolution.mods {
        if let ResolvedSource::Remote {
            download_url: Some(url),
            ..
        } = &resolved.source
        {
            println!("{} {}", resolved.ident, with_credentials(url, &config.portal));
        }
    }
}

fn summary(outcome: &ResolveOutcome) -> String {
    let missing = outcome.missing().count();
    match &outcome.resolution {
        Some(resolution) => format!(
            "{} mods resolved, {missing} missing, {} unresolved",
            resolution.mods.len(),
            resolution.report.len()
        ),
        None => format!("{} mods checked, {missing} missing", outcome.presence.len()),
    }
}

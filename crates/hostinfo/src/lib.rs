// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

pub mod certificate;
pub mod collector;
pub mod config;
pub mod error;
pub mod facts;
pub mod parse;
pub mod submgr;
pub mod types;

#[cfg(test)]
mod test;

pub use collector::{collect, load_subman_information};
pub use config::Config;
pub use error::Error;
pub use types::{Billing, BillingModel, HostInfo, Marketplace};

pub const LOG_ENV: &str = "HOSTINFO_LOG";

/// Directives from `HOSTINFO_LOG` take precedence, `verbose` only changes
/// the fallback level from info to debug
fn log_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Init logging. Everything goes to stderr, stdout carries collected JSON only
///
/// # Errors
///
/// Will return `Err` if failed to initialize logging
pub fn trace_init(verbose: bool) -> anyhow::Result<()> {
    use std::env;
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let filter = log_filter(env::var(LOG_ENV).ok().as_deref(), verbose);
    let detailed = filter
        .max_level_hint()
        .is_some_and(|level| level >= LevelFilter::DEBUG);

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(detailed)
        .with_file(detailed)
        .with_line_number(detailed);
    let stderr = if detailed {
        stderr.pretty().boxed()
    } else {
        stderr.compact().boxed()
    };

    // systemd sets INVOCATION_ID for every unit it starts
    let journald = env::var_os("INVOCATION_ID")
        .and_then(|_| tracing_journald::layer().ok())
        .map(|layer| layer.with_syslog_identifier("hostinfo".to_owned()));

    tracing_subscriber::registry()
        .with(journald.with_filter(LevelFilter::INFO))
        .with(stderr.with_filter(filter))
        .try_init()
        .context("tracing shouldn't already have been set up")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults() {
        let quiet = log_filter(None, false);
        let verbose = log_filter(None, true);
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(verbose.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn filter_from_env_wins_over_verbose() {
        let filter = log_filter(Some("warn"), true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
        let filter = log_filter(Some("hostinfo=trace"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}

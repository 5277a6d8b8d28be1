// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use crate::certificate::host_id;
use crate::config::Config;
use crate::facts::facts_to_host_info;
use crate::submgr::{self, CommandRunner, SubscriptionManager};
use crate::types::HostInfo;
use tracing::{debug, warn};

/// Fill `hi` with subscription information.
///
/// Best effort: every failed step is logged and leaves its fields untouched,
/// the remaining steps are still executed.
pub fn load_subman_information(config: &Config, runner: &impl CommandRunner, hi: &mut HostInfo) {
    match host_id(config) {
        Ok(host_id) => hi.host_id = Some(host_id),
        Err(e) => warn!("Error getting host id: {e}"),
    }

    debug!("Getting `subscription-manager usage`");
    match submgr::usage(runner) {
        Ok(usage) => hi.usage = Some(usage),
        Err(e) => warn!("Error getting host usage: {e}"),
    }

    debug!("Getting `subscription-manager service-level`");
    match submgr::service_level(runner) {
        Ok(level) => hi.support = Some(level),
        Err(e) => warn!("Error getting service level: {e}"),
    }

    debug!("Getting `subscription-manager facts`");
    match submgr::facts(runner) {
        Ok(facts) => facts_to_host_info(&facts, hi),
        Err(e) => warn!("Error getting host facts: {e}"),
    }
}

/// Collect fresh `HostInfo` using entitlement tool from `config`
#[must_use]
pub fn collect(config: &Config) -> HostInfo {
    let runner = SubscriptionManager::from_config(config);
    let mut hi = HostInfo::default();
    load_subman_information(config, &runner, &mut hi);
    hi
}

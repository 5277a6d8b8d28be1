// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use clap::Args;
use std::path::PathBuf;

/// Where the consumer certificate lives on registered hosts
pub const DEFAULT_HOST_CERT: &str = "/etc/pki/consumer/cert.pem";
pub const DEFAULT_SUBSCRIPTION_MANAGER: &str = "subscription-manager";

#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Consumer certificate, its subject CN is the host id
    #[arg(long, env = "HOST_CERT", default_value = DEFAULT_HOST_CERT)]
    pub host_cert: PathBuf,

    /// Entitlement tool to query for usage, service level and facts
    #[arg(long, env = "SUBSCRIPTION_MANAGER", default_value = DEFAULT_SUBSCRIPTION_MANAGER)]
    pub subscription_manager: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Config {
        Config {
            host_cert: PathBuf::from(DEFAULT_HOST_CERT),
            subscription_manager: PathBuf::from(DEFAULT_SUBSCRIPTION_MANAGER),
        }
    }

    #[must_use]
    pub fn set_host_cert(self, host_cert: impl Into<PathBuf>) -> Config {
        Self {
            host_cert: host_cert.into(),
            ..self
        }
    }

    #[must_use]
    pub fn set_subscription_manager(self, program: impl Into<PathBuf>) -> Config {
        Self {
            subscription_manager: program.into(),
            ..self
        }
    }
}

// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use crate::types::{BillingModel, HostInfo, Marketplace};
use std::collections::BTreeMap;
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::debug;

/// Facts reported by entitlement tool, key to value
pub type Facts = BTreeMap<String, String>;

/// Facts we know how to map into `HostInfo`.
///
/// Declaration order is the order of application: if facts of several
/// marketplaces are present at once, the later provider overwrites the earlier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
pub enum FactKey {
    #[strum(serialize = "cpu.cpu_socket(s)")]
    SocketCount,
    #[strum(serialize = "distribution.name")]
    DistributionName,
    #[strum(serialize = "aws_instance_id")]
    AwsInstanceId,
    #[strum(serialize = "aws_account_id")]
    AwsAccountId,
    #[strum(serialize = "azure_instance_id")]
    AzureInstanceId,
    #[strum(serialize = "azure_subscription_id")]
    AzureSubscriptionId,
    #[strum(serialize = "gcp_instance_id")]
    GcpInstanceId,
    #[strum(serialize = "gcp_project_number")]
    GcpProjectNumber,
}

impl FactKey {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    fn apply(self, value: &str, hi: &mut HostInfo) {
        let value = Some(value.to_owned());
        let billing = &mut hi.billing;
        match self {
            Self::SocketCount => hi.socket_count = value,
            Self::DistributionName => hi.product = value,
            Self::AwsInstanceId => {
                billing.marketplace = Some(Marketplace::Aws);
                billing.marketplace_instance_id = value;
            }
            Self::AzureInstanceId => {
                billing.marketplace = Some(Marketplace::Azure);
                billing.marketplace_instance_id = value;
            }
            Self::GcpInstanceId => {
                billing.marketplace = Some(Marketplace::Gcp);
                billing.marketplace_instance_id = value;
            }
            Self::AwsAccountId | Self::AzureSubscriptionId | Self::GcpProjectNumber => {
                billing.marketplace_account = value;
            }
        }
    }
}

/// Merge known `facts` into `hi`, unknown ones are ignored
pub fn facts_to_host_info(facts: &Facts, hi: &mut HostInfo) {
    for key in FactKey::iter() {
        if let Some(value) = facts.get(key.name()) {
            key.apply(value, hi);
        }
    }

    if hi.billing.marketplace.is_some() {
        hi.billing.model = Some(BillingModel::Marketplace);
    }

    let unmapped = facts
        .keys()
        .filter(|key| FactKey::from_str(key).is_err())
        .count();
    debug!("Mapped facts into host info, {unmapped} unmapped facts ignored");
}

// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use hostinfo::Config;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "hostinfo")]
#[command(about = "Collect subscription information of the host", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Pretty-print collected JSON
    #[arg(long)]
    pretty: bool,

    /// Log at debug level, unless HOSTINFO_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    hostinfo::trace_init(cli.verbose)?;

    debug!("CLI is {:#?}", cli);

    let hi = hostinfo::collect(&cli.config);
    info!(
        "Collected host info for {}",
        hi.host_id.as_deref().unwrap_or("unknown host")
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&hi)
    } else {
        serde_json::to_string(&hi)
    }
    .context("serializing host info")?;
    println!("{json}");
    Ok(())
}

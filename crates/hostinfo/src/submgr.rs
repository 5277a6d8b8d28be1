// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use crate::config::Config;
use crate::error::{CommandError, Error};
use crate::facts::Facts;
use crate::parse::{parse_facts, parse_single_value};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

pub trait CommandRunner {
    /// Run entitlement tool with single `subcommand` argument, and return its stdout
    /// # Errors
    /// Return `Err` if tool fail to execute or exits with non-zero status
    fn run(&self, subcommand: &str) -> Result<String, CommandError>;
}

pub struct SubscriptionManager {
    pub program: PathBuf,
}

impl SubscriptionManager {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.subscription_manager)
    }

    fn command_line(&self, subcommand: &str) -> String {
        format!("{} {subcommand}", self.program.display())
    }
}

impl CommandRunner for SubscriptionManager {
    fn run(&self, subcommand: &str) -> Result<String, CommandError> {
        let command = self.command_line(subcommand);
        debug!("Executing `{command}`...");

        let output = Command::new(&self.program)
            .arg(subcommand)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| CommandError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("Stderr: {}", stderr.trim());
            return Err(CommandError::Failed {
                command,
                status: output.status,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn query_single_value(runner: &impl CommandRunner, subcommand: &str) -> Result<String, Error> {
    let output = runner.run(subcommand)?;
    parse_single_value(&output).map_err(|source| Error::Parse {
        command: subcommand.to_owned(),
        source,
    })
}

/// Usage of the system, as `subscription-manager usage` reports it
/// # Errors
/// Return `Err` if tool fails, or its output have no `label: value` line
pub fn usage(runner: &impl CommandRunner) -> Result<String, Error> {
    query_single_value(runner, "usage")
}

/// # Errors
/// Return `Err` if tool fails, or its output have no `label: value` line
pub fn service_level(runner: &impl CommandRunner) -> Result<String, Error> {
    query_single_value(runner, "service-level")
}

/// # Errors
/// Return `Err` if tool fails, malformed lines are skipped silently
pub fn facts(runner: &impl CommandRunner) -> Result<Facts, Error> {
    let output = runner.run("facts")?;
    Ok(parse_facts(&output))
}

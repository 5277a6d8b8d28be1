// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

//! Parsers for the text output of the entitlement tool.
//!
//! `usage` and `service-level` print a single `label: value` line,
//! `facts` prints INI-like listing of `key: value` lines, where lines starting
//! with `;` or `#` are comments.

use crate::error::ParseError;
use crate::facts::Facts;

/// Split first line of `output` on first colon, and return trimmed remainder
/// # Errors
/// Return `Err` if first line contains no colon
pub fn parse_single_value(output: &str) -> Result<String, ParseError> {
    let line = output.lines().next().unwrap_or_default();
    line.split_once(':')
        .map(|(_, value)| value.trim().to_owned())
        .ok_or_else(|| ParseError::MissingSeparator {
            line: line.trim().to_owned(),
        })
}

/// Collect all `key: value` lines of `output`. Never fails, lines without
/// colon are skipped
#[must_use]
pub fn parse_facts(output: &str) -> Facts {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with([';', '#']))
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

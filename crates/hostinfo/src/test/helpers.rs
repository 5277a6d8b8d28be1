use crate::error::CommandError;
use crate::facts::Facts;
use crate::submgr::CommandRunner;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;
use std::process::ExitStatus;
use tempfile::{NamedTempFile, TempDir};

pub fn write_temp(content: &str) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Executable `sh` script standing in for entitlement tool.
/// Written through a closed handle, executing a file still open for write fails with ETXTBSY
pub fn write_script(body: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("subscription-manager");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    Ok((dir, path))
}

pub fn facts(pairs: &[(&str, &str)]) -> Facts {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

/// Fake entitlement tool: answers scripted subcommands, fails (exit 1) on everything else
#[derive(Default)]
pub struct ScriptedRunner {
    replies: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, subcommand: &str, output: &str) -> Self {
        self.replies.insert(subcommand.into(), output.into());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, subcommand: &str) -> Result<String, CommandError> {
        self.calls.borrow_mut().push(subcommand.into());
        self.replies
            .get(subcommand)
            .cloned()
            .ok_or_else(|| CommandError::Failed {
                command: format!("subscription-manager {subcommand}"),
                status: ExitStatus::from_raw(1 << 8),
            })
    }
}

// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;
use x509_parser::error::{PEMError, X509Error};

#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("reading certificate {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("decoding PEM from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: x509_parser::nom::Err<PEMError>,
    },

    #[error("parsing X.509 certificate from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: x509_parser::nom::Err<X509Error>,
    },

    #[error("certificate {path} has no subject common name")]
    MissingCommonName { path: PathBuf },
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("`{command}` failed to execute: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` has failed: {status}")]
    Failed { command: String, status: ExitStatus },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no `label: value` separator in {line:?}")]
    MissingSeparator { line: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Certificate(#[from] CertificateError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("error parsing `{command}` output: {source}")]
    Parse {
        command: String,
        #[source]
        source: ParseError,
    },
}

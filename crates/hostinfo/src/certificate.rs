// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use crate::config::Config;
use crate::error::CertificateError;
use std::path::Path;
use tracing::debug;
use x509_parser::pem::parse_x509_pem;

/// Read PEM certificate from `path` and return subject's common name
/// # Errors
/// Return `Err` if file can't be read, first PEM block can't be decoded,
/// its content isn't X.509 certificate, or subject has no CN
pub fn load_common_name(path: &Path) -> Result<String, CertificateError> {
    let cert_file = std::fs::read(path).map_err(|source| CertificateError::Read {
        path: path.to_owned(),
        source,
    })?;

    let (_rem, pem) = parse_x509_pem(&cert_file).map_err(|source| CertificateError::Decode {
        path: path.to_owned(),
        source,
    })?;
    debug!("Decoded PEM block {} from {}", pem.label, path.display());

    let x509 = pem.parse_x509().map_err(|source| CertificateError::Parse {
        path: path.to_owned(),
        source,
    })?;

    // Several CN attributes may be present, the last one is the consumer id
    let cn = x509
        .subject()
        .iter_common_name()
        .last()
        .and_then(|cn| cn.as_str().ok())
        .map(ToOwned::to_owned)
        .ok_or_else(|| CertificateError::MissingCommonName {
            path: path.to_owned(),
        });
    cn
}

/// `subscription-manager` uses CN of the consumer certificate as consumer id,
/// which is our host id
/// # Errors
/// Same as `load_common_name()`
pub fn host_id(config: &Config) -> Result<String, CertificateError> {
    load_common_name(&config.host_cert)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::data::{HOST_CERT, HOST_CERT_CN, NO_CN_CERT, TWO_CN_CERT};
    use crate::test::helpers::write_temp;

    #[test]
    fn common_name() -> anyhow::Result<()> {
        let file = write_temp(HOST_CERT)?;
        assert_eq!(load_common_name(file.path())?, HOST_CERT_CN);
        Ok(())
    }

    #[test]
    fn last_common_name_wins() -> anyhow::Result<()> {
        let file = write_temp(TWO_CN_CERT)?;
        assert_eq!(load_common_name(file.path())?, "second");
        Ok(())
    }

    #[test]
    fn host_id_from_config() -> anyhow::Result<()> {
        let file = write_temp(HOST_CERT)?;
        let config = Config::new().set_host_cert(file.path());
        assert_eq!(host_id(&config)?, HOST_CERT_CN);
        Ok(())
    }

    #[test]
    fn missing_file() {
        let err = load_common_name(Path::new("/nonexistent/cert.pem")).unwrap_err();
        assert!(matches!(err, CertificateError::Read { .. }), "{err}");
    }

    #[test]
    fn not_pem() -> anyhow::Result<()> {
        let file = write_temp("this is not a certificate\n")?;
        let err = load_common_name(file.path()).unwrap_err();
        assert!(matches!(err, CertificateError::Decode { .. }), "{err}");
        Ok(())
    }

    #[test]
    fn pem_with_garbage_der() -> anyhow::Result<()> {
        let garbage = "-----BEGIN CERTIFICATE-----\naGVsbG8gd29ybGQ=\n-----END CERTIFICATE-----\n";
        let file = write_temp(garbage)?;
        let err = load_common_name(file.path()).unwrap_err();
        assert!(matches!(err, CertificateError::Parse { .. }), "{err}");
        Ok(())
    }

    #[test]
    fn no_common_name() -> anyhow::Result<()> {
        let file = write_temp(NO_CN_CERT)?;
        let err = load_common_name(file.path()).unwrap_err();
        let missing_cn = matches!(err, CertificateError::MissingCommonName { .. });
        assert!(missing_cn, "{err}");
        Ok(())
    }
}

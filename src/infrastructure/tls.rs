use axum_server::tls_rustls::RustlsConfig;
use rcgen::{CertifiedKey, generate_simple_self_signed};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TlsError {
    #[error("certificate generation failed: {0}")]
    Generate(#[from] rcgen::Error),
    #[error("failed to load certificate into rustls: {0}")]
    Load(#[from] std::io::Error),
}

/// PEM-encoded certificate and private key.
pub struct AdHocCertificate {
    pub cert_pem: String,
    pub key_pem: String,
}

impl AdHocCertificate {
    /// Self-signed certificate for `localhost`, valid only for this process.
    pub fn generate() -> Result<Self, TlsError> {
        let CertifiedKey { cert, key_pair } =
            generate_simple_self_signed(vec!["localhost".to_string(), "127.0.0.1".to_string()])?;

        Ok(Self {
            cert_pem: cert.pem(),
            key_pem: key_pair.serialize_pem(),
        })
    }
}

pub async fn ad_hoc_config() -> Result<RustlsConfig, TlsError> {
    let certificate = AdHocCertificate::generate()?;
    let config = RustlsConfig::from_pem(
        certificate.cert_pem.into_bytes(),
        certificate.key_pem.into_bytes(),
    )
    .await?;

    info!("Generated ad-hoc self-signed certificate");
    Ok(config)
}

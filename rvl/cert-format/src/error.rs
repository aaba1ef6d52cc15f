use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertError {
    #[error("issuer name is required")]
    MissingIssuerName,

    #[error("unknown issuer: {0}")]
    UnknownIssuer(String),

    #[error("no certificate for issuer index {0}")]
    NoSuchCertificate(u32),

    #[error("invalid enum value {value:#x} for {kind}")]
    InvalidEnumValue { kind: &'static str, value: u32 },

    #[error("unexpected end of data: need {needed} bytes, have {have}")]
    UnexpectedEof { needed: usize, have: usize },
}

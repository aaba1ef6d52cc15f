use thiserror::Error;

#[derive(Debug, Error)]
pub enum WadError {
    #[error("invalid header size {0:#x}, expected 0x20")]
    InvalidHeaderSize(u32),

    #[error("invalid WAD type {0:#010x}")]
    InvalidType(u32),

    #[error("unexpected end of data: need {needed} bytes, have {have}")]
    UnexpectedEof { needed: usize, have: usize },

    #[error("declared certificate chain size {declared} does not match actual size {actual}")]
    CertChainSizeMismatch { declared: u32, actual: usize },
}

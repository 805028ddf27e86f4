use thiserror::Error;

/// vCard codec errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Unsupported encoding kind: '{0}'")]
    UnsupportedEncodingKind(String),

    #[error("Unknown charset: '{0}'")]
    UnknownCharset(String),

    #[error("Quoted-printable decode error: {0}")]
    QuotedPrintable(#[from] quoted_printable::QuotedPrintableError),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;

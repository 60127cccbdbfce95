use std::fmt::Display;

use bnb_core::options::OptionsError;
use bnb_encodings::EncodingError;
use thiserror::Error;

use crate::parsers::InstanceParseError;

pub(crate) type BnbResult<T> = Result<T, BnbError>;

#[derive(Error, Debug)]
pub(crate) enum BnbError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The file {0} could not be opened.")]
    InvalidInstanceFile(String),
    #[error("The instance was invalid, more details: {0}")]
    InvalidInstance(#[from] InstanceParseError),
    #[error("The options were invalid, more details: {0}")]
    InvalidOptions(#[from] OptionsError),
    #[error("The problem could not be encoded, more details: {0}")]
    Encoding(#[from] EncodingError),
}

impl BnbError {
    pub(crate) fn invalid_instance(path: impl Display) -> Self {
        Self::InvalidInstanceFile(format!("{path}"))
    }
}

use thiserror::Error;

pub type CredcheckResult<T> = Result<T, CredcheckError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredcheckError {
    #[error("unknown strength label: {0}")]
    UnknownStrengthLabel(String),
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StripsError {
    #[error("No valid plan found: no action asserts `{0}`")]
    NoPlanFound(String),
    #[error("Search exhausted after {0} iterations")]
    SearchExhausted(usize),
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),
}

pub type Result<T> = std::result::Result<T, StripsError>;

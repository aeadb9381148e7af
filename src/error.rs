use crate::data::Family;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixTreeError {
    #[error("Invalid range `{0}`")]
    InvalidRange(String),
    #[error("Address family mismatch: expected {expected}, found {found}")]
    FamilyMismatch { expected: Family, found: Family },
    #[error("Invalid arity `{0}`, a node must hold at least 2 keys")]
    InvalidArity(usize),
}

pub type Result<T> = std::result::Result<T, PrefixTreeError>;

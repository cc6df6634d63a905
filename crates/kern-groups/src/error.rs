use std::result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GroupsError {
    #[error("invalid kerning side: {0}")]
    InvalidSide(u8),

    #[error("unexpected key in RTL kerning: {0}")]
    MalformedRtlKey(String),
}

pub type Result<T> = result::Result<T, GroupsError>;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid search attribute name: {0}")]
    InvalidName(String),

    #[error("invalid search attribute type: {value} of type {shape} for {name}")]
    InvalidType {
        name: String,
        value: String,
        shape: &'static str,
    },

    #[error("search attributes type map is empty")]
    TypeMapEmpty,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

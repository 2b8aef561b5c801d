//! Demo Errors
//!
//! Every variant's `Display` is the message shown to the user.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Please enter a valid age (0-120)")]
    InvalidAge,

    #[error("Please enter a valid number")]
    InvalidNumber,

    #[error("Please enter valid positive numbers")]
    InvalidAmounts,

    #[error("Please enter some text")]
    EmptyText,

    #[error("No items to remove!")]
    NoItems,

    #[error("invalid demo config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;

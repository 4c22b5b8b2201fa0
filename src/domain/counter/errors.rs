//! Counter Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("invalid counter id")]
    InvalidId,

    #[error("invalid decimal value: {0:?}")]
    InvalidDecimal(String),

    #[error("decimal value out of integer range: {0}")]
    OutOfRange(String),

    #[error("counter overflow at {0}")]
    Overflow(i64),
}

//! Error types for the task store and the gacha pool.
//!
//! Empty input, nothing checked, and zero tickets are not errors: those
//! operations are silent no-ops. Only contract violations end up here.

use std::fmt;

use crate::gacha::rarity::Rarity;

/// Errors raised by [`crate::tasks::TaskStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// A toggle named a row that does not exist.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::IndexOutOfRange { index, len } => {
                write!(f, "task index {} out of range (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for TaskError {}

pub type TaskResult<T> = Result<T, TaskError>;

/// Static pool misconfiguration, detected once when the pool is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// A rarity tier has no candidates, so a draw landing on it has no outcome.
    EmptyTier(Rarity),
    /// Two entries share a collection key.
    DuplicateKey(&'static str),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::EmptyTier(rarity) => {
                write!(f, "rarity tier `{}` has no pool entries", rarity.label())
            }
            PoolError::DuplicateKey(key) => write!(f, "duplicate pool key {}", key),
        }
    }
}

impl std::error::Error for PoolError {}

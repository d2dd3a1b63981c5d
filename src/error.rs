//! Recoverable economy errors.
//!
//! Every variant is an expected condition the presentation layer shows as a
//! message. None of them leave state partially applied.

use crate::wallet::Resource;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EconomyError {
    #[error("not enough {resource}: need {required}, have {available}")]
    InsufficientFunds {
        resource: Resource,
        required: u64,
        available: u64,
    },

    #[error("upgrade is locked")]
    Locked,

    #[error("goal is not ready to claim")]
    NotClaimable,

    #[error("goal reward was already claimed")]
    AlreadyClaimed,

    #[error("no goal with id {0}")]
    UnknownGoal(u32),

    #[error("already owned")]
    AlreadyOwned,

    #[error("tier {0} does not exist")]
    InvalidTier(u8),

    #[error("no consumables of that kind left")]
    OutOfStock,

    #[error("no activity is running")]
    NoActiveActivity,

    #[error("input does not belong to the running activity")]
    ActivityMismatch,

    #[error("no language prompt is showing")]
    NoPrompt,
}

pub type EconomyResult<T> = Result<T, EconomyError>;

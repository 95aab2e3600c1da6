use thiserror::Error;

use crate::models::reminder::ReminderStatus;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid tooth number: {0}")]
    InvalidToothNumber(u8),

    #[error("not a tooth number: {0:?}")]
    UnparsableToothNumber(String),

    #[error("unknown tooth condition: {0}")]
    UnknownCondition(String),

    #[error("unknown dentition scheme: {0}")]
    UnknownScheme(String),

    #[error("unknown sex: {0}")]
    UnknownSex(String),

    #[error("unknown reminder type: {0}")]
    UnknownReminderKind(String),

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("reminder is already {0}")]
    ReminderClosed(ReminderStatus),
}

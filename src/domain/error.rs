use sea_orm::{DbErr, SqlErr};
use std::fmt;
use thiserror::Error;

/// Which kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Venue,
    Artist,
    Show,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Venue => "Venue",
            Self::Artist => "Artist",
            Self::Show => "Show",
        };
        f.write_str(name)
    }
}

/// Outcome kinds reported by every booking operation.
///
/// Storage failures are classified here so callers never see a raw `DbErr`.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity} already exists: {detail}")]
    Duplicate { entity: EntityKind, detail: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i32 },

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl BookingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    #[must_use]
    pub const fn not_found(entity: EntityKind, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn duplicate(entity: EntityKind, detail: impl Into<String>) -> Self {
        Self::Duplicate {
            entity,
            detail: detail.into(),
        }
    }
}

impl From<DbErr> for BookingError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(
                SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg),
            ) => Self::Constraint(msg),
            _ => Self::Storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_db_error_is_storage() {
        let err: BookingError = DbErr::Custom("disk I/O error".to_string()).into();
        assert!(matches!(err, BookingError::Storage(_)));
    }

    #[test]
    fn not_found_message_names_entity() {
        let err = BookingError::not_found(EntityKind::Artist, 9);
        assert_eq!(err.to_string(), "Artist 9 not found");
    }

    #[test]
    fn duplicate_message_names_entity() {
        let err = BookingError::duplicate(EntityKind::Venue, "The Musical Hop");
        assert_eq!(err.to_string(), "Venue already exists: The Musical Hop");
    }
}

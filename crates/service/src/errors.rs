use std::fmt;

use thiserror::Error;

/// Record types that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Account,
    Employee,
    Expense,
    ExpenseFile,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Account => "Account",
            EntityKind::Employee => "Employee",
            EntityKind::Expense => "Expense",
            EntityKind::ExpenseFile => "Expense file",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required field is blank or missing.
    #[error("{message}")]
    Validation { field: &'static str, message: String },
    /// The uploaded payload itself is unacceptable.
    #[error("{0}")]
    InvalidInput(String),
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: EntityKind, id: i32 },
    /// The metadata row exists but its bytes are gone.
    #[error("File no longer exists on server for record id: {id}")]
    FileNotOnDisk { id: i32 },
    #[error("Failed to save file: {0}")]
    StorageIo(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: EntityKind, id: i32) -> Self { Self::NotFound { entity, id } }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

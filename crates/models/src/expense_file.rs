use sea_orm::entity::prelude::*;

/// Metadata row for an uploaded expense document.
///
/// `file_path` is the absolute location of the bytes on disk. The row and the
/// file are written separately, so either may exist without the other.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expense_files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub file_name: String,
    pub file_type: String,
    pub file_path: String,
    /// Checked against `users` at upload time only.
    pub user_id: i32,
    /// Checked against `accounts` at upload time only.
    pub account_id: i32,
    pub uploaded_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

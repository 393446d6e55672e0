//! Create `expense_files` table.
//!
//! Metadata for uploaded expense documents. `user_id` and `account_id` are
//! checked at upload time only, so they carry no foreign key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExpenseFiles::Table)
                    .if_not_exists()
                    .col(pk_auto(ExpenseFiles::Id))
                    .col(string_len(ExpenseFiles::FileName, 512))
                    .col(string_len(ExpenseFiles::FileType, 16))
                    .col(string_len(ExpenseFiles::FilePath, 1024))
                    .col(integer(ExpenseFiles::UserId))
                    .col(integer(ExpenseFiles::AccountId))
                    .col(timestamp_with_time_zone(ExpenseFiles::UploadedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ExpenseFiles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ExpenseFiles { Table, Id, FileName, FileType, FilePath, UserId, AccountId, UploadedAt }

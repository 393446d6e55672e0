//! Create `employees` table.
//! Every descriptive column is nullable; updates may blank them out.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string_len_null(Employees::FirstName, 128))
                    .col(string_len_null(Employees::LastName, 128))
                    .col(string_len_null(Employees::Email, 255))
                    .col(string_len_null(Employees::Department, 128))
                    .col(timestamp_with_time_zone(Employees::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employees::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employees { Table, Id, FirstName, LastName, Email, Department, CreatedAt }

//! Create `expenses` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(pk_auto(Expenses::Id))
                    .col(string_len(Expenses::Title, 255))
                    .col(double(Expenses::Amount))
                    .col(string_len(Expenses::Category, 128))
                    .col(date(Expenses::ExpenseDate))
                    .col(timestamp_with_time_zone(Expenses::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Expenses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Expenses { Table, Id, Title, Amount, Category, ExpenseDate, CreatedAt }

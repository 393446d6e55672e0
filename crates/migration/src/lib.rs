//! Migrator creating the expense tables.
//! References between tables are plain integer columns; no foreign keys.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users;
mod m20240601_000002_create_accounts;
mod m20240601_000003_create_employees;
mod m20240601_000004_create_expenses;
mod m20240601_000005_create_expense_files;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users::Migration),
            Box::new(m20240601_000002_create_accounts::Migration),
            Box::new(m20240601_000003_create_employees::Migration),
            Box::new(m20240601_000004_create_expenses::Migration),
            Box::new(m20240601_000005_create_expense_files::Migration),
        ]
    }
}

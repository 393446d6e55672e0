//! SeaORM entities for the expense store plus connection helpers.

pub mod db;
pub mod user;
pub mod account;
pub mod employee;
pub mod expense;
pub mod expense_file;

#[cfg(test)]
mod tests;

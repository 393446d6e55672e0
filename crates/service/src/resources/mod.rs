//! Wire shapes and mapping rules for the plain CRUD resources.

pub mod user;
pub mod account;
pub mod employee;
pub mod expense;

pub use account::{AccountDto, Accounts};
pub use employee::{EmployeeDto, Employees};
pub use expense::{ExpenseDto, Expenses};
pub use user::{UserDto, Users};

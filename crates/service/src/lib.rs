//! Service layer for the expense backend.
//! - `crud`: one generic CRUD service instantiated per resource in `resources`.
//! - `expense_file`: upload, download, listing and removal of expense documents.
//! - `repository`: the data-access seam both build on.

pub mod errors;
pub mod logging;
pub mod repository;
pub mod validation;
pub mod crud;
pub mod resources;
pub mod expense_file;
#[cfg(test)]
pub mod test_support;

pub use crud::{CrudService, Resource};
pub use errors::{EntityKind, ServiceError};

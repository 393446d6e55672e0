use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::expense_file::ExpenseFileService;

/// Shared by every handler; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub files: Arc<ExpenseFileService>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, upload_dir: impl Into<PathBuf>) -> Self {
        let files = Arc::new(ExpenseFileService::new(db.clone(), upload_dir));
        Self { db, files }
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use models::expense_file;
use sea_orm::{entity::prelude::DateTimeWithTimeZone, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{error, info, instrument, warn};

use super::clock::{Clock, LocalClock};
use super::naming;
use crate::errors::{EntityKind, ServiceError};
use crate::logging::logged;
use crate::repository::{Repository, SeaOrmRepository, Stored};
use crate::resources::{Accounts, Users};

/// Shown in place of a user or account name that no longer resolves.
pub const UNRESOLVED_NAME: &str = "?";

pub struct ExpenseFiles;

impl Stored for ExpenseFiles {
    type Entity = expense_file::Entity;
    type Model = expense_file::Model;
    type ActiveModel = expense_file::ActiveModel;
    type PrimaryKey = expense_file::PrimaryKey;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFileDto {
    pub id: i32,
    pub file_name: String,
    pub file_type: String,
    pub file_path: String,
    pub user_name: String,
    pub account_name: String,
    pub uploaded_at: DateTimeWithTimeZone,
}

/// An upload as received, before any checks.
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub original_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// An open handle on stored bytes plus the name to present them under.
#[derive(Debug)]
pub struct FileDownload {
    pub file_name: String,
    pub file: fs::File,
}

#[derive(Clone)]
pub struct ExpenseFileService {
    db: DatabaseConnection,
    upload_dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl ExpenseFileService {
    pub fn new(db: DatabaseConnection, upload_dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(db, upload_dir, Arc::new(LocalClock))
    }

    pub fn with_clock(db: DatabaseConnection, upload_dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self { db, upload_dir: upload_dir.into(), clock }
    }

    pub fn upload_dir(&self) -> &Path { &self.upload_dir }

    fn files(&self) -> SeaOrmRepository<ExpenseFiles> { SeaOrmRepository::new(self.db.clone()) }
    fn users(&self) -> SeaOrmRepository<Users> { SeaOrmRepository::new(self.db.clone()) }
    fn accounts(&self) -> SeaOrmRepository<Accounts> { SeaOrmRepository::new(self.db.clone()) }

    /// Validate, resolve owner references, write the bytes, then record the row.
    ///
    /// A failed write leaves no row. A failed insert after a successful write
    /// leaves the file on disk.
    #[instrument(skip(self, file), fields(entity = %EntityKind::ExpenseFile))]
    pub async fn upload(&self, file: UploadedFile, user_id: i32, account_id: i32) -> Result<ExpenseFileDto, ServiceError> {
        logged(EntityKind::ExpenseFile, "upload", async {
            let ext = check_upload(&file)?;
            let user = self
                .users()
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| ServiceError::not_found(EntityKind::User, user_id))?;
            let account = self
                .accounts()
                .find_by_id(account_id)
                .await?
                .ok_or_else(|| ServiceError::not_found(EntityKind::Account, account_id))?;

            let stored_name = naming::stored_file_name(&user.name, &account.account_name, self.clock.now(), &ext);
            let dir = naming::absolute_dir(&self.upload_dir).map_err(storage_error)?;
            fs::create_dir_all(&dir).await.map_err(storage_error)?;
            let target = dir.join(&stored_name);
            if let Err(e) = fs::write(&target, &file.bytes).await {
                error!(path = %target.display(), error = %e, "writing upload failed");
                return Err(storage_error(e));
            }
            info!(path = %target.display(), bytes = file.bytes.len(), "upload written");

            let row = expense_file::ActiveModel {
                id: NotSet,
                file_name: Set(stored_name),
                file_type: Set(ext),
                file_path: Set(target.to_string_lossy().into_owned()),
                user_id: Set(user_id),
                account_id: Set(account_id),
                uploaded_at: Set(Utc::now().into()),
            };
            let saved = match self.files().save(row).await {
                Ok(saved) => saved,
                Err(e) => {
                    error!(path = %target.display(), error = %e, "metadata insert failed, file left on disk");
                    return Err(e);
                }
            };
            Ok(to_dto(saved, user.name, account.account_name))
        })
        .await
    }

    /// Every metadata row, with owner names looked up now.
    #[instrument(skip(self), fields(entity = %EntityKind::ExpenseFile))]
    pub async fn list(&self) -> Result<Vec<ExpenseFileDto>, ServiceError> {
        logged(EntityKind::ExpenseFile, "list", async {
            let rows = self.files().find_all().await?;
            let mut out = Vec::with_capacity(rows.len());
            for row in rows {
                let user_name = self.users().find_by_id(row.user_id).await?.map(|u| u.name);
                let account_name = self.accounts().find_by_id(row.account_id).await?.map(|a| a.account_name);
                out.push(to_dto(
                    row,
                    user_name.unwrap_or_else(|| UNRESOLVED_NAME.to_string()),
                    account_name.unwrap_or_else(|| UNRESOLVED_NAME.to_string()),
                ));
            }
            Ok(out)
        })
        .await
    }

    #[instrument(skip(self), fields(entity = %EntityKind::ExpenseFile))]
    pub async fn download(&self, id: i32) -> Result<FileDownload, ServiceError> {
        logged(EntityKind::ExpenseFile, "download", async {
            let row = self
                .files()
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::not_found(EntityKind::ExpenseFile, id))?;
            match fs::File::open(&row.file_path).await {
                Ok(file) => Ok(FileDownload { file_name: row.file_name, file }),
                Err(e) => {
                    warn!(path = %row.file_path, error = %e, "stored file is not readable");
                    Err(ServiceError::FileNotOnDisk { id })
                }
            }
        })
        .await
    }

    /// Remove the backing file if possible, then always remove the row.
    #[instrument(skip(self), fields(entity = %EntityKind::ExpenseFile))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        logged(EntityKind::ExpenseFile, "delete", async {
            let files = self.files();
            let row = files
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::not_found(EntityKind::ExpenseFile, id))?;
            match fs::remove_file(&row.file_path).await {
                Ok(()) => info!(path = %row.file_path, "stored file removed"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!(path = %row.file_path, "stored file already missing")
                }
                Err(e) => warn!(path = %row.file_path, error = %e, "could not remove stored file"),
            }
            files.delete_by_id(id).await?;
            Ok(())
        })
        .await
    }
}

/// Returns the lowercase extension of an acceptable upload.
fn check_upload(file: &UploadedFile) -> Result<String, ServiceError> {
    if file.bytes.is_empty() {
        return Err(ServiceError::InvalidInput("File is required".into()));
    }
    let name = file
        .original_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ServiceError::InvalidInput("File name is required".into()))?;
    match naming::extension(name) {
        Some(ext) if naming::is_allowed(&ext) => Ok(ext),
        _ => Err(ServiceError::InvalidInput("Only .csv and .xlsx files are allowed".into())),
    }
}

fn storage_error(e: std::io::Error) -> ServiceError { ServiceError::StorageIo(e.to_string()) }

fn to_dto(m: expense_file::Model, user_name: String, account_name: String) -> ExpenseFileDto {
    ExpenseFileDto {
        id: m.id,
        file_name: m.file_name,
        file_type: m.file_type,
        file_path: m.file_path,
        user_name,
        account_name,
        uploaded_at: m.uploaded_at,
    }
}

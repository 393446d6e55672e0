//! Uploaded expense documents: bytes on disk, metadata in `expense_files`.

pub mod clock;
pub mod naming;
mod service;

pub use clock::{Clock, FixedClock, LocalClock};
pub use service::{ExpenseFileDto, ExpenseFileService, ExpenseFiles, FileDownload, UploadedFile, UNRESOLVED_NAME};

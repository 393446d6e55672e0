//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::info;

/// Ensure the upload directory exists (recursive, idempotent).
pub async fn ensure_upload_dir(upload_dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", upload_dir.display()))?;
    info!(upload_dir = %upload_dir.display(), "upload directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_nested_dir_and_tolerates_existing() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let nested = tmp.path().join("a").join("b");
        ensure_upload_dir(&nested).await?;
        ensure_upload_dir(&nested).await?;
        assert!(nested.is_dir());
        Ok(())
    }
}

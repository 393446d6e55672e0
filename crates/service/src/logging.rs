//! Entry/exit/error logging around service calls.

use std::future::Future;

use tracing::{error, info};

use crate::errors::{EntityKind, ServiceError};

/// Run `fut`, logging `start` and `end` at INFO, or the error at ERROR.
pub async fn logged<T, F>(entity: EntityKind, op: &'static str, fut: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    info!(%entity, op, "start");
    match fut.await {
        Ok(v) => {
            info!(%entity, op, "end");
            Ok(v)
        }
        Err(e) => {
            error!(%entity, op, error = %e, "failed");
            Err(e)
        }
    }
}

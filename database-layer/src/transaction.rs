// Transaction management for multi-row effects
use crate::connection::LocalStore;
use crate::error::{DatabaseError, DatabaseResult};
use sqlx::{Sqlite, Transaction};
use tracing::debug;

/// Open transaction on the store. Dropping it without `commit` rolls back.
pub type StoreTransaction<'c> = Transaction<'c, Sqlite>;

impl LocalStore {
    /// Begin a new transaction
    pub async fn begin(&self) -> DatabaseResult<StoreTransaction<'static>> {
        debug!("Beginning transaction");

        self.pool()
            .begin()
            .await
            .map_err(|e| DatabaseError::QueryFailed(format!("Failed to begin transaction: {}", e)))
    }
}

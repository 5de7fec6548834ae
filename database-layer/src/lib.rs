//! Local record store for the SagarCare ward engine
//!
//! Wraps a SQLite database holding five tables: `admission`, `rooms`,
//! `doctors`, `nurses` and `nurse_treatment`. The store is opened once at
//! startup as a [`LocalStore`] handle and passed explicitly to every service;
//! there is no process-global connection.
//!
//! Repository modules expose plain async functions generic over
//! [`sqlx::sqlite::SqliteExecutor`], so the same query runs on the pool or
//! inside a [`StoreTransaction`]:
//!
//! ```rust,no_run
//! use database_layer::{room_repository, LocalStore, LocalStoreConfig};
//!
//! # async fn run() -> Result<(), database_layer::DatabaseError> {
//! let store = LocalStore::open(&LocalStoreConfig::default()).await?;
//!
//! let mut tx = store.begin().await?;
//! room_repository::occupy(&mut *tx, "201", "P12345").await?;
//! tx.commit().await?;
//!
//! let rooms = room_repository::list(store.pool()).await?;
//! println!("{} rooms", rooms.len());
//! store.close().await;
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod error;
pub mod models;
mod row;
pub mod schema;
pub mod transaction;

pub mod admission_repository;
pub mod room_repository;
pub mod staff_repository;
pub mod treatment_repository;

pub use connection::*;
pub use error::*;
pub use models::*;
pub use transaction::*;

//! Common error handling for the SagarCare ward engine
//!
//! Every service crate returns [`CareError`] so that the presentation shell
//! can render failures uniformly. Each variant maps to a stable error code
//! from [`codes`] and is classified as recoverable (the user can correct the
//! input and retry) or fatal (the store is unusable).
//!
//! # Error Categories
//!
//! - **Validation**: blank required fields, unknown doctor, room not available
//! - **InvalidInput**: user-correctable parse failures such as a surcharge
//! - **NotFound**: patient, room or staff record no longer exists
//! - **RoomOccupied**: attempt to delete or replace an occupied room
//! - **DuplicateId**: patient identifier collision
//! - **Storage** / **Config**: fatal infrastructure failures
//!
//! # Example
//!
//! ```rust
//! use error_common::{CareError, CareResult};
//!
//! fn require(field: &str, value: &str) -> CareResult<()> {
//!     if value.trim().is_empty() {
//!         return Err(CareError::validation(format!("{field} is required")));
//!     }
//!     Ok(())
//! }
//!
//! let err = require("name", "  ").unwrap_err();
//! assert!(err.is_recoverable());
//! assert_eq!(err.code(), "VALIDATION_1002");
//! ```

pub mod types;
pub mod codes;

pub use types::*;
pub use codes::*;

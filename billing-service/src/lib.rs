//! Billing for admitted patients
//!
//! A bill is derived on demand from the admission's room tier plus a flat
//! fee schedule:
//! - room charge by tier (Private, Shared, ICU, General, anything else)
//! - doctor, nursing and service fees
//! - ad-hoc surcharges added at the desk
//!
//! Nothing is persisted; [`BillBreakdown`] is a plain value and
//! [`apply_surcharge`] returns a new one.

pub mod models;
pub mod receipt;
pub mod service;

pub use models::*;
pub use receipt::*;
pub use service::*;

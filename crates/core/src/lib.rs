//! AmlGuard Core - Domain types
//!
//! Fundamental types shared across the AML engine:
//! - `Amount`: Non-negative decimal wrapper for monetary values
//! - `SubjectInfo`: Identity block attached to suspicious-activity reports

pub mod amount;
pub mod subject;

pub use amount::{Amount, AmountError};
pub use subject::SubjectInfo;

//! Domain Layer
//!
//! The memo entity and domain errors.
//! No browser dependencies (serde, chrono and uuid only).

mod error;
mod memo;

pub use error::{DomainError, DomainResult};
pub use memo::{Export, Memo};

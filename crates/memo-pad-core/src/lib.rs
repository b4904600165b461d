//! Memo Pad Core
//!
//! Browser-free half of the memo pad: the memo entity, its key-value
//! persistence and the view state machine the UI drives.

pub mod clock;
pub mod config;
pub mod domain;
pub mod pad;
pub mod render;
pub mod storage;

mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::PadConfig;
pub use domain::{DomainError, DomainResult, Export, Memo};
pub use pad::{ButtonVisibility, Draft, MemoPad, Mode};
pub use render::{RenderRequest, RenderTicket, RenderTracker};
pub use storage::{KeyValueStore, MemoStore, MemoryStore};

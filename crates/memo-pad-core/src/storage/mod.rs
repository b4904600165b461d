//! Storage Layer
//!
//! Key-value backends and the memo collection store built on top of them.

mod memo_store;
mod memory;
mod traits;

pub use memo_store::MemoStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

//! UI Components
//!
//! Leptos components for the memo list, toolbar and detail panel.

mod memo_detail;
mod memo_list;
mod toolbar;

pub use memo_detail::MemoDetail;
pub use memo_list::MemoList;
pub use toolbar::Toolbar;

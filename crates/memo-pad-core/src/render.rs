//! Preview Render Tracking
//!
//! Markdown is rendered off the event handler, so results can arrive after
//! the user has moved on. Each request gets a ticket; only the most recent
//! ticket, for the memo that is still selected, may update the preview.

/// Identifies one render request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTicket {
    memo_id: String,
    seq: u64,
}

impl RenderTicket {
    pub fn memo_id(&self) -> &str {
        &self.memo_id
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// A pending render: the ticket plus the markdown to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub ticket: RenderTicket,
    pub markdown: String,
}

/// Issues tickets and decides which results are still wanted
#[derive(Debug, Default)]
pub struct RenderTracker {
    latest: u64,
}

impl RenderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for `memo_id`, superseding every earlier ticket
    pub fn issue(&mut self, memo_id: &str) -> RenderTicket {
        self.latest += 1;
        RenderTicket {
            memo_id: memo_id.to_string(),
            seq: self.latest,
        }
    }

    /// Latest request wins, and only while its memo is still selected
    pub fn accepts(&self, ticket: &RenderTicket, selected_id: &str) -> bool {
        ticket.seq == self.latest && ticket.memo_id == selected_id
    }
}

//! Memo Pad State Machine
//!
//! Owns the memo collection, the selection, the edit mode and the detail
//! panel's draft. The UI calls one method per user action and re-renders
//! from the accessors afterwards.

use std::collections::HashSet;

use crate::clock::{Clock, SystemClock};
use crate::config::PadConfig;
use crate::domain::{DomainError, DomainResult, Export, Memo};
use crate::render::{RenderRequest, RenderTicket, RenderTracker};
use crate::storage::{KeyValueStore, MemoStore};

/// Viewing shows the rendered preview, Editing unlocks title and body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Viewing,
    Editing,
}

impl Mode {
    pub fn is_editing(self) -> bool {
        self == Mode::Editing
    }

    pub fn buttons(self) -> ButtonVisibility {
        ButtonVisibility {
            edit: !self.is_editing(),
            save: self.is_editing(),
        }
    }
}

/// Which of the mode-dependent buttons are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisibility {
    pub edit: bool,
    pub save: bool,
}

/// Title and body as currently shown in the detail panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

impl Draft {
    fn from_memo(memo: &Memo) -> Self {
        Self {
            title: memo.title.clone(),
            body: memo.body.clone(),
        }
    }
}

pub struct MemoPad<S, C = SystemClock> {
    store: MemoStore<S>,
    clock: C,
    config: PadConfig,
    memos: Vec<Memo>,
    selected: usize,
    mode: Mode,
    draft: Draft,
    renders: RenderTracker,
    preview_html: String,
}

impl<S: KeyValueStore, C: Clock> MemoPad<S, C> {
    /// Load persisted memos, seeding defaults into an empty store
    pub fn init(backend: S, clock: C, config: PadConfig) -> DomainResult<Self> {
        config.validate()?;
        let store = MemoStore::new(backend, &config);
        let mut memos = store.load();
        log::info!("[Pad] Loaded {} memos", memos.len());

        let mut dirty = false;
        if memos.is_empty() {
            for _ in 0..config.seed_count {
                let memo = store.create_memo(memos.len(), clock.now_ms());
                memos.push(memo);
            }
            log::info!("[Pad] Seeded {} default memos", memos.len());
            dirty = true;
        }
        if repair_duplicate_ids(&mut memos) > 0 {
            dirty = true;
        }
        if dirty {
            store.save(&memos)?;
        }

        let draft = Draft::from_memo(&memos[0]);
        Ok(Self {
            store,
            clock,
            config,
            memos,
            selected: 0,
            mode: Mode::Viewing,
            draft,
            renders: RenderTracker::new(),
            preview_html: String::new(),
        })
    }

    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn len(&self) -> usize {
        self.memos.len()
    }

    /// Always false once initialized; the last memo cannot be deleted
    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_memo(&self) -> &Memo {
        &self.memos[self.selected]
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn buttons(&self) -> ButtonVisibility {
        self.mode.buttons()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn preview_html(&self) -> &str {
        &self.preview_html
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Whether the list entry for `id` is the selected one
    pub fn is_active(&self, id: &str) -> bool {
        self.selected_memo().id == id
    }

    /// Select by list position; leaves edit mode and drops the draft
    pub fn select(&mut self, index: usize) -> DomainResult<()> {
        if index >= self.memos.len() {
            return Err(DomainError::NotFound(format!("memo at index {}", index)));
        }
        self.selected = index;
        self.mode = Mode::Viewing;
        self.reset_draft();
        Ok(())
    }

    pub fn select_by_id(&mut self, id: &str) -> DomainResult<()> {
        let index = self
            .memos
            .iter()
            .position(|memo| memo.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("memo {}", id)))?;
        self.select(index)
    }

    /// Append a new memo, select it and start editing
    pub fn add(&mut self) -> DomainResult<&Memo> {
        let memo = self.store.create_memo(self.memos.len(), self.clock.now_ms());
        log::info!("[Pad] Added memo {}", memo.id);
        self.memos.push(memo);
        self.selected = self.memos.len() - 1;
        self.mode = Mode::Editing;
        self.reset_draft();
        self.store.save(&self.memos)?;
        Ok(self.selected_memo())
    }

    pub fn begin_edit(&mut self) -> DomainResult<()> {
        if self.mode.is_editing() {
            return Err(DomainError::InvalidState("already editing".to_string()));
        }
        self.mode = Mode::Editing;
        Ok(())
    }

    pub fn set_draft_title(&mut self, title: &str) -> DomainResult<()> {
        self.require_editing("edit title")?;
        self.draft.title = title.to_string();
        Ok(())
    }

    pub fn set_draft_body(&mut self, body: &str) -> DomainResult<()> {
        self.require_editing("edit body")?;
        self.draft.body = body.to_string();
        Ok(())
    }

    /// Commit the draft into the selected memo and return to viewing
    pub fn save(&mut self) -> DomainResult<()> {
        self.require_editing("save")?;
        let now = self.clock.now_ms();
        let draft = &self.draft;
        self.memos[self.selected].apply_edit(&draft.title, &draft.body, now);
        self.mode = Mode::Viewing;
        log::info!("[Pad] Saved memo {}", self.memos[self.selected].id);
        self.store.save(&self.memos)
    }

    /// Remove the selected memo; refuses when it is the only one
    pub fn delete_selected(&mut self) -> DomainResult<Memo> {
        if self.memos.len() <= 1 {
            return Err(DomainError::LastMemo);
        }
        let removed = self.memos[self.selected].clone();
        self.memos.retain(|memo| memo.id != removed.id);
        self.selected = self.selected.saturating_sub(1).min(self.memos.len() - 1);
        self.mode = Mode::Viewing;
        self.reset_draft();
        log::info!("[Pad] Deleted memo {}", removed.id);
        self.store.save(&self.memos)?;
        Ok(removed)
    }

    /// Package the selected memo's raw body for download
    pub fn export_selected(&self) -> Export {
        let memo = self.selected_memo();
        Export {
            file_name: memo.export_file_name(&self.config.export_extension),
            mime: self.config.export_mime.clone(),
            contents: memo.body.clone(),
        }
    }

    /// Start a preview render of the selected memo's saved body
    pub fn request_render(&mut self) -> RenderRequest {
        let memo = &self.memos[self.selected];
        RenderRequest {
            ticket: self.renders.issue(&memo.id),
            markdown: memo.body.clone(),
        }
    }

    /// Apply a finished render; stale results are dropped and return false
    pub fn complete_render(&mut self, ticket: &RenderTicket, html: String) -> bool {
        if !self.renders.accepts(ticket, &self.memos[self.selected].id) {
            log::debug!(
                "[Pad] Discarding stale render #{} for memo {}",
                ticket.seq(),
                ticket.memo_id()
            );
            return false;
        }
        self.preview_html = html;
        true
    }

    /// Record a failed render. The preview keeps its previous content.
    /// Returns whether the failure belonged to the current request.
    pub fn fail_render(&mut self, ticket: &RenderTicket, reason: &str) -> bool {
        let current = self.renders.accepts(ticket, &self.memos[self.selected].id);
        if current {
            log::error!("[Pad] Render #{} failed for memo {}: {}", ticket.seq(), ticket.memo_id(), reason);
        } else {
            log::debug!("[Pad] Ignoring failure of stale render #{}: {}", ticket.seq(), reason);
        }
        current
    }

    fn reset_draft(&mut self) {
        self.draft = Draft::from_memo(&self.memos[self.selected]);
    }

    fn require_editing(&self, action: &str) -> DomainResult<()> {
        if self.mode.is_editing() {
            Ok(())
        } else {
            Err(DomainError::InvalidState(format!("cannot {} while viewing", action)))
        }
    }
}

/// Give every repeated id after its first occurrence a fresh one.
/// Returns how many memos were changed.
fn repair_duplicate_ids(memos: &mut [Memo]) -> usize {
    let mut seen = HashSet::new();
    let mut repaired = 0;
    for memo in memos.iter_mut() {
        if !seen.insert(memo.id.clone()) {
            let old = memo.id.clone();
            memo.regenerate_id();
            seen.insert(memo.id.clone());
            log::warn!("[Pad] Duplicate memo id {} reassigned to {}", old, memo.id);
            repaired += 1;
        }
    }
    repaired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_visibility() {
        assert_eq!(Mode::Viewing.buttons(), ButtonVisibility { edit: true, save: false });
        assert_eq!(Mode::Editing.buttons(), ButtonVisibility { edit: false, save: true });
    }

    #[test]
    fn test_repair_duplicate_ids() {
        let mut memos = vec![Memo::new("a", 0), Memo::new("b", 0), Memo::new("c", 0)];
        memos[1].id = memos[0].id.clone();
        memos[2].id = memos[0].id.clone();
        let original = memos[0].id.clone();

        assert_eq!(repair_duplicate_ids(&mut memos), 2);
        assert_eq!(memos[0].id, original);
        let ids: HashSet<_> = memos.iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_repair_leaves_unique_ids() {
        let mut memos = vec![Memo::new("a", 0), Memo::new("b", 0)];
        let before = memos.clone();
        assert_eq!(repair_duplicate_ids(&mut memos), 0);
        assert_eq!(memos, before);
    }
}

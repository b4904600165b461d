//! Memo Pad Integration Tests
//!
//! Drives `MemoPad` end to end over an in-memory store and a manual clock.

#[cfg(test)]
mod tests {
    use crate::{
        DomainError, KeyValueStore, ManualClock, Memo, MemoPad, MemoStore, MemoryStore, Mode,
        PadConfig,
    };

    const START: i64 = 1_700_000_000_000;

    fn setup() -> (MemoPad<MemoryStore, ManualClock>, MemoryStore, ManualClock) {
        let backend = MemoryStore::new();
        let clock = ManualClock::new(START);
        let pad = MemoPad::init(backend.clone(), clock.clone(), PadConfig::default())
            .expect("Failed to init pad");
        (pad, backend, clock)
    }

    fn persisted(backend: &MemoryStore) -> Vec<Memo> {
        MemoStore::new(backend.clone(), &PadConfig::default()).load()
    }

    fn seeded(count: usize) -> (MemoPad<MemoryStore, ManualClock>, MemoryStore, ManualClock) {
        let (mut pad, backend, clock) = setup();
        while pad.len() < count {
            clock.advance(1);
            pad.add().unwrap();
            pad.save().unwrap();
        }
        (pad, backend, clock)
    }

    #[test]
    fn test_empty_store_seeds_two_memos() {
        let (pad, backend, _) = setup();

        assert_eq!(pad.len(), 2);
        assert_eq!(pad.memos()[0].title, "newMemo 1");
        assert_eq!(pad.memos()[1].title, "newMemo 2");
        assert_eq!(pad.selected_index(), 0);
        assert_eq!(pad.mode(), Mode::Viewing);
        assert_eq!(persisted(&backend), pad.memos());
    }

    #[test]
    fn test_existing_memos_are_not_reseeded() {
        let (pad, backend, _) = seeded(3);
        let before = persisted(&backend);

        let reopened =
            MemoPad::init(backend.clone(), ManualClock::new(START), PadConfig::default()).unwrap();
        assert_eq!(reopened.memos(), pad.memos());
        assert_eq!(persisted(&backend), before);
    }

    #[test]
    fn test_malformed_store_is_reseeded() {
        let backend = MemoryStore::with_entry("memos", "not json");
        let pad = MemoPad::init(backend.clone(), ManualClock::new(START), PadConfig::default())
            .unwrap();
        assert_eq!(pad.len(), 2);
        assert_eq!(persisted(&backend).len(), 2);
    }

    #[test]
    fn test_duplicate_legacy_ids_are_repaired_and_persisted() {
        let raw = r#"[
            {"id":"17000000000001","title":"a","body":"","createdAt":1,"updatedAt":1},
            {"id":"17000000000001","title":"b","body":"","createdAt":2,"updatedAt":2}
        ]"#;
        let backend = MemoryStore::with_entry("memos", raw);
        let pad = MemoPad::init(backend.clone(), ManualClock::new(START), PadConfig::default())
            .unwrap();

        assert_eq!(pad.memos()[0].id, "17000000000001");
        assert_ne!(pad.memos()[1].id, "17000000000001");
        assert_eq!(persisted(&backend), pad.memos());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = PadConfig { seed_count: 0, ..PadConfig::default() };
        let result = MemoPad::init(MemoryStore::new(), ManualClock::new(START), config);
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn test_add_selects_new_memo_in_edit_mode() {
        let (mut pad, backend, clock) = setup();
        clock.advance(1_000);

        let added = pad.add().unwrap().clone();
        assert_eq!(added.title, "newMemo 3");
        assert_eq!(added.created_at, START + 1_000);
        assert_eq!(pad.selected_index(), 2);
        assert_eq!(pad.mode(), Mode::Editing);
        assert_eq!(pad.draft().title, "newMemo 3");
        assert_eq!(persisted(&backend).len(), 3);
    }

    #[test]
    fn test_select_populates_draft() {
        let (mut pad, _, _) = seeded(3);
        pad.begin_edit().unwrap();
        pad.set_draft_title("Groceries").unwrap();
        pad.set_draft_body("- milk").unwrap();
        pad.save().unwrap();

        for i in 0..pad.len() {
            pad.select(i).unwrap();
            let memo = &pad.memos()[i];
            assert_eq!(pad.draft().title, memo.title);
            assert_eq!(pad.draft().body, memo.body);
            assert!(pad.is_active(&memo.id));
        }
    }

    #[test]
    fn test_select_discards_unsaved_draft() {
        let (mut pad, _, _) = setup();
        pad.begin_edit().unwrap();
        pad.set_draft_title("unsaved").unwrap();

        pad.select(1).unwrap();
        pad.select(0).unwrap();
        assert_eq!(pad.mode(), Mode::Viewing);
        assert_eq!(pad.draft().title, "newMemo 1");
        assert_eq!(pad.memos()[0].title, "newMemo 1");
    }

    #[test]
    fn test_select_out_of_range() {
        let (mut pad, _, _) = setup();
        assert!(matches!(pad.select(2), Err(DomainError::NotFound(_))));
        assert!(matches!(pad.select_by_id("missing"), Err(DomainError::NotFound(_))));
        assert_eq!(pad.selected_index(), 0);
    }

    #[test]
    fn test_select_by_id() {
        let (mut pad, _, _) = setup();
        let id = pad.memos()[1].id.clone();
        pad.select_by_id(&id).unwrap();
        assert_eq!(pad.selected_index(), 1);
    }

    #[test]
    fn test_save_updates_only_selected_memo() {
        let (mut pad, backend, clock) = seeded(3);
        pad.select(1).unwrap();
        let before = pad.memos().to_vec();

        clock.advance(5_000);
        pad.begin_edit().unwrap();
        pad.set_draft_title("Plan").unwrap();
        pad.set_draft_body("# Monday\n- write").unwrap();
        pad.save().unwrap();

        let after = pad.memos();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].id, before[1].id);
        assert_eq!(after[1].title, "Plan");
        assert_eq!(after[1].body, "# Monday\n- write");
        assert_eq!(after[1].created_at, before[1].created_at);
        assert_eq!(after[1].updated_at, clock_now(&clock));
        assert_eq!(pad.mode(), Mode::Viewing);
        assert_eq!(persisted(&backend), after);
    }

    fn clock_now(clock: &ManualClock) -> i64 {
        use crate::Clock;
        clock.now_ms()
    }

    #[test]
    fn test_edit_and_save_guards() {
        let (mut pad, backend, _) = setup();
        let before = persisted(&backend);

        assert!(matches!(pad.save(), Err(DomainError::InvalidState(_))));
        assert!(matches!(pad.set_draft_title("x"), Err(DomainError::InvalidState(_))));
        assert!(matches!(pad.set_draft_body("x"), Err(DomainError::InvalidState(_))));
        assert_eq!(persisted(&backend), before);

        pad.begin_edit().unwrap();
        assert!(matches!(pad.begin_edit(), Err(DomainError::InvalidState(_))));
        assert_eq!(pad.mode(), Mode::Editing);
        assert!(pad.buttons().save);
        assert!(!pad.buttons().edit);
    }

    #[test]
    fn test_delete_last_memo_refused() {
        let (mut pad, backend, _) = setup();
        pad.delete_selected().unwrap();
        let before = pad.memos().to_vec();

        assert_eq!(pad.delete_selected(), Err(DomainError::LastMemo));
        assert_eq!(pad.memos(), &before[..]);
        assert_eq!(persisted(&backend), before);
    }

    #[test]
    fn test_delete_selects_previous() {
        let (mut pad, backend, _) = seeded(4);
        pad.select(2).unwrap();
        let doomed = pad.memos()[2].id.clone();
        let previous = pad.memos()[1].id.clone();

        let removed = pad.delete_selected().unwrap();
        assert_eq!(removed.id, doomed);
        assert_eq!(pad.len(), 3);
        assert_eq!(pad.selected_index(), 1);
        assert_eq!(pad.selected_memo().id, previous);
        assert_eq!(pad.draft().title, pad.selected_memo().title);
        assert!(persisted(&backend).iter().all(|m| m.id != doomed));
    }

    #[test]
    fn test_delete_first_stays_at_zero() {
        let (mut pad, _, _) = seeded(3);
        pad.select(0).unwrap();
        let next = pad.memos()[1].id.clone();

        pad.delete_selected().unwrap();
        assert_eq!(pad.selected_index(), 0);
        assert_eq!(pad.selected_memo().id, next);
    }

    #[test]
    fn test_delete_leaves_edit_mode() {
        let (mut pad, _, _) = setup();
        pad.add().unwrap();
        assert_eq!(pad.mode(), Mode::Editing);
        pad.delete_selected().unwrap();
        assert_eq!(pad.mode(), Mode::Viewing);
        assert_eq!(pad.selected_index(), 1);
    }

    #[test]
    fn test_export_selected() {
        let (mut pad, _, _) = setup();
        pad.begin_edit().unwrap();
        pad.set_draft_title("Todo").unwrap();
        pad.set_draft_body("- [ ] ship").unwrap();
        pad.save().unwrap();

        let export = pad.export_selected();
        assert_eq!(export.file_name, "Todo.md");
        assert_eq!(export.contents, "- [ ] ship");
        assert_eq!(export.mime, "text/markdown;charset=utf-8");
    }

    #[test]
    fn test_stale_render_is_discarded() {
        let (mut pad, _, _) = setup();
        let first = pad.request_render();
        pad.select(1).unwrap();
        let second = pad.request_render();

        assert!(pad.complete_render(&second.ticket, "<p>second</p>".to_string()));
        assert!(!pad.complete_render(&first.ticket, "<p>first</p>".to_string()));
        assert_eq!(pad.preview_html(), "<p>second</p>");
    }

    #[test]
    fn test_render_for_previous_selection_is_discarded() {
        let (mut pad, _, _) = setup();
        let request = pad.request_render();
        pad.select(1).unwrap();

        assert!(!pad.complete_render(&request.ticket, "<p>old</p>".to_string()));
        assert_eq!(pad.preview_html(), "");
    }

    #[test]
    fn test_failed_render_keeps_previous_preview() {
        let (mut pad, _, _) = setup();
        pad.begin_edit().unwrap();
        pad.set_draft_body("A body").unwrap();
        pad.save().unwrap();
        let first = pad.request_render();
        assert!(pad.complete_render(&first.ticket, "<p>A body</p>".to_string()));

        pad.select(1).unwrap();
        let second = pad.request_render();
        assert!(pad.fail_render(&second.ticket, "highlighter unavailable"));
        assert_eq!(pad.preview_html(), "<p>A body</p>");

        // A late success for the failed request still applies
        assert!(pad.complete_render(&second.ticket, "<p></p>".to_string()));
        assert_eq!(pad.preview_html(), "<p></p>");
    }

    #[test]
    fn test_stale_render_failure_is_ignored() {
        let (mut pad, _, _) = setup();
        let stale = pad.request_render();
        pad.select(1).unwrap();
        let _current = pad.request_render();

        assert!(!pad.fail_render(&stale.ticket, "boom"));
        assert_eq!(pad.preview_html(), "");
    }

    #[test]
    fn test_pad_is_never_empty() {
        let (mut pad, _, _) = setup();
        assert!(!pad.is_empty());
        pad.delete_selected().unwrap();
        assert!(pad.delete_selected().is_err());
        assert!(!pad.is_empty());
        assert_eq!(pad.len(), 1);
    }

    #[test]
    fn test_render_uses_saved_body() {
        let (mut pad, _, _) = setup();
        pad.begin_edit().unwrap();
        pad.set_draft_body("draft only").unwrap();
        assert_eq!(pad.request_render().markdown, "");

        pad.save().unwrap();
        let request = pad.request_render();
        assert_eq!(request.markdown, "draft only");
        assert_eq!(request.ticket.memo_id(), pad.selected_memo().id);
    }

    struct ReadOnly(MemoryStore);

    impl KeyValueStore for ReadOnly {
        fn get_item(&self, key: &str) -> crate::DomainResult<Option<String>> {
            self.0.get_item(key)
        }
        fn set_item(&self, _key: &str, _value: &str) -> crate::DomainResult<()> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_storage_failure_is_reported() {
        let result = MemoPad::init(
            ReadOnly(MemoryStore::new()),
            ManualClock::new(START),
            PadConfig::default(),
        );
        assert!(matches!(result, Err(DomainError::Storage(_))));
    }

    #[test]
    fn test_failed_add_still_selects_new_memo() {
        let (_, backend, clock) = setup();
        let mut pad = MemoPad::init(ReadOnly(backend.clone()), clock, PadConfig::default())
            .expect("Failed to init pad");

        assert!(matches!(pad.add(), Err(DomainError::Storage(_))));
        assert_eq!(pad.len(), 3);
        assert_eq!(pad.selected_index(), 2);
        assert_eq!(pad.mode(), Mode::Editing);

        let request = pad.request_render();
        assert_eq!(request.ticket.memo_id(), pad.selected_memo().id);
        assert_eq!(persisted(&backend).len(), 2);
    }
}

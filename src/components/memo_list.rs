//! Memo List Component
//!
//! Left column: one entry per memo, the selected one styled `active`.

use leptos::prelude::*;

use crate::store::{store_add_memo, store_select_memo, use_app_store, AppStateStoreFields};

#[component]
pub fn MemoList() -> impl IntoView {
    let store = use_app_store();

    // (id, title) pairs; keyed on both so a renamed memo re-renders.
    // Memoized so draft keystrokes do not touch the list.
    let entries = Memo::new(move |_| {
        store
            .pad()
            .read()
            .memos()
            .iter()
            .map(|memo| (memo.id.clone(), memo.title.clone()))
            .collect::<Vec<_>>()
    });
    let count = Memo::new(move |_| store.pad().read().len());

    view! {
        <aside class="memo-sidebar">
            <div class="memo-sidebar-header">
                <span class="memo-sidebar-title">"Memos"</span>
                <button id="add" class="add-btn" on:click=move |_| store_add_memo(store)>"+ New"</button>
            </div>

            <div id="list" class="memo-list">
                <For
                    each=move || entries.get()
                    key=|entry| entry.clone()
                    children=move |(id, title)| {
                        let active_id = id.clone();
                        let click_id = id.clone();
                        let active = Memo::new(move |_| store.pad().read().is_active(&active_id));
                        let item_class = move || {
                            if active.get() {
                                "memo-item w-full p-sm active"
                            } else {
                                "memo-item w-full p-sm"
                            }
                        };

                        view! {
                            <div
                                class=item_class
                                data-id=id
                                on:click=move |_| store_select_memo(store, &click_id)
                            >
                                {title}
                            </div>
                        }
                    }
                />
            </div>

            <p class="memo-count">{move || format!("{} memos", count.get())}</p>
        </aside>
    }
}

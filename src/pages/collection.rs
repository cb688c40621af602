//! Collection page listing the user's sneakers with note editing and
//! removal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the collection
//! whenever the resolved identity changes and coordinates the
//! edit-note and delete flows against local list state.

use leptos::prelude::*;

use crate::components::note_modal::NoteModal;
use crate::components::sneaker_card::SneakerCard;
use crate::components::toast_host::ToastHost;
use crate::state::auth::AuthState;
use crate::state::collection::CollectionState;
use crate::state::editor::EditorState;
use crate::state::ui::{ToastKind, UiState};

/// Collection page — card grid, note modal, and toast surface.
#[component]
pub fn CollectionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let collection = expect_context::<RwSignal<CollectionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Note-editor state is page-local; nothing else reads it.
    let editor = RwSignal::new(EditorState::default());

    // Load the collection whenever the resolved identity changes. The
    // generation guard discards responses from superseded loads, so an
    // identity switch mid-fetch can never overwrite the newer list.
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        let user_key = user.list_key();
        let mut generation = 0;
        collection.update(|c| generation = c.begin_load());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_user_sneakers(&user_key).await;
            if !collection.get_untracked().is_current_load(generation) {
                return;
            }
            match result {
                Ok(items) => collection.update(|c| c.replace(items)),
                Err(e) => {
                    log::warn!("failed to load sneaker collection: {e}");
                    collection.update(|c| c.fail_load(e.clone()));
                    ui.update(|u| {
                        u.push_toast(e, ToastKind::Error);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_key, generation);
        }
    });

    let on_edit = Callback::new(move |sneaker_id: i64| {
        let state = collection.get_untracked();
        let Some(sneaker) = state.find(sneaker_id) else {
            return;
        };
        editor.update(|e| e.open_for(sneaker));
    });

    let on_edit_cancel = Callback::new(move |()| editor.update(EditorState::close));

    let on_note_submit = Callback::new(move |()| {
        let mut valid = false;
        editor.update(|e| valid = e.validate());
        if !valid {
            return;
        }
        let state = editor.get_untracked();
        if state.submit_pending {
            return;
        }
        let Some(target_id) = state.target_id else {
            return;
        };
        let note = state.draft_note.clone();
        editor.update(|e| e.submit_pending = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_sneaker_note(target_id, &note).await {
                Ok(updated) => {
                    // Merge the server's authoritative record back in;
                    // only the note field changes.
                    collection.update(|c| {
                        c.apply_note_update(updated.sneaker_id, &updated.note);
                    });
                    editor.update(EditorState::close);
                }
                Err(e) => {
                    log::warn!("failed to update sneaker note: {e}");
                    editor.update(|ed| ed.submit_pending = false);
                    ui.update(|u| {
                        u.push_toast(format!("Note not saved: {e}"), ToastKind::Error);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target_id, note);
        }
    });

    let on_delete = Callback::new(move |sneaker_id: i64| {
        let Some(user_id) = auth.get_untracked().user.and_then(|u| u.current_user_id) else {
            #[cfg(feature = "hydrate")]
            log::warn!("user not identified for delete operation");
            ui.update(|u| {
                u.push_toast("Sign in again to remove sneakers", ToastKind::Error);
            });
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_sneaker(user_id, sneaker_id).await {
                Ok(message) => {
                    // Removal is gated on the server confirming; a failed
                    // delete must keep the item visible.
                    collection.update(|c| {
                        c.remove(sneaker_id);
                    });
                    ui.update(|u| {
                        u.push_toast(message, ToastKind::Success);
                    });
                }
                Err(e) => {
                    log::warn!("failed to delete sneaker {sneaker_id}: {e}");
                    ui.update(|u| {
                        u.push_toast(format!("Delete failed: {e}"), ToastKind::Error);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, sneaker_id);
        }
    });

    view! {
        <div class="collection-page">
            <header class="collection-page__header toolbar">
                <span class="toolbar__title">"Your Sneaker Collection"</span>

                <span class="toolbar__spacer"></span>

                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <span class="toolbar__self">
                    {move || auth.get().user.map(|u| u.username).unwrap_or_default()}
                </span>
            </header>

            <Show
                when=move || !auth.get().signed_out()
                fallback=move || {
                    view! {
                        <p class="collection-page__signed-out">
                            "Sign in to see your collection."
                        </p>
                    }
                }
            >
                <div class="collection-page__grid">
                    <Show when=move || collection.get().error.is_some()>
                        <p class="collection-page__error">
                            {move || collection.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <Show
                        when=move || !collection.get().loading
                        fallback=move || view! { <p>"Loading sneakers..."</p> }
                    >
                        <Show
                            when=move || !collection.get().items.is_empty()
                            fallback=move || {
                                view! {
                                    <p class="collection-page__empty">
                                        "No sneakers in your collection yet."
                                    </p>
                                }
                            }
                        >
                            <div class="collection-page__cards">
                                {move || {
                                    collection
                                        .get()
                                        .items
                                        .into_iter()
                                        .map(|sneaker| {
                                            view! {
                                                <SneakerCard
                                                    sneaker=sneaker
                                                    on_edit=on_edit
                                                    on_delete=on_delete
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>
            </Show>

            <Show when=move || editor.get().is_open()>
                <NoteModal editor=editor on_submit=on_note_submit on_cancel=on_edit_cancel/>
            </Show>

            <ToastHost/>
        </div>
    }
}

//! Modal dialog for editing a sneaker's personal note.

use leptos::prelude::*;

use crate::state::editor::EditorState;

/// Note-editing modal. Rendered only while the editor state is open;
/// submission and closing are owned by the collection page.
#[component]
pub fn NoteModal(
    editor: RwSignal<EditorState>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Update Sneaker Note"</h2>
                <label class="dialog__label">
                    "Note"
                    <textarea
                        class="dialog__input dialog__input--note"
                        rows="3"
                        placeholder="Add a note about this sneaker"
                        prop:value=move || editor.get().draft_note
                        on:input=move |ev| {
                            editor.update(|e| e.draft_note = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <Show when=move || editor.get().errors.description.is_some()>
                    <span class="dialog__error">
                        {move || editor.get().errors.description.unwrap_or_default()}
                    </span>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || editor.get().submit_pending
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if editor.get().submit_pending { "Saving..." } else { "Submit" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

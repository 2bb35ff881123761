//! Toast Host Component

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

/// Renders queued toasts; a click dismisses early
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-container">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.title.map(|title| view! { <div class="toast-title">{title}</div> })}
                            <div class="toast-message">{toast.message}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

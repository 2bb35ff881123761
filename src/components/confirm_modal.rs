//! Confirm Modal Component
//!
//! Shared dialog shell for every confirmation on the admin pages.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Suppress or restore page scrolling behind an open modal
fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if body.style().set_property("overflow", value).is_err() {
        log::warn!("[modal] could not set body overflow");
    }
}

/// Confirmation dialog
///
/// Closes via the × button, Cancel, a backdrop click or Escape. While `busy`
/// the confirm button is disabled and shows `busy_label`; its regular label
/// comes back as soon as `busy` clears.
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `busy` - A confirmed request is in flight
/// * `on_confirm` - Confirm clicked (the owner decides whether it is a no-op)
/// * `on_close` - Any of the dismiss paths
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    title: &'static str,
    confirm_label: &'static str,
    busy_label: &'static str,
    #[prop(optional)] danger: bool,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    Effect::new(move |prev: Option<bool>| {
        let is_open = open.get();
        if prev.is_some() || is_open {
            lock_body_scroll(is_open);
        }
        is_open
    });

    // One listener for the page lifetime; it checks the signal on each key
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && open.try_get_untracked().unwrap_or(false) {
            on_close.run(());
        }
    });
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();

    let confirm_class = if danger { "btn btn-danger" } else { "btn btn-primary" };

    view! {
        <Show when=move || open.get()>
            <div class="modal active" role="dialog" aria-modal="true">
                <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
                <div class="modal-content">
                    <div class="modal-header">
                        <h3>{title}</h3>
                        <button class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                    <div class="modal-footer">
                        <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class=confirm_class
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            <Show when=move || busy.get() fallback=move || confirm_label>
                                <span class="spinner"></span>
                                " "
                                {busy_label}
                            </Show>
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

//! Cart Badge Sync
//!
//! The cart badge lives in the server-rendered header, outside the mounted
//! app, so it is updated by class lookup rather than rendered.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{use_app_store, AppStateStoreFields};

const BADGE_SELECTOR: &str = ".cart-badge";

fn update_badges(count: u32) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(badges) = document.query_selector_all(BADGE_SELECTOR) else {
        return;
    };
    for i in 0..badges.length() {
        let Some(badge) = badges.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
            continue;
        };
        badge.set_text_content(Some(&count.to_string()));
        let _ = badge.style().set_property("display", if count > 0 { "" } else { "none" });
    }
}

/// Mirrors `cart_count` into every `.cart-badge` element
#[component]
pub fn CartBadgeSync() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        if let Some(count) = store.cart_count().get() {
            log::debug!("[cart] badge count {}", count);
            update_badges(count);
        }
    });
}

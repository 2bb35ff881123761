//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// How long a toast stays on screen
pub const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Warning => "toast warning",
            ToastKind::Info => "toast info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
}

/// Page-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    /// Id for the next toast
    pub next_toast_id: u64,
    /// Server-reported cart size, once known
    pub cart_count: Option<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Queue a toast and schedule its dismissal
pub fn store_push_toast(store: &AppStore, kind: ToastKind, title: Option<&str>, message: impl Into<String>) {
    let id = next_toast_id(store);
    let toast = Toast {
        id,
        kind,
        title: title.map(str::to_string),
        message: message.into(),
    };
    log::debug!("[toast] {:?} {}", toast.kind, toast.message);
    store.toasts().update(|toasts| toasts.push(toast));

    let store = *store;
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
        store_dismiss_toast(&store, id);
    });
}

/// Bump and return the toast id counter
fn next_toast_id(store: &AppStore) -> u64 {
    let counter = store.next_toast_id();
    counter.update(|n| *n += 1);
    counter.get_untracked()
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u64) {
    store.toasts().update(|toasts| toasts.retain(|t| t.id != toast_id));
}

/// Record the server-supplied cart size
pub fn store_set_cart_count(store: &AppStore, count: u32) {
    store.cart_count().set(Some(count));
}

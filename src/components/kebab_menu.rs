//! Kebab Menu Component
//!
//! Row action menu: a ⋮ trigger and a fixed-position dropdown. Open state
//! lives in the page-wide `MenuRegistry`, so opening one menu closes the rest.

use leptos::prelude::*;
use leptos_kebab::{make_on_panel_click, make_on_trigger_click, position_panel, MenuId};

use crate::context::use_app_context;

#[component]
pub fn KebabMenu(
    /// Unique per page, usually the row id
    id: MenuId,
    children: Children,
) -> impl IntoView {
    let kebab = use_app_context().kebab;
    let trigger_ref = NodeRef::<leptos::html::Button>::new();
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    // Reposition when opened and on every scroll/resize tick while open
    Effect::new(move |_| {
        let _ = kebab.layout_tick.get();
        if !kebab.is_open(id) {
            return;
        }
        if let (Some(trigger), Some(panel)) = (trigger_ref.get(), panel_ref.get()) {
            position_panel(&trigger, &panel);
        }
    });

    view! {
        <div class="kebab-menu" class:open=move || kebab.is_open(id)>
            <button
                class="kebab-btn"
                aria-label="Actions"
                node_ref=trigger_ref
                on:click=make_on_trigger_click(kebab, id)
            >
                "⋮"
            </button>
            <div class="kebab-dropdown" node_ref=panel_ref on:click=make_on_panel_click()>
                {children()}
            </div>
        </div>
    }
}

/// One menu entry. Selecting it closes the menu before running the action.
#[component]
pub fn KebabItem(
    label: &'static str,
    #[prop(optional)] danger: bool,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    let kebab = use_app_context().kebab;

    view! {
        <button
            class="kebab-item"
            class:danger=danger
            on:click=move |_| {
                kebab.close_all();
                on_select.run(());
            }
        >
            {label}
        </button>
    }
}

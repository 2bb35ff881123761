//! Quantity Spinner Component

use leptos::prelude::*;

use crate::cart::Quantity;

/// −/value/+ control; buttons disable at the stock bounds
#[component]
pub fn QuantitySpinner(quantity: RwSignal<Quantity>) -> impl IntoView {
    view! {
        <div class="quantity-spinner">
            <button
                class="qty-btn qty-decrease"
                aria-label="Decrease quantity"
                disabled=move || !quantity.with(Quantity::can_decrement)
                on:click=move |_| quantity.update(Quantity::decrement)
            >
                "−"
            </button>
            <input
                type="number"
                class="qty-input"
                readonly=true
                prop:value=move || quantity.with(Quantity::value).to_string()
            />
            <button
                class="qty-btn qty-increase"
                aria-label="Increase quantity"
                disabled=move || !quantity.with(Quantity::can_increment)
                on:click=move |_| quantity.update(Quantity::increment)
            >
                "+"
            </button>
        </div>
    }
}

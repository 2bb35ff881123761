//! Order Detail Page
//!
//! Status select with confirmation, plus print.

use leptos::prelude::*;

use super::{confirm_mutation, context_text, modal_signals};
use crate::commands::{self, Mutation};
use crate::components::ConfirmModal;
use crate::context::use_app_context;
use crate::modal::ModalState;
use crate::models::OrderStatus;
use crate::orders::{prepare_status_change, StatusChange};

#[component]
pub fn OrderDetailPage(order_id: u32, order_number: String, current_status: OrderStatus) -> impl IntoView {
    let ctx = use_app_context();
    let choice = RwSignal::new(current_status);
    let modal = RwSignal::new(ModalState::<StatusChange>::Closed);
    let number = StoredValue::new(order_number);

    let on_update = move |_| {
        let requested = choice.get_untracked();
        match prepare_status_change(order_id, &number.get_value(), current_status, requested) {
            Ok(change) => modal.update(|m| {
                m.open(change);
            }),
            Err(err) => ctx.report("order", &err),
        }
    };

    let on_confirm = move |_: ()| {
        confirm_mutation(ctx, modal, "order", "Order status updated successfully", |change| Mutation::UpdateStatus {
            order_id: change.order_id,
            status: change.status,
        });
    };

    let (open, busy) = modal_signals(modal);

    view! {
        <div class="order-detail-actions">
            <div class="status-update-form">
                <span class=format!("status-badge status-{}", current_status.as_str())>
                    {current_status.label()}
                </span>
                <select
                    class="form-select"
                    prop:value=move || choice.get().as_str()
                    on:change=move |ev| {
                        if let Some(status) = OrderStatus::parse(&event_target_value(&ev)) {
                            choice.set(status);
                        }
                    }
                >
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn-primary" on:click=on_update>"Update Status"</button>
            </div>
            <button class="btn btn-secondary print-btn" on:click=move |_| commands::print_page()>
                "Print"
            </button>

            <ConfirmModal
                open=open
                busy=busy
                title="Confirm Status Change"
                confirm_label="Confirm Update"
                busy_label="Updating..."
                on_confirm=on_confirm
                on_close=move |_: ()| modal.update(ModalState::close)
            >
                <p>
                    "Change the status of order "
                    <strong>{move || number.get_value()}</strong>
                    " to "
                    <strong>{move || context_text(modal, |c| c.status.label().to_string())}</strong>
                    "?"
                </p>
            </ConfirmModal>
        </div>
    }
}

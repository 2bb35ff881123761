//! Customers Page
//!
//! Admin customer table with a kebab "Delete" per row.

use leptos::prelude::*;

use super::{confirm_mutation, context_text, modal_signals};
use crate::commands::Mutation;
use crate::components::{ConfirmModal, KebabItem, KebabMenu};
use crate::context::use_app_context;
use crate::modal::ModalState;
use crate::models::CustomerRow;

#[component]
pub fn CustomersPage(customers: Vec<CustomerRow>) -> impl IntoView {
    let ctx = use_app_context();
    let modal = RwSignal::new(ModalState::<CustomerRow>::Closed);
    let is_empty = customers.is_empty();

    let on_confirm = move |_: ()| {
        confirm_mutation(ctx, modal, "customers", "Customer deleted", |customer| Mutation::DeleteCustomer {
            customer_id: customer.id,
        });
    };
    let (open, busy) = modal_signals(modal);

    let rows = customers
        .into_iter()
        .map(|customer| {
            let id = customer.id;
            let pending = customer.clone();
            let open_delete = move |_: ()| {
                let pending = pending.clone();
                modal.update(|m| {
                    m.open(pending);
                });
            };
            view! {
                <tr>
                    <td class="customer-name">{customer.name}</td>
                    <td>{customer.email}</td>
                    <td>{customer.order_count}</td>
                    <td class="actions-cell">
                        <KebabMenu id=id>
                            <KebabItem label="Delete" danger=true on_select=open_delete />
                        </KebabMenu>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="customers-page">
            <table class="data-table customers-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Orders"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {is_empty.then(|| view! { <p class="empty-state">"No customers found"</p> })}

            <ConfirmModal
                open=open
                busy=busy
                title="Delete Customer"
                confirm_label="Delete Customer"
                busy_label="Deleting..."
                danger=true
                on_confirm=on_confirm
                on_close=move |_: ()| modal.update(ModalState::close)
            >
                <p>"Are you sure you want to delete this customer?"</p>
                <p>
                    <strong>{move || context_text(modal, |c| c.name.clone())}</strong>
                    <br />
                    <span class="text-muted">{move || context_text(modal, |c| c.email.clone())}</span>
                </p>
                <p class="text-danger">"This action cannot be undone."</p>
            </ConfirmModal>
        </div>
    }
}

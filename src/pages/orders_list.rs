//! Orders List Page
//!
//! Admin order table: per-row kebab actions (status change, delete) and the
//! bulk status toolbar.

use leptos::prelude::*;

use super::{confirm_mutation, context_text, modal_signals};
use crate::commands::Mutation;
use crate::components::{ConfirmModal, KebabItem, KebabMenu};
use crate::context::use_app_context;
use crate::modal::ModalState;
use crate::models::{OrderRow, OrderStatus};
use crate::orders::{BulkStatusChange, BulkToolbar, OrderDeletion, StatusChange};

#[component]
pub fn OrdersListPage(orders: Vec<OrderRow>) -> impl IntoView {
    let ctx = use_app_context();
    let rows = StoredValue::new(orders);

    let toolbar = RwSignal::new(BulkToolbar::default());
    let status_modal = RwSignal::new(ModalState::<StatusChange>::Closed);
    let status_choice = RwSignal::new(OrderStatus::Pending);
    let delete_modal = RwSignal::new(ModalState::<OrderDeletion>::Closed);
    let bulk_modal = RwSignal::new(ModalState::<BulkStatusChange>::Closed);

    let on_apply = move |_| {
        let prepared = toolbar.with_untracked(|bar| rows.with_value(|r| bar.prepare(r)));
        match prepared {
            Ok(bulk) => {
                log::debug!("[orders] bulk {} on {} orders", bulk.status, bulk.order_ids.len());
                bulk_modal.update(|m| {
                    m.open(bulk);
                });
            }
            Err(err) => ctx.report("orders", &err),
        }
    };

    let confirm_status = move |_: ()| {
        let status = status_choice.get_untracked();
        confirm_mutation(ctx, status_modal, "orders", "Order status updated successfully", move |change| {
            Mutation::UpdateStatus { order_id: change.order_id, status }
        });
    };
    let confirm_delete = move |_: ()| {
        confirm_mutation(ctx, delete_modal, "orders", "Order deleted", |deletion| Mutation::DeleteOrder {
            order_id: deletion.order_id,
        });
    };
    let confirm_bulk = move |_: ()| {
        confirm_mutation(ctx, bulk_modal, "orders", "Orders updated successfully", |bulk| {
            Mutation::BulkUpdateStatus { order_ids: bulk.order_ids, status: bulk.status }
        });
    };

    let (status_open, status_busy) = modal_signals(status_modal);
    let (delete_open, delete_busy) = modal_signals(delete_modal);
    let (bulk_open, bulk_busy) = modal_signals(bulk_modal);

    let row_views = rows.with_value(|r| {
        r.iter()
            .cloned()
            .map(|row| {
                view! {
                    <OrderTableRow
                        row=row
                        toolbar=toolbar
                        status_modal=status_modal
                        status_choice=status_choice
                        delete_modal=delete_modal
                    />
                }
            })
            .collect_view()
    });

    view! {
        <div class="orders-page">
            <Show when=move || toolbar.with(BulkToolbar::is_visible)>
                <div class="bulk-actions-bar">
                    <span class="selected-count">
                        {move || format!("{} selected", toolbar.with(|bar| bar.selection().len()))}
                    </span>
                    <select
                        class="form-select bulk-action-select"
                        prop:value=move || toolbar.with(|bar| bar.action().map(|s| s.as_str()).unwrap_or(""))
                        on:change=move |ev| toolbar.update(|bar| bar.choose(OrderStatus::parse(&event_target_value(&ev))))
                    >
                        <option value="">"Choose action..."</option>
                        {OrderStatus::ALL
                            .into_iter()
                            .filter(|s| *s != OrderStatus::Pending)
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn btn-primary" on:click=on_apply>"Apply"</button>
                </div>
            </Show>

            <table class="data-table orders-table">
                <thead>
                    <tr>
                        <th>
                            <input
                                type="checkbox"
                                class="select-all"
                                prop:checked=move || toolbar.with(|bar| rows.with_value(|r| bar.selection().all_checked(r)))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    rows.with_value(|r| toolbar.update(|bar| bar.check_all(r, checked)));
                                }
                            />
                        </th>
                        <th>"Order"</th>
                        <th>"Customer"</th>
                        <th>"Total"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{row_views}</tbody>
            </table>
            <Show when=move || rows.with_value(Vec::is_empty)>
                <p class="empty-state">"No orders found"</p>
            </Show>

            <ConfirmModal
                open=status_open
                busy=status_busy
                title="Update Order Status"
                confirm_label="Update Status"
                busy_label="Updating..."
                on_confirm=confirm_status
                on_close=move |_: ()| status_modal.update(ModalState::close)
            >
                <p>
                    "Update status for order "
                    <strong>{move || context_text(status_modal, |c| c.order_number.clone())}</strong>
                </p>
                <select
                    class="form-select"
                    prop:value=move || status_choice.get().as_str()
                    on:change=move |ev| {
                        if let Some(status) = OrderStatus::parse(&event_target_value(&ev)) {
                            status_choice.set(status);
                        }
                    }
                >
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </ConfirmModal>

            <ConfirmModal
                open=delete_open
                busy=delete_busy
                title="Delete Order"
                confirm_label="Delete Order"
                busy_label="Deleting..."
                danger=true
                on_confirm=confirm_delete
                on_close=move |_: ()| delete_modal.update(ModalState::close)
            >
                <p>
                    "Are you sure you want to delete order "
                    <strong>{move || context_text(delete_modal, |c| c.order_number.clone())}</strong>
                    "? This action cannot be undone."
                </p>
            </ConfirmModal>

            <ConfirmModal
                open=bulk_open
                busy=bulk_busy
                title="Confirm Bulk Action"
                confirm_label="Confirm Action"
                busy_label="Processing..."
                on_confirm=confirm_bulk
                on_close=move |_: ()| bulk_modal.update(ModalState::close)
            >
                <p>
                    "Are you sure you want to "
                    <strong>{move || context_text(bulk_modal, |c| c.action_text().to_string())}</strong>
                    " for "
                    <strong>{move || context_text(bulk_modal, |c| c.order_ids.len().to_string())}</strong>
                    " order(s)?"
                </p>
            </ConfirmModal>
        </div>
    }
}

#[component]
fn OrderTableRow(
    row: OrderRow,
    toolbar: RwSignal<BulkToolbar>,
    status_modal: RwSignal<ModalState<StatusChange>>,
    status_choice: RwSignal<OrderStatus>,
    delete_modal: RwSignal<ModalState<OrderDeletion>>,
) -> impl IntoView {
    let id = row.id;
    let status = row.status;
    let number = StoredValue::new(row.order_number.clone());

    let open_status = move |_: ()| {
        status_choice.set(status);
        status_modal.update(|m| {
            m.open(StatusChange { order_id: id, order_number: number.get_value(), status });
        });
    };
    let open_delete = move |_: ()| {
        delete_modal.update(|m| {
            m.open(OrderDeletion { order_id: id, order_number: number.get_value() });
        });
    };

    view! {
        <tr class:selected=move || toolbar.with(|bar| bar.selection().contains(id))>
            <td>
                <input
                    type="checkbox"
                    class="order-checkbox"
                    prop:checked=move || toolbar.with(|bar| bar.selection().contains(id))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        toolbar.update(|bar| bar.check(id, checked));
                    }
                />
            </td>
            <td class="order-number">{row.order_number}</td>
            <td>{row.customer}</td>
            <td>{row.total}</td>
            <td>{row.created}</td>
            <td>
                <span class=format!("status-badge status-{}", status.as_str())>{status.label()}</span>
            </td>
            <td class="actions-cell">
                <KebabMenu id=id>
                    <KebabItem label="Change status" on_select=open_status />
                    <KebabItem label="Delete" danger=true on_select=open_delete />
                </KebabMenu>
            </td>
        </tr>
    }
}

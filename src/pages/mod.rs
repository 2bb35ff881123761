//! Page Controllers
//!
//! One root component per server-rendered page. The page config picks which
//! one gets mounted.

mod orders_list;
mod order_detail;
mod customers;
mod products;
mod dashboard;
mod reports;

pub use orders_list::OrdersListPage;
pub use order_detail::OrderDetailPage;
pub use customers::CustomersPage;
pub use products::ProductsPage;
pub use dashboard::DashboardPage;
pub use reports::ReportsPage;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, Dispatched, Mutation, RELOAD_DELAY_MS};
use crate::context::AppContext;
use crate::modal::ModalState;
use crate::store::ToastKind;

/// Run the mutation behind a confirmed modal.
///
/// No-op unless the modal holds a context and is not already submitting.
/// JSON mutations close the modal, toast `success_message` and reload;
/// form posts leave the button busy while the browser navigates. Failures
/// re-enable the confirm button and keep the modal open.
fn confirm_mutation<C>(
    ctx: AppContext,
    modal: RwSignal<ModalState<C>>,
    area: &'static str,
    success_message: &'static str,
    build: impl FnOnce(C) -> Mutation,
) where
    C: Clone + Send + Sync + 'static,
{
    let Some(context) = modal.try_update(|m| m.begin_submit()).flatten() else {
        log::debug!("[{}] confirm ignored, nothing pending", area);
        return;
    };
    let mutation = build(context);
    let endpoints = ctx.endpoints();
    let csrf = ctx.csrf_token();

    spawn_local(async move {
        match commands::dispatch(&mutation, &endpoints, &csrf).await {
            Ok(Dispatched::Completed(_)) => {
                modal.try_update(|m| m.submit_succeeded());
                ctx.notify(ToastKind::Success, success_message);
                commands::reload_after(RELOAD_DELAY_MS).await;
            }
            Ok(Dispatched::Navigating) => {}
            Err(err) => {
                modal.try_update(|m| m.submit_failed());
                ctx.report(area, &err);
            }
        }
    });
}

/// Derived open/busy signals for `ConfirmModal`
fn modal_signals<C>(modal: RwSignal<ModalState<C>>) -> (Signal<bool>, Signal<bool>)
where
    C: Clone + Send + Sync + 'static,
{
    (
        Signal::derive(move || modal.with(ModalState::is_open)),
        Signal::derive(move || modal.with(ModalState::is_submitting)),
    )
}

/// Read one field of the pending context for display
fn context_text<C>(modal: RwSignal<ModalState<C>>, field: impl Fn(&C) -> String) -> String
where
    C: Clone + Send + Sync + 'static,
{
    modal.with(|m| m.context().map(&field).unwrap_or_default())
}

//! ShopPy Frontend App
//!
//! Root component: provides the store and context, binds the page-wide
//! listeners and mounts the controller for the current page.

use leptos::prelude::*;
use leptos_kebab::{bind_global_listeners, create_kebab_signals};
use reactive_stores::Store;

use crate::components::{CartBadgeSync, ToastHost};
use crate::config::{document_cookies, resolve_csrf_token, PageConfig, PageKind};
use crate::context::AppContext;
use crate::pages::{CustomersPage, DashboardPage, OrderDetailPage, OrdersListPage, ProductsPage, ReportsPage};
use crate::store::AppState;

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let csrf_token = resolve_csrf_token(config.csrf_token.as_deref(), &document_cookies()).unwrap_or_else(|| {
        log::warn!("[app] no CSRF token injected or in cookies");
        String::new()
    });

    let kebab = create_kebab_signals();
    provide_context(AppContext::new(csrf_token, config.urls, kebab, store));
    bind_global_listeners(kebab);

    log::info!("[app] mounting {} page", config.page.name());
    let page = match config.page {
        PageKind::OrdersList { orders } => view! { <OrdersListPage orders=orders /> }.into_any(),
        PageKind::OrderDetail { order_id, order_number, current_status } => view! {
            <OrderDetailPage order_id=order_id order_number=order_number current_status=current_status />
        }
        .into_any(),
        PageKind::Customers { customers } => view! { <CustomersPage customers=customers /> }.into_any(),
        PageKind::Products { products, has_more, next_page } => view! {
            <ProductsPage products=products has_more=has_more next_page=next_page />
        }
        .into_any(),
        PageKind::Dashboard { chart_data } => view! { <DashboardPage chart_data=chart_data /> }.into_any(),
        PageKind::Reports { chart_data, export_base_url } => view! {
            <ReportsPage chart_data=chart_data export_base_url=export_base_url />
        }
        .into_any(),
    };

    view! {
        {page}
        <ToastHost />
        <CartBadgeSync />
    }
}

//! Products Page
//!
//! Storefront grid with infinite scroll. The server renders the first page
//! into the config; later pages come from `?ajax=1` requests.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::ProductCard;
use crate::context::{use_app_context, AppContext};
use crate::loader::{near_bottom, ListLoader};
use crate::models::{PageToken, Product};
use crate::store::ToastKind;

/// Claim and fetch the next page, if any
fn load_more(ctx: AppContext, loader: RwSignal<ListLoader<Product>>) {
    let Some(token) = loader.try_update(|l| l.begin_load()).flatten() else {
        return;
    };
    let endpoints = ctx.endpoints();
    let search = commands::current_search();

    spawn_local(async move {
        match commands::fetch_product_page(&endpoints, &search, &token).await {
            Ok(page) => {
                let inserted = loader.try_update(|l| l.finish_load(page.products, page.has_more, page.next_page));
                log::debug!("[products] page {} added {:?} products", token.as_str(), inserted);
            }
            Err(err) => {
                loader.try_update(|l| l.fail_load());
                log::error!("[products] loading page {} failed: {}", token.as_str(), err);
                ctx.notify(ToastKind::Error, "Failed to load more products");
            }
        }
    });
}

fn scrolled_near_bottom() -> bool {
    let Some(win) = web_sys::window() else { return false };
    let viewport = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or_default();
    let scroll_y = win.scroll_y().unwrap_or_default();
    let Some(doc_height) = win
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
    else {
        return false;
    };
    near_bottom(viewport, scroll_y, doc_height)
}

/// Window scroll listener for the page lifetime
fn bind_scroll_listener(ctx: AppContext, loader: RwSignal<ListLoader<Product>>) {
    let Some(win) = web_sys::window() else { return };
    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        // The in-flight guard absorbs bursts; only check geometry when idle
        let idle = loader.try_with_untracked(|l| !l.is_loading() && !l.is_exhausted()).unwrap_or(false);
        if idle && scrolled_near_bottom() {
            load_more(ctx, loader);
        }
    });
    let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

#[component]
pub fn ProductsPage(products: Vec<Product>, has_more: bool, next_page: Option<PageToken>) -> impl IntoView {
    let ctx = use_app_context();
    let loader = RwSignal::new(ListLoader::new(products, has_more, next_page));
    log::info!(
        "[products] {} products listed, more: {}",
        loader.with_untracked(|l| l.items().len()),
        !loader.with_untracked(ListLoader::is_exhausted)
    );

    bind_scroll_listener(ctx, loader);

    view! {
        <div class="products-page">
            <div class="products-grid">
                <For
                    each=move || loader.with(|l| l.items().to_vec())
                    key=|product| product.id
                    children=|product| view! { <ProductCard product=product /> }
                />
            </div>
            <Show when=move || loader.with(|l| l.items().is_empty())>
                <p class="empty-state">"No products found"</p>
            </Show>
            <Show when=move || loader.with(ListLoader::is_loading)>
                <div class="loading-indicator">
                    <span class="spinner"></span>
                    " Loading more products..."
                </div>
            </Show>
            <Show when=move || loader.with(ListLoader::show_end_marker)>
                <div class="no-more-products">"No more products to load"</div>
            </Show>
        </div>
    }
}

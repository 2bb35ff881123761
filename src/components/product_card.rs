//! Product Card Component
//!
//! Storefront grid card with stock badge, quantity spinner and the
//! optimistic add-to-cart button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart::{added_message, AddToCartState, Quantity, StockBadge, ADDED_REVERT_MS};
use crate::commands;
use crate::components::QuantitySpinner;
use crate::context::use_app_context;
use crate::error::{UiError, GENERIC_ERROR};
use crate::models::Product;
use crate::store::ToastKind;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let quantity = RwSignal::new(Quantity::for_stock(product.stock));
    let cart_state = RwSignal::new(AddToCartState::default());

    let id = product.id;
    let in_stock = product.stock > 0;
    let badge = StockBadge::for_product(&product);
    let price = product.price_label();
    let name = StoredValue::new(product.name.clone());

    let on_add = move |_| {
        if !cart_state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }
        let qty = quantity.get_untracked().value();
        let endpoints = ctx.endpoints();
        let csrf = ctx.csrf_token();

        spawn_local(async move {
            match commands::add_to_cart(&endpoints, &csrf, id, qty).await {
                Ok(reply) => {
                    cart_state.try_update(|s| s.succeeded());
                    if let Some(count) = reply.cart_count {
                        ctx.set_cart_count(count);
                    }
                    let message = added_message(&name.get_value(), qty);
                    log::info!("[cart] {}", message);
                    ctx.notify_titled(ToastKind::Success, "Added to Cart", message);

                    TimeoutFuture::new(ADDED_REVERT_MS).await;
                    cart_state.try_update(|s| s.revert());
                }
                Err(err) => {
                    cart_state.try_update(|s| s.failed());
                    log::error!("[cart] add of product {} failed: {}", id, err);
                    let message = match &err {
                        UiError::Transport(detail) => format!("{}: {}", GENERIC_ERROR, detail),
                        other => other.user_message(),
                    };
                    ctx.notify_titled(ToastKind::Error, "Error", message);
                }
            }
        });
    };

    let image = match product.image_url.clone() {
        Some(url) => view! { <img src=url alt=product.name.clone() loading="lazy" /> }.into_any(),
        None => view! {
            <div class="product-placeholder">
                <span>"No image"</span>
            </div>
        }
        .into_any(),
    };

    let actions = if in_stock {
        view! {
            <QuantitySpinner quantity=quantity />
            <button
                class="btn btn-sm btn-primary add-to-cart-btn"
                class:added=move || cart_state.get() == AddToCartState::Added
                disabled=move || cart_state.get().is_disabled()
                on:click=on_add
            >
                {move || match cart_state.get() {
                    AddToCartState::Ready => "Add to Cart",
                    AddToCartState::Adding => "Adding...",
                    AddToCartState::Added => "Added!",
                }}
            </button>
        }
        .into_any()
    } else {
        view! { <button class="btn btn-sm" disabled=true>"Out of Stock"</button> }.into_any()
    };

    view! {
        <div class="product-card" data-product-id=id.to_string()>
            <div class="product-image">
                {image}
                {badge.map(|b| view! { <span class=b.class()>{b.label()}</span> })}
            </div>
            <div class="product-info">
                <span class="product-category">{product.category}</span>
                <h3 class="product-name">{product.name}</h3>
                <p class="product-description">{product.description}</p>
                <div class="product-footer">
                    <div class="product-price-section">
                        <span class="product-price">{price}</span>
                    </div>
                    <div class="product-actions">{actions}</div>
                </div>
            </div>
        </div>
    }
}

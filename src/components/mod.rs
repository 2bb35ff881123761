//! UI Components
//!
//! Reusable Leptos components shared by the page controllers.

mod kebab_menu;
mod confirm_modal;
mod toast_host;
mod cart_badges;
mod quantity_spinner;
mod product_card;
mod chart_canvas;

pub use kebab_menu::{KebabItem, KebabMenu};
pub use confirm_modal::ConfirmModal;
pub use toast_host::ToastHost;
pub use cart_badges::CartBadgeSync;
pub use quantity_spinner::QuantitySpinner;
pub use product_card::ProductCard;
pub use chart_canvas::ChartCanvas;

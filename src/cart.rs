//! Add-to-Cart State
//!
//! Quantity spinner bounds and the optimistic button cycle
//! `Ready → Adding → Added → Ready`.

use crate::models::Product;

/// How long "Added!" stays on the button
pub const ADDED_REVERT_MS: u32 = 1500;

/// Products at or below this stock get a low-stock badge
pub const LOW_STOCK_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    value: u32,
    min: u32,
    max: u32,
}

impl Quantity {
    /// Spinner for a product: `1..=stock`
    pub fn for_stock(stock: u32) -> Self {
        Self {
            value: 1,
            min: 1,
            max: stock.max(1),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.value > self.min {
            self.value -= 1;
        }
    }

    pub fn can_increment(&self) -> bool {
        self.value < self.max
    }

    pub fn can_decrement(&self) -> bool {
        self.value > self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddToCartState {
    #[default]
    Ready,
    Adding,
    Added,
}

impl AddToCartState {
    /// Returns false if a request is already running or the confirmation is showing
    pub fn begin(&mut self) -> bool {
        if *self == AddToCartState::Ready {
            *self = AddToCartState::Adding;
            true
        } else {
            false
        }
    }

    pub fn succeeded(&mut self) {
        if *self == AddToCartState::Adding {
            *self = AddToCartState::Added;
        }
    }

    pub fn failed(&mut self) {
        *self = AddToCartState::Ready;
    }

    /// Timer after success
    pub fn revert(&mut self) {
        if *self == AddToCartState::Added {
            *self = AddToCartState::Ready;
        }
    }

    pub fn is_disabled(&self) -> bool {
        *self != AddToCartState::Ready
    }
}

/// Toast text after a successful add
pub fn added_message(product_name: &str, quantity: u32) -> String {
    if quantity > 1 {
        format!("{}x {} added to cart!", quantity, product_name)
    } else {
        format!("{} added to cart!", product_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBadge {
    LowStock(u32),
    OutOfStock,
}

impl StockBadge {
    pub fn for_product(product: &Product) -> Option<Self> {
        match product.stock {
            0 => Some(StockBadge::OutOfStock),
            n if n <= LOW_STOCK_LIMIT => Some(StockBadge::LowStock(n)),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            StockBadge::LowStock(n) => format!("Only {} left!", n),
            StockBadge::OutOfStock => "Out of Stock".to_string(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            StockBadge::LowStock(_) => "product-badge low-stock",
            StockBadge::OutOfStock => "product-badge out-of-stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        Product {
            id: 1,
            name: "Lamp".into(),
            price: 20.0,
            stock,
            category: String::new(),
            description: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn test_quantity_clamped_to_stock() {
        let mut q = Quantity::for_stock(3);
        assert!(!q.can_decrement());
        q.decrement();
        assert_eq!(q.value(), 1);
        for _ in 0..5 {
            q.increment();
        }
        assert_eq!(q.value(), 3);
        assert!(!q.can_increment());
        assert!(q.can_decrement());
    }

    #[test]
    fn test_single_unit_stock() {
        let q = Quantity::for_stock(1);
        assert!(!q.can_increment());
        assert!(!q.can_decrement());
    }

    #[test]
    fn test_button_cycle() {
        let mut state = AddToCartState::default();
        assert!(state.begin());
        assert!(state.is_disabled());
        assert!(!state.begin());
        state.succeeded();
        assert_eq!(state, AddToCartState::Added);
        assert!(!state.begin());
        state.revert();
        assert_eq!(state, AddToCartState::Ready);
    }

    #[test]
    fn test_failure_reenables() {
        let mut state = AddToCartState::default();
        state.begin();
        state.failed();
        assert!(!state.is_disabled());
    }

    #[test]
    fn test_added_message() {
        assert_eq!(added_message("Lamp", 1), "Lamp added to cart!");
        assert_eq!(added_message("Lamp", 2), "2x Lamp added to cart!");
    }

    #[test]
    fn test_stock_badges() {
        assert_eq!(StockBadge::for_product(&product(0)), Some(StockBadge::OutOfStock));
        assert_eq!(StockBadge::for_product(&product(5)).map(|b| b.label()), Some("Only 5 left!".to_string()));
        assert_eq!(StockBadge::for_product(&product(6)), None);
    }
}

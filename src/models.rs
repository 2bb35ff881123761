//! Frontend Models
//!
//! View-models injected by the server and the JSON shapes exchanged with it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::UiError;

/// Order lifecycle status (matches backend choices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire value, also used as CSS class
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalized display label
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin order table row
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderRow {
    #[serde(deserialize_with = "de_id")]
    pub id: u32,
    pub order_number: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub created: String,
    pub status: OrderStatus,
}

/// Admin customer table row
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomerRow {
    #[serde(deserialize_with = "de_id")]
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub order_count: u32,
}

/// Storefront product card
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "de_id")]
    pub id: u32,
    pub name: String,
    #[serde(deserialize_with = "de_price")]
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Opaque pagination cursor (the server sends a page number or a string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken(pub String);

impl PageToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PageToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match NumOrString::deserialize(deserializer)? {
            NumOrString::Num(n) => Ok(PageToken(n.to_string())),
            NumOrString::Str(s) => Ok(PageToken(s)),
        }
    }
}

/// `?ajax=1` product listing response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub has_more: bool,
    #[serde(default, deserialize_with = "de_opt_token")]
    pub next_page: Option<PageToken>,
}

/// Response shape shared by every JSON mutation endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cart_count: Option<u32>,
}

impl MutationResponse {
    /// Treat `success: false` as an error carrying the server message or `fallback`
    pub fn into_result(self, fallback: &str) -> Result<Self, UiError> {
        if self.success {
            Ok(self)
        } else {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            Err(UiError::Rejected(message))
        }
    }
}

/// Label/value series for a chart
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
}

/// Dashboard aggregates
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    #[serde(default)]
    pub revenue_labels: Vec<String>,
    #[serde(default)]
    pub revenue_data: Vec<f64>,
    #[serde(default)]
    pub orders_by_status: Series,
}

/// Reports aggregates
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCharts {
    #[serde(default)]
    pub revenue_labels: Vec<String>,
    #[serde(default)]
    pub revenue_data: Vec<f64>,
    #[serde(default)]
    pub category_labels: Vec<String>,
    #[serde(default)]
    pub category_data: Vec<f64>,
    /// Counts in `OrderStatus::ALL` order
    #[serde(default)]
    pub status_data: Vec<f64>,
}

// ========================
// Lenient deserializers
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrString {
    Num(u64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FloatOrString {
    Num(f64),
    Str(String),
}

pub(crate) fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    use serde::de::Error;
    match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => u32::try_from(n).map_err(D::Error::custom),
        NumOrString::Str(s) => s.trim().parse().map_err(D::Error::custom),
    }
}

fn de_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    use serde::de::Error;
    match FloatOrString::deserialize(deserializer)? {
        FloatOrString::Num(n) => Ok(n),
        FloatOrString::Str(s) => s.trim().parse().map_err(D::Error::custom),
    }
}

pub(crate) fn de_opt_token<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<PageToken>, D::Error> {
    let token = Option::<PageToken>::deserialize(deserializer)?;
    Ok(token.filter(|t| !t.0.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_accepts_string_price_and_id() {
        let json = r#"{"id":"12","name":"Mug","price":"7.5","stock":3,"category":"Kitchen","description":"","image_url":null}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 12);
        assert_eq!(p.price_label(), "$7.50");
        assert_eq!(p.image_url, None);
    }

    #[test]
    fn test_product_page_tokens() {
        let page: ProductPage = serde_json::from_str(r#"{"products":[],"has_more":true,"next_page":3}"#).unwrap();
        assert_eq!(page.next_page, Some(PageToken("3".into())));

        let page: ProductPage = serde_json::from_str(r#"{"products":[],"has_more":false,"next_page":null}"#).unwrap();
        assert_eq!(page.next_page, None);

        let page: ProductPage = serde_json::from_str(r#"{"products":[],"has_more":false}"#).unwrap();
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_rejected_response_uses_server_message() {
        let resp: MutationResponse = serde_json::from_str(r#"{"success":false,"message":"Order locked"}"#).unwrap();
        assert_eq!(resp.into_result("Failed to update status"), Err(UiError::Rejected("Order locked".into())));
    }

    #[test]
    fn test_rejected_response_falls_back() {
        let resp: MutationResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(
            resp.into_result("Failed to update status"),
            Err(UiError::Rejected("Failed to update status".into()))
        );
    }

    #[test]
    fn test_cart_count_is_carried() {
        let resp: MutationResponse = serde_json::from_str(r#"{"success":true,"cart_count":5}"#).unwrap();
        assert_eq!(resp.into_result("x").unwrap().cart_count, Some(5));
    }

    #[test]
    fn test_status_round_trips_wire_value() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("refunded"), None);
        assert_eq!(serde_json::to_string(&OrderStatus::Shipped).unwrap(), r#""shipped""#);
    }
}

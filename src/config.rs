//! Page Configuration
//!
//! Every server-rendered page embeds its injected globals as JSON:
//!
//! ```html
//! <script id="shoppy-config" type="application/json">
//!   {"page": "orders_list", "csrfToken": "...", "urls": {...}, "orders": [...]}
//! </script>
//! ```
//!
//! The `page` field selects which controller gets mounted.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    de_id, de_opt_token, CustomerRow, DashboardCharts, OrderRow, OrderStatus, PageToken, Product, ReportCharts,
};

/// Element id of the embedded config
pub const CONFIG_ELEMENT_ID: &str = "shoppy-config";

/// Default customer delete base, matching the admin URL conf
pub const DEFAULT_CUSTOMER_DELETE_BASE: &str = "/customers/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no browser window/document")]
    NoDocument,
    #[error("page has no #shoppy-config element")]
    Missing,
    #[error("invalid page config: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default)]
    pub csrf_token: Option<String>,
    /// Lower the log level to debug
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub urls: Endpoints,
    #[serde(flatten)]
    pub page: PageKind,
}

/// URL table for the current page; unused entries may be empty
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoints {
    pub update_status: String,
    pub bulk_update: String,
    pub delete_order: String,
    pub delete_customer: String,
    pub products: String,
    pub api_cart_add: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            update_status: String::new(),
            bulk_update: String::new(),
            delete_order: String::new(),
            delete_customer: DEFAULT_CUSTOMER_DELETE_BASE.to_string(),
            products: String::new(),
            api_cart_add: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageKind {
    OrdersList {
        #[serde(default)]
        orders: Vec<OrderRow>,
    },
    #[serde(rename_all = "camelCase")]
    OrderDetail {
        #[serde(deserialize_with = "de_id")]
        order_id: u32,
        order_number: String,
        current_status: OrderStatus,
    },
    Customers {
        #[serde(default)]
        customers: Vec<CustomerRow>,
    },
    #[serde(rename_all = "camelCase")]
    Products {
        #[serde(default)]
        products: Vec<Product>,
        #[serde(default)]
        has_more: bool,
        #[serde(default, deserialize_with = "de_opt_token")]
        next_page: Option<PageToken>,
    },
    #[serde(rename_all = "camelCase")]
    Dashboard {
        #[serde(default)]
        chart_data: Option<DashboardCharts>,
    },
    #[serde(rename_all = "camelCase")]
    Reports {
        #[serde(default)]
        chart_data: Option<ReportCharts>,
        #[serde(default)]
        export_base_url: Option<String>,
    },
}

impl PageKind {
    pub fn name(&self) -> &'static str {
        match self {
            PageKind::OrdersList { .. } => "orders_list",
            PageKind::OrderDetail { .. } => "order_detail",
            PageKind::Customers { .. } => "customers",
            PageKind::Products { .. } => "products",
            PageKind::Dashboard { .. } => "dashboard",
            PageKind::Reports { .. } => "reports",
        }
    }
}

pub fn parse_page_config(json: &str) -> Result<PageConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse the config element of the current document
pub fn load_page_config() -> Result<PageConfig, ConfigError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ConfigError::NoDocument)?;
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .ok_or(ConfigError::Missing)?;
    parse_page_config(&text)
}

/// Pick the CSRF token: the injected one, else the `csrftoken` cookie
pub fn resolve_csrf_token(injected: Option<&str>, cookies: &str) -> Option<String> {
    if let Some(token) = injected.filter(|t| !t.is_empty()) {
        return Some(token.to_string());
    }
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "csrftoken").then(|| {
            percent_encoding::percent_decode_str(value)
                .decode_utf8_lossy()
                .into_owned()
        })
    })
}

/// `document.cookie`, or empty outside an HTML document
pub fn document_cookies() -> String {
    use wasm_bindgen::JsCast;
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_orders_list() {
        let json = r#"{
            "page": "orders_list",
            "csrfToken": "tok",
            "urls": {"updateStatus": "/orders/status/", "bulkUpdate": "/orders/bulk/", "deleteOrder": "/orders/"},
            "orders": [
                {"id": 1, "order_number": "ORD-0001", "status": "pending"},
                {"id": "2", "order_number": "ORD-0002", "status": "shipped", "customer": "Ada"}
            ]
        }"#;
        let cfg = parse_page_config(json).unwrap();
        assert_eq!(cfg.csrf_token.as_deref(), Some("tok"));
        assert_eq!(cfg.urls.bulk_update, "/orders/bulk/");
        assert_eq!(cfg.urls.delete_customer, DEFAULT_CUSTOMER_DELETE_BASE);
        match cfg.page {
            PageKind::OrdersList { orders } => {
                assert_eq!(orders.len(), 2);
                assert_eq!(orders[1].id, 2);
                assert_eq!(orders[1].status, OrderStatus::Shipped);
            }
            other => panic!("unexpected page {}", other.name()),
        }
    }

    #[test]
    fn test_parse_every_page_kind() {
        let pages = [
            (r#"{"page":"order_detail","orderId":"9","orderNumber":"ORD-9","currentStatus":"processing"}"#, "order_detail"),
            (r#"{"page":"customers","customers":[{"id":1,"name":"Ada","email":"ada@example.com"}]}"#, "customers"),
            (r#"{"page":"products","products":[],"hasMore":true,"nextPage":2}"#, "products"),
            (r#"{"page":"dashboard"}"#, "dashboard"),
            (r#"{"page":"reports","exportBaseUrl":"?period=7d","chartData":{"statusData":[1,2,0,0,0]}}"#, "reports"),
        ];
        for (json, name) in pages {
            let cfg = parse_page_config(json).unwrap();
            assert_eq!(cfg.page.name(), name);
        }
    }

    #[test]
    fn test_products_page_cursor() {
        let cfg = parse_page_config(r#"{"page":"products","hasMore":true,"nextPage":2}"#).unwrap();
        match cfg.page {
            PageKind::Products { has_more, next_page, .. } => {
                assert!(has_more);
                assert_eq!(next_page, Some(PageToken("2".into())));
            }
            other => panic!("unexpected page {}", other.name()),
        }
    }

    #[test]
    fn test_unknown_page_is_an_error() {
        assert!(matches!(
            parse_page_config(r#"{"page":"checkout"}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(parse_page_config("not json").is_err());
    }

    #[test]
    fn test_csrf_prefers_injected_token() {
        assert_eq!(resolve_csrf_token(Some("abc"), "csrftoken=zzz"), Some("abc".into()));
    }

    #[test]
    fn test_csrf_falls_back_to_cookie() {
        let cookies = "sessionid=1; csrftoken=a%2Bb; theme=dark";
        assert_eq!(resolve_csrf_token(None, cookies), Some("a+b".into()));
        assert_eq!(resolve_csrf_token(Some(""), cookies), Some("a+b".into()));
        assert_eq!(resolve_csrf_token(None, "sessionid=1"), None);
    }
}

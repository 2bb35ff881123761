//! Mutation Dispatcher
//!
//! Every state-changing call is first turned into a `RequestPlan` (pure,
//! testable), then executed with the matching transport.

use serde::Serialize;

use crate::config::Endpoints;
use crate::error::UiError;
use crate::models::{MutationResponse, OrderStatus};

use super::{post_json, submit_post_form};

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    UpdateStatus { order_id: u32, status: OrderStatus },
    BulkUpdateStatus { order_ids: Vec<u32>, status: OrderStatus },
    AddToCart { product_id: u32, quantity: u32 },
    DeleteOrder { order_id: u32 },
    DeleteCustomer { customer_id: u32 },
}

#[derive(Serialize)]
struct StatusArgs {
    order_id: u32,
    status: OrderStatus,
}

#[derive(Serialize)]
struct BulkStatusArgs<'a> {
    order_ids: &'a [u32],
    status: OrderStatus,
}

#[derive(Serialize)]
struct CartAddArgs {
    product_id: u32,
    quantity: u32,
}

/// What goes on the wire
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPlan {
    /// `fetch` POST with JSON body and `X-CSRFToken`
    Json {
        url: String,
        body: serde_json::Value,
        /// Also send `X-Requested-With: XMLHttpRequest`
        ajax: bool,
    },
    /// Navigating form POST with `csrfmiddlewaretoken`
    Form { action: String },
}

/// Outcome of a dispatched mutation
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    /// JSON endpoint answered `success: true`
    Completed(MutationResponse),
    /// Form submitted; the browser is leaving the page
    Navigating,
}

fn require<'a>(url: &'a str, name: &str) -> Result<&'a str, UiError> {
    if url.is_empty() {
        Err(UiError::Config(format!("no `{}` endpoint configured", name)))
    } else {
        Ok(url)
    }
}

/// `<base><id>/delete/`, tolerating a base without trailing slash
pub fn delete_action(base: &str, id: u32) -> String {
    format!("{}/{}/delete/", base.trim_end_matches('/'), id)
}

fn to_json<T: Serialize>(args: &T) -> Result<serde_json::Value, UiError> {
    serde_json::to_value(args).map_err(|e| UiError::Config(e.to_string()))
}

impl Mutation {
    pub fn plan(&self, endpoints: &Endpoints) -> Result<RequestPlan, UiError> {
        let plan = match self {
            Mutation::UpdateStatus { order_id, status } => RequestPlan::Json {
                url: require(&endpoints.update_status, "updateStatus")?.to_string(),
                body: to_json(&StatusArgs { order_id: *order_id, status: *status })?,
                ajax: false,
            },
            Mutation::BulkUpdateStatus { order_ids, status } => RequestPlan::Json {
                url: require(&endpoints.bulk_update, "bulkUpdate")?.to_string(),
                body: to_json(&BulkStatusArgs { order_ids, status: *status })?,
                ajax: false,
            },
            Mutation::AddToCart { product_id, quantity } => RequestPlan::Json {
                url: require(&endpoints.api_cart_add, "apiCartAdd")?.to_string(),
                body: to_json(&CartAddArgs { product_id: *product_id, quantity: *quantity })?,
                ajax: true,
            },
            Mutation::DeleteOrder { order_id } => RequestPlan::Form {
                action: delete_action(require(&endpoints.delete_order, "deleteOrder")?, *order_id),
            },
            Mutation::DeleteCustomer { customer_id } => RequestPlan::Form {
                action: delete_action(require(&endpoints.delete_customer, "deleteCustomer")?, *customer_id),
            },
        };
        Ok(plan)
    }

    /// Shown when the server rejects without a message
    pub fn failure_message(&self) -> &'static str {
        match self {
            Mutation::UpdateStatus { .. } => "Failed to update status",
            Mutation::BulkUpdateStatus { .. } => "Failed to update orders",
            Mutation::AddToCart { .. } => "Failed to add to cart",
            Mutation::DeleteOrder { .. } => "Failed to delete order",
            Mutation::DeleteCustomer { .. } => "Failed to delete customer",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Mutation::UpdateStatus { .. } => "update_status",
            Mutation::BulkUpdateStatus { .. } => "bulk_update_status",
            Mutation::AddToCart { .. } => "add_to_cart",
            Mutation::DeleteOrder { .. } => "delete_order",
            Mutation::DeleteCustomer { .. } => "delete_customer",
        }
    }
}

/// Issue exactly one request for `mutation`
pub async fn dispatch(mutation: &Mutation, endpoints: &Endpoints, csrf: &str) -> Result<Dispatched, UiError> {
    match mutation.plan(endpoints)? {
        RequestPlan::Json { url, body, ajax } => {
            log::info!("[mutation] {} -> POST {}", mutation.name(), url);
            let reply = post_json(&url, csrf, &body, ajax)
                .await?
                .into_result(mutation.failure_message())?;
            Ok(Dispatched::Completed(reply))
        }
        RequestPlan::Form { action } => {
            log::info!("[mutation] {} -> form POST {}", mutation.name(), action);
            submit_post_form(&action, csrf)?;
            Ok(Dispatched::Navigating)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn endpoints() -> Endpoints {
        Endpoints {
            update_status: "/admin/orders/update-status/".into(),
            bulk_update: "/admin/orders/bulk-update/".into(),
            delete_order: "/admin/orders/".into(),
            products: "/products/".into(),
            api_cart_add: "/api/cart/add/".into(),
            ..Endpoints::default()
        }
    }

    #[test]
    fn test_bulk_plan_payload() {
        let plan = Mutation::BulkUpdateStatus {
            order_ids: vec![11, 12, 13],
            status: OrderStatus::Shipped,
        }
        .plan(&endpoints())
        .unwrap();

        assert_eq!(
            plan,
            RequestPlan::Json {
                url: "/admin/orders/bulk-update/".into(),
                body: json!({"order_ids": [11, 12, 13], "status": "shipped"}),
                ajax: false,
            }
        );
    }

    #[test]
    fn test_status_plan_payload() {
        let plan = Mutation::UpdateStatus { order_id: 4, status: OrderStatus::Delivered }
            .plan(&endpoints())
            .unwrap();
        match plan {
            RequestPlan::Json { body, .. } => assert_eq!(body, json!({"order_id": 4, "status": "delivered"})),
            other => panic!("unexpected plan {:?}", other),
        }
    }

    #[test]
    fn test_cart_plan_payload() {
        let plan = Mutation::AddToCart { product_id: 9, quantity: 2 }.plan(&endpoints()).unwrap();
        assert_eq!(
            plan,
            RequestPlan::Json {
                url: "/api/cart/add/".into(),
                body: json!({"product_id": 9, "quantity": 2}),
                ajax: true,
            }
        );
    }

    #[test]
    fn test_delete_plans_use_forms() {
        assert_eq!(
            Mutation::DeleteOrder { order_id: 5 }.plan(&endpoints()).unwrap(),
            RequestPlan::Form { action: "/admin/orders/5/delete/".into() }
        );
        assert_eq!(
            Mutation::DeleteCustomer { customer_id: 8 }.plan(&endpoints()).unwrap(),
            RequestPlan::Form { action: "/customers/8/delete/".into() }
        );
    }

    #[test]
    fn test_missing_endpoint_is_config_error() {
        let err = Mutation::UpdateStatus { order_id: 1, status: OrderStatus::Pending }
            .plan(&Endpoints::default())
            .unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    #[test]
    fn test_delete_action_normalizes_slash() {
        assert_eq!(delete_action("/orders", 3), "/orders/3/delete/");
        assert_eq!(delete_action("/orders/", 3), "/orders/3/delete/");
    }
}

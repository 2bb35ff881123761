//! Cart Commands

use crate::config::Endpoints;
use crate::error::UiError;
use crate::models::MutationResponse;

use super::{dispatch, Dispatched, Mutation};

/// Add `quantity` units; the reply carries the new `cart_count`
pub async fn add_to_cart(endpoints: &Endpoints, csrf: &str, product_id: u32, quantity: u32) -> Result<MutationResponse, UiError> {
    match dispatch(&Mutation::AddToCart { product_id, quantity }, endpoints, csrf).await? {
        Dispatched::Completed(reply) => Ok(reply),
        Dispatched::Navigating => Err(UiError::Config("cart add planned as a form post".into())),
    }
}

//! Product Listing Commands
//!
//! Next-page fetches for the storefront grid. The current URL's filters
//! (category, search, sort) ride along; only `page` and `ajax` are replaced.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::Endpoints;
use crate::error::UiError;
use crate::models::{PageToken, ProductPage};

use super::get_json;

/// Query-value encoding: everything but unreserved characters
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Build `?<filters>&page=<token>&ajax=1` from the current `location.search`
pub fn page_query(search: &str, page: &PageToken) -> String {
    let mut pairs: Vec<&str> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
            key != "page" && key != "ajax"
        })
        .collect();

    let page_pair = format!("page={}", utf8_percent_encode(page.as_str(), QUERY_VALUE));
    pairs.push(&page_pair);
    pairs.push("ajax=1");
    format!("?{}", pairs.join("&"))
}

pub async fn fetch_product_page(endpoints: &Endpoints, search: &str, page: &PageToken) -> Result<ProductPage, UiError> {
    if endpoints.products.is_empty() {
        return Err(UiError::Config("no `products` endpoint configured".into()));
    }
    let url = format!("{}{}", endpoints.products, page_query(search, page));
    log::debug!("[products] GET {}", url);
    get_json(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(s: &str) -> PageToken {
        PageToken(s.to_string())
    }

    #[test]
    fn test_query_without_filters() {
        assert_eq!(page_query("", &page("2")), "?page=2&ajax=1");
        assert_eq!(page_query("?", &page("2")), "?page=2&ajax=1");
    }

    #[test]
    fn test_query_keeps_filters_and_replaces_page() {
        assert_eq!(
            page_query("?category=toys&page=1&sort=price&ajax=0", &page("3")),
            "?category=toys&sort=price&page=3&ajax=1"
        );
    }

    #[test]
    fn test_query_keeps_encoded_filter_values() {
        assert_eq!(page_query("?q=red%20lamp", &page("2")), "?q=red%20lamp&page=2&ajax=1");
    }

    #[test]
    fn test_opaque_token_is_encoded() {
        assert_eq!(page_query("", &page("abc=/+")), "?page=abc%3D%2F%2B&ajax=1");
    }
}

use crate::shared::api_utils::{get_json, SEARCH_PRODUCTS_PATH};
use contracts::domain::a003_product::{
    PosCatalog, ProductSearchItem, ProductSearchQuery, ProductSearchResponse,
};
use contracts::shared::api_error::ApiError;

/// Id of the `<script type="application/json">` block the POS template
/// embeds with the products shown before any search and the shop's categories.
const INITIAL_PRODUCTS_ELEMENT_ID: &str = "pos-initial-products";

pub async fn search_products(query: &ProductSearchQuery) -> Result<Vec<ProductSearchItem>, ApiError> {
    let query_string = serde_qs::to_string(query)
        .map_err(|e| ApiError::Transport(format!("Failed to encode query: {}", e)))?;
    let path = format!("{}?{}", SEARCH_PRODUCTS_PATH, query_string);
    let response: ProductSearchResponse = get_json(&path, &[]).await?;
    Ok(response.products)
}

/// Catalog embedded in the page, empty when the block is absent
pub fn initial_catalog() -> PosCatalog {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(INITIAL_PRODUCTS_ELEMENT_ID))
    else {
        return PosCatalog::default();
    };
    let Some(json) = element.text_content() else {
        return PosCatalog::default();
    };
    match serde_json::from_str::<PosCatalog>(&json) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("Ignoring malformed initial catalog: {}", e);
            PosCatalog::default()
        }
    }
}

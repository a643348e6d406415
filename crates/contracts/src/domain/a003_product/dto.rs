use crate::shared::config::MIN_PRODUCT_QUERY_LEN;
use crate::shared::serde_ids::deserialize_id;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Query string of search-products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSearchQuery {
    pub q: String,
}

impl ProductSearchQuery {
    /// `None` for queries too short to be worth a request
    pub fn new(query: &str) -> Option<Self> {
        if query.chars().count() < MIN_PRODUCT_QUERY_LEN {
            return None;
        }
        Some(Self {
            q: query.to_string(),
        })
    }
}

/// Product card on the POS grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock: Option<Decimal>,
    #[serde(default)]
    pub barcode: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    /// Category id used by the grid's category buttons
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSearchResponse {
    #[serde(default)]
    pub products: Vec<ProductSearchItem>,
}

/// One category button of the POS grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategoryOption {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// Catalog the POS page embeds at load: the products shown before any
/// search plus the shop's categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PosCatalog {
    #[serde(default)]
    pub products: Vec<ProductSearchItem>,
    #[serde(default)]
    pub categories: Vec<ProductCategoryOption>,
}

impl PosCatalog {
    /// Buttons of the category bar: the shop's own list when the page sends
    /// one, otherwise the distinct categories of the products in grid order,
    /// labelled with their name when known.
    pub fn category_options(&self) -> Vec<ProductCategoryOption> {
        if !self.categories.is_empty() {
            return self.categories.clone();
        }
        let mut options: Vec<ProductCategoryOption> = Vec::new();
        for product in &self.products {
            let Some(id) = &product.category else {
                continue;
            };
            if options.iter().any(|o| &o.id == id) {
                continue;
            }
            options.push(ProductCategoryOption {
                id: id.clone(),
                name: product.category_name.clone().unwrap_or_else(|| id.clone()),
            });
        }
        options
    }
}

/// Category buttons above the product grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProductCategoryFilter {
    #[default]
    All,
    Category(String),
}

impl ProductCategoryFilter {
    pub fn matches(&self, product: &ProductSearchItem) -> bool {
        match self {
            ProductCategoryFilter::All => true,
            ProductCategoryFilter::Category(id) => product.category.as_deref() == Some(id.as_str()),
        }
    }

    /// Products visible under this filter, in grid order
    pub fn apply<'a>(&self, products: &'a [ProductSearchItem]) -> Vec<&'a ProductSearchItem> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn products() -> Vec<ProductSearchItem> {
        serde_json::from_value::<ProductSearchResponse>(json!({
            "products": [
                {"id": 1, "name": "Milk", "price": 32.5, "stock": 40, "barcode": "", "image": null, "unit": "pcs", "category": "3"},
                {"id": 2, "name": "Pen", "price": 10, "stock": 5, "barcode": "8901", "image": null, "unit": "pcs", "category": "7"},
                {"id": 3, "name": "Loose rice", "price": 60, "unit": "kg"}
            ]
        }))
        .unwrap()
        .products
    }

    #[test]
    fn test_short_queries_are_not_sent() {
        assert_eq!(ProductSearchQuery::new(""), None);
        assert_eq!(ProductSearchQuery::new("m"), None);
        assert_eq!(
            ProductSearchQuery::new("mi"),
            Some(ProductSearchQuery { q: "mi".into() })
        );
    }

    #[test]
    fn test_numeric_ids_become_strings() {
        let items = products();
        assert_eq!(items[0].id, "1");
        assert_eq!(items[2].category, None);
    }

    #[test]
    fn test_catalog_prefers_the_shop_category_list() {
        let catalog: PosCatalog = serde_json::from_value(json!({
            "products": [
                {"id": 1, "name": "Milk", "price": 32.5, "category": "3"}
            ],
            "categories": [
                {"id": 3, "name": "Dairy"},
                {"id": 7, "name": "Stationery"}
            ]
        }))
        .unwrap();
        assert_eq!(
            catalog.category_options(),
            vec![
                ProductCategoryOption { id: "3".into(), name: "Dairy".into() },
                ProductCategoryOption { id: "7".into(), name: "Stationery".into() },
            ]
        );
    }

    #[test]
    fn test_catalog_derives_categories_from_products() {
        let catalog: PosCatalog = serde_json::from_value(json!({
            "products": [
                {"id": 1, "name": "Pen", "price": 10, "category": "7", "category_name": "Stationery"},
                {"id": 2, "name": "Loose rice", "price": 60},
                {"id": 3, "name": "Milk", "price": 32.5, "category": "3"},
                {"id": 4, "name": "Pencil", "price": 5, "category": "7", "category_name": "Stationery"}
            ]
        }))
        .unwrap();
        let options = catalog.category_options();
        let labels: Vec<_> = options.iter().map(|o| (o.id.as_str(), o.name.as_str())).collect();
        assert_eq!(labels, vec![("7", "Stationery"), ("3", "3")]);
    }

    #[test]
    fn test_category_filter() {
        let items = products();
        assert_eq!(ProductCategoryFilter::All.apply(&items).len(), 3);
        let pens = ProductCategoryFilter::Category("7".into()).apply(&items);
        assert_eq!(pens.len(), 1);
        assert_eq!(pens[0].name, "Pen");
        assert!(ProductCategoryFilter::Category("99".into()).apply(&items).is_empty());
    }
}

//! Product profitability table: cached records, the search/category/sort
//! pipeline and the aggregate stats shown under the table.

use super::dto::ProductProfitRow;
use crate::shared::csv::CsvExportable;
use crate::shared::number_format::{
    format_money, format_number_with_decimals, format_percent, parse_integer, parse_money,
    parse_percent,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Product categories of the profitability table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Food,
    Books,
    #[default]
    Other,
}

impl ProductCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "electronics",
            ProductCategory::Clothing => "clothing",
            ProductCategory::Food => "food",
            ProductCategory::Books => "books",
            ProductCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Food => "Food & Beverages",
            ProductCategory::Books => "Books",
            ProductCategory::Other => "Other",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Electronics,
            ProductCategory::Clothing,
            ProductCategory::Food,
            ProductCategory::Books,
            ProductCategory::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "electronics" => Some(ProductCategory::Electronics),
            "clothing" => Some(ProductCategory::Clothing),
            "food" => Some(ProductCategory::Food),
            "books" => Some(ProductCategory::Books),
            "other" => Some(ProductCategory::Other),
            _ => None,
        }
    }

    /// Missing or unknown categories count as `Other`
    pub fn from_optional_code(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or_default()
    }
}

/// Category dropdown: everything, or one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.code(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == "all" {
            return Some(CategoryFilter::All);
        }
        ProductCategory::from_code(code).map(CategoryFilter::Only)
    }

    pub fn matches(&self, record: &TableRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => record.category == *c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Profit,
    Margin,
    Quantity,
    Revenue,
    Name,
}

impl SortField {
    pub fn code(&self) -> &'static str {
        match self {
            SortField::Profit => "profit",
            SortField::Margin => "margin",
            SortField::Quantity => "quantity",
            SortField::Revenue => "revenue",
            SortField::Name => "name",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "profit" => Some(SortField::Profit),
            "margin" => Some(SortField::Margin),
            "quantity" => Some(SortField::Quantity),
            "revenue" => Some(SortField::Revenue),
            "name" => Some(SortField::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort selection, written as `{field}_{direction}` (e.g. `profit_desc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::new(SortField::Profit, SortDirection::Desc)
    }
}

impl SortKey {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn code(&self) -> String {
        format!("{}_{}", self.field.code(), self.direction.code())
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let (field, direction) = code.rsplit_once('_')?;
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };
        SortField::from_code(field).map(|field| Self::new(field, direction))
    }

    /// Options of the sort dropdown with their labels
    pub fn options() -> Vec<(SortKey, &'static str)> {
        use SortDirection::*;
        use SortField::*;
        vec![
            (SortKey::new(Profit, Desc), "Highest Profit"),
            (SortKey::new(Profit, Asc), "Lowest Profit"),
            (SortKey::new(Margin, Desc), "Highest Margin"),
            (SortKey::new(Margin, Asc), "Lowest Margin"),
            (SortKey::new(Quantity, Desc), "Most Sold"),
            (SortKey::new(Quantity, Asc), "Least Sold"),
            (SortKey::new(Revenue, Desc), "Highest Revenue"),
            (SortKey::new(Revenue, Asc), "Lowest Revenue"),
            (SortKey::new(Name, Asc), "Name A-Z"),
            (SortKey::new(Name, Desc), "Name Z-A"),
        ]
    }

    pub fn compare(&self, a: &TableRecord, b: &TableRecord) -> Ordering {
        let ascending = match self.field {
            SortField::Profit => a.profit.cmp(&b.profit),
            SortField::Margin => a.margin_percent.cmp(&b.margin_percent),
            SortField::Quantity => a.quantity_sold.cmp(&b.quantity_sold),
            SortField::Revenue => a.revenue.cmp(&b.revenue),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        };
        match self.direction {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    }
}

/// Search text, sort and category selection of the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Always lowercase
    search_text: String,
    pub sort: SortKey,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(search_text: &str, sort: SortKey, category: CategoryFilter) -> Self {
        Self {
            search_text: search_text.to_lowercase(),
            sort,
            category,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_lowercase();
    }

    pub fn matches(&self, record: &TableRecord) -> bool {
        let name_matches = self.search_text.is_empty()
            || record.name.to_lowercase().contains(&self.search_text);
        name_matches && self.category.matches(record)
    }
}

/// One table row as typed values.
///
/// `profit` is always `revenue - cost` and `margin_percent` is
/// `100 * profit / revenue`, or 0 when there is no revenue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    pub name: String,
    pub quantity_sold: i64,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
    pub margin_percent: Decimal,
    pub category: ProductCategory,
    /// Width of the performance bar, 0..=100
    pub performance: Option<Decimal>,
    /// Inner markup of the row it was captured from, redisplayed as is
    pub markup: Option<String>,
}

impl TableRecord {
    pub fn new(
        name: impl Into<String>,
        quantity_sold: i64,
        revenue: Decimal,
        cost: Decimal,
        category: ProductCategory,
    ) -> Self {
        let profit = revenue - cost;
        let margin_percent = if revenue.is_zero() {
            Decimal::ZERO
        } else {
            profit * Decimal::ONE_HUNDRED / revenue
        };
        Self {
            name: name.into(),
            quantity_sold,
            revenue,
            cost,
            profit,
            margin_percent,
            category,
            performance: None,
            markup: None,
        }
    }

    pub fn from_product_row(row: &ProductProfitRow) -> Self {
        let mut record = Self::new(
            row.name.clone(),
            row.quantity_sold,
            row.revenue,
            row.cost,
            ProductCategory::from_optional_code(row.category.as_deref()),
        );
        record.performance = row.performance;
        record
    }

    /// Parses a rendered row: name, quantity, revenue and cost cells, in that
    /// order, then optional profit and margin cells. Profit and margin shown
    /// by the page win over the values derived from revenue and cost.
    pub fn from_rendered_row(row: &RenderedRow) -> Result<Self, String> {
        if row.cells.len() < 4 {
            return Err(format!("expected at least 4 cells, got {}", row.cells.len()));
        }
        let name = row.cells[0].trim();
        let quantity = parse_integer(&row.cells[1])
            .ok_or_else(|| format!("bad quantity '{}' for '{}'", row.cells[1], name))?;
        let revenue = parse_money(&row.cells[2])
            .ok_or_else(|| format!("bad revenue '{}' for '{}'", row.cells[2], name))?;
        let cost = parse_money(&row.cells[3])
            .ok_or_else(|| format!("bad cost '{}' for '{}'", row.cells[3], name))?;

        let mut record = Self::new(
            name,
            quantity,
            revenue,
            cost,
            ProductCategory::from_optional_code(row.category.as_deref()),
        );
        if let Some(profit) = row.cells.get(4).and_then(|c| parse_money(c)) {
            record.profit = profit;
        }
        if let Some(margin) = row.cells.get(5).and_then(|c| parse_percent(c)) {
            record.margin_percent = margin;
        }
        record.markup = row.markup.clone();
        Ok(record)
    }
}

impl CsvExportable for TableRecord {
    fn headers() -> Vec<&'static str> {
        vec!["Product", "Quantity Sold", "Revenue", "Cost", "Profit", "Margin"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format_number_with_decimals(Decimal::from(self.quantity_sold), 0),
            format_money(self.revenue),
            format_money(self.cost),
            format_money(self.profit),
            format_percent(self.margin_percent, 1),
        ]
    }
}

/// Text content of a rendered `<tr>`, read before any filtering happens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedRow {
    pub cells: Vec<String>,
    /// `data-category` of the row
    pub category: Option<String>,
    pub markup: Option<String>,
}

/// Filter then stable sort. Records comparing equal keep their snapshot order.
pub fn apply_filters(records: &[TableRecord], state: &FilterState) -> Vec<TableRecord> {
    let mut filtered: Vec<TableRecord> = records
        .iter()
        .filter(|r| state.matches(r))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| state.sort.compare(a, b));
    filtered
}

/// Aggregates shown under the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub count: usize,
    pub total_revenue: Decimal,
    pub total_profit: Decimal,
    pub avg_margin_percent: Decimal,
}

pub fn compute_stats(records: &[TableRecord]) -> TableStats {
    let total_revenue: Decimal = records.iter().map(|r| r.revenue).sum();
    let total_profit: Decimal = records.iter().map(|r| r.profit).sum();
    let avg_margin_percent = if total_revenue > Decimal::ZERO {
        total_profit * Decimal::ONE_HUNDRED / total_revenue
    } else {
        Decimal::ZERO
    };
    TableStats {
        count: records.len(),
        total_revenue,
        total_profit,
        avg_margin_percent,
    }
}

/// Records captured once per page load (or per period refresh), never
/// patched afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSnapshot {
    records: Vec<TableRecord>,
}

impl TableSnapshot {
    pub fn from_records(records: Vec<TableRecord>) -> Self {
        Self { records }
    }

    pub fn from_products(rows: &[ProductProfitRow]) -> Self {
        Self::from_records(rows.iter().map(TableRecord::from_product_row).collect())
    }

    /// Rows that fail to parse are left out and reported back.
    pub fn from_rendered_rows(rows: &[RenderedRow]) -> (Self, Vec<String>) {
        let mut records = Vec::with_capacity(rows.len());
        let mut errors = Vec::new();
        for (idx, row) in rows.iter().enumerate() {
            match TableRecord::from_rendered_row(row) {
                Ok(record) => records.push(record),
                Err(e) => errors.push(format!("row {}: {}", idx + 1, e)),
            }
        }
        (Self::from_records(records), errors)
    }

    pub fn records(&self) -> &[TableRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn query(&self, state: &FilterState) -> Vec<TableRecord> {
        apply_filters(&self.records, state)
    }
}

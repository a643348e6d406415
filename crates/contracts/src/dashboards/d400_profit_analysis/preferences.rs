use super::dto::ReportPeriod;
use super::table::{CategoryFilter, FilterState, SortKey};
use serde::{Deserialize, Serialize};

/// Dashboard selections remembered between visits.
///
/// Values are kept as raw codes so an unknown code from an older build is
/// ignored instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl AnalysisPreferences {
    pub fn capture(period: ReportPeriod, filters: &FilterState) -> Self {
        Self {
            period: Some(period.code().to_string()),
            sort: Some(filters.sort.code()),
            category: Some(filters.category.code().to_string()),
        }
    }

    pub fn period(&self) -> Option<ReportPeriod> {
        self.period.as_deref().and_then(ReportPeriod::from_code)
    }

    /// Overwrites sort and category where a known code was saved; the
    /// search text is never persisted.
    pub fn apply_to(&self, filters: &mut FilterState) {
        if let Some(sort) = self.sort.as_deref().and_then(SortKey::from_code) {
            filters.sort = sort;
        }
        if let Some(category) = self.category.as_deref().and_then(CategoryFilter::from_code) {
            filters.category = category;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_profit_analysis::table::{
        ProductCategory, SortDirection, SortField,
    };

    #[test]
    fn test_capture_and_restore() {
        let filters = FilterState::new(
            "tea",
            SortKey::new(SortField::Margin, SortDirection::Asc),
            CategoryFilter::Only(ProductCategory::Food),
        );
        let prefs = AnalysisPreferences::capture(ReportPeriod::Week, &filters);
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"period":"week","sort":"margin_asc","category":"food"}"#);

        let restored: AnalysisPreferences = serde_json::from_str(&json).unwrap();
        let mut target = FilterState::default();
        restored.apply_to(&mut target);
        assert_eq!(restored.period(), Some(ReportPeriod::Week));
        assert_eq!(target.sort, filters.sort);
        assert_eq!(target.category, filters.category);
        assert_eq!(target.search_text(), "");
    }

    #[test]
    fn test_unknown_codes_are_ignored() {
        let prefs: AnalysisPreferences = serde_json::from_str(
            r#"{"period":"decade","sort":"weight_desc","category":"toys"}"#,
        )
        .unwrap();
        let mut filters = FilterState::default();
        prefs.apply_to(&mut filters);
        assert_eq!(prefs.period(), None);
        assert_eq!(filters, FilterState::default());

        assert!(serde_json::from_str::<AnalysisPreferences>("not json").is_err());
    }
}

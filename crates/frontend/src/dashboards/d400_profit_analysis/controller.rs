//! Profit analysis page logic.
//!
//! The table works on a snapshot of typed records taken once per load and
//! replaced wholesale when a new period arrives. Filtering, sorting and the
//! stats under the table are recomputed from that snapshot; nothing is read
//! back from the DOM after the first capture.

use super::api;
use super::chart_bridge::apply_charts;
use super::dom_snapshot;
use super::state::ProfitAnalysisState;
use crate::layout::NotificationService;
use crate::shared::browser::{open_in_new_tab, open_in_place, print_html, today};
use crate::shared::export::{download_bytes, download_text, CSV_MIME, PDF_MIME, XLSX_MIME};
use crate::shared::storage;
use contracts::dashboards::d400_profit_analysis::export::{ExportFormat, TABLE_CSV_FILENAME};
use contracts::dashboards::d400_profit_analysis::preferences::AnalysisPreferences;
use contracts::dashboards::d400_profit_analysis::print::printable_report;
use contracts::dashboards::d400_profit_analysis::share::{product_share_url, ShareSummary};
use contracts::dashboards::d400_profit_analysis::shortcuts::Shortcut;
use contracts::dashboards::d400_profit_analysis::{
    CategoryFilter, PeriodQuery, ReportPeriod, SortKey, TableRecord, TableSnapshot,
};
use contracts::shared::config::PREFERENCES_STORAGE_KEY;
use contracts::shared::csv::build_csv;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// DOM id of the table search box
pub const SEARCH_INPUT_ID: &str = "productSearch";

#[derive(Clone, Copy)]
pub struct AnalysisTableController {
    state: RwSignal<ProfitAnalysisState>,
    notifications: NotificationService,
}

impl AnalysisTableController {
    pub fn new(state: RwSignal<ProfitAnalysisState>, notifications: NotificationService) -> Self {
        Self {
            state,
            notifications,
        }
    }

    pub fn state(&self) -> RwSignal<ProfitAnalysisState> {
        self.state
    }

    /// Restores saved sort/category/period. A period given in the URL wins
    /// over the saved one.
    pub fn restore_preferences(&self, url_period: Option<ReportPeriod>) {
        let saved = storage::load_json::<AnalysisPreferences>(PREFERENCES_STORAGE_KEY);
        self.state.update(|s| {
            if let Some(prefs) = &saved {
                prefs.apply_to(&mut s.filters);
            }
            s.period = url_period
                .or_else(|| saved.as_ref().and_then(|p| p.period()))
                .unwrap_or_default();
        });
    }

    pub fn save_preferences(&self) {
        let prefs = self.state.with_untracked(|s| s.preferences());
        storage::save_json(PREFERENCES_STORAGE_KEY, &prefs);
    }

    /// Captures the server-rendered table once, if the page has one.
    pub fn cache_snapshot(&self) {
        let Some(rows) = dom_snapshot::take_rendered_rows() else {
            log::debug!("no server-rendered profitability table");
            return;
        };
        let (snapshot, errors) = TableSnapshot::from_rendered_rows(&rows);
        for error in &errors {
            log::warn!("Skipped table row: {}", error);
        }
        log::debug!("cached {} table rows", snapshot.len());
        self.state.update(|s| s.snapshot = snapshot);
    }

    pub fn set_search_text(&self, text: String) {
        self.state.update(|s| s.filters.set_search_text(&text));
    }

    pub fn set_sort(&self, sort: SortKey) {
        if self.state.with_untracked(|s| s.filters.sort == sort) {
            return;
        }
        self.state.update(|s| s.filters.sort = sort);
        self.save_preferences();
    }

    pub fn set_category(&self, category: CategoryFilter) {
        if self.state.with_untracked(|s| s.filters.category == category) {
            return;
        }
        self.state.update(|s| s.filters.category = category);
        self.save_preferences();
    }

    pub fn change_period(&self, period: ReportPeriod) {
        if self.state.with_untracked(|s| s.period == period) {
            return;
        }
        self.state.update(|s| s.period = period);
        self.save_preferences();
        sync_period_to_url(period);
        self.refresh();
    }

    /// Reloads the current period. On failure the previous figures stay.
    pub fn refresh(&self) {
        let state = self.state;
        let notifications = self.notifications;
        let period = state.with_untracked(|s| s.period);
        state.update(|s| s.is_loading = true);

        spawn_local(async move {
            let outcome = api::fetch_profit_analysis(period).await;
            let Some(current) = state.try_with_untracked(|s| s.period) else {
                return;
            };
            if current != period {
                // A newer period was selected meanwhile; its own request owns the view
                return;
            }
            match outcome {
                Ok(data) => {
                    apply_charts(&data.charts);
                    state.update(|s| {
                        s.metrics = Some(data.metrics);
                        s.snapshot = TableSnapshot::from_products(&data.products);
                        s.is_loading = false;
                    });
                    log::info!("profit analysis loaded for {}", period.code());
                }
                Err(e) => {
                    log::error!("Failed to load profit analysis for {}: {}", period.code(), e);
                    state.update(|s| s.is_loading = false);
                    notifications.error("Failed to load data. Please try again.");
                }
            }
        });
    }

    pub fn export_report(&self, format: ExportFormat) {
        let state = self.state;
        let notifications = self.notifications;
        if state.with_untracked(|s| s.exporting.is_some()) {
            return;
        }
        let period = state.with_untracked(|s| s.period);
        state.update(|s| s.exporting = Some(format));
        notifications.info(format!("Generating {} report...", format.display_name()));

        spawn_local(async move {
            let outcome = api::export_report(format, period).await;
            state.try_update(|s| s.exporting = None);

            let mime = match format {
                ExportFormat::Pdf => PDF_MIME,
                ExportFormat::Excel => XLSX_MIME,
            };
            let saved = outcome
                .map_err(|e| e.to_string())
                .and_then(|bytes| download_bytes(&bytes, mime, &format.filename(today())));
            match saved {
                Ok(()) => {
                    notifications.success(format!("{} exported successfully", format.display_name()))
                }
                Err(e) => {
                    log::error!("{} export failed: {}", format.display_name(), e);
                    notifications.error("Export failed. Please try again.");
                }
            }
        });
    }

    /// Visible rows, in their current order, as CSV
    pub fn export_table_csv(&self) {
        let rows = self.state.with_untracked(|s| s.visible_rows());
        let csv = build_csv(&rows);
        match download_text(&csv, CSV_MIME, TABLE_CSV_FILENAME) {
            Ok(()) => self.notifications.success("Table exported to CSV"),
            Err(e) => {
                log::error!("CSV export failed: {}", e);
                self.notifications.error("Export failed. Please try again.");
            }
        }
    }

    fn share_summary(&self) -> Option<ShareSummary> {
        let summary = self.state.with_untracked(|s| {
            s.metrics
                .as_ref()
                .map(|metrics| ShareSummary::new(s.period, metrics))
        });
        if summary.is_none() {
            self.notifications.info("Data is still loading");
        }
        summary
    }

    pub fn share_whatsapp(&self) {
        if let Some(summary) = self.share_summary() {
            open_in_new_tab(&summary.whatsapp_url());
        }
    }

    pub fn share_email(&self) {
        if let Some(summary) = self.share_summary() {
            open_in_place(&summary.mailto_url());
        }
    }

    /// Prints the headline figures from a throwaway window
    pub fn print_report(&self) {
        let Some(summary) = self.share_summary() else {
            return;
        };
        match print_html(&printable_report(&summary, today())) {
            Ok(()) => self.notifications.info("Print dialog opened"),
            Err(e) => {
                log::error!("Print failed: {}", e);
                self.notifications.error("Could not open the print window");
            }
        }
    }

    pub fn share_product(&self, record: &TableRecord) {
        open_in_new_tab(&product_share_url(&record.name));
    }

    pub fn show_details(&self, record: TableRecord) {
        self.state.update(|s| s.selected = Some(record));
    }

    pub fn close_details(&self) {
        self.state.update(|s| s.selected = None);
    }

    pub fn handle_shortcut(&self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::ExportExcel => self.export_report(ExportFormat::Excel),
            Shortcut::ExportPdf => self.export_report(ExportFormat::Pdf),
            Shortcut::FocusSearch => focus_search_input(),
            Shortcut::Refresh => self.refresh(),
            Shortcut::CloseModal => self.close_details(),
        }
    }
}

fn focus_search_input() {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SEARCH_INPUT_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(input) = input {
        let _ = input.focus();
    }
}

/// Keeps `?period=` in the address bar so a reload shows the same period
fn sync_period_to_url(period: ReportPeriod) {
    let Ok(query) = serde_qs::to_string(&PeriodQuery { period }) else {
        return;
    };
    let new_url = format!("?{}", query);
    let Some(window) = web_sys::window() else {
        return;
    };
    let current_search = window.location().search().unwrap_or_default();
    if current_search == new_url {
        return;
    }
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}

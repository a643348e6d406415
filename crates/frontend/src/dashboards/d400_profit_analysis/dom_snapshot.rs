//! Reads the profitability table the server rendered into the page.

use contracts::dashboards::d400_profit_analysis::RenderedRow;
use wasm_bindgen::JsCast;
use web_sys::HtmlTableRowElement;

/// Id of the table element, both server-rendered and ours
pub const TABLE_ID: &str = "profitabilityTable";

/// Body rows of the server-rendered table, or `None` when the page has none.
///
/// The element is removed afterwards so the client-rendered table is the
/// only one carrying [`TABLE_ID`].
pub fn take_rendered_rows() -> Option<Vec<RenderedRow>> {
    let document = web_sys::window()?.document()?;
    let table = document.get_element_by_id(TABLE_ID)?;
    let nodes = table.query_selector_all("tbody tr").ok()?;

    let mut rows = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(row) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<HtmlTableRowElement>().ok())
        else {
            continue;
        };
        let cells = row.cells();
        rows.push(RenderedRow {
            cells: (0..cells.length())
                .filter_map(|j| cells.item(j))
                .map(|cell| cell.text_content().unwrap_or_default().trim().to_string())
                .collect(),
            category: row.get_attribute("data-category"),
            markup: Some(row.inner_html()),
        });
    }

    table.remove();
    Some(rows)
}

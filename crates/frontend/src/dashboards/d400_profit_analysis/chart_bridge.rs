//! Feeds new datasets to the chart objects the page script created.
//!
//! Charts are looked up on `window` under their canvas ids
//! (`window.profitTrendChart`), then in Chart.js's own registry
//! (`Chart.getChart("categoryChart1")`) for charts the page keeps in locals.
//! Only `data.labels` and `data.datasets[i].data` are replaced; everything
//! else the chart was configured with stays, then `update()` redraws it.

use contracts::dashboards::d400_profit_analysis::charts::{chart_updates, ChartDataUpdate};
use contracts::dashboards::d400_profit_analysis::ProfitCharts;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

fn is_missing(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn find_chart(chart_id: &str) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let id = JsValue::from_str(chart_id);
    let chart = Reflect::get(&window, &id)?;
    // Named access on window yields the <canvas> itself when no chart global exists
    if !is_missing(&chart) && !chart.is_instance_of::<web_sys::Element>() {
        return Ok(chart);
    }

    let chart_js = Reflect::get(&window, &JsValue::from_str("Chart"))?;
    if !is_missing(&chart_js) {
        let get_chart = Reflect::get(&chart_js, &JsValue::from_str("getChart"))?;
        if let Some(get_chart) = get_chart.dyn_ref::<Function>() {
            let chart = get_chart.call1(&chart_js, &id)?;
            if !is_missing(&chart) {
                return Ok(chart);
            }
        }
    }
    Err(JsValue::from_str(&format!("chart '{}' not found", chart_id)))
}

pub fn apply_chart_update(update: &ChartDataUpdate) -> Result<(), JsValue> {
    let chart = find_chart(&update.chart_id)?;

    let data = Reflect::get(&chart, &JsValue::from_str("data"))?;
    Reflect::set(&data, &JsValue::from_str("labels"), &to_js(&update.labels)?)?;

    let datasets: Array = Reflect::get(&data, &JsValue::from_str("datasets"))?.dyn_into()?;
    for (idx, points) in update.datasets.iter().enumerate() {
        let dataset = datasets.get(idx as u32);
        if dataset.is_undefined() {
            log::warn!("chart '{}' has no dataset #{}", update.chart_id, idx);
            continue;
        }
        Reflect::set(&dataset, &JsValue::from_str("data"), &to_js(points)?)?;
    }

    let redraw: Function = Reflect::get(&chart, &JsValue::from_str("update"))?.dyn_into()?;
    redraw.call0(&chart)?;
    Ok(())
}

/// Updates every chart; a missing chart is logged and skipped.
pub fn apply_charts(charts: &ProfitCharts) {
    for update in chart_updates(charts) {
        if let Err(err) = apply_chart_update(&update) {
            log::warn!("Failed to update chart {}: {:?}", update.chart_id, err);
        }
    }
}

//! Thin wrappers over `window` for alerts, navigation, new tabs and printing.

use chrono::NaiveDate;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Full page load of `path` (server-rendered pages)
pub fn navigate_to(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("Failed to navigate to {}: {:?}", path, e);
    }
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::error!("Failed to open {}: {:?}", url, e);
    }
}

/// Same-tab navigation for `mailto:` links
pub fn open_in_place(url: &str) {
    navigate_to(url);
}

fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<(), JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    match args {
        [] => method.call0(target)?,
        [arg] => method.call1(target, arg)?,
        _ => return Err(JsValue::from_str("unsupported argument count")),
    };
    Ok(())
}

/// Writes a complete HTML document into a new window, prints it and closes
/// the window once the print dialog returns.
pub fn print_html(html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("window not available")?;
    let print_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("{:?}", e))?
        .ok_or("print window was blocked")?;
    let document: JsValue = print_window
        .document()
        .ok_or("print window has no document")?
        .into();

    call_method(&document, "write", &[&JsValue::from_str(html)]).map_err(|e| format!("{:?}", e))?;
    call_method(&document, "close", &[]).map_err(|e| format!("{:?}", e))?;
    let _ = print_window.focus();
    print_window.print().map_err(|e| format!("{:?}", e))?;
    let _ = print_window.close();
    Ok(())
}

/// Local calendar date, used to stamp exported files
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

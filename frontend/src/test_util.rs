// Mounting helpers for browser render tests
use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Fresh mount point appended to the document body.
pub fn scratch_root() -> Element {
    let root = gloo::utils::document()
        .create_element("div")
        .expect("create mount point");
    gloo::utils::body()
        .append_child(&root)
        .expect("attach mount point");
    root
}

/// Yield so scheduled renders are flushed.
pub async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(10)).await;
}

pub fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).expect("valid selector")
}

pub fn click(root: &Element, selector: &str) {
    find(root, selector)
        .unwrap_or_else(|| panic!("no element for {selector}"))
        .dyn_into::<HtmlElement>()
        .expect("clickable element")
        .click();
}

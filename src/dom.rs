use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create an element and cast it to the requested concrete type.
pub fn create_element<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{tag}>: {e:?}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow!("unexpected element type for <{tag}>"))
}

/// Add or remove a presentation class so it mirrors a boolean view state.
#[inline]
pub fn set_class_enabled(el: &web::Element, class: &str, enabled: bool) {
    let cl = el.class_list();
    if enabled {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

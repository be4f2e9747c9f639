use anyhow::anyhow;
use portfolio_core::markup::{ElementNode, Node};
use portfolio_core::Viewport;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current window size, `None` while it cannot be measured.
pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Viewport::new(width as f32, height as f32)
}

#[inline]
pub fn scroll_offset() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn supports_intersection_observer() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Create DOM elements for a markup subtree.
pub fn build_element(document: &web::Document, node: &ElementNode) -> anyhow::Result<web::Element> {
    let el = match node.namespace {
        Some(ns) => document.create_element_ns(Some(ns), node.tag),
        None => document.create_element(node.tag),
    }
    .map_err(|e| anyhow!("create <{}>: {:?}", node.tag, e))?;

    for (name, value) in &node.attrs {
        el.set_attribute(name, value)
            .map_err(|e| anyhow!("set {}: {:?}", name, e))?;
    }
    for child in &node.children {
        match child {
            Node::Text(t) => el.append_with_str_1(t),
            Node::Element(c) => el.append_with_node_1(&build_element(document, c)?),
        }
        .map_err(|e| anyhow!("append to <{}>: {:?}", node.tag, e))?;
    }
    Ok(el)
}

pub fn find_by_id(root: &web::Element, id: &str) -> anyhow::Result<web::Element> {
    root.query_selector(&format!("#{}", id))
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("missing #{}", id))
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

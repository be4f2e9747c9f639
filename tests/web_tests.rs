#![cfg(target_arch = "wasm32")]
// Browser tests for the DOM glue: mounting, listeners, observers.

use portfolio_core::constants::*;
use portfolio_core::{RevealTrigger, NAV_SCROLLED_CLASS, NAV_TRANSPARENT_CLASS};
use portfolio_web::events::NavScroll;
use portfolio_web::reveal::{self, RevealObserver};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

const REVEALED: &str = "opacity:1;transform:none;";

fn window() -> web::Window {
    web::window().expect("window")
}

/// Drop any mounted page and give it an empty, scrollable `#app`.
fn fresh_root() -> web::Document {
    portfolio_web::unmount();
    let document = window().document().expect("document");
    if let Some(old) = document.get_element_by_id(ROOT_ID) {
        old.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id(ROOT_ID);
    let body = document.body().expect("body");
    body.style().set_property("min-height", "5000px").unwrap();
    body.append_child(&root).unwrap();
    document
}

fn html(document: &web::Document, id: &str) -> web::HtmlElement {
    document
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("missing #{id}"))
        .dyn_into()
        .unwrap()
}

/// Wait long enough for scroll events and animation frames to run.
async fn settle(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn reveal_block(document: &web::Document, threshold: &str) -> web::Element {
    let block = document.create_element("div").unwrap();
    block.set_attribute(DATA_REVEAL, threshold).unwrap();
    block.set_attribute("style", "opacity:0;").unwrap();
    block.set_attribute(DATA_REVEAL_STYLE, REVEALED).unwrap();

    let dot = document.create_element("span").unwrap();
    dot.set_attribute(DATA_REVEAL_FOLLOW, "").unwrap();
    dot.set_attribute(DATA_REVEAL_CLASS, "animate-pulse").unwrap();
    block.append_child(&dot).unwrap();
    block
}

#[wasm_bindgen_test]
async fn nav_background_follows_window_scroll() {
    let document = fresh_root();
    window().scroll_to_with_x_and_y(0.0, 0.0);
    portfolio_web::mount().unwrap();

    let nav = document.get_element_by_id(NAV_ID).unwrap();
    assert!(nav.class_list().contains(NAV_TRANSPARENT_CLASS));

    window().scroll_to_with_x_and_y(0.0, 50.0);
    settle(150).await;
    assert!(nav.class_list().contains(NAV_SCROLLED_CLASS));
    assert!(!nav.class_list().contains(NAV_TRANSPARENT_CLASS));

    window().scroll_to_with_x_and_y(0.0, 0.0);
    settle(150).await;
    assert!(nav.class_list().contains(NAV_TRANSPARENT_CLASS));
    assert!(!nav.class_list().contains(NAV_SCROLLED_CLASS));

    portfolio_web::unmount();
}

#[wasm_bindgen_test]
fn nav_scroll_publishes_at_mount() {
    let document = fresh_root();
    let page = portfolio_core::page::page(&portfolio_core::SiteConfig::from_compile_env());
    let content = portfolio_web::dom::build_element(&document, &page).unwrap();
    document.get_element_by_id(ROOT_ID).unwrap().append_child(&content).unwrap();

    window().scroll_to_with_x_and_y(0.0, 50.0);
    let scroll = NavScroll::mount(&content).unwrap();
    assert!(scroll.state().is_scrolled);
    let nav = document.get_element_by_id(NAV_ID).unwrap();
    assert!(nav.class_list().contains(NAV_SCROLLED_CLASS));

    drop(scroll);
    content.remove();
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn unmount_removes_page_and_releases_listeners() {
    let document = fresh_root();
    window().scroll_to_with_x_and_y(0.0, 0.0);
    portfolio_web::mount().unwrap();

    let toggle = html(&document, MENU_TOGGLE_ID);
    let nav = document.get_element_by_id(NAV_ID).unwrap();
    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));

    portfolio_web::unmount();
    assert!(document.get_element_by_id(NAV_ID).is_none());
    assert!(document
        .query_selector(&format!("[{}]", DATA_REVEAL))
        .unwrap()
        .is_none());
    assert_eq!(
        document.get_element_by_id(ROOT_ID).unwrap().child_element_count(),
        0
    );

    // detached nodes no longer react
    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    window().scroll_to_with_x_and_y(0.0, 50.0);
    settle(150).await;
    assert!(nav.class_list().contains(NAV_TRANSPARENT_CLASS));
    assert!(!nav.class_list().contains(NAV_SCROLLED_CLASS));

    // a second unmount has nothing left to release
    portfolio_web::unmount();
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn mounting_twice_keeps_a_single_page() {
    let document = fresh_root();
    portfolio_web::mount().unwrap();
    portfolio_web::mount().unwrap();
    let navs = document.query_selector_all(&format!("#{}", NAV_ID)).unwrap();
    assert_eq!(navs.length(), 1);
    portfolio_web::unmount();
}

#[wasm_bindgen_test]
fn nav_link_closes_menu_and_writes_the_fragment() {
    let document = fresh_root();
    portfolio_web::mount().unwrap();

    let toggle = html(&document, MENU_TOGGLE_ID);
    let panel = document.get_element_by_id(MOBILE_MENU_ID).unwrap();
    toggle.click();
    assert!(!panel.has_attribute("hidden"));

    let link: web::HtmlElement = panel
        .query_selector("a[href='#experience']")
        .unwrap()
        .expect("experience link")
        .dyn_into()
        .unwrap();
    link.click();

    assert!(panel.has_attribute("hidden"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(window().location().hash().unwrap(), "#experience");

    portfolio_web::unmount();
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn unanimated_block_is_revealed_immediately() {
    let document = fresh_root();
    let block = reveal_block(&document, "0.3");
    let inner = reveal_block(&document, "0.2");
    block.append_child(&inner).unwrap();
    document.get_element_by_id(ROOT_ID).unwrap().append_child(&block).unwrap();

    let observer = RevealObserver::attach(block.clone(), RevealTrigger::TIMELINE, false);
    assert!(observer.has_entered_viewport());
    assert_eq!(block.get_attribute("style").as_deref(), Some(REVEALED));

    let dot = block.first_element_child().unwrap();
    assert!(dot.class_list().contains("animate-pulse"));

    // a nested block keeps its own follower hidden
    assert_eq!(inner.get_attribute("style").as_deref(), Some("opacity:0;"));
    let inner_dot = inner.first_element_child().unwrap();
    assert!(!inner_dot.class_list().contains("animate-pulse"));
}

#[wasm_bindgen_test]
fn blocks_show_at_once_without_intersection_observer() {
    let document = fresh_root();
    let global = window();
    let key = JsValue::from_str("IntersectionObserver");
    let saved = js_sys::Reflect::get(&global, &key).unwrap();
    js_sys::Reflect::delete_property(&global, &key).unwrap();
    assert!(!portfolio_web::dom::supports_intersection_observer());

    portfolio_web::mount().unwrap();
    let root = document.get_element_by_id(ROOT_ID).unwrap();
    let blocks = portfolio_web::dom::query_all(&root, &format!("[{}]", DATA_REVEAL));
    assert!(!blocks.is_empty());
    for b in &blocks {
        assert_eq!(b.get_attribute("style"), b.get_attribute(DATA_REVEAL_STYLE));
    }

    portfolio_web::unmount();
    js_sys::Reflect::set(&global, &key, &saved).unwrap();
    assert!(portfolio_web::dom::supports_intersection_observer());
}

#[wasm_bindgen_test]
async fn visible_block_is_revealed_by_its_observer() {
    let document = fresh_root();
    let block = reveal_block(&document, "0");
    block
        .set_attribute("style", "opacity:0;position:fixed;top:0;left:0;width:100px;height:100px;")
        .unwrap();
    document.get_element_by_id(ROOT_ID).unwrap().append_child(&block).unwrap();

    let root = document.get_element_by_id(ROOT_ID).unwrap();
    let observers = reveal::attach_all(&root);
    assert_eq!(observers.len(), 1);
    if portfolio_web::dom::prefers_reduced_motion() {
        assert!(observers[0].has_entered_viewport());
        return;
    }

    settle(200).await;
    assert!(observers[0].has_entered_viewport());
    assert_eq!(block.get_attribute("style").as_deref(), Some(REVEALED));

    drop(observers);
    block.remove();
}

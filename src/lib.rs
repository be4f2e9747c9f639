#![cfg(target_arch = "wasm32")]
use portfolio_core::SiteConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod dom;
pub mod events;
pub mod reveal;

thread_local! {
    static MOUNTED: RefCell<Option<app::MountedPage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = SiteConfig::from_compile_env();
    log::info!("[config] build mode {}", config.build_mode);

    // release the previous page first so element ids stay unique
    unmount();
    let page = app::mount(&document, &config)?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(page));
    Ok(())
}

/// Mount the page again, e.g. after [`unmount`].
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    init().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Remove the page and release every listener and observer it holds.
#[wasm_bindgen]
pub fn unmount() {
    let page = MOUNTED.with(|m| m.borrow_mut().take());
    drop(page);
}

use crate::dom;
use crate::events::{HeroLighting, NavMenu, NavScroll};
use crate::reveal::{self, RevealObserver};
use anyhow::anyhow;
use portfolio_core::constants::ROOT_ID;
use portfolio_core::page;
use portfolio_core::SiteConfig;
use web_sys as web;

/// The page while it is in the document.
///
/// Owns every listener and observer; dropping it removes the page and
/// releases each of them exactly once.
pub struct MountedPage {
    content: web::Element,
    lighting: Option<HeroLighting>,
    scroll: NavScroll,
    menu: NavMenu,
    reveals: Vec<RevealObserver>,
}

pub fn mount(document: &web::Document, config: &SiteConfig) -> anyhow::Result<MountedPage> {
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| anyhow!("missing #{}", ROOT_ID))?;
    let content = dom::build_element(document, &page::page(config))?;
    root.append_child(&content)
        .map_err(|e| anyhow!("{:?}", e))?;

    let wired = NavScroll::mount(&content).and_then(|scroll| Ok((scroll, NavMenu::mount(&content)?)));
    let (scroll, menu) = match wired {
        Ok(parts) => parts,
        Err(e) => {
            content.remove();
            return Err(e);
        }
    };

    // decoration only; the page works without it
    let lighting = HeroLighting::mount(&content)
        .map_err(|e| log::warn!("[pointer] lighting disabled: {:?}", e))
        .ok();

    let reveals = reveal::attach_all(&content);
    log::info!(
        "[mount] {} reveal blocks, lighting={}, base path '{}'",
        reveals.len(),
        lighting.is_some(),
        config.base_path()
    );

    Ok(MountedPage {
        content,
        lighting,
        scroll,
        menu,
        reveals,
    })
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        let revealed = self
            .reveals
            .iter()
            .filter(|r| r.has_entered_viewport())
            .count();
        log::info!(
            "[mount] unmounting: {}/{} blocks revealed, scrolled={}, menu={:?}, lighting={}",
            revealed,
            self.reveals.len(),
            self.scroll.state().is_scrolled,
            self.menu.state(),
            self.lighting.is_some()
        );
        self.content.remove();
    }
}

// Host-side tests for the scroll tracker and navigation bar classes.

use portfolio_core::constants::NAV_ID;
use portfolio_core::page;
use portfolio_core::{
    BuildMode, ScrollState, ScrollTracker, SiteConfig, NAV_SCROLLED_CLASS, NAV_TRANSPARENT_CLASS,
};

#[test]
fn starts_unscrolled() {
    let tracker = ScrollTracker::new();
    assert!(!tracker.state().is_scrolled);
}

#[test]
fn threshold_is_the_only_input() {
    let mut tracker = ScrollTracker::new();

    let update = tracker.on_scroll(0.0);
    assert!(!update.state.is_scrolled);
    assert!(!update.changed);

    let update = tracker.on_scroll(21.0);
    assert!(update.state.is_scrolled);
    assert!(update.changed);

    let update = tracker.on_scroll(0.0);
    assert!(!update.state.is_scrolled);
    assert!(update.changed);
}

#[test]
fn exactly_twenty_pixels_is_not_scrolled() {
    let mut tracker = ScrollTracker::new();
    assert!(!tracker.on_scroll(20.0).state.is_scrolled);
    assert!(tracker.on_scroll(20.5).state.is_scrolled);
    // no hysteresis: dropping back to the threshold flips immediately
    assert!(!tracker.on_scroll(20.0).state.is_scrolled);
}

#[test]
fn repeated_notifications_are_idempotent() {
    let mut tracker = ScrollTracker::new();
    assert!(tracker.on_scroll(300.0).changed);
    for offset in [310.0, 450.0, 300.0, 21.0] {
        let update = tracker.on_scroll(offset);
        assert!(update.state.is_scrolled);
        assert!(!update.changed, "offset {} reported a change", offset);
    }
}

#[test]
fn nav_background_follows_state() {
    assert_eq!(ScrollState::default().nav_background(), NAV_TRANSPARENT_CLASS);
    let scrolled = ScrollState { is_scrolled: true };
    assert_eq!(scrolled.nav_background(), NAV_SCROLLED_CLASS);
    assert!(scrolled.nav_class().starts_with("fixed w-full z-50"));
}

#[test]
fn nav_switches_to_blurred_background_at_offset_50() {
    let config = SiteConfig {
        build_mode: BuildMode::Development,
    };
    let tree = page::page(&config);
    let nav = tree.find_by_id(NAV_ID).expect("nav rendered");
    assert!(nav.has_class(NAV_TRANSPARENT_CLASS));
    assert!(!nav.has_class(NAV_SCROLLED_CLASS));
    assert!(nav.get("style").unwrap().contains("blur(10px)"));

    let mut tracker = ScrollTracker::new();
    let update = tracker.on_scroll(50.0);
    assert!(update.changed);
    let class = update.state.nav_class();
    assert!(class.split_whitespace().any(|c| c == NAV_SCROLLED_CLASS));
    assert!(!class.split_whitespace().any(|c| c == NAV_TRANSPARENT_CLASS));
}

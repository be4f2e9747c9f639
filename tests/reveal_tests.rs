// Host-side tests for one-shot reveal state and entrance styles.

use portfolio_core::{Entrance, Reveal, RevealTrigger};

#[test]
fn card_reveals_at_twenty_percent() {
    let trigger = RevealTrigger::CARD;
    assert_eq!(Reveal::NotEntered.observe(0.1, true, trigger), Reveal::NotEntered);
    assert_eq!(Reveal::NotEntered.observe(0.2, true, trigger), Reveal::Entered);
    assert_eq!(Reveal::NotEntered.observe(0.75, true, trigger), Reveal::Entered);
}

#[test]
fn timeline_reveals_at_thirty_percent() {
    let trigger = RevealTrigger::TIMELINE;
    assert_eq!(Reveal::NotEntered.observe(0.29, true, trigger), Reveal::NotEntered);
    assert_eq!(Reveal::NotEntered.observe(0.3, true, trigger), Reveal::Entered);
    assert_eq!(Reveal::NotEntered.observe(0.2995, true, trigger), Reveal::NotEntered);
    // float noise at the crossing still counts
    assert_eq!(Reveal::NotEntered.observe(0.3 - 1e-9, true, trigger), Reveal::Entered);
}

#[test]
fn zero_threshold_needs_an_intersection() {
    let trigger = RevealTrigger::SECTION;
    assert_eq!(Reveal::NotEntered.observe(0.0, false, trigger), Reveal::NotEntered);
    assert_eq!(Reveal::NotEntered.observe(0.0, true, trigger), Reveal::Entered);
}

#[test]
fn entered_is_terminal() {
    let trigger = RevealTrigger::CARD;
    let mut state = Reveal::default();
    assert!(!state.has_entered_viewport());

    state = state.observe(0.5, true, trigger);
    assert!(state.has_entered_viewport());

    // leave and come back, repeatedly
    for (ratio, intersecting) in [(0.0, false), (0.05, true), (0.0, false), (0.9, true)] {
        state = state.observe(ratio, intersecting, trigger);
        assert_eq!(state, Reveal::Entered);
    }
}

#[test]
fn blocks_do_not_share_state() {
    let mut blocks = vec![Reveal::default(); 3];
    blocks[1] = blocks[1].observe(0.4, true, RevealTrigger::TIMELINE);
    assert_eq!(
        blocks,
        vec![Reveal::NotEntered, Reveal::Entered, Reveal::NotEntered]
    );
}

#[test]
fn trigger_parses_data_attribute() {
    assert_eq!(RevealTrigger::parse("0.2"), Some(RevealTrigger::CARD));
    assert_eq!(RevealTrigger::parse(" 0.3 "), Some(RevealTrigger::TIMELINE));
    assert_eq!(RevealTrigger::parse("0"), Some(RevealTrigger::SECTION));
    assert_eq!(RevealTrigger::parse("1.5").map(|t| t.threshold), Some(1.0));
    assert_eq!(RevealTrigger::parse("soon"), None);
}

#[test]
fn timeline_entries_slide_in_from_alternating_sides() {
    let even = Entrance::timeline(0);
    let odd = Entrance::timeline(1);
    assert_eq!(even.offset_x, -50.0);
    assert_eq!(odd.offset_x, 50.0);
    assert!(even.initial_style().contains("translate(-50px, 0px)"));
    assert!(even.initial_style().starts_with("opacity:0;"));
    assert!(even.revealed_style().starts_with("opacity:1;transform:none;"));
    assert!(even.revealed_style().contains("0.2s"));
}

#[test]
fn skill_items_are_staggered() {
    let delays: Vec<f32> = (0..4).map(|i| Entrance::skill_item(i).delay_s).collect();
    for pair in delays.windows(2) {
        assert!((pair[1] - pair[0] - 0.1).abs() < 1e-6);
    }
    assert!(Entrance::skill_card().initial_style().contains("scale(0.9)"));
    assert!(Entrance::rise().initial_style().contains("translate(0px, 50px)"));
}

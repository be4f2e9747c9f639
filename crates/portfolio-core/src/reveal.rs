//! One-shot viewport-entry state for animated blocks.
//!
//! Every block owns its own [`Reveal`]; there is no shared state between
//! blocks. `Entered` is terminal.

use crate::constants::{
    CARD_REVEAL_THRESHOLD, REVEAL_RATIO_TOLERANCE, SECTION_REVEAL_THRESHOLD,
    TIMELINE_REVEAL_THRESHOLD,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    NotEntered,
    Entered,
}

/// Visible fraction a block needs before it is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    pub threshold: f64,
}

impl RevealTrigger {
    pub const CARD: Self = Self {
        threshold: CARD_REVEAL_THRESHOLD,
    };
    pub const TIMELINE: Self = Self {
        threshold: TIMELINE_REVEAL_THRESHOLD,
    };
    pub const SECTION: Self = Self {
        threshold: SECTION_REVEAL_THRESHOLD,
    };

    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: if threshold.is_finite() {
                threshold.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }

    /// Parse the threshold carried in a `data-reveal` attribute.
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<f64>().ok().map(Self::new)
    }

    /// A zero threshold only needs the block to intersect at all.
    pub fn is_met(&self, ratio: f64, intersecting: bool) -> bool {
        if self.threshold <= 0.0 {
            intersecting
        } else {
            ratio + REVEAL_RATIO_TOLERANCE >= self.threshold
        }
    }
}

impl Reveal {
    #[inline]
    pub fn has_entered_viewport(self) -> bool {
        matches!(self, Reveal::Entered)
    }

    /// Feed one intersection measurement; never leaves `Entered`.
    #[must_use]
    pub fn observe(self, ratio: f64, intersecting: bool, trigger: RevealTrigger) -> Reveal {
        match self {
            Reveal::Entered => Reveal::Entered,
            Reveal::NotEntered if trigger.is_met(ratio, intersecting) => Reveal::Entered,
            Reveal::NotEntered => Reveal::NotEntered,
        }
    }
}

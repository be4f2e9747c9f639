//! Entrance animations expressed as inline CSS.
//!
//! Each animated block starts in its `initial_style` and is switched to
//! `revealed_style` once; CSS transitions do the rest.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub duration_s: f32,
    pub delay_s: f32,
}

impl Entrance {
    pub const fn fade(duration_s: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
            duration_s,
            delay_s: 0.0,
        }
    }

    /// About, education and project blocks rise into place.
    pub const fn rise() -> Self {
        Self {
            offset_y: 50.0,
            ..Self::fade(0.6)
        }
    }

    pub const fn section() -> Self {
        Self::fade(0.8)
    }

    /// Timeline entries slide in from alternating sides.
    pub fn timeline(index: usize) -> Self {
        Self {
            offset_x: if index % 2 == 0 { -50.0 } else { 50.0 },
            delay_s: 0.2,
            ..Self::fade(0.6)
        }
    }

    pub const fn skill_card() -> Self {
        Self {
            scale: 0.9,
            ..Self::fade(0.5)
        }
    }

    /// List items inside a skill card, staggered by position.
    pub fn skill_item(index: usize) -> Self {
        Self {
            offset_x: -10.0,
            delay_s: 0.1 * index as f32,
            ..Self::fade(0.3)
        }
    }

    fn transition(&self) -> String {
        format!(
            "transition:opacity {d}s ease-out {l}s, transform {d}s ease-out {l}s;",
            d = self.duration_s,
            l = self.delay_s
        )
    }

    pub fn initial_style(&self) -> String {
        format!(
            "opacity:0;transform:translate({}px, {}px) scale({});{}",
            self.offset_x,
            self.offset_y,
            self.scale,
            self.transition()
        )
    }

    pub fn revealed_style(&self) -> String {
        format!("opacity:1;transform:none;{}", self.transition())
    }
}

//! Pointer tracking and the hero lighting geometry.
//!
//! The tracker only ever publishes a position once the viewport size is
//! known, so consumers never divide by an unknown width or height.

use crate::constants::{GLOW_DIAMETER_PX, GLOW_FALLOFF_PX, HEX_GLOW_ALPHA, HEX_GLOW_RGB, HEX_SIZE_PX};
use glam::Vec2;

/// Measured size of the visible window area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Returns `None` for sizes that cannot be divided by (zero, negative, NaN).
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Pointer position as a fraction of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub normalized_x: f32,
    pub normalized_y: f32,
}

impl PointerState {
    #[inline]
    pub fn normalized(&self) -> Vec2 {
        Vec2::new(self.normalized_x, self.normalized_y)
    }

    /// Absolute pixel position of the pointer for the given viewport.
    #[inline]
    pub fn to_pixels(&self, viewport: Viewport) -> Vec2 {
        self.normalized() * viewport.size()
    }
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    state: Option<PointerState>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest published position, `None` until the first valid measurement.
    #[inline]
    pub fn state(&self) -> Option<PointerState> {
        self.state
    }

    /// Recompute the normalized position from a client-space pointer event.
    ///
    /// Without a viewport nothing is published and the previous state is kept.
    pub fn on_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport: Option<Viewport>,
    ) -> Option<PointerState> {
        let viewport = viewport?;
        if !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }
        let next = PointerState {
            normalized_x: (client_x / viewport.width).clamp(0.0, 1.0),
            normalized_y: (client_y / viewport.height).clamp(0.0, 1.0),
        };
        self.state = Some(next);
        Some(next)
    }
}

/// Linear distance falloff, 1 at the pointer and 0 from `falloff` outwards.
#[inline]
pub fn glow_intensity(cell_center: Vec2, pointer_px: Vec2, falloff: f32) -> f32 {
    if falloff <= 0.0 {
        return 0.0;
    }
    (1.0 - cell_center.distance(pointer_px) / falloff).max(0.0)
}

/// Top-left corner of the glow disc so that it is centred on the pointer.
#[inline]
pub fn glow_origin(pointer_px: Vec2) -> Vec2 {
    pointer_px - Vec2::splat(GLOW_DIAMETER_PX / 2.0)
}

pub fn glow_style(pointer_px: Vec2) -> String {
    let origin = glow_origin(pointer_px);
    format!("left:{:.1}px;top:{:.1}px;", origin.x, origin.y)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexCell {
    pub row: u32,
    pub col: u32,
    pub origin: Vec2,
}

impl HexCell {
    #[inline]
    pub fn center(&self, size: f32) -> Vec2 {
        self.origin + Vec2::splat(size / 2.0)
    }
}

/// Offset-column hexagon tiling that covers a viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct HexGrid {
    pub size: f32,
    pub columns: u32,
    pub rows: u32,
    pub cells: Vec<HexCell>,
}

impl HexGrid {
    /// Columns, rows and total cell count needed to cover `viewport`.
    pub fn dimensions(viewport: Viewport, size: f32) -> (u32, u32, usize) {
        let columns = (viewport.width / (size * 1.5)).ceil() as u32;
        let rows = (viewport.height / (size * 3f32.sqrt())).ceil() as u32;
        (columns, rows, columns as usize * rows as usize)
    }

    pub fn layout(viewport: Viewport, size: f32) -> Self {
        let col_step = size * 1.5;
        let row_step = size * 3f32.sqrt();
        let (columns, rows, count) = Self::dimensions(viewport, size);

        let mut cells = Vec::with_capacity(count);
        for row in 0..rows {
            for col in 0..columns {
                let x = col as f32 * col_step;
                let y = row as f32 * row_step + (col % 2) as f32 * (row_step / 2.0);
                cells.push(HexCell {
                    row,
                    col,
                    origin: Vec2::new(x, y),
                });
            }
        }
        Self {
            size,
            columns,
            rows,
            cells,
        }
    }

    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::layout(viewport, HEX_SIZE_PX)
    }

    /// Per-cell intensity for a pointer at `pointer_px`, in cell order.
    pub fn intensities(&self, pointer_px: Vec2) -> impl Iterator<Item = f32> + '_ {
        self.cells
            .iter()
            .map(move |c| glow_intensity(c.center(self.size), pointer_px, GLOW_FALLOFF_PX))
    }

    /// Static positioning style for one cell; colour is applied separately.
    pub fn cell_style(&self, cell: &HexCell) -> String {
        format!(
            "position:absolute;left:{:.1}px;top:{:.1}px;width:{s}px;height:{s}px;\
             clip-path:polygon(50% 0%, 93% 25%, 93% 75%, 50% 100%, 7% 75%, 7% 25%);\
             transition:background-color 0.2s ease;",
            cell.origin.x,
            cell.origin.y,
            s = self.size
        )
    }
}

pub fn hex_color(intensity: f32) -> String {
    let [r, g, b] = HEX_GLOW_RGB;
    format!(
        "rgba({}, {}, {}, {:.3})",
        r,
        g,
        b,
        intensity.clamp(0.0, 1.0) * HEX_GLOW_ALPHA
    )
}

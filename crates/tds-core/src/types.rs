//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in field space (pixels).
/// x = right, y = down. Entities are anchored at their top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Width and height of an axis-aligned box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Position,
    pub size: Size,
}

/// The fixed rectangular playing field, spanning `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// This position moved by `delta`.
    pub fn offset(&self, delta: DVec2) -> Position {
        Position::from(self.as_vec() + delta)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Rect {
    pub fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn min(&self) -> DVec2 {
        self.origin.as_vec()
    }

    pub fn max(&self) -> DVec2 {
        self.origin.as_vec() + DVec2::new(self.size.width, self.size.height)
    }

    pub fn center(&self) -> Position {
        Position::from((self.min() + self.max()) * 0.5)
    }

    /// Whether two rectangles share interior area. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Entry parameter `t` in `[0, 1]` at which the segment `from -> to`
    /// first touches this rectangle, or `None` if it misses.
    ///
    /// Slab test. A zero-length segment hits only if its point is inside.
    pub fn segment_entry(&self, from: Position, to: Position) -> Option<f64> {
        let start = from.as_vec();
        let dir = to.as_vec() - start;
        let (min, max) = (self.min(), self.max());

        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;

        for axis in 0..2 {
            let (s, d, lo, hi) = (start[axis], dir[axis], min[axis], max[axis]);
            if d.abs() < f64::EPSILON {
                if s < lo || s > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let (mut t0, mut t1) = ((lo - s) * inv, (hi - s) * inv);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }
}

impl Field {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Length of the boundary ring: `2 * (width + height)`.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Map an offset along the boundary ring to a point on the boundary.
    ///
    /// The ring starts at the top-left corner and walks the edges in the
    /// order top, right, bottom, left. Offsets outside `[0, perimeter)` wrap.
    pub fn perimeter_point(&self, offset: f64) -> Position {
        let mut pos = offset.rem_euclid(self.perimeter());

        // Top
        if pos < self.width {
            return Position::new(pos, 0.0);
        }
        pos -= self.width;
        // Right
        if pos < self.height {
            return Position::new(self.width, pos);
        }
        pos -= self.height;
        // Bottom
        if pos < self.width {
            return Position::new(pos, self.height);
        }
        pos -= self.width;
        // Left
        Position::new(0.0, pos)
    }

    /// Clamp the top-left corner of a box of `size` so the box stays inside the field.
    pub fn clamp(&self, pos: Position, size: Size) -> Position {
        Position::new(
            clamp_axis(pos.x, self.width - size.width),
            clamp_axis(pos.y, self.height - size.height),
        )
    }

    /// Whether a box of `size` anchored at `pos` lies fully inside the field.
    pub fn contains(&self, pos: Position, size: Size) -> bool {
        pos.x >= 0.0
            && pos.y >= 0.0
            && pos.x <= self.width - size.width
            && pos.y <= self.height - size.height
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(
            crate::constants::FIELD_WIDTH,
            crate::constants::FIELD_HEIGHT,
        )
    }
}

/// A box larger than the field (`max < 0`) is pinned to the origin.
fn clamp_axis(v: f64, max: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v > max {
        max.max(0.0)
    } else {
        v
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

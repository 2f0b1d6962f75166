use glam::IVec2;
use log::trace;

use super::buffer::CharBuffer;
use crate::core::EdgeStepping;

// Screen points widened to i64 so edge math on far off-screen vertices can't overflow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pt {
    x: i64,
    y: i64,
}

impl From<IVec2> for Pt {
    fn from(p: IVec2) -> Self {
        Pt {
            x: p.x as i64,
            y: p.y as i64,
        }
    }
}

/// Scanline triangle filler that owns the character grid it draws into
pub struct Rasterizer {
    buffer: CharBuffer,
    stepping: EdgeStepping,
}

impl Rasterizer {
    pub fn new(width: usize, height: usize, blank: char, stepping: EdgeStepping) -> Self {
        Self {
            buffer: CharBuffer::new(width, height, blank),
            stepping,
        }
    }

    pub fn buffer(&self) -> &CharBuffer {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Fill a screen-space triangle with `symbol`.
    ///
    /// Sorts by row, then either fills a flat-top/flat-bottom triangle
    /// directly or splits at the middle vertex's row into one of each.
    pub fn fill_triangle(&mut self, points: [IVec2; 3], symbol: char) {
        let mut pts = points.map(Pt::from);
        pts.sort_by_key(|p| p.y);
        let [top, mid, bottom] = pts;

        if top.y == bottom.y {
            trace!("skipping zero-height triangle at row {}", top.y);
            return;
        }

        if mid.y == bottom.y {
            self.flat_bottom(top, mid, bottom, symbol);
        } else if top.y == mid.y {
            self.flat_top(top, mid, bottom, symbol);
        } else {
            let split = Pt {
                x: self.split_x(top, mid, bottom),
                y: mid.y,
            };
            self.flat_bottom(top, mid, split, symbol);
            self.flat_top(mid, split, bottom, symbol);
        }
    }

    /// Column where the long edge (top to bottom) crosses the middle row
    fn split_x(&self, top: Pt, mid: Pt, bottom: Pt) -> i64 {
        match self.stepping {
            EdgeStepping::Interpolated => {
                let t = (mid.y - top.y) as f64 / (bottom.y - top.y) as f64;
                (top.x as f64 + (bottom.x - top.x) as f64 * t).round() as i64
            }
            EdgeStepping::Accumulated => {
                let x = top.x as f32
                    + (bottom.x - top.x) as f32 * (mid.y - top.y) as f32
                        / (bottom.y - top.y) as f32;
                x as i64
            }
        }
    }

    /// Apex above, `b1` and `b2` share the bottom row
    pub fn fill_flat_bottom(&mut self, apex: IVec2, b1: IVec2, b2: IVec2, symbol: char) {
        self.flat_bottom(apex.into(), b1.into(), b2.into(), symbol);
    }

    /// `t0` and `t1` share the top row, apex below
    pub fn fill_flat_top(&mut self, t0: IVec2, t1: IVec2, apex: IVec2, symbol: char) {
        self.flat_top(t0.into(), t1.into(), apex.into(), symbol);
    }

    fn flat_bottom(&mut self, apex: Pt, b1: Pt, b2: Pt, symbol: char) {
        if b1.y == apex.y {
            return;
        }
        let left = self.edge(apex, b1);
        let right = self.edge(apex, b2);
        self.fill_rows(apex.y, b1.y, left, right, symbol);
    }

    fn flat_top(&mut self, t0: Pt, t1: Pt, apex: Pt, symbol: char) {
        if apex.y == t0.y {
            return;
        }
        let left = self.edge(t0, apex);
        let right = self.edge(t1, apex);
        self.fill_rows(t0.y, apex.y, left, right, symbol);
    }

    fn edge(&self, from: Pt, to: Pt) -> Edge {
        Edge {
            from,
            to,
            stepping: self.stepping,
        }
    }

    fn fill_rows(&mut self, first: i64, last: i64, a: Edge, b: Edge, symbol: char) {
        // Only rows that land on the grid; edges are evaluated per row, not walked.
        let first_visible = first.max(0);
        let last_visible = last.min(self.buffer.height as i64 - 1);
        for y in first_visible..=last_visible {
            self.span(y, a.x_at(y), b.x_at(y), symbol);
        }
    }

    /// Draw `symbol` on row `y` between two columns, in either order
    pub fn draw_scanline(&mut self, y: i32, x_start: i32, x_end: i32, symbol: char) {
        self.span(y as i64, x_start as i64, x_end as i64, symbol);
    }

    fn span(&mut self, y: i64, x_start: i64, x_end: i64, symbol: char) {
        if y < 0 || y >= self.buffer.height as i64 || self.buffer.width == 0 {
            return;
        }
        let (lo, hi) = if x_start > x_end {
            (x_end, x_start)
        } else {
            (x_start, x_end)
        };
        let lo = lo.max(0);
        let hi = hi.min(self.buffer.width as i64 - 1);
        for x in lo..=hi {
            self.buffer.set(x as i32, y as i32, symbol);
        }
    }
}

/// One side of a flat triangle, from its first row to its last
#[derive(Clone, Copy, Debug)]
struct Edge {
    from: Pt,
    to: Pt,
    stepping: EdgeStepping,
}

impl Edge {
    fn x_at(&self, y: i64) -> i64 {
        let dy = self.to.y - self.from.y;
        if dy == 0 {
            return self.from.x;
        }
        let rows = y - self.from.y;
        match self.stepping {
            EdgeStepping::Interpolated => {
                let x = self.from.x as f64
                    + (self.to.x - self.from.x) as f64 * rows as f64 / dy as f64;
                x.round() as i64
            }
            // Same result as adding the truncated slope once per row
            EdgeStepping::Accumulated => {
                let slope = (self.to.x - self.from.x) / dy;
                self.from.x.saturating_add(slope.saturating_mul(rows))
            }
        }
    }
}

//! Box layout algebra.
//!
//! Pure functions that partition a rectangle into sub-rectangles. Every panel
//! receives its screen space as a [`LayoutBox`] produced by these splits.
//!
//! # Allocation rules
//!
//! - [`Extent::Fixed`]: exactly `n` cells, clamped to `[0, total]`
//! - [`Extent::Percent`]: `total * p / 100` with `p` clamped to `[0, 100]`
//! - [`Extent::Fill`]: a weighted share of whatever Fixed/Percent left over;
//!   the last positive-weight Fill absorbs the rounding remainder
//!
//! Degenerate input (empty box, empty extent list, over-allocation) produces
//! zero-sized boxes. Nothing in here panics and no size is ever negative.

use ratatui::layout::Rect;

/// One unit of a split request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Exactly this many cells.
    Fixed(i32),
    /// Percentage of the total dimension.
    Percent(i32),
    /// Weighted share of the space remaining after Fixed and Percent.
    Fill(i32),
}

impl Extent {
    /// Size this extent claims from `total` cells.
    ///
    /// `remaining` is the space left after all Fixed/Percent extents and
    /// `fill_weight` the sum of all Fill weights; both only matter for Fill.
    ///
    /// ```
    /// # use vctui::layout::Extent;
    /// assert_eq!(Extent::Fill(1).calc(100, 50, 2), 25);
    /// assert_eq!(Extent::Fixed(40).calc(30, 0, 0), 30);
    /// assert_eq!(Extent::Percent(150).calc(80, 0, 0), 80);
    /// ```
    pub fn calc(&self, total: i32, remaining: i32, fill_weight: i32) -> i32 {
        let total = total.max(0);
        match *self {
            Extent::Fixed(n) => n.clamp(0, total),
            Extent::Percent(p) => {
                let p = i64::from(p.clamp(0, 100));
                (i64::from(total) * p / 100) as i32
            }
            Extent::Fill(weight) => {
                if remaining <= 0 || fill_weight <= 0 || weight <= 0 {
                    return 0;
                }
                (i64::from(remaining) * i64::from(weight) / i64::from(fill_weight)) as i32
            }
        }
    }

    fn is_fill(&self) -> bool {
        matches!(self, Extent::Fill(_))
    }
}

/// Resolve the sizes of `extents` along a dimension of `total` cells.
///
/// Sizes never go negative and never sum past `total`. When at least one
/// positive-weight Fill is present they sum to exactly `total` (less any
/// Fixed/Percent over-allocation, which is clamped away).
pub fn allocate(total: i32, extents: &[Extent]) -> Vec<i32> {
    let total = total.max(0);
    let mut sizes = vec![0; extents.len()];
    if total == 0 || extents.is_empty() {
        return sizes;
    }

    // Fixed and Percent first, clamped so they never overrun the parent.
    let mut used = 0;
    for (size, extent) in sizes.iter_mut().zip(extents) {
        if extent.is_fill() {
            continue;
        }
        let wanted = extent.calc(total, 0, 0);
        *size = wanted.min(total - used);
        used += *size;
    }

    let remaining = total - used;
    let fill_weight: i32 = extents
        .iter()
        .filter_map(|e| match e {
            Extent::Fill(w) if *w > 0 => Some(*w),
            _ => None,
        })
        .sum();
    if remaining <= 0 || fill_weight <= 0 {
        return sizes;
    }

    let last_fill = extents
        .iter()
        .rposition(|e| matches!(e, Extent::Fill(w) if *w > 0));

    let mut given = 0;
    for (i, extent) in extents.iter().enumerate() {
        if !extent.is_fill() {
            continue;
        }
        if Some(i) == last_fill {
            sizes[i] = remaining - given;
        } else {
            sizes[i] = extent.calc(total, remaining, fill_weight);
            given += sizes[i];
        }
    }
    sizes
}

/// A component's allotted screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutBox {
    /// Absolute screen rectangle.
    pub rect: Rect,
}

impl From<Rect> for LayoutBox {
    fn from(rect: Rect) -> Self {
        Self { rect }
    }
}

impl LayoutBox {
    /// Wrap a rectangle.
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Width in cells.
    pub fn width(&self) -> u16 {
        self.rect.width
    }

    /// Height in cells.
    pub fn height(&self) -> u16 {
        self.rect.height
    }

    /// True when the box covers no cells.
    pub fn is_empty(&self) -> bool {
        self.rect.width == 0 || self.rect.height == 0
    }

    /// Split vertically: one box per extent, stacked top to bottom.
    pub fn v(&self, extents: &[Extent]) -> Vec<LayoutBox> {
        let sizes = allocate(i32::from(self.rect.height), extents);
        let mut y = self.rect.y;
        sizes
            .into_iter()
            .map(|size| {
                let height = size as u16;
                let b = LayoutBox::new(Rect::new(self.rect.x, y, self.rect.width, height));
                y = y.saturating_add(height);
                b
            })
            .collect()
    }

    /// Split horizontally: one box per extent, left to right.
    pub fn h(&self, extents: &[Extent]) -> Vec<LayoutBox> {
        let sizes = allocate(i32::from(self.rect.width), extents);
        let mut x = self.rect.x;
        sizes
            .into_iter()
            .map(|size| {
                let width = size as u16;
                let b = LayoutBox::new(Rect::new(x, self.rect.y, width, self.rect.height));
                x = x.saturating_add(width);
                b
            })
            .collect()
    }

    /// Split off the top `n` rows. Returns `(top, rest)`.
    pub fn cut_top(&self, n: i32) -> (LayoutBox, LayoutBox) {
        let top = clamp_cells(n, self.rect.height);
        let r = self.rect;
        (
            LayoutBox::new(Rect::new(r.x, r.y, r.width, top)),
            LayoutBox::new(Rect::new(r.x, r.y + top, r.width, r.height - top)),
        )
    }

    /// Split off the bottom `n` rows. Returns `(bottom, rest)`.
    pub fn cut_bottom(&self, n: i32) -> (LayoutBox, LayoutBox) {
        let bottom = clamp_cells(n, self.rect.height);
        let r = self.rect;
        let rest = r.height - bottom;
        (
            LayoutBox::new(Rect::new(r.x, r.y + rest, r.width, bottom)),
            LayoutBox::new(Rect::new(r.x, r.y, r.width, rest)),
        )
    }

    /// Split off the left `n` columns. Returns `(left, rest)`.
    pub fn cut_left(&self, n: i32) -> (LayoutBox, LayoutBox) {
        let left = clamp_cells(n, self.rect.width);
        let r = self.rect;
        (
            LayoutBox::new(Rect::new(r.x, r.y, left, r.height)),
            LayoutBox::new(Rect::new(r.x + left, r.y, r.width - left, r.height)),
        )
    }

    /// Split off the right `n` columns. Returns `(right, rest)`.
    pub fn cut_right(&self, n: i32) -> (LayoutBox, LayoutBox) {
        let right = clamp_cells(n, self.rect.width);
        let r = self.rect;
        let rest = r.width - right;
        (
            LayoutBox::new(Rect::new(r.x + rest, r.y, right, r.height)),
            LayoutBox::new(Rect::new(r.x, r.y, rest, r.height)),
        )
    }

    /// A `width` x `height` box centered inside this one.
    ///
    /// Oversized requests are clamped to the container; leftover space is
    /// split at the floor of the midpoint.
    pub fn center(&self, width: i32, height: i32) -> LayoutBox {
        let r = self.rect;
        let w = clamp_cells(width, r.width);
        let h = clamp_cells(height, r.height);
        let x = r.x + (r.width - w) / 2;
        let y = r.y + (r.height - h) / 2;
        LayoutBox::new(Rect::new(x, y, w, h))
    }

    /// Shrink by `n` cells on every side.
    pub fn inset(&self, n: i32) -> LayoutBox {
        let r = self.rect;
        let dx = clamp_cells(n, r.width / 2);
        let dy = clamp_cells(n, r.height / 2);
        LayoutBox::new(Rect::new(
            r.x + dx,
            r.y + dy,
            r.width - 2 * dx,
            r.height - 2 * dy,
        ))
    }
}

fn clamp_cells(n: i32, max: u16) -> u16 {
    n.clamp(0, i32::from(max)) as u16
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;

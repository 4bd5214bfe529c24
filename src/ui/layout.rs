//! Segmented progress bar geometry.
//!
//! The bar is a row of `segments` equal blocks separated by `spacing`
//! pixels. Block width is `(width - spacing * (segments - 1)) / segments`;
//! leftover pixels stay unused at the right edge.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::{BAR_HEIGHT, BAR_SEGMENTS, BAR_SPACING, BAR_WIDTH, BAR_X, BAR_Y};
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarLayout {
    origin: Point,
    width: u32,
    height: u32,
    segments: u32,
    spacing: u32,
}

impl BarLayout {
    pub fn new(
        origin: Point,
        width: u32,
        height: u32,
        segments: u32,
        spacing: u32,
    ) -> Result<Self, Error> {
        if segments == 0 || height == 0 {
            return Err(Error::BarGeometry);
        }
        let gaps = spacing
            .checked_mul(segments - 1)
            .ok_or(Error::BarGeometry)?;
        // Every block needs at least one pixel.
        if width < gaps || (width - gaps) / segments == 0 {
            return Err(Error::BarGeometry);
        }
        Ok(Self {
            origin,
            width,
            height,
            segments,
            spacing,
        })
    }

    /// The 20-block, 300 px bar of the shipped screen layout.
    pub fn reference() -> Self {
        Self {
            origin: Point::new(BAR_X, BAR_Y),
            width: BAR_WIDTH,
            height: BAR_HEIGHT,
            segments: BAR_SEGMENTS,
            spacing: BAR_SPACING,
        }
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn segment_width(&self) -> u32 {
        (self.width - self.spacing * (self.segments - 1)) / self.segments
    }

    /// Pixel rectangle of block `index` (0 = leftmost).
    pub fn segment_rect(&self, index: u32) -> Rectangle {
        let w = self.segment_width();
        let x = self.origin.x + (index * (w + self.spacing)) as i32;
        Rectangle::new(Point::new(x, self.origin.y), Size::new(w, self.height))
    }

    /// Number of solid blocks for `remaining` out of `total` seconds:
    /// `floor(remaining / total * segments)` computed on reals.
    ///
    /// `remaining` above `total` is clamped to a full bar; `total == 0`
    /// draws an empty bar.
    pub fn filled_segments(&self, remaining: u32, total: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        let fraction = f64::from(remaining.min(total)) / f64::from(total);
        libm::floor(fraction * f64::from(self.segments)) as u32
    }
}

impl Default for BarLayout {
    fn default() -> Self {
        Self::reference()
    }
}

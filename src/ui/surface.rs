//! Drawing primitives the renderer needs from a display.
//!
//! `Surface` is the narrow seam between the render differ and the panel
//! driver: solid background, filled / outlined rectangles and text.
//! [`GraphicsSurface`] implements it for any `embedded-graphics`
//! `DrawTarget<Color = Rgb565>`.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_7X13, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::error::Error;

// Palette

pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const FOREGROUND: Rgb565 = Rgb565::WHITE;
/// Work phase accent.
pub const WORK_GREEN: Rgb565 = Rgb565::GREEN;
/// Break phase accent.
pub const BREAK_BLUE: Rgb565 = Rgb565::BLUE;
/// Custom timer accent (#FFA500).
pub const CUSTOM_ORANGE: Rgb565 = Rgb565::new(31, 41, 0);

/// Text sizes used on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Phase label.
    Label,
    /// The MM:SS countdown.
    Clock,
    /// Mode / sound status lines.
    Status,
}

impl Font {
    pub fn mono(self) -> &'static MonoFont<'static> {
        match self {
            Font::Label => &FONT_9X18_BOLD,
            Font::Clock => &FONT_10X20,
            Font::Status => &FONT_7X13,
        }
    }

    /// Box covering `chars` characters drawn at `origin` (top-left).
    pub fn text_box(self, origin: Point, chars: u32) -> Rectangle {
        let font = self.mono();
        let advance = font.character_size.width + font.character_spacing;
        Rectangle::new(
            origin,
            Size::new(advance * chars, font.character_size.height),
        )
    }
}

/// Display operations consumed by the renderer. Failures are fatal for
/// the caller; there is no retry.
pub trait Surface {
    /// Paint the whole screen with `color`.
    fn clear(&mut self, color: Rgb565) -> Result<(), Error>;

    fn fill_rect(&mut self, rect: Rectangle, color: Rgb565) -> Result<(), Error>;

    /// One-pixel outline, interior untouched.
    fn outline_rect(&mut self, rect: Rectangle, color: Rgb565) -> Result<(), Error>;

    /// Draw `text` with its top-left corner at `origin`.
    fn text(&mut self, origin: Point, text: &str, font: Font, color: Rgb565) -> Result<(), Error>;
}

/// `Surface` over an `embedded-graphics` draw target (panel driver or
/// frame buffer).
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> Surface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn clear(&mut self, color: Rgb565) -> Result<(), Error> {
        self.target.clear(color).map_err(|_| Error::Display)
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Rgb565) -> Result<(), Error> {
        rect.into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
            .map_err(|_| Error::Display)
    }

    fn outline_rect(&mut self, rect: Rectangle, color: Rgb565) -> Result<(), Error> {
        rect.into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .map_err(|_| Error::Display)
    }

    fn text(&mut self, origin: Point, text: &str, font: Font, color: Rgb565) -> Result<(), Error> {
        let style = MonoTextStyle::new(font.mono(), color);
        Text::with_baseline(text, origin, style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| Error::Display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn text_box_tracks_font_metrics() {
        let b = Font::Clock.text_box(Point::new(60, 110), 5);
        assert_eq!(b.top_left, Point::new(60, 110));
        assert_eq!(b.size, Size::new(50, 20));
    }

    #[test]
    fn outline_leaves_interior_untouched() {
        let mut surface = GraphicsSurface::new(MockDisplay::<Rgb565>::new());
        let rect = Rectangle::new(Point::new(1, 1), Size::new(4, 3));
        surface.outline_rect(rect, FOREGROUND).unwrap();

        let display = surface.target();
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(FOREGROUND));
        assert_eq!(display.get_pixel(Point::new(4, 3)), Some(FOREGROUND));
        assert_eq!(display.get_pixel(Point::new(2, 2)), None);
    }

    #[test]
    fn fill_covers_whole_rect() {
        let mut surface = GraphicsSurface::new(MockDisplay::<Rgb565>::new());
        let rect = Rectangle::new(Point::new(0, 0), Size::new(3, 2));
        surface.fill_rect(rect, WORK_GREEN).unwrap();

        let display = surface.target();
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(display.get_pixel(Point::new(x, y)), Some(WORK_GREEN));
            }
        }
        assert_eq!(display.get_pixel(Point::new(3, 0)), None);
    }
}

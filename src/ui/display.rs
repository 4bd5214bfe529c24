//! ILI9342C 320x240 SPI TFT wrapper.

use display_interface_spi::SPIInterface;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use mipidsi::models::ILI9342CRgb565;
use mipidsi::options::{ColorInversion, ColorOrder};
use mipidsi::Builder;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pomobar::ui::surface::GraphicsSurface;
use pomobar::Error;

/// Type alias for the concrete display driver.
///
/// Generic over the SPI device and control pins so callers pass in their
/// HAL's peripherals.
pub type Display<SPI, DC, RST> = mipidsi::Display<SPIInterface<SPI, DC>, ILI9342CRgb565, RST>;

/// Initialise the panel and wrap it as a render surface. The screen is
/// left as-is; the controller clears it on start.
pub fn init<SPI, DC, RST, D>(
    spi: SPI,
    dc: DC,
    rst: RST,
    delay: &mut D,
) -> Result<GraphicsSurface<Display<SPI, DC, RST>>, Error>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    let interface = SPIInterface::new(spi, dc);
    let display = Builder::new(ILI9342CRgb565, interface)
        .display_size(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .reset_pin(rst)
        .init(delay)
        .map_err(|_| Error::Display)?;
    Ok(GraphicsSurface::new(display))
}

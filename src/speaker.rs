//! Passive buzzer on one PWM channel.
//!
//! The PWM runs from the 16 MHz clock divided by 16, so the counter top
//! for a tone is simply `1_000_000 / freq`. Volume maps to duty cycle:
//! level 10 is a 50 % square wave, level 0 is silence.

use defmt::debug;
use embassy_nrf::pwm::{Instance, Prescaler, SimplePwm};
use embassy_time::{block_for, Duration};

use pomobar::hal::Speaker;
use pomobar::Error;

/// PWM counter clock after the /16 prescaler.
const PWM_CLOCK_HZ: u32 = 1_000_000;

/// Largest counter top the PWM accepts (15 bits).
const MAX_TOP: u32 = 0x7FFF;

const MAX_VOLUME: u8 = 10;

pub struct PwmSpeaker<'d, T: Instance> {
    pwm: SimplePwm<'d, T>,
    volume: u8,
}

impl<'d, T: Instance> PwmSpeaker<'d, T> {
    pub fn new(pwm: SimplePwm<'d, T>) -> Self {
        pwm.set_prescaler(Prescaler::Div16);
        pwm.disable();
        Self {
            pwm,
            volume: MAX_VOLUME / 2,
        }
    }
}

impl<T: Instance> Speaker for PwmSpeaker<'_, T> {
    fn set_volume(&mut self, level: u8) -> Result<(), Error> {
        if level > MAX_VOLUME {
            return Err(Error::Audio);
        }
        self.volume = level;
        Ok(())
    }

    /// Busy-waits for the tone; the whole executor stalls meanwhile.
    fn tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), Error> {
        if freq_hz == 0 {
            return Err(Error::Audio);
        }
        let top = (PWM_CLOCK_HZ / freq_hz).clamp(2, MAX_TOP);
        let duty = top * u32::from(self.volume) / (2 * u32::from(MAX_VOLUME));
        debug!("speaker: {=u32}Hz {=u32}ms top={=u32} duty={=u32}", freq_hz, duration_ms, top, duty);

        self.pwm.set_max_duty(top as u16);
        self.pwm.set_duty(0, duty as u16);
        self.pwm.enable();
        block_for(Duration::from_millis(u64::from(duration_ms)));
        self.pwm.set_duty(0, 0);
        self.pwm.disable();
        Ok(())
    }
}

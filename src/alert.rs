//! Completion chime.

use crate::config::{CHIME_FREQ_HZ, CHIME_GAP_MS, CHIME_TONE_MS, CHIME_VOLUME};
use crate::error::Error;
use crate::hal::{Clock, Speaker};

/// Two short beeps with a pause in between. Blocks for the whole
/// sequence (~700 ms); the countdown and the buttons wait meanwhile.
pub fn play_completion<A: Speaker, C: Clock>(speaker: &mut A, clock: &mut C) -> Result<(), Error> {
    debug!("alert: chime");
    speaker.set_volume(CHIME_VOLUME)?;
    speaker.tone(CHIME_FREQ_HZ, CHIME_TONE_MS)?;
    clock.sleep_ms(CHIME_GAP_MS);
    speaker.tone(CHIME_FREQ_HZ, CHIME_TONE_MS)
}

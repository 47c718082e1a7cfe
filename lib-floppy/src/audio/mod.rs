pub mod calibration;
pub mod note;
pub mod reload;
pub mod sequencer;
pub mod songs;
pub mod tone_player;

/// Granularity of the blocking delay primitive used for tone and gap timing.
pub const DELAY_GRANULARITY_MS: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioError {
    /// zero, or so low that dividing by the song divisor leaves nothing
    InvalidFrequency,
    /// the edge interval does not fit the 16-bit waveform timer
    FrequencyOutOfRange,
}

impl core::fmt::Display for AudioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AudioError::InvalidFrequency => f.write_str("invalid frequency"),
            AudioError::FrequencyOutOfRange => f.write_str("frequency out of timer range"),
        }
    }
}

//! Frequency to waveform-timer reload conversion.
//!
//! The timer counts up from the reload value and fires on overflow past
//! `u16::MAX`, so a reload of `RELOAD_SPAN - n` fires after `n` ticks.

use super::AudioError;

/// Conversion constant K: reload ticks per second at the configured prescale.
pub const RELOAD_TICKS_PER_SECOND: u32 = 1_000_000;

/// Number of distinct counts in the 16-bit timer.
pub const RELOAD_SPAN: u32 = 65_536;

/// Rate the waveform timer actually counts at. Every expiry is half a square
/// wave period, so the step output runs at the effective frequency.
pub const TIMER_TICK_HZ: u32 = 2 * RELOAD_TICKS_PER_SECOND;

/// `reload = 65536 - 1_000_000 / (frequency / divisor)`, with the two
/// conditions the 16-bit timer cannot express reported instead of wrapped.
pub const fn reload_value(frequency: u16, divisor: u16) -> Result<u16, AudioError> {
    if divisor == 0 {
        return Err(AudioError::InvalidFrequency);
    }

    let effective = (frequency / divisor) as u32;
    if effective == 0 {
        return Err(AudioError::InvalidFrequency);
    }

    let ticks = RELOAD_TICKS_PER_SECOND / effective;
    if ticks > RELOAD_SPAN {
        return Err(AudioError::FrequencyOutOfRange);
    }

    Ok((RELOAD_SPAN - ticks) as u16)
}

/// Timer ticks between two expiries for an installed reload value.
pub const fn expiry_ticks(reload: u16) -> u32 {
    RELOAD_SPAN - reload as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        // 660 / 2 = 330 Hz, 1_000_000 / 330 = 3030
        assert_eq!(reload_value(660, 2), Ok((65_536u32 - 3030) as u16));
        assert_eq!(reload_value(510, 2), Ok((65_536u32 - 3921) as u16));
        assert_eq!(reload_value(698, 4), Ok((65_536u32 - 5747) as u16));
        assert_eq!(reload_value(1000, 1), Ok(64_536));
    }

    #[test]
    fn monotonic_in_frequency() {
        let mut prev = reload_value(16, 1).unwrap();
        for f in 17..=20_000u16 {
            let cur = reload_value(f, 1).unwrap();
            assert!(cur >= prev, "reload fell between {} and {} Hz", f - 1, f);
            prev = cur;
        }
        assert!(reload_value(20_000, 1).unwrap() > reload_value(100, 1).unwrap());
    }

    #[test]
    fn zero_frequency_rejected() {
        assert_eq!(reload_value(0, 1), Err(AudioError::InvalidFrequency));
        assert_eq!(reload_value(3, 4), Err(AudioError::InvalidFrequency));
        assert_eq!(reload_value(440, 0), Err(AudioError::InvalidFrequency));
    }

    #[test]
    fn range_edges() {
        // 1_000_000 / 15 = 66_666 ticks, beyond the 16 bit span
        assert_eq!(reload_value(15, 1), Err(AudioError::FrequencyOutOfRange));
        assert_eq!(reload_value(61, 4), Err(AudioError::FrequencyOutOfRange));
        // 1_000_000 / 16 = 62_500 ticks still fits
        assert_eq!(reload_value(16, 1), Ok((65_536u32 - 62_500) as u16));
        assert_eq!(expiry_ticks(reload_value(16, 1).unwrap()), 62_500);
    }
}

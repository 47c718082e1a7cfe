use embedded_hal::delay::DelayNs;

use crate::drivers::audio::WaveformDriver;

use super::{note::ToneRequest, reload::reload_value, AudioError, DELAY_GRANULARITY_MS};

/// Blocking single-tone player. Only one tone is ever active: `play` returns
/// with the waveform timer stopped.
pub struct TonePlayer<D: WaveformDriver, T: DelayNs> {
    audio_driver: D,
    delay: T,
    divisor: u16,
}

impl<D: WaveformDriver, T: DelayNs> TonePlayer<D, T> {
    pub fn new(audio_driver: D, delay: T, divisor: u16) -> Self {
        TonePlayer {
            audio_driver,
            delay,
            divisor,
        }
    }

    pub fn divisor(&self) -> u16 {
        self.divisor
    }

    pub fn set_divisor(&mut self, divisor: u16) {
        self.divisor = divisor;
    }

    pub fn can_play_tone(&self, tone: u16) -> bool {
        reload_value(tone, self.divisor).is_ok()
    }

    /// Sound `frequency` for `duration_ms`. A frequency the timer cannot
    /// produce is rejected before anything starts, taking no time.
    pub fn play(&mut self, frequency: u16, duration_ms: u32) -> Result<(), AudioError> {
        let reload = reload_value(frequency, self.divisor)?;

        self.audio_driver.start(reload);
        self.wait_ms(duration_ms);
        self.audio_driver.stop();

        Ok(())
    }

    pub fn play_request(&mut self, request: ToneRequest) -> Result<(), AudioError> {
        self.play(request.frequency, request.duration_ms)
    }

    /// Silence with the waveform timer stopped.
    pub fn rest(&mut self, duration_ms: u32) {
        self.wait_ms(duration_ms);
    }

    /// Arm head direction toggling. Safe to call between tones only, which
    /// is every point the blocking player hands control back.
    pub fn arm_direction(&mut self, flip: bool) {
        self.audio_driver.arm_direction(flip);
    }

    fn wait_ms(&mut self, duration_ms: u32) {
        for _ in 0..duration_ms / DELAY_GRANULARITY_MS {
            self.delay.delay_ms(DELAY_GRANULARITY_MS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        audio::note::Beat,
        sim::{SimulatedDrive, TimerEvent},
    };

    #[test]
    fn play_blocks_for_duration_regardless_of_pitch() {
        let sim = SimulatedDrive::with_sim_pins(150);
        let mut player = TonePlayer::new(sim.driver(), sim.delay(), 1);

        for (tone, start_us) in [(110u16, 0u64), (440, 250_000), (3520, 500_000)] {
            assert_eq!(sim.now_us(), start_us);
            player.play(tone, 250).unwrap();
            assert!(!sim.is_running());
        }
        assert_eq!(sim.now_us(), 750_000);
    }

    #[test]
    fn zero_duration_starts_and_stops() {
        let sim = SimulatedDrive::with_sim_pins(150);
        let mut player = TonePlayer::new(sim.driver(), sim.delay(), 2);

        player.play(660, 0).unwrap();

        assert_eq!(sim.now_us(), 0);
        assert_eq!(sim.with_isr(|isr| isr.firings()), 0);
        assert_eq!(
            sim.events().as_slice(),
            &[
                TimerEvent::Started { at_us: 0, reload: 62_506 },
                TimerEvent::Stopped { at_us: 0 },
            ]
        );
    }

    #[test]
    fn beat_request_plays_tone_part_only() {
        let sim = SimulatedDrive::with_sim_pins(150);
        let mut player = TonePlayer::new(sim.driver(), sim.delay(), 2);

        let beat = Beat::note_then_rest(660, 100, 150);
        assert_eq!(beat.request(), ToneRequest { frequency: 660, duration_ms: 100 });
        player.play_request(beat.request()).unwrap();

        // the gap is the sequencer's business
        assert_eq!(sim.now_us(), 100_000);
        assert_eq!(
            sim.events().as_slice(),
            &[
                TimerEvent::Started { at_us: 0, reload: 62_506 },
                TimerEvent::Stopped { at_us: 100_000 },
            ]
        );
    }

    #[test]
    fn rejected_tone_leaves_timer_idle() {
        let sim = SimulatedDrive::with_sim_pins(140);
        let mut player = TonePlayer::new(sim.driver(), sim.delay(), 4);

        assert_eq!(player.play(0, 100), Err(AudioError::InvalidFrequency));
        assert_eq!(player.play(61, 100), Err(AudioError::FrequencyOutOfRange));
        assert!(!player.can_play_tone(61));
        assert!(player.can_play_tone(698));

        assert_eq!(sim.starts(), 0);
        assert_eq!(sim.now_us(), 0);
        assert!(!sim.is_running());
    }

    #[test]
    fn repeated_play_is_deterministic() {
        let sim = SimulatedDrive::with_sim_pins(150);
        let mut player = TonePlayer::new(sim.driver(), sim.delay(), 2);

        player.play(770, 100).unwrap();
        let first = sim.with_isr(|isr| isr.firings());
        player.play(770, 100).unwrap();
        let second = sim.with_isr(|isr| isr.firings()) - first;

        assert_eq!(first, second);
        let events = sim.events();
        assert_eq!(events.len(), 4);
        match (events[0], events[2]) {
            (
                TimerEvent::Started { at_us: a, reload: ra },
                TimerEvent::Started { at_us: b, reload: rb },
            ) => {
                assert_eq!(ra, rb);
                assert_eq!(b - a, 100_000);
            }
            other => panic!("unexpected events {:?}", other),
        }
    }
}

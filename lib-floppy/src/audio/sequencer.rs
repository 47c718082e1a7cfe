use embedded_hal::delay::DelayNs;

use crate::drivers::audio::WaveformDriver;

use super::{note::Beat, tone_player::TonePlayer};

/// Outcome of one pass over a song.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceReport {
    pub played: usize,
    pub skipped: usize,
    pub elapsed_ms: u64,
}

/// Plays every beat once, in order. There is no early exit: a beat the timer
/// cannot produce is held as silence for its duration so the rest of the song
/// keeps its timing.
pub fn play_beats<D: WaveformDriver, T: DelayNs>(
    player: &mut TonePlayer<D, T>,
    beats: &[Beat],
) -> SequenceReport {
    let mut report = SequenceReport::default();

    for (i, beat) in beats.iter().enumerate() {
        match player.play_request(beat.request()) {
            Ok(()) => report.played += 1,
            Err(err) => {
                warn!("beat {} ({} Hz) skipped: {}", i, beat.tone, err);
                player.rest(beat.duration_ms);
                report.skipped += 1;
            }
        }

        if beat.gap_ms > 0 {
            player.rest(beat.gap_ms);
        }

        report.elapsed_ms += beat.duration_ms as u64 + beat.gap_ms as u64;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimulatedDrive;

    #[test]
    fn gaps_keep_timer_idle() {
        let sim = SimulatedDrive::with_sim_pins(150);
        let mut player = TonePlayer::new(sim.driver(), sim.delay(), 2);

        let beats = [Beat::note_then_rest(660, 100, 150)];
        let report = play_beats(&mut player, &beats);

        assert_eq!(report, SequenceReport { played: 1, skipped: 0, elapsed_ms: 250 });
        assert_eq!(sim.now_us(), 250_000);
        // 330 Hz effective for 100 ms, nothing during the gap
        let firings = sim.with_isr(|isr| isr.firings());
        assert_eq!(firings, 200_000 / 3030);
    }

    #[test]
    fn unplayable_beat_keeps_timing() {
        let sim = SimulatedDrive::with_sim_pins(140);
        let mut player = TonePlayer::new(sim.driver(), sim.delay(), 4);

        let beats = [
            Beat::note_then_rest(184, 100, 10),
            Beat::note_then_rest(12, 200, 20),
            Beat::note(184, 100),
        ];
        let report = play_beats(&mut player, &beats);

        assert_eq!(report, SequenceReport { played: 2, skipped: 1, elapsed_ms: 430 });
        assert_eq!(sim.now_us(), 430_000);
        assert_eq!(sim.starts(), 2);
    }
}

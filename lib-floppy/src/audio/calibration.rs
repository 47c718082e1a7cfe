use embedded_hal::delay::DelayNs;

use crate::drivers::audio::WaveformDriver;

use super::{
    note::{Calibration, Song},
    sequencer::{play_beats, SequenceReport},
    tone_player::TonePlayer,
    AudioError,
};

/// Drive the head into its end stop with toggling disarmed, then arm
/// toggling with one immediate reversal and let the mechanics settle.
pub fn calibrate_and_arm<D: WaveformDriver, T: DelayNs>(
    player: &mut TonePlayer<D, T>,
    calibration: &Calibration,
) -> Result<(), AudioError> {
    debug!("calibrating: {} Hz for {} ms", calibration.tone, calibration.duration_ms);

    let result = player.play(calibration.tone, calibration.duration_ms);
    if let Err(err) = result {
        warn!("calibration tone rejected: {}", err);
    }

    player.arm_direction(true);
    player.rest(calibration.settle_ms);

    result
}

/// Startup step for `song`: calibrate when the table asks for it, otherwise
/// arm straight away with no reversal.
pub fn prepare_song<D: WaveformDriver, T: DelayNs>(
    player: &mut TonePlayer<D, T>,
    song: &Song,
) -> Result<(), AudioError> {
    player.set_divisor(song.divisor);

    match &song.calibration {
        Some(calibration) => calibrate_and_arm(player, calibration),
        None => {
            player.arm_direction(false);
            Ok(())
        }
    }
}

/// Prepare the drive for `song` and play it once. `on_ready` runs between
/// the startup step and the first beat.
pub fn run_song<D, T, F>(player: &mut TonePlayer<D, T>, song: &Song, on_ready: F) -> SequenceReport
where
    D: WaveformDriver,
    T: DelayNs,
    F: FnOnce(&Song),
{
    if let Some((index, err)) = song.first_unplayable() {
        warn!("\"{}\" beat {} is unplayable ({}), such beats rest instead", song.title, index, err);
    }

    if let Err(err) = prepare_song(player, song) {
        // an uncalibrated head still plays, it only loses range
        warn!("calibration failed: {}", err);
    }

    on_ready(song);

    info!("playing \"{}\", {} beats, {} ms", song.title, song.len(), song.total_ms());
    let report = play_beats(player, song.beats);
    info!(
        "finished: {} played, {} skipped, {} ms",
        report.played,
        report.skipped,
        report.elapsed_ms
    );

    report
}

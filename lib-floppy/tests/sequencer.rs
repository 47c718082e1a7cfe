use floppy_lib::{
    audio::{
        note::Beat,
        reload::reload_value,
        sequencer::{play_beats, SequenceReport},
        tone_player::TonePlayer,
    },
    sim::{SimulatedDrive, TimerEvent},
};

#[test]
fn three_note_phrase_starts_and_stops_in_order() {
    let sim = SimulatedDrive::with_sim_pins(150);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), 2);

    let phrase = [Beat::note(660, 100), Beat::note(660, 100), Beat::note(510, 100)];
    let report = play_beats(&mut player, &phrase);

    assert_eq!(
        report,
        SequenceReport {
            played: 3,
            skipped: 0,
            elapsed_ms: 300
        }
    );

    let r660 = 65_536 - 1_000_000 / (660 / 2);
    let r510 = 65_536 - 1_000_000 / (510 / 2);
    assert_eq!(reload_value(660, 2), Ok(r660 as u16));

    assert_eq!(
        sim.events().as_slice(),
        &[
            TimerEvent::Started { at_us: 0, reload: r660 as u16 },
            TimerEvent::Stopped { at_us: 100_000 },
            TimerEvent::Started { at_us: 100_000, reload: r660 as u16 },
            TimerEvent::Stopped { at_us: 200_000 },
            TimerEvent::Started { at_us: 200_000, reload: r510 as u16 },
            TimerEvent::Stopped { at_us: 300_000 },
        ]
    );
    assert_eq!(sim.now_us(), 300_000);
    assert!(!sim.is_running());
}

#[test]
fn gaps_are_silent() {
    let sim = SimulatedDrive::with_sim_pins(150);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), 2);

    let phrase = [
        Beat::note_then_rest(660, 100, 150),
        Beat::note_then_rest(660, 100, 300),
    ];
    play_beats(&mut player, &phrase);

    // 330 Hz effective is 3030 ticks per edge, 200_000 ticks per 100 ms tone
    let per_tone = 200_000 / 3030;
    assert_eq!(sim.with_isr(|isr| isr.firings()), 2 * per_tone);
    assert_eq!(sim.now_us(), 650_000);
    assert_eq!(
        sim.events()[2],
        TimerEvent::Started { at_us: 250_000, reload: 62_506 }
    );
}

#[test]
fn whole_song_plays_through_rejected_notes() {
    let song = floppy_lib::audio::songs::MOUNTAIN_KING;
    let sim = SimulatedDrive::with_sim_pins(song.inversion_threshold);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), song.divisor);

    let report = play_beats(&mut player, song.beats);

    assert_eq!(report.played + report.skipped, song.len());
    assert!(report.skipped > 0);
    assert_eq!(report.elapsed_ms, song.total_ms());
    assert_eq!(sim.now_us(), song.total_ms() * 1000);
    assert_eq!(sim.starts() as usize, report.played);
}

use floppy_lib::{
    audio::{
        calibration::{calibrate_and_arm, prepare_song, run_song},
        note::{Beat, Calibration, Song, DEFAULT_CALIBRATION},
        tone_player::TonePlayer,
        AudioError,
    },
    sim::SimulatedDrive,
};

const SHORT_SONG: [Beat; 3] = [
    Beat::note_then_rest(391, 230, 10),
    Beat::note(440, 461),
    Beat::note(12, 100),
];

fn test_song(calibration: Option<Calibration>) -> Song {
    Song {
        title: "test",
        divisor: 4,
        inversion_threshold: 140,
        calibration,
        beats: &SHORT_SONG,
    }
}

#[test]
fn calibration_arms_after_end_stop_run() {
    let sim = SimulatedDrive::with_sim_pins(140);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), 4);

    calibrate_and_arm(&mut player, &DEFAULT_CALIBRATION).unwrap();

    // 698 / 4 = 174 Hz effective, 5747 ticks per edge over 2714 ms
    let calibration_edges = 2714 * 2000 / 5747;
    sim.with_isr(|isr| {
        assert_eq!(isr.firings(), calibration_edges);
        assert!(isr.toggler().is_armed());
        assert_eq!(isr.toggler().edge_counter(), 0);
        // only the reversal made at arming time
        assert_eq!(isr.toggler().flips(), 0);
        assert_eq!(isr.direction_pin().transitions(), 1);
        assert!(isr.direction_pin().is_high());
    });
    assert_eq!(sim.now_us(), (2714 + 1714) * 1000);
    assert!(!sim.is_running());
}

#[test]
fn rejected_calibration_still_arms() {
    let sim = SimulatedDrive::with_sim_pins(140);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), 4);

    let calibration = Calibration {
        tone: 2,
        duration_ms: 500,
        settle_ms: 100,
    };
    assert_eq!(
        calibrate_and_arm(&mut player, &calibration),
        Err(AudioError::InvalidFrequency)
    );
    assert!(sim.with_isr(|isr| isr.toggler().is_armed()));
    assert_eq!(sim.now_us(), 100_000);
}

#[test]
fn song_without_calibration_arms_in_place() {
    let sim = SimulatedDrive::with_sim_pins(140);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), 1);

    prepare_song(&mut player, &test_song(None)).unwrap();

    assert_eq!(player.divisor(), 4);
    assert_eq!(sim.now_us(), 0);
    sim.with_isr(|isr| {
        assert!(isr.toggler().is_armed());
        assert_eq!(isr.direction_pin().transitions(), 0);
    });
}

#[test]
fn run_song_reports_the_pass() {
    let sim = SimulatedDrive::with_sim_pins(140);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), 1);

    let song = test_song(Some(DEFAULT_CALIBRATION));
    let mut ready_at_us = None;
    let report = run_song(&mut player, &song, |ready| {
        assert_eq!(ready.title, "test");
        ready_at_us = Some(sim.now_us());
    });

    // after calibration and settling, before the first beat
    assert_eq!(ready_at_us, Some((2714 + 1714) * 1000));

    assert_eq!(report.played, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.elapsed_ms, 230 + 10 + 461 + 100);
    assert_eq!(sim.now_us(), (2714 + 1714 + 801) * 1000);
    // calibration tone plus two playable beats
    assert_eq!(sim.starts(), 3);
}

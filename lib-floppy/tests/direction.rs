use floppy_lib::{
    audio::{note::Beat, reload::TIMER_TICK_HZ, sequencer::play_beats, tone_player::TonePlayer},
    sim::SimulatedDrive,
};

const THRESHOLD: u8 = 140;
const DIVISOR: u16 = 4;

const FIXTURE: [Beat; 10] = [
    Beat::note_then_rest(440, 230, 20),
    Beat::note(523, 461),
    Beat::note_then_rest(392, 230, 5),
    Beat::note(698, 923),
    Beat::note_then_rest(659, 120, 40),
    Beat::note(587, 461),
    Beat::note(987, 177),
    Beat::note_then_rest(739, 204, 100),
    Beat::note(493, 272),
    Beat::note(1174, 207),
];

/// ISR firings a tone produces: whole edge intervals inside its duration.
fn expected_firings(beat: &Beat) -> u64 {
    let ticks_per_edge = 1_000_000 / (beat.tone / DIVISOR) as u64;
    let tone_ticks = beat.duration_ms as u64 * TIMER_TICK_HZ as u64 / 1000;
    tone_ticks / ticks_per_edge
}

#[test]
fn inversions_follow_total_cycles() {
    let sim = SimulatedDrive::with_sim_pins(THRESHOLD);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), DIVISOR);
    player.arm_direction(false);

    play_beats(&mut player, &FIXTURE);

    let total: u64 = FIXTURE.iter().map(expected_firings).sum();
    let flips = total / THRESHOLD as u64;

    sim.with_isr(|isr| {
        assert_eq!(isr.firings() as u64, total);
        assert_eq!(isr.toggler().flips() as u64, flips);
        assert_eq!(isr.toggler().edge_counter() as u64, total % THRESHOLD as u64);
        assert_eq!(isr.direction_pin().transitions() as u64, flips);
        assert_eq!(isr.direction_pin().is_high(), flips % 2 == 1);
    });
    assert!(flips > 0);
}

#[test]
fn phase_carries_across_notes() {
    let sim = SimulatedDrive::with_sim_pins(THRESHOLD);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), DIVISOR);
    player.arm_direction(false);

    // 1000 Hz effective: 20 edges per 10 ms, 7 notes give exactly one flip
    for _ in 0..6 {
        player.play(4000, 10).unwrap();
        player.rest(5);
    }
    sim.with_isr(|isr| {
        assert_eq!(isr.toggler().edge_counter(), 120);
        assert_eq!(isr.toggler().flips(), 0);
    });

    player.play(4000, 10).unwrap();
    sim.with_isr(|isr| {
        assert_eq!(isr.toggler().edge_counter(), 0);
        assert_eq!(isr.toggler().flips(), 1);
        assert!(isr.direction_pin().is_high());
    });
}

#[test]
fn unarmed_drive_never_reverses() {
    let sim = SimulatedDrive::with_sim_pins(THRESHOLD);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), DIVISOR);

    play_beats(&mut player, &FIXTURE);

    sim.with_isr(|isr| {
        assert!(isr.firings() > THRESHOLD as u32);
        assert_eq!(isr.toggler().flips(), 0);
        assert_eq!(isr.direction_pin().transitions(), 0);
    });
}

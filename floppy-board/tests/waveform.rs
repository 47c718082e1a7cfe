#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

////////////////////////////////////////////////
// Runs on a bare Nucleo-G071RB, no drive     //
// needed. PA0/PA1 can be probed for a scope. //
////////////////////////////////////////////////

#[defmt_test::tests]
mod tests {
    use defmt::assert_eq;
    use embassy_time::Instant;
    use floppy_board::{
        delay::PacedDelay,
        get_system_config, init_waveform,
        waveform::{self, FloppyWaveform},
    };
    use floppy_lib::audio::tone_player::TonePlayer;

    type Player = TonePlayer<FloppyWaveform, PacedDelay>;

    #[init]
    fn init() -> Player {
        let p = embassy_stm32::init(get_system_config());
        let waveform = init_waveform(p.PA0, p.PA1, p.TIM3, 140);
        TonePlayer::new(waveform, PacedDelay::new(), 1)
    }

    #[test]
    fn edges_match_tone_period(player: &mut Player) {
        let before = waveform::isr_firings();
        player.play(1000, 100).unwrap();
        // 2 edges per cycle at 1 kHz for 100 ms, allow one edge of setup slack
        let edges = waveform::isr_firings().wrapping_sub(before);
        defmt::assert!((199..=200).contains(&edges), "edges {}", edges);
    }

    #[test]
    fn play_blocks_for_duration(player: &mut Player) {
        let start = Instant::now();
        player.play(440, 50).unwrap();
        let elapsed = start.elapsed().as_millis();
        defmt::assert!((50..=51).contains(&elapsed), "elapsed {} ms", elapsed);
    }

    #[test]
    fn long_tone_does_not_drift(player: &mut Player) {
        let start = Instant::now();
        player.play(698, 2714).unwrap();
        let elapsed = start.elapsed().as_micros();
        defmt::assert!(
            (2_713_000..=2_715_000).contains(&elapsed),
            "elapsed {} us",
            elapsed
        );
    }

    #[test]
    fn tone_then_gap_keeps_pace(player: &mut Player) {
        let start = Instant::now();
        for _ in 0..10 {
            player.play(660, 100).unwrap();
            player.rest(150);
        }
        let elapsed = start.elapsed().as_millis();
        defmt::assert!((2_500..=2_501).contains(&elapsed), "elapsed {} ms", elapsed);
    }

    #[test]
    fn rests_are_silent(player: &mut Player) {
        let before = waveform::isr_firings();
        player.rest(20);
        assert_eq!(waveform::isr_firings(), before);
    }
}

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use floppy_board::{
    config::{HWTEST_DIVISOR, HWTEST_INVERSION_THRESHOLD, HWTEST_SCALE, HWTEST_TONE_MS},
    delay::PacedDelay,
    get_system_config, init_waveform, waveform,
};
use floppy_lib::audio::{calibration::calibrate_and_arm, note::DEFAULT_CALIBRATION, tone_player::TonePlayer};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(get_system_config());
    info!("Hello World!");

    let waveform = init_waveform(p.PA0, p.PA1, p.TIM3, HWTEST_INVERSION_THRESHOLD);
    let mut tone_player = TonePlayer::new(waveform, PacedDelay::new(), HWTEST_DIVISOR);

    if let Err(err) = calibrate_and_arm(&mut tone_player, &DEFAULT_CALIBRATION) {
        warn!("calibration failed: {}", err);
    }
    info!("calibrated, edges so far {}", waveform::isr_firings());

    loop {
        for tone in HWTEST_SCALE.iter().chain(HWTEST_SCALE.iter().rev()) {
            let before = waveform::isr_firings();
            match tone_player.play(*tone, HWTEST_TONE_MS) {
                Ok(()) => info!("{} Hz: {} edges", tone, waveform::isr_firings().wrapping_sub(before)),
                Err(err) => warn!("{} Hz rejected: {}", tone, err),
            }
            tone_player.rest(50);
        }

        tone_player.rest(1000);
    }
}

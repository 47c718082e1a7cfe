#![no_std]

use embassy_stm32::{
    gpio::{Level, Output, Speed},
    usart::{self, Uart},
};
use floppy_lib::{
    audio::{
        calibration::run_song,
        songs::{song, SongId},
        tone_player::TonePlayer,
    },
    console::{line_editor::LineEditor, print_reset, print_title, test_tone_loop},
};

use crate::{
    config::{CONSOLE_BAUD_RATE, CONSOLE_LINE_LENGTH},
    delay::PacedDelay,
    pins::*,
    serial::ConsoleSerial,
    waveform::FloppyWaveform,
};

pub mod config;
pub mod delay;
pub mod pins;
pub mod serial;
pub mod waveform;

pub use config::get_system_config;

#[macro_export]
macro_rules! create_song_firmware {
    ($p:ident, $song_id:expr) => {
        $crate::run_song_firmware(
            $song_id, $p.PA0, $p.PA1, $p.TIM3, $p.USART2, $p.PA2, $p.PA3
        )
    };
}

pub fn init_console(uart: ConsoleUart, tx: ConsoleUartTxPin, rx: ConsoleUartRxPin) -> ConsoleSerial {
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = CONSOLE_BAUD_RATE;

    let uart = defmt::unwrap!(Uart::new_blocking(uart, rx, tx, uart_config));
    ConsoleSerial::new(uart)
}

pub fn init_waveform(
    step: StepPin,
    direction: DirectionPin,
    timer: WaveformTimer,
    inversion_threshold: u8,
) -> FloppyWaveform {
    let step = Output::new(step, Level::Low, Speed::Low);
    let direction = Output::new(direction, Level::Low, Speed::Low);

    FloppyWaveform::new(timer, step, direction, inversion_threshold)
}

/// Play one song after the startup calibration, then hand the drive to
/// the interactive test-tone console for good.
pub fn run_song_firmware(
    song_id: SongId,
    step: StepPin,
    direction: DirectionPin,
    timer: WaveformTimer,
    uart: ConsoleUart,
    uart_tx: ConsoleUartTxPin,
    uart_rx: ConsoleUartRxPin,
) -> ! {
    let song = song(song_id);
    defmt::info!("firmware for {}", song_id);

    let mut console = init_console(uart, uart_tx, uart_rx);
    print_reset(&mut console);

    let waveform = init_waveform(step, direction, timer, song.inversion_threshold);
    let mut tone_player = TonePlayer::new(waveform, PacedDelay::new(), song.divisor);

    run_song(&mut tone_player, song, |ready| print_title(&mut console, ready.title));
    defmt::info!("{} waveform edges since boot", waveform::isr_firings());

    let mut editor = LineEditor::<CONSOLE_LINE_LENGTH>::new();
    test_tone_loop(&mut console, &mut editor, &mut tone_player)
}

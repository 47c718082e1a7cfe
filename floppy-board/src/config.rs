use embassy_stm32::{interrupt::Priority, Config};

pub const CONSOLE_BAUD_RATE: u32 = 19_200;

// longest frequency the console accepts, in characters
pub const CONSOLE_LINE_LENGTH: usize = 20;

// above the thread-mode executor so edges keep their period during delays
pub const WAVEFORM_IRQ_PRIORITY: Priority = Priority::P1;

// tones played by hwtest-tone, Hz
pub const HWTEST_SCALE: [u16; 8] = [1047, 1175, 1319, 1397, 1568, 1760, 1976, 2093];
pub const HWTEST_TONE_MS: u32 = 250;
pub const HWTEST_DIVISOR: u16 = 4;
pub const HWTEST_INVERSION_THRESHOLD: u8 = 140;

pub fn get_system_config() -> Config {
    // HSI16 straight into SYSCLK, the waveform prescaler is derived from the
    // timer clock at init so a faster tree only needs changes here
    Config::default()
}

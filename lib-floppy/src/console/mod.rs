//! Serial console: startup banner and the interactive single-tone test loop.

use core::fmt::{self, Write as _};

use embedded_hal::delay::DelayNs;

use crate::{
    audio::{tone_player::TonePlayer, AudioError},
    drivers::audio::WaveformDriver,
};

pub mod line_editor;

use line_editor::{LineEditor, LineEvent};

pub const RESET_BANNER: &str = "\r\nRESET\r\n";
pub const FREQUENCY_PROMPT: &str = "Enter an integer frequency: ";

/// Duration of each interactive test tone.
pub const TEST_TONE_MS: u32 = 100;

/// Byte-level serial port. Implementations recover from receive errors
/// themselves, `read_byte` only returns good data.
pub trait SerialConsole {
    fn read_byte(&mut self) -> u8;
    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}

/// `core::fmt` sink over a [`SerialConsole`].
struct ConsoleWriter<'a, S>(&'a mut S);

impl<S: SerialConsole> fmt::Write for ConsoleWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_bytes(s.as_bytes());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError {
    NotANumber,
    Audio(AudioError),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::NotANumber => f.write_str("not a number"),
            ConsoleError::Audio(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<AudioError> for ConsoleError {
    fn from(err: AudioError) -> Self {
        ConsoleError::Audio(err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TestToneOutcome {
    Blank,
    Played(u16),
    Rejected(ConsoleError),
}

/// `Ok(None)` for a blank line.
pub fn parse_frequency(line: &str) -> Result<Option<u16>, ConsoleError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    line.parse::<u16>()
        .map(Some)
        .map_err(|_| ConsoleError::NotANumber)
}

pub fn print_reset<S: SerialConsole>(serial: &mut S) {
    serial.write_str(RESET_BANNER);
}

pub fn print_title<S: SerialConsole>(serial: &mut S, title: &str) {
    serial.write_str(title);
    serial.write_str(".\r\n");
}

/// Read one edited line, echoing as the user types.
pub fn read_line<'e, S: SerialConsole, const N: usize>(
    serial: &mut S,
    editor: &'e mut LineEditor<N>,
) -> &'e str {
    editor.clear();

    loop {
        match editor.feed(serial.read_byte()) {
            LineEvent::Ignored => {}
            LineEvent::Edited(echo) => serial.write_bytes(echo.as_bytes()),
            LineEvent::Complete(echo) => {
                serial.write_bytes(echo.as_bytes());
                return editor.line();
            }
        }
    }
}

/// One prompt of the test loop: read a frequency and play it for [`TEST_TONE_MS`].
pub fn test_tone_once<S, D, T, const N: usize>(
    serial: &mut S,
    editor: &mut LineEditor<N>,
    player: &mut TonePlayer<D, T>,
) -> TestToneOutcome
where
    S: SerialConsole,
    D: WaveformDriver,
    T: DelayNs,
{
    serial.write_str(FREQUENCY_PROMPT);

    let line = read_line(serial, editor);
    let outcome = match parse_frequency(line) {
        Ok(None) => TestToneOutcome::Blank,
        Ok(Some(frequency)) => match player.play(frequency, TEST_TONE_MS) {
            Ok(()) => TestToneOutcome::Played(frequency),
            Err(err) => TestToneOutcome::Rejected(err.into()),
        },
        Err(err) => TestToneOutcome::Rejected(err),
    };

    if let TestToneOutcome::Rejected(err) = outcome {
        warn!("test tone rejected: {}", err);
        // the writer never fails
        let _ = write!(ConsoleWriter(serial), "{}\r\n", err);
    }

    outcome
}

/// Interactive single-tone loop entered once the song has finished.
pub fn test_tone_loop<S, D, T, const N: usize>(
    serial: &mut S,
    editor: &mut LineEditor<N>,
    player: &mut TonePlayer<D, T>,
) -> !
where
    S: SerialConsole,
    D: WaveformDriver,
    T: DelayNs,
{
    loop {
        test_tone_once(serial, editor, player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_read_like_their_cause() {
        assert_eq!(std::format!("{}", ConsoleError::NotANumber), "not a number");
        for err in [AudioError::InvalidFrequency, AudioError::FrequencyOutOfRange] {
            assert_eq!(std::format!("{}", ConsoleError::from(err)), std::format!("{}", err));
        }
    }
}

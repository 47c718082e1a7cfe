use std::collections::VecDeque;

use floppy_lib::{
    audio::{tone_player::TonePlayer, AudioError},
    console::{
        line_editor::LineEditor, parse_frequency, print_reset, print_title, read_line, test_tone_once,
        ConsoleError, SerialConsole, TestToneOutcome, FREQUENCY_PROMPT,
    },
    sim::{SimulatedDrive, TimerEvent},
};

struct ScriptedSerial {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl ScriptedSerial {
    fn new(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            output: Vec::new(),
        }
    }

    fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl SerialConsole for ScriptedSerial {
    fn read_byte(&mut self) -> u8 {
        self.input.pop_front().expect("script ran out of input")
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }
}

#[test]
fn parses_frequencies() {
    assert_eq!(parse_frequency(""), Ok(None));
    assert_eq!(parse_frequency("   "), Ok(None));
    assert_eq!(parse_frequency("440"), Ok(Some(440)));
    assert_eq!(parse_frequency(" 880 "), Ok(Some(880)));
    assert_eq!(parse_frequency("abc"), Err(ConsoleError::NotANumber));
    assert_eq!(parse_frequency("-5"), Err(ConsoleError::NotANumber));
    assert_eq!(parse_frequency("70000"), Err(ConsoleError::NotANumber));
}

#[test]
fn banner_then_title() {
    let mut serial = ScriptedSerial::new(b"");
    print_reset(&mut serial);
    print_title(&mut serial, "Happy Birthday");
    assert_eq!(serial.output(), "\r\nRESET\r\nHappy Birthday.\r\n");
}

#[test]
fn read_line_echoes_edits() {
    let mut serial = ScriptedSerial::new(b"4x\x0840\r");
    let mut editor = LineEditor::<20>::new();

    assert_eq!(read_line(&mut serial, &mut editor), "440");
    assert_eq!(serial.output(), "4x\x08 \x0840\r\n");
}

#[test]
fn test_tone_plays_for_fixed_duration() {
    let sim = SimulatedDrive::with_sim_pins(140);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), 4);
    let mut serial = ScriptedSerial::new(b"880\r");
    let mut editor = LineEditor::<20>::new();

    let outcome = test_tone_once(&mut serial, &mut editor, &mut player);

    assert_eq!(outcome, TestToneOutcome::Played(880));
    assert_eq!(sim.now_us(), 100_000);
    assert_eq!(
        sim.events().as_slice(),
        &[
            TimerEvent::Started { at_us: 0, reload: 60_991 },
            TimerEvent::Stopped { at_us: 100_000 },
        ]
    );
    assert!(serial.output().starts_with(FREQUENCY_PROMPT));
}

#[test]
fn blank_and_bad_lines_play_nothing() {
    let sim = SimulatedDrive::with_sim_pins(140);
    let mut player = TonePlayer::new(sim.driver(), sim.delay(), 4);
    let mut serial = ScriptedSerial::new(b"\rhello\r0\r");
    let mut editor = LineEditor::<20>::new();

    assert_eq!(
        test_tone_once(&mut serial, &mut editor, &mut player),
        TestToneOutcome::Blank
    );
    assert_eq!(
        test_tone_once(&mut serial, &mut editor, &mut player),
        TestToneOutcome::Rejected(ConsoleError::NotANumber)
    );
    assert_eq!(
        test_tone_once(&mut serial, &mut editor, &mut player),
        TestToneOutcome::Rejected(ConsoleError::Audio(AudioError::InvalidFrequency))
    );

    assert_eq!(sim.starts(), 0);
    assert_eq!(sim.now_us(), 0);
    let output = serial.output();
    assert!(output.contains("not a number\r\n"));
    assert!(output.contains("invalid frequency\r\n"));
}

use heapless::String;

const CR: u8 = b'\r';
const LF: u8 = b'\n';
const BS: u8 = 0x08;
const DEL: u8 = 0x7f;

/// Bytes to echo back for one input byte, at most three.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Echo {
    buf: [u8; 3],
    len: usize,
}

impl Echo {
    const fn one(byte: u8) -> Self {
        Echo { buf: [byte, 0, 0], len: 1 }
    }

    const fn erase(byte: u8) -> Self {
        Echo { buf: [byte, b' ', byte], len: 3 }
    }

    const fn newline() -> Self {
        Echo { buf: [CR, LF, 0], len: 2 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEvent {
    /// nothing to echo, the byte was dropped
    Ignored,
    Edited(Echo),
    /// carriage return seen, the line is ready in [`LineEditor::line`]
    Complete(Echo),
}

/// Terminal line editing over a byte stream: printable ASCII is appended up
/// to `N` characters, backspace and delete erase, carriage return ends the line.
pub struct LineEditor<const N: usize> {
    line: String<N>,
}

impl<const N: usize> Default for LineEditor<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineEditor<N> {
    pub const fn new() -> Self {
        LineEditor { line: String::new() }
    }

    pub fn clear(&mut self) {
        self.line.clear();
    }

    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    pub fn feed(&mut self, byte: u8) -> LineEvent {
        match byte {
            CR => LineEvent::Complete(Echo::newline()),
            BS | DEL => {
                if self.line.pop().is_some() {
                    LineEvent::Edited(Echo::erase(byte))
                } else {
                    LineEvent::Ignored
                }
            }
            b' '..=b'~' => {
                if self.line.push(byte as char).is_ok() {
                    LineEvent::Edited(Echo::one(byte))
                } else {
                    LineEvent::Ignored
                }
            }
            _ => LineEvent::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all<const N: usize>(editor: &mut LineEditor<N>, input: &[u8]) -> std::vec::Vec<u8> {
        let mut echoed = std::vec::Vec::new();
        for &b in input {
            match editor.feed(b) {
                LineEvent::Ignored => {}
                LineEvent::Edited(echo) | LineEvent::Complete(echo) => {
                    echoed.extend_from_slice(echo.as_bytes())
                }
            }
        }
        echoed
    }

    #[test]
    fn backspace_erases_on_screen() {
        let mut editor = LineEditor::<20>::new();
        let echoed = feed_all(&mut editor, b"44\x7f50");
        assert_eq!(editor.line(), "450");
        assert_eq!(echoed, b"44\x7f \x7f50");
    }

    #[test]
    fn backspace_on_empty_line_is_silent() {
        let mut editor = LineEditor::<20>::new();
        assert_eq!(editor.feed(BS), LineEvent::Ignored);
        assert_eq!(editor.line(), "");
    }

    #[test]
    fn control_bytes_and_overflow_are_dropped() {
        let mut editor = LineEditor::<4>::new();
        let echoed = feed_all(&mut editor, b"12\x1b\n3456");
        assert_eq!(editor.line(), "1234");
        assert_eq!(echoed, b"1234");
    }

    #[test]
    fn carriage_return_completes() {
        let mut editor = LineEditor::<20>::new();
        feed_all(&mut editor, b"880");
        assert_eq!(editor.feed(CR), LineEvent::Complete(Echo::newline()));
        assert_eq!(editor.line(), "880");
    }
}

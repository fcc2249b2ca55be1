// Fri Oct 16 2026 - Alex

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Supplies input lines one at a time until exhausted.
pub trait LineSource {
    /// The next line without its terminator, or `None` once the source is done.
    /// Lines are raw bytes; nothing here assumes an encoding.
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Lines read from a byte stream such as stdin.
///
/// Bytes are handed on exactly as read, so text in a legacy code page or
/// binary noise in a log comes out the other end unchanged.
pub struct StreamSource<R> {
    reader: R,
}

impl<R: BufRead> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StreamSource<R> {
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

/// Lines supplied up front, e.g. symbols given on the command line.
#[derive(Debug, Default)]
pub struct ArgumentSource {
    lines: VecDeque<Vec<u8>>,
}

impl ArgumentSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(|s| s.into().into_bytes()).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ArgumentSource {
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.lines.pop_front())
    }
}

//! Buffered line source with one line of lookahead.

use crate::error::{ParseError, ParseErrorKind};
use std::io::BufRead;

/// A stream of significant lines with single-line lookahead.
///
/// End of input is `Ok(None)`, which is distinct from any line content.
pub trait LineSource {
    /// Return the next line without consuming it.
    ///
    /// Repeated peeks without an interleaved [`read_line`](Self::read_line)
    /// return the same line.
    fn peek_line(&mut self) -> Result<Option<&str>, ParseError>;

    /// Consume and return the next line.
    fn read_line(&mut self) -> Result<Option<String>, ParseError>;

    /// 1-based physical line number of the most recently consumed line,
    /// or 0 before the first read.
    fn line_number(&self) -> usize;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn peek_line(&mut self) -> Result<Option<&str>, ParseError> {
        (**self).peek_line()
    }

    fn read_line(&mut self) -> Result<Option<String>, ParseError> {
        (**self).read_line()
    }

    fn line_number(&self) -> usize {
        (**self).line_number()
    }
}

/// A [`LineSource`] over any buffered reader.
///
/// Lines are trimmed and blank lines skipped. Bytes are decoded as UTF-8 with
/// invalid sequences replaced, since files from older programs are commonly
/// written in a single-byte code page. A leading byte-order mark is dropped.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    /// Lookahead slot: `Some(None)` once end of input has been seen.
    peeked: Option<Option<(String, usize)>>,
    /// Physical lines pulled from `reader` so far.
    physical: usize,
    /// Line number of the last consumed line.
    current: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            physical: 0,
            current: 0,
            buf: Vec::new(),
        }
    }

    fn fill(&mut self) -> Result<(), ParseError> {
        if self.peeked.is_some() {
            return Ok(());
        }
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.buf)
                .map_err(|e| ParseError::new(ParseErrorKind::Io(e.to_string()), self.physical + 1))?;
            if read == 0 {
                self.peeked = Some(None);
                return Ok(());
            }
            self.physical += 1;

            let text = String::from_utf8_lossy(&self.buf);
            let mut line: &str = &text;
            if self.physical == 1 {
                line = line.strip_prefix('\u{feff}').unwrap_or(line);
            }
            let line = line.trim();
            if !line.is_empty() {
                self.peeked = Some(Some((line.to_string(), self.physical)));
                return Ok(());
            }
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn peek_line(&mut self) -> Result<Option<&str>, ParseError> {
        self.fill()?;
        Ok(self
            .peeked
            .as_ref()
            .and_then(Option::as_ref)
            .map(|(line, _)| line.as_str()))
    }

    fn read_line(&mut self) -> Result<Option<String>, ParseError> {
        self.fill()?;
        match self.peeked.take().flatten() {
            Some((line, number)) => {
                self.current = number;
                Ok(Some(line))
            }
            None => {
                self.peeked = Some(None);
                Ok(None)
            }
        }
    }

    fn line_number(&self) -> usize {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Read};

    #[test]
    fn test_peek_is_idempotent() {
        let mut lines = LineReader::new("!Type:Bank\nD1/1/2024\n".as_bytes());
        assert_eq!(lines.peek_line().unwrap(), Some("!Type:Bank"));
        assert_eq!(lines.peek_line().unwrap(), Some("!Type:Bank"));
        assert_eq!(lines.read_line().unwrap().as_deref(), Some("!Type:Bank"));
        assert_eq!(lines.peek_line().unwrap(), Some("D1/1/2024"));
    }

    #[test]
    fn test_trims_and_skips_blank_lines() {
        let mut lines = LineReader::new("  NChecking \r\n\r\n   \n^\r\n".as_bytes());
        assert_eq!(lines.read_line().unwrap().as_deref(), Some("NChecking"));
        assert_eq!(lines.line_number(), 1);
        assert_eq!(lines.read_line().unwrap().as_deref(), Some("^"));
        assert_eq!(lines.line_number(), 4);
        assert_eq!(lines.read_line().unwrap(), None);
        assert_eq!(lines.peek_line().unwrap(), None);
        assert_eq!(lines.read_line().unwrap(), None);
    }

    #[test]
    fn test_strips_byte_order_mark() {
        let mut lines = LineReader::new("\u{feff}!Type:Cat\n".as_bytes());
        assert_eq!(lines.read_line().unwrap().as_deref(), Some("!Type:Cat"));
    }

    #[test]
    fn test_lossy_decoding() {
        let bytes: &[u8] = b"PCaf\xe9\n";
        let mut lines = LineReader::new(bytes);
        assert_eq!(lines.read_line().unwrap().as_deref(), Some("PCaf\u{fffd}"));
    }

    #[test]
    fn test_empty_input() {
        let mut lines = LineReader::new("".as_bytes());
        assert_eq!(lines.peek_line().unwrap(), None);
        assert_eq!(lines.line_number(), 0);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }
    }

    #[test]
    fn test_io_error_surfaces() {
        let mut lines = LineReader::new(BufReader::new(FailingReader));
        let err = lines.peek_line().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Io(ref msg) if msg.contains("stream closed")));
        assert_eq!(err.line, 1);
    }
}

//! Input line source
//!
//! Lazy iterator over the lines of a wordlist file or stdin. Wordlists in
//! the wild carry broken encodings, so bytes are decoded lossily rather than
//! aborting the run on the first invalid sequence.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Iterator yielding one line at a time, `\n` / `\r\n` terminators stripped
pub struct LineReader {
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl std::fmt::Debug for LineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReader").finish_non_exhaustive()
    }
}

impl LineReader {
    /// Open a wordlist file
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path).map_err(|e| {
            io::Error::new(e.kind(), format!("cannot open {}: {}", path.display(), e))
        })?;
        Ok(Self::from_reader(Box::new(BufReader::new(file))))
    }

    /// Read from standard input
    pub fn stdin() -> Self {
        Self::from_reader(Box::new(BufReader::new(io::stdin())))
    }

    pub fn from_reader(reader: Box<dyn BufRead>) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
        }
    }
}

impl Iterator for LineReader {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

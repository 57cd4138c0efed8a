//! Output sink
//!
//! Buffered writer for matched lines, targeting stdout or a named file. The
//! sink is opened only after a run has completed, so a failed run never
//! leaves a partially written output file behind.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where matched lines go
#[derive(Debug)]
pub enum OutputSink {
    Stdout(io::Stdout),
    File {
        writer: BufWriter<std::fs::File>,
        path: PathBuf,
    },
}

impl OutputSink {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::Stdout(io::stdout())
    }

    /// Sink writing to a file, truncating any existing content
    pub fn file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| {
                io::Error::new(e.kind(), format!("cannot write {}: {}", path.display(), e))
            })?;
        Ok(Self::File {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Write one matched line, newline-terminated
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout(out) => writeln!(out, "{}", line),
            Self::File { writer, .. } => writeln!(writer, "{}", line),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }

    /// The destination, for the summary message
    pub fn describe(&self) -> String {
        match self {
            Self::Stdout(_) => "stdout".to_string(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }
}

impl Drop for OutputSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_writes_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = OutputSink::file(&path).unwrap();
        sink.write_line("hello").unwrap();
        sink.write_line("world").unwrap();
        sink.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "hello\nworld\n");
    }

    #[test]
    fn test_file_sink_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale\ncontent\n").unwrap();

        let mut sink = OutputSink::file(&path).unwrap();
        sink.write_line("fresh").unwrap();
        sink.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_unwritable_path_names_path() {
        let err = OutputSink::file(Path::new("/no/such/dir/out.txt")).unwrap_err();
        assert!(err.to_string().contains("/no/such/dir/out.txt"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(OutputSink::stdout().describe(), "stdout");
    }
}

//! `OutputBuffer`: Single-syscall output buffer for calculator output.

use std::fmt::Display;
use std::io::Write;

/// Line break in raw mode, where `\n` alone does not return the carriage.
pub const NEWLINE: &str = "\r\n";

/// Pre-allocated buffer for everything one key press prints.
///
/// Output is accumulated here, then flushed in a single `write()` so an
/// echoed key and its result line never interleave with other writes.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a buffer sized for a few result lines.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(256),
        }
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// End the current line.
    #[inline]
    pub fn newline(&mut self) {
        self.write_str(NEWLINE);
    }

    /// Print an evaluation result on its own line, as `=<value>`.
    pub fn result_line(&mut self, value: &str) {
        self.newline();
        self.write_char('=');
        self.write_str(value);
        self.newline();
    }

    /// Print an error message on its own line.
    pub fn error_line(&mut self, error: &dyn Display) {
        self.newline();
        self.write_str(&format!("ERROR: {error}"));
        self.newline();
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

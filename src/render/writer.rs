//! Indent-aware string builder shared by the YAML and Python renderers.
//!
//! The YAML artifact uses 2-space indentation, the Python artifact 4-space.

pub struct CodeWriter {
    buf: String,
    indent_unit: &'static str,
    indent_level: usize,
}

impl CodeWriter {
    pub fn new(indent_unit: &'static str) -> Self {
        Self {
            buf: String::with_capacity(4096),
            indent_unit,
            indent_level: 0,
        }
    }

    /// Write a complete line (appends newline).
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buf.push_str(self.indent_unit);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Increase indent by one level.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent by one level.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Consume the writer and return the generated string.
    pub fn finish(self) -> String {
        self.buf
    }
}

use std::io::{self, Write};

/// Writes through to `inner`, prefixing every non-empty line with spaces.
///
/// The prefix is emitted lazily, right before the first byte of a line,
/// so a line assembled from several `write` calls is prefixed once.
/// Wrapping an `IndentWriter` in another one adds the two widths.
/// Blank lines pass through without trailing whitespace.
pub struct IndentWriter<'a> {
    inner: &'a mut dyn Write,
    prefix: Vec<u8>,
    at_line_start: bool,
}

impl<'a> IndentWriter<'a> {
    /// Creates an adapter that indents by `width` spaces, starting at the
    /// beginning of a line.
    pub fn new(inner: &'a mut dyn Write, width: usize) -> Self {
        Self {
            inner,
            prefix: vec![b' '; width],
            at_line_start: true,
        }
    }

    pub fn width(&self) -> usize {
        self.prefix.len()
    }
}

impl Write for IndentWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while let Some(&first) = rest.first() {
            if self.at_line_start && first != b'\n' {
                self.inner.write_all(&self.prefix)?;
                self.at_line_start = false;
            }
            match rest.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.inner.write_all(&rest[..=pos])?;
                    self.at_line_start = true;
                    rest = &rest[pos + 1..];
                }
                None => {
                    self.inner.write_all(rest)?;
                    rest = &[];
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

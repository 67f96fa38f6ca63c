//! Semicolon-delimited row writing.

use std::io::Write;

use crate::Result;

/// Field delimiter used by every Osmose parameter file.
pub const DELIMITER: u8 = b';';

/// Writes escaped, semicolon-delimited rows to an output stream.
///
/// The first row is written without a leading newline and every later row is
/// preceded by one, so generated files never end with a blank line. Fields
/// containing the delimiter, a double quote, or a line break are quoted per
/// CSV rules, with embedded quotes doubled; group names are caller-supplied,
/// so this is a data-integrity requirement rather than cosmetics.
pub struct RowWriter<W: Write> {
    inner: W,
    dirty: bool,
}

impl<W: Write> RowWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            dirty: false,
        }
    }

    /// Write one row.
    pub fn row(&mut self, fields: &[&str]) -> Result<()> {
        let encoded = encode_row(fields)?;
        if self.dirty {
            self.inner.write_all(b"\n")?;
        }
        self.inner.write_all(&encoded)?;
        self.dirty = true;
        Ok(())
    }

    /// Copy a block of pre-formatted bytes verbatim.
    ///
    /// Used for default blocks that carry their own comment rows. A non-empty
    /// block counts as written content: the next `row` call gets a leading
    /// newline.
    pub fn raw(&mut self, block: &[u8]) -> Result<()> {
        self.inner.write_all(block)?;
        if !block.is_empty() {
            self.dirty = true;
        }
        Ok(())
    }
}

/// Encode one row without a trailing line terminator.
fn encode_row(fields: &[&str]) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(64);
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buf);
        writer.write_record(fields)?;
        writer.flush()?;
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_rows(f: impl FnOnce(&mut RowWriter<&mut Vec<u8>>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        let mut rows = RowWriter::new(&mut buf);
        f(&mut rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn first_row_has_no_leading_newline() {
        let out = write_rows(|rows| {
            rows.row(&["a", "b"])?;
            rows.row(&["c", "d"])
        });
        assert_eq!(out, "a;b\nc;d");
    }

    #[test]
    fn field_containing_delimiter_is_quoted() {
        let out = write_rows(|rows| rows.row(&["key", "one;two"]));
        assert_eq!(out, "key;\"one;two\"");
    }

    #[test]
    fn embedded_quote_is_doubled() {
        let out = write_rows(|rows| rows.row(&["key", "say \"hi\""]));
        assert_eq!(out, "key;\"say \"\"hi\"\"\"");
    }

    #[test]
    fn field_with_line_break_survives_a_csv_parse() {
        let name = "first\nsecond";
        let out = write_rows(|rows| rows.row(&["key", name]));

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_reader(out.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "key");
        assert_eq!(&record[1], name);
    }

    #[test]
    fn raw_block_marks_writer_dirty() {
        let out = write_rows(|rows| {
            rows.raw(b"a;b;;")?;
            rows.row(&["c", "d"])
        });
        assert_eq!(out, "a;b;;\nc;d");
    }

    #[test]
    fn empty_raw_block_keeps_writer_clean() {
        let out = write_rows(|rows| {
            rows.raw(b"")?;
            rows.row(&["c", "d"])
        });
        assert_eq!(out, "c;d");
    }
}

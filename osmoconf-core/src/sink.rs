//! Output sinks: where generated files land.
//!
//! A [`Sink`] hands a writable stream to a closure for exactly one logical
//! path at a time; the stream is closed when the closure returns. Backends
//! exist for a filesystem directory, an in-memory map, and a zip archive, so
//! generation code never knows where its output goes.

use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::PathBuf;

use log::trace;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::{Error, Result};

/// Destination for generated files.
pub trait Sink {
    /// Open `path`, run `write` against the stream, and close it.
    ///
    /// Each file is written in a single pass; a failure propagates
    /// immediately and aborts generation. There is no partial-success mode.
    fn write_file(
        &mut self,
        path: &str,
        write: &mut dyn FnMut(&mut dyn Write) -> Result<()>,
    ) -> Result<()>;
}

/// Sink writing real files under a base directory, creating parent
/// directories as needed.
pub struct DirSink {
    base: PathBuf,
}

impl DirSink {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl Sink for DirSink {
    fn write_file(
        &mut self,
        path: &str,
        write: &mut dyn FnMut(&mut dyn Write) -> Result<()>,
    ) -> Result<()> {
        let full = self.base.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Sink {
                path: path.to_string(),
                source,
            })?;
        }
        let mut file = File::create(&full).map_err(|source| Error::Sink {
            path: path.to_string(),
            source,
        })?;
        write(&mut file).map_err(|e| e.with_path(path))?;
        file.flush().map_err(|source| Error::Sink {
            path: path.to_string(),
            source,
        })?;
        trace!("wrote {}", full.display());
        Ok(())
    }
}

/// Sink collecting files in memory, keyed by logical path in sorted order.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Contents of `path` as UTF-8 text, if it is a text file.
    pub fn text(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn files(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Sink for MemorySink {
    fn write_file(
        &mut self,
        path: &str,
        write: &mut dyn FnMut(&mut dyn Write) -> Result<()>,
    ) -> Result<()> {
        let mut buf = Vec::new();
        write(&mut buf).map_err(|e| e.with_path(path))?;
        trace!("buffered {path} ({} bytes)", buf.len());
        self.files.insert(path.to_string(), buf);
        Ok(())
    }
}

/// Sink writing each file as one compressed archive entry.
///
/// Entries stream straight into the underlying writer; nothing is buffered
/// beyond the entry being written. Repeated writes to the same path are
/// skipped, since sections legitimately re-emit a shared template (the grid
/// mask) and archive entry names must stay unique.
pub struct ZipSink<W: Write + Seek> {
    zip: ZipWriter<W>,
    seen: HashSet<String>,
}

impl<W: Write + Seek> ZipSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            zip: ZipWriter::new(out),
            seen: HashSet::new(),
        }
    }

    /// Finalize the archive and return the underlying stream.
    pub fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }
}

impl<W: Write + Seek> Sink for ZipSink<W> {
    fn write_file(
        &mut self,
        path: &str,
        write: &mut dyn FnMut(&mut dyn Write) -> Result<()>,
    ) -> Result<()> {
        if !self.seen.insert(path.to_string()) {
            trace!("skipping duplicate archive entry {path}");
            return Ok(());
        }
        self.zip.start_file(path, SimpleFileOptions::default())?;
        write(&mut self.zip).map_err(|e| e.with_path(path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;

    fn put(sink: &mut dyn Sink, path: &str, content: &[u8]) {
        sink.write_file(path, &mut |w: &mut dyn Write| Ok(w.write_all(content)?))
            .unwrap();
    }

    #[test]
    fn dir_sink_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let mut sink = DirSink::new(temp.path());

        put(&mut sink, "fishing/seasonality.csv", b"Time;Season");

        let written = fs::read(temp.path().join("fishing/seasonality.csv")).unwrap();
        assert_eq!(written, b"Time;Season");
    }

    #[test]
    fn memory_sink_keeps_paths_sorted() {
        let mut sink = MemorySink::new();
        put(&mut sink, "b.csv", b"b");
        put(&mut sink, "a.csv", b"a");

        let paths: Vec<&str> = sink.paths().collect();
        assert_eq!(paths, ["a.csv", "b.csv"]);
        assert_eq!(sink.text("a.csv"), Some("a"));
    }

    #[test]
    fn zip_sink_round_trips_entries() {
        let mut sink = ZipSink::new(Cursor::new(Vec::new()));
        put(&mut sink, "one.csv", b"first");
        put(&mut sink, "maps/two.csv", b"second");
        let cursor = sink.finish().unwrap();

        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        assert_eq!(archive.len(), 2);
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(names, ["maps/two.csv", "one.csv"]);

        let mut entry = archive.by_name("one.csv").unwrap();
        let mut content = Vec::new();
        std::io::Read::read_to_end(&mut entry, &mut content).unwrap();
        assert_eq!(content, b"first");
    }

    #[test]
    fn zip_sink_skips_duplicate_paths() {
        let mut sink = ZipSink::new(Cursor::new(Vec::new()));
        put(&mut sink, "grid-mask.csv", b"first");
        put(&mut sink, "grid-mask.csv", b"second");
        let cursor = sink.finish().unwrap();

        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_name("grid-mask.csv").unwrap();
        let mut content = Vec::new();
        std::io::Read::read_to_end(&mut entry, &mut content).unwrap();
        assert_eq!(content, b"first");
    }
}

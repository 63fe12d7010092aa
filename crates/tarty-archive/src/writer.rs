//! Archive serialization.
//!
//! Each entry is `[[FILE:<relative-path>]]\n`, the content verbatim, then one
//! `\n`. Nothing is escaped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tarty_core::{ProcessedFile, Result, TartyError};

pub const HEADER_PREFIX: &str = "[[FILE:";
pub const HEADER_SUFFIX: &str = "]]";

/// Header line for a path, newline included.
pub fn header_line(path: &str) -> String {
    format!("{HEADER_PREFIX}{path}{HEADER_SUFFIX}\n")
}

/// Streams entries into any writer, counting UTF-8 bytes as it goes.
pub struct ArchiveWriter<W: Write> {
    out: W,
    total_bytes: u64,
    entries: usize,
}

impl<W: Write> ArchiveWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, total_bytes: 0, entries: 0 }
    }

    /// Append one entry.
    pub fn append(&mut self, file: &ProcessedFile) -> io::Result<()> {
        let header = header_line(&file.path);
        self.out.write_all(header.as_bytes())?;
        self.out.write_all(file.content.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.total_bytes += (header.len() + file.content.len() + 1) as u64;
        self.entries += 1;
        Ok(())
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flush and return the total byte count.
    pub fn finish(mut self) -> io::Result<u64> {
        self.out.flush()?;
        Ok(self.total_bytes)
    }
}

/// Write all entries to `out` in order.
pub fn write_to<W: Write>(files: &[ProcessedFile], out: W) -> io::Result<u64> {
    let mut writer = ArchiveWriter::new(out);
    for file in files {
        writer.append(file)?;
    }
    writer.finish()
}

/// Create `destination` and write the archive into it.
pub fn write_archive(files: &[ProcessedFile], destination: &Path) -> Result<u64> {
    let to_err = |source: io::Error| TartyError::Destination {
        path: destination.to_path_buf(),
        source,
    };
    let file = File::create(destination).map_err(to_err)?;
    let total = write_to(files, BufWriter::new(file)).map_err(to_err)?;
    tracing::info!(
        destination = %destination.display(),
        entries = files.len(),
        bytes = total,
        "archive written"
    );
    Ok(total)
}

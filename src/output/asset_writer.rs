use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Line-oriented sink for asset identifiers.
///
/// Each identifier is flushed as soon as it is written so results stream out while
/// the crawl is still running.
pub struct AssetWriter<W: Write> {
    inner: W,
    emitted: usize,
}

impl<W: Write> AssetWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, emitted: 0 }
    }

    pub fn emit(&mut self, identifier: &str) -> io::Result<()> {
        self.inner.write_all(identifier.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.flush()?;
        self.emitted += 1;
        Ok(())
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Stdout, or a freshly truncated file when `path` is given.
pub fn open_sink(path: Option<&Path>) -> io::Result<AssetWriter<Box<dyn Write + Send>>> {
    let w: Box<dyn Write + Send> = match path {
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
        None => Box::new(io::stdout()),
    };
    Ok(AssetWriter::new(w))
}

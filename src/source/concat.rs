//! Sequential read-sanitize-append pipeline.

use std::fs::File;
use std::io::{self, Read, Write};

use tracing::{debug, error, trace};

use super::{InputSource, SourceList};
use crate::error::StcatError;
use crate::output::{SanitizeStats, Sanitizer, SanitizerOptions};
use crate::Result;

/// Size of each read from a source.
pub const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Totals for one concatenation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcatSummary {
    /// Sources fully processed.
    pub sources: usize,
    /// Raw bytes read across all sources.
    pub bytes_read: u64,
    /// Sanitized bytes written.
    pub bytes_written: u64,
}

/// Concatenates sources into one output, sanitizing each independently.
///
/// Sources are processed strictly in order. A source's sanitized text is
/// written only once the source has been read to the end, so a source that
/// fails part way contributes nothing. Output from earlier sources is not
/// rolled back.
#[derive(Debug, Clone)]
pub struct Concatenator {
    options: SanitizerOptions,
    buffer_size: usize,
}

impl Concatenator {
    /// Create a concatenator with the given sanitizer options.
    pub fn new(options: SanitizerOptions) -> Self {
        Self {
            options,
            buffer_size: READ_BUFFER_SIZE,
        }
    }

    /// Override the read size. Mostly useful to force small chunks in tests.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Run every source through the sanitizer into `out`.
    ///
    /// `stdin` is only touched for [`InputSource::Stdin`] entries. Once it
    /// reaches end of input, later `-` entries contribute nothing.
    pub fn run<R, W>(&self, sources: &SourceList, stdin: &mut R, out: &mut W) -> Result<ConcatSummary>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut summary = ConcatSummary::default();

        for source in sources {
            let (text, stats) = match source.path() {
                None => self.read_source(source, stdin)?,
                Some(path) => {
                    let mut file = open_file(path)?;
                    self.read_source(source, &mut file)?
                }
            };

            debug!(
                "{}: read {} bytes, wrote {} bytes ({} replaced, {} controls and {} sequences removed)",
                source,
                stats.bytes_in,
                text.len(),
                stats.replaced,
                stats.removed_controls,
                stats.removed_sequences
            );

            out.write_all(text.as_bytes()).map_err(StcatError::Output)?;
            out.flush().map_err(StcatError::Output)?;

            summary.sources += 1;
            summary.bytes_read += stats.bytes_in as u64;
            summary.bytes_written += text.len() as u64;
        }

        Ok(summary)
    }

    /// Read a source to the end and return its sanitized text.
    fn read_source<R>(&self, source: &InputSource, reader: &mut R) -> Result<(String, SanitizeStats)>
    where
        R: Read + ?Sized,
    {
        let mut sanitizer = Sanitizer::new(self.options);
        let mut text = String::new();
        let mut buf = vec![0u8; self.buffer_size];

        loop {
            match reader.read(&mut buf) {
                Ok(0) => break, // EOF
                Ok(n) => {
                    trace!("{}: read {} bytes", source, n);
                    text.push_str(&sanitizer.push(&buf[..n]));
                }
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!("{}: read failed: {}", source, e);
                    return Err(StcatError::SourceRead {
                        name: source.to_string(),
                        source: e,
                    });
                }
            }
        }

        let (tail, stats) = sanitizer.finish_with_stats();
        text.push_str(&tail);
        Ok((text, stats))
    }
}

impl Default for Concatenator {
    fn default() -> Self {
        Self::new(SanitizerOptions::default())
    }
}

fn open_file(path: &std::path::Path) -> Result<File> {
    let open_error = |source: io::Error| {
        error!("{}: open failed: {}", path.display(), source);
        StcatError::SourceOpen {
            path: path.to_path_buf(),
            source,
        }
    };

    let file = File::open(path).map_err(open_error)?;
    // Opening a directory succeeds on some platforms; reading it does not.
    let metadata = file.metadata().map_err(open_error)?;
    if metadata.is_dir() {
        return Err(open_error(io::Error::other("Is a directory")));
    }
    Ok(file)
}

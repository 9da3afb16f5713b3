//! CSV output and the sequential export loop.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use strum::IntoEnumIterator;
use tracing::{info, instrument};

use crate::client::SurfClient;
use crate::error::{Result, SurfError};
use crate::model::{Column, MapRecord};
use crate::throttle::Throttle;

/// CSV writer that emits the fixed header up front and flushes every row.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    target: String,
}

impl CsvSink<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| SurfError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_writer(file, path.display().to_string())
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap an arbitrary writer. `target` names it in error messages.
    pub fn from_writer(writer: W, target: impl Into<String>) -> Result<Self> {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        let mut sink = Self {
            writer,
            target: target.into(),
        };
        let header = Column::iter().map(|c| c.to_string());
        sink.writer.write_record(header).map_err(|e| sink.csv_error(e))?;
        sink.flush()?;
        Ok(sink)
    }

    /// Append one record and flush it.
    pub fn write_map(&mut self, record: &MapRecord) -> Result<()> {
        self.writer
            .serialize(record)
            .map_err(|e| self.csv_error(e))?;
        self.flush()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        let target = self.target;
        self.writer.into_inner().map_err(|e| SurfError::Csv {
            target,
            source: csv::Error::from(e.into_error()),
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| SurfError::Csv {
            target: self.target.clone(),
            source: e.into(),
        })
    }

    fn csv_error(&self, source: csv::Error) -> SurfError {
        SurfError::Csv {
            target: self.target.clone(),
            source,
        }
    }
}

/// Fetch each map in order, waiting on `throttle` before every request,
/// and write the records to `sink`.
///
/// Stops at the first error. Rows written before it stay flushed.
/// Returns the number of rows written.
#[instrument(skip_all, fields(total = identifiers.len(), output = sink.target()))]
pub async fn export_maps<W, T>(
    client: &SurfClient,
    identifiers: &[String],
    throttle: &mut T,
    sink: &mut CsvSink<W>,
) -> Result<usize>
where
    W: Write,
    T: Throttle,
{
    let total = identifiers.len();
    for (idx, identifier) in identifiers.iter().enumerate() {
        throttle.wait().await;
        let record = client.get_map(identifier).await?;
        sink.write_map(&record)?;
        println!("{}", progress_line(idx + 1, total, &record.identifier));
    }
    info!(written = total, "export finished");
    Ok(total)
}

/// `[  3/ 42] Writing surf_mesa`, with a 1-based position.
fn progress_line(position: usize, total: usize, identifier: &str) -> String {
    format!("[{position:>3}/{total:>3}] Writing {identifier}")
}

//! Wordlist output sinks

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::{Result, WordlistError};

/// Destination for newline-terminated wordlist entries
#[async_trait]
pub trait WordlistSink: Send {
    /// Write a batch of entries, one per line
    async fn write_batch(&mut self, lines: &[String]) -> Result<()>;

    /// Flush and close the sink
    async fn finish(&mut self) -> Result<()>;

    /// Human readable destination name
    fn describe(&self) -> String;
}

/// Sink writing to a file, truncating any prior contents
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
    lines_written: u64,
}

impl FileSink {
    /// Create (or truncate) the file at `path`
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .await
            .map_err(|e| WordlistError::io(e.to_string(), Some(path.display().to_string())))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            lines_written: 0,
        })
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    fn io_error(&self, err: std::io::Error) -> WordlistError {
        WordlistError::io(err.to_string(), Some(self.path.display().to_string()))
    }
}

#[async_trait]
impl WordlistSink for FileSink {
    async fn write_batch(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            if let Err(e) = self.writer.write_all(line.as_bytes()).await {
                return Err(self.io_error(e));
            }
            if let Err(e) = self.writer.write_all(b"\n").await {
                return Err(self.io_error(e));
            }
        }
        self.lines_written += lines.len() as u64;
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        if let Err(e) = self.writer.flush().await {
            return Err(self.io_error(e));
        }
        tracing::debug!(
            path = %self.path.display(),
            lines = self.lines_written,
            "Wordlist file flushed"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory sink
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Contents as they would appear in a file
    pub fn contents(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }
}

#[async_trait]
impl WordlistSink for MemorySink {
    async fn write_batch(&mut self, lines: &[String]) -> Result<()> {
        self.lines.extend_from_slice(lines);
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Write all entries in `batch_size` chunks, reporting progress after each one.
pub async fn write_all_lines<S, F>(
    sink: &mut S,
    lines: &[String],
    batch_size: usize,
    mut on_progress: F,
) -> Result<u64>
where
    S: WordlistSink + ?Sized,
    F: FnMut(u64) + Send,
{
    let batch_size = batch_size.max(1);
    let mut written = 0u64;
    for chunk in lines.chunks(batch_size) {
        sink.write_batch(chunk).await?;
        written += chunk.len() as u64;
        on_progress(written);
    }
    sink.finish().await?;
    Ok(written)
}

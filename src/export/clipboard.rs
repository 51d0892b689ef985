//! Clipboard hand-off
//!
//! The tab-separated rendering of a record goes to a clipboard sink. A
//! successful copy yields a short-lived acknowledgment.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{FundsheetError, FundsheetResult};
use crate::models::SavedRecord;

use super::tsv::render_record_tsv;

/// Something that accepts copied text
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> FundsheetResult<()>;
}

/// Pipes text into an external command such as `wl-copy` or `pbcopy`
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Parse a whitespace-separated command line
    pub fn from_command_line(command: &str) -> FundsheetResult<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| FundsheetError::Config("Clipboard command is empty".into()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl ClipboardSink for CommandClipboard {
    fn copy(&mut self, text: &str) -> FundsheetResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| {
                FundsheetError::Clipboard(format!("Failed to start '{}': {}", self.program, e))
            })?;

        // stdin is dropped at the end of this statement so the child sees EOF
        let sent = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        if let Err(e) = sent {
            let _ = child.kill();
            let _ = child.wait();
            return Err(FundsheetError::Clipboard(format!(
                "Failed to send text to '{}': {}",
                self.program, e
            )));
        }

        let status = child
            .wait()
            .map_err(|e| FundsheetError::Clipboard(e.to_string()))?;
        if !status.success() {
            return Err(FundsheetError::Clipboard(format!(
                "'{}' exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Writes copied text to any writer, typically stdout
pub struct WriterClipboard<W: Write> {
    out: W,
}

impl<W: Write> WriterClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardSink for WriterClipboard<W> {
    fn copy(&mut self, text: &str) -> FundsheetResult<()> {
        writeln!(self.out, "{}", text)
            .and_then(|_| self.out.flush())
            .map_err(|e| FundsheetError::Clipboard(e.to_string()))
    }
}

/// Transient "copied" acknowledgment
#[derive(Debug, Clone)]
pub struct CopyNotice {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl CopyNotice {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Time left before the notice clears
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.created_at.elapsed())
    }
}

/// Copy one record as tab-separated text
pub fn copy_record<C: ClipboardSink>(
    record: &SavedRecord,
    sink: &mut C,
    notice_secs: u64,
) -> FundsheetResult<CopyNotice> {
    sink.copy(&render_record_tsv(record))?;
    tracing::info!(record_id = %record.id(), "Record copied");

    Ok(CopyNotice::new(
        format!("Copied record from {}", record.date()),
        Duration::from_secs(notice_secs),
    ))
}

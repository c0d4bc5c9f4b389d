//! Action journal: one JSON object per applied action, newline-delimited.
//!
//! ```text
//! {"seq":1,"level":"master","action":"reserve","ok":true,"error":null,"queue":[{"kind":"T","id":1},...],"stack":[{"kind":"I","id":0}]}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::SessionSnapshot;
use crate::types::{Action, ActionError, Level, Outcome, Piece};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub kind: String,
    pub id: u32,
}

impl From<&Piece> for PieceRecord {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind.symbol().to_string(),
            id: value.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub seq: u64,
    pub level: String,
    pub action: String,
    pub ok: bool,
    pub error: Option<String>,
    /// Front-to-back, after the action.
    pub queue: Vec<PieceRecord>,
    /// Top-to-base, after the action.
    pub stack: Vec<PieceRecord>,
}

impl JournalRecord {
    pub fn new(
        seq: u64,
        level: Level,
        action: Action,
        result: &Result<Outcome, ActionError>,
        snap: &SessionSnapshot,
    ) -> Self {
        Self {
            seq,
            level: level.as_str().to_string(),
            action: action.as_str().to_string(),
            ok: result.is_ok(),
            error: result.as_ref().err().map(|e| e.code().to_string()),
            queue: snap.queue.iter().map(PieceRecord::from).collect(),
            stack: snap.stack.iter().map(PieceRecord::from).collect(),
        }
    }
}

/// Optional journal file. A write failure disables it for the rest of the run.
#[derive(Debug)]
pub struct Journal {
    path: Option<PathBuf>,
    writer: Option<BufWriter<File>>,
    seq: u64,
}

impl Journal {
    pub fn disabled() -> Self {
        Self {
            path: None,
            writer: None,
            seq: 0,
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("journal: open {} failed: {}", path.display(), e))?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            writer: Some(BufWriter::new(file)),
            seq: 0,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Records written so far
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(
        &mut self,
        level: Level,
        action: Action,
        result: &Result<Outcome, ActionError>,
        snap: &SessionSnapshot,
    ) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        let rec = JournalRecord::new(self.seq + 1, level, action, result, snap);
        match write_line(writer, &rec) {
            Ok(()) => self.seq += 1,
            Err(e) => {
                let path = self
                    .path
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!(path = %path, error = %e, "journal write failed, journal disabled");
                self.writer = None;
            }
        }
    }
}

fn write_line(writer: &mut BufWriter<File>, rec: &JournalRecord) -> Result<()> {
    serde_json::to_writer(&mut *writer, rec)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

//! NDJSON events for `--json` output.
//!
//! Every line written to stdout in JSON mode is one of these events.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub dry_run: bool,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, dry_run: bool) -> Self {
        Self {
            event: "start",
            command,
            dry_run,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when the environment stack has been deployed.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub stack_name: &'a str,
    pub outputs: &'a BTreeMap<String, String>,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(
        command: &'a str,
        stack_name: &'a str,
        outputs: &'a BTreeMap<String, String>,
    ) -> Self {
        Self {
            event: "complete",
            command,
            stack_name,
            outputs,
        }
    }
}

/// Event emitted when a dry run has written the template.
#[derive(Debug, Clone, Serialize)]
pub struct DryRunEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub template: String,
}

impl<'a> DryRunEvent<'a> {
    pub fn new(command: &'a str, template: &Path) -> Self {
        Self {
            event: "dry_run",
            command,
            template: template.display().to_string(),
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let line =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)?;
    out.flush()
}

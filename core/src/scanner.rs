//! Invokes the external ARP scanner and searches its table output.
//!
//! All network-layer work (ARP request/response handling) belongs to the
//! external tool, which needs raw-socket privileges to do it. This module
//! only spawns that tool over a subnet, captures its stdout and picks the
//! first row whose MAC matches the query.

use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::record::ScanRecord;

/// Conventional command name of the external scanner, resolved via PATH.
pub const DEFAULT_COMMAND: &str = "arp-scan";

/// Ways the external scanner itself can fail.
///
/// "No host matched" is not one of them; that is the `Ok(None)` outcome
/// of [`ArpScan::scan`].
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scanner executable could not be started at all.
    #[error("failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// The scanner started but reported failure.
    #[error("'{command}' exited with {status}: {stderr}")]
    Exited {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Runs the external ARP scanner over a subnet.
///
/// Holds nothing but the command to invoke, fixed at construction.
pub struct ArpScan {
    command: String,
}

impl Default for ArpScan {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl ArpScan {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Sweeps `subnet` and returns the first host whose MAC equals `mac`,
    /// compared case-insensitively.
    ///
    /// `subnet` is handed to the scanner as its sole positional argument
    /// and is not validated here. One child process per call, read to
    /// completion before any parsing.
    ///
    /// `Ok(None)` means the scan ran and nothing matched. Launch and exit
    /// failures of the scanner come back as [`ScanError`] instead.
    pub async fn scan(&self, subnet: &str, mac: &str) -> Result<Option<ScanRecord>, ScanError> {
        debug!("running '{} {}'", self.command, subnet);

        let output = Command::new(&self.command)
            .arg(subnet)
            .output()
            .await
            .map_err(|source| ScanError::Launch {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ScanError::Exited {
                command: self.command.clone(),
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let found = first_match(&stdout, mac);

        match &found {
            Some(record) => debug!("{} is bound to {}", record.mac, record.ip),
            None => debug!("no host row matched {mac}"),
        }

        Ok(found)
    }
}

/// Returns the first record in `output` whose MAC field equals `mac`,
/// ASCII-case-insensitively.
///
/// Lines that are not host rows (banners, blanks, malformed rows) are
/// skipped without any report.
pub fn first_match(output: &str, mac: &str) -> Option<ScanRecord> {
    output
        .lines()
        .filter_map(|line| line.parse::<ScanRecord>().ok())
        .find(|record| record.mac.eq_ignore_ascii_case(mac))
}

//! # Scan Record Model
//!
//! One host row of the external scanner's table output, e.g.
//! `192.168.1.1\t00:11:22:33:44:55\tMySSID`.
//!
//! The scanner interleaves these rows with banner and summary text, so
//! parsing doubles as the filter: a line that does not have the exact
//! three-field tab-separated shape is not a record.

use std::str::FromStr;

/// A single discovered host, as reported by the external scanner.
///
/// Fields are kept as text; records live only for the duration of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    /// Dotted-quad IPv4 address.
    pub ip: String,
    /// Hardware address, colon-separated hex octets, case preserved.
    pub mac: String,
    /// Trailing label column (network name / SSID), may be empty.
    pub label: String,
}

impl FromStr for ScanRecord {
    type Err = String;

    /// Parses one output line.
    ///
    /// A line is a record only if it splits on tabs into exactly three
    /// fields, the first shaped like an IPv4 address and the second drawn
    /// from the hex-digit/colon character class. Everything else
    /// (banners, blank lines, summary text) is rejected.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split('\t').collect();

        let &[ip, mac, label] = fields.as_slice() else {
            return Err(format!("expected 3 tab-separated fields: {line}"));
        };

        if !is_ipv4_field(ip) {
            return Err(format!("not an IPv4 field: {ip}"));
        }
        if !is_mac_field(mac) {
            return Err(format!("not a MAC field: {mac}"));
        }

        Ok(Self {
            ip: ip.to_string(),
            mac: mac.to_string(),
            label: label.to_string(),
        })
    }
}

/// Four dot-separated groups of ASCII digits. Shape check only, octet
/// ranges are the scanner's responsibility.
fn is_ipv4_field(s: &str) -> bool {
    let mut groups = 0;
    for group in s.split('.') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

/// Non-empty and made of hex digits and colons.
fn is_mac_field(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit() || b == b':')
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
